//! Composable UI component renderers.
//!
//! Each component prints one part of the screen starting at a given row and
//! returns the next free row.
//!
//! # Components
//!
//! - [`tabs`]: Route tab bar
//! - [`header`]: Title bar with an optional subtitle
//! - [`home`]: Typewriter line, biography and project showcase
//! - [`search`]: Search input box
//! - [`status`]: Filter, sort and page summary plus the error banner
//! - [`table`]: Result list with NAME, RELEASED and RATING columns
//! - [`detail`]: Facts and description of the selected game
//! - [`empty`]: Empty state message
//! - [`footer`]: Keybinding hints
//!
//! # Layouts
//!
//! - [`render_home_page`]: Tabs + Header + Home content + Footer
//! - [`render_games_page`]: Tabs + Header + Search + Status + Table + Detail + Footer

mod detail;
mod empty;
mod footer;
mod header;
mod home;
mod search;
mod status;
mod table;
mod tabs;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, GamesView, HomeView, TabItem};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use home::render_home;
use search::render_search_bar;
use status::{render_error_line, render_status_line};
use table::{render_table_headers, render_table_rows};
use tabs::render_tabs;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Bottom border and footer, pinned to the last two rows.
fn render_bottom(footer: &FooterInfo, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(2);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, footer, theme, cols);
}

/// Renders the Home route.
///
/// ```text
/// [Tabs]
/// [Header: name  alias]
/// [Border]
/// [Headline, typewriter line, about, projects]
/// [Border]
/// [Footer]
/// ```
pub fn render_home_page(
    tabs: &[TabItem],
    home: &HomeView,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = render_tabs(1, tabs, theme, cols);
    current_row = render_header(current_row, &home.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    // Content stops above the bottom border.
    let last_content_row = rows.saturating_sub(2);
    render_home(current_row, last_content_row, home, theme, cols);

    render_bottom(footer, theme, cols, rows);
}

/// Renders the Games route.
///
/// ```text
/// [Tabs]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Status line]
/// [Error line]
/// [Table Headers]
/// [Table Rows | Empty state]
/// [Detail pane - when it fits]
/// [Border]
/// [Footer]
/// ```
pub fn render_games_page(
    tabs: &[TabItem],
    games: &GamesView,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = render_tabs(1, tabs, theme, cols);
    current_row = render_header(current_row, &games.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &games.search_bar, theme, cols);
    current_row = render_status_line(current_row, &games.status, theme, cols);
    current_row = render_error_line(current_row, games.error.as_deref(), theme, cols);
    current_row = render_table_headers(current_row, theme, cols);

    if let Some(empty) = &games.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &games.display_items, theme, cols);
    }

    if let Some(detail) = &games.detail {
        let detail_row = rows.saturating_sub(crate::app::state::DETAIL_PANE_ROWS + 1);
        render_detail(detail_row, detail, theme, cols);
    }

    render_bottom(footer, theme, cols, rows);
}
