//! Search bar component renderer.
//!
//! Renders the query in a bordered box. The frame takes the focus color
//! while typing and a busy marker is shown while a lookup is in flight.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box and returns the row after it.
///
/// ```text
/// ┌──────────────────────────────┐
/// │ Search: hollow knight▏       │
/// └──────────────────────────────┘
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let frame = if search.is_typing {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(frame));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let caret = if search.is_typing { "▏" } else { "" };
    let busy = if search.is_busy { " searching…" } else { "" };
    let search_text = format!(" Search: {}{caret}", search.query);
    let text_len = display_width(&search_text) + display_width(busy);
    let padding = inner_width.saturating_sub(text_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(frame));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    if search.is_busy {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{busy}");
    }
    print!("{}", Theme::fg(frame));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(frame));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
