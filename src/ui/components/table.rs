//! Table component renderer.
//!
//! Renders the derived game list as NAME, RELEASED and RATING columns with
//! selection and fuzzy match highlighting.

use crate::app::state::{name_column_width, RATING_COLUMN_WIDTH, RELEASED_COLUMN_WIDTH};
use crate::ui::helpers::{self, display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    let name_width = name_column_width(cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        " {:<name_width$}{:<RELEASED_COLUMN_WIDTH$}{:>RATING_COLUMN_WIDTH$}",
        "NAME", "RELEASED", "RATING"
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows and returns the row after the last one.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Styling precedence: selection background, then match highlights, then
/// normal text. Rows are padded to full width so the selection bar is solid.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let name_width = name_column_width(cols);
    position_cursor(row, 1);

    let restore = || {
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
    };

    restore();
    print!(" ");
    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    restore();
    print!("{}", " ".repeat(name_width.saturating_sub(display_width(&item.name))));

    print!("{:<RELEASED_COLUMN_WIDTH$}", item.released);

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.rating_fg));
    }
    print!("{:>RATING_COLUMN_WIDTH$}", item.rating);
    restore();

    let line_len = 1 + name_width + RELEASED_COLUMN_WIDTH + RATING_COLUMN_WIDTH;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
