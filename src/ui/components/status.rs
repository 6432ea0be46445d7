//! Status line and error banner.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders `filter: … · sort: …` on the left and the page label on the right.
pub fn render_status_line(row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let left = format!(" filter: {}  sort: {}", status.filter_label, status.sort_label);
    let left_len = display_width(&left);
    let right_len = display_width(&status.page_label);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{left}");
    if left_len + right_len + 1 < cols {
        print!("{}", " ".repeat(cols - left_len - right_len - 1));
        print!("{} ", status.page_label);
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(left_len)));
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the failure message, or a blank line when there is none.
pub fn render_error_line(row: usize, error: Option<&str>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    match error {
        Some(message) => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.error_fg));
            let line = format!(" ! {message}");
            print!("{line}");
            print!("{}", " ".repeat(cols.saturating_sub(display_width(&line))));
            print!("{}", Theme::reset());
        }
        None => print!("{}", " ".repeat(cols)),
    }
    row + 1
}
