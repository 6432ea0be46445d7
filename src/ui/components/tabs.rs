//! Route tab bar renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TabItem;

/// Renders `[ 1 Home ] [ 2 Games ]` with the active tab highlighted.
pub fn render_tabs(row: usize, tabs: &[TabItem], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    let mut used = 0;

    for tab in tabs {
        let label = format!(" {} ", tab.label);
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.accent));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{} ", Theme::reset());
        used += display_width(&label) + 1;
    }

    if let Some(active) = tabs.iter().find(|t| t.is_active) {
        let path_len = display_width(active.path);
        if used + path_len < cols {
            print!("{}", " ".repeat(cols - used - path_len));
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", active.path);
            print!("{}", Theme::reset());
        }
    }

    row + 1
}
