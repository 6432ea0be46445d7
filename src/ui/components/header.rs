//! Header component renderer.
//!
//! Renders the page title centered, followed by a dimmed subtitle when one
//! is set.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar and returns the next row.
///
/// ```text
/// [left padding] TITLE  subtitle [right padding]
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let subtitle_len = header.subtitle.as_deref().map_or(0, |s| display_width(s) + 2);
    let title_len = display_width(&header.title);
    let total_len = (title_len + subtitle_len).min(cols);
    let padding = cols.saturating_sub(total_len) / 2;

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", header.title);
    print!("{}", Theme::reset());

    if let Some(subtitle) = &header.subtitle {
        if let Some(bg) = &theme.colors.header_bg {
            print!("{}", Theme::bg(bg));
        }
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  {subtitle}");
    }

    print!("{}", " ".repeat(cols.saturating_sub(padding + total_len)));
    print!("{}", Theme::reset());
    row + 1
}
