//! Home page content: headline, typewriter line, biography and projects.

use crate::ui::helpers::{display_width, position_cursor, print_centered, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HomeView;

const CONTENT_MARGIN: usize = 2;

/// Renders Home content between `row` and `last_row` inclusive. Lines that
/// do not fit are dropped.
pub fn render_home(row: usize, last_row: usize, home: &HomeView, theme: &Theme, cols: usize) {
    let mut lines = Lines {
        row: row + 1,
        last_row,
        cols,
    };

    if lines.next_row().is_some() {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.accent));
        print_centered(&home.headline, cols);
        print!("{}", Theme::reset());
    }

    if lines.next_row().is_some() {
        render_typewriter_line(home, theme, cols);
    }
    lines.skip();

    let width = cols.saturating_sub(CONTENT_MARGIN * 2);
    for paragraph in &home.about {
        for text in wrap_text(paragraph, width) {
            lines.print(&text, &theme.colors.text_normal, "");
        }
        lines.skip();
    }

    if home.projects.is_empty() {
        return;
    }

    if lines.next_row().is_some() {
        print!("{}", " ".repeat(CONTENT_MARGIN));
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
        print!("Projects");
        print!("{}", Theme::reset());
    }

    for project in &home.projects {
        lines.print(&format!("▸ {}", project.title), &theme.colors.accent, Theme::bold());
        for text in wrap_text(&project.summary, width.saturating_sub(2)) {
            lines.print(&format!("  {text}"), &theme.colors.text_dim, "");
        }
        if let Some(link) = &project.link {
            lines.print(&format!("  {link}"), &theme.colors.link_fg, Theme::underline());
        }
    }
}

/// `I'm a Game Developer█`, centered on the full phrase so the line does not
/// shift while typing.
fn render_typewriter_line(home: &HomeView, theme: &Theme, cols: usize) {
    let prefix = "I'm a ";
    let typed_len = display_width(prefix) + display_width(&home.typed) + 1;
    let padding = typewriter_padding(prefix, &home.phrase, cols);

    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{prefix}");
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent));
    print!("{}", home.typed);
    print!("{}", Theme::reset());

    if home.cursor_visible {
        print!("{}", Theme::fg(&theme.colors.cursor_fg));
        print!("█");
        print!("{}", Theme::reset());
    } else {
        print!(" ");
    }

    print!("{}", " ".repeat(cols.saturating_sub(padding + typed_len)));
}

/// Left padding that centers `prefix` plus the complete phrase and cursor.
fn typewriter_padding(prefix: &str, phrase: &str, cols: usize) -> usize {
    let full_len = display_width(prefix) + display_width(phrase) + 1;
    cols.saturating_sub(full_len) / 2
}

/// Row cursor that refuses to write past `last_row`.
struct Lines {
    row: usize,
    last_row: usize,
    cols: usize,
}

impl Lines {
    fn next_row(&mut self) -> Option<usize> {
        if self.row > self.last_row {
            return None;
        }
        let row = self.row;
        position_cursor(row, 1);
        self.row += 1;
        Some(row)
    }

    fn skip(&mut self) {
        self.row += 1;
    }

    fn print(&mut self, text: &str, color: &str, style: &str) {
        if self.next_row().is_none() {
            return;
        }
        let text = crate::app::state::truncate(text, self.cols.saturating_sub(CONTENT_MARGIN));
        print!("{}", " ".repeat(CONTENT_MARGIN));
        print!("{style}{}", Theme::fg(color));
        print!("{text}");
        print!("{}", Theme::reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_does_not_depend_on_typed_progress() {
        let full = typewriter_padding("I'm a ", "Game Developer", 80);
        assert_eq!(full, (80 - (6 + 14 + 1)) / 2);
        assert_eq!(typewriter_padding("I'm a ", "Game Developer", 10), 0);
    }
}
