//! Detail pane for the selected game.

use crate::app::state::DETAIL_PANE_ROWS;
use crate::ui::helpers::{display_width, position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailInfo;

/// Renders the pane into exactly `DETAIL_PANE_ROWS` rows starting at `row`:
/// a border, the game name, then facts followed by the wrapped description.
pub fn render_detail(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "┄".repeat(cols));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.accent));
    let title = format!(" {}", detail.name);
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(display_width(&title))));
    print!("{}", Theme::reset());

    let body_rows = DETAIL_PANE_ROWS - 2;
    let label_width = detail.facts.iter().map(|(k, _)| display_width(k)).max().unwrap_or(0);
    let value_width = cols.saturating_sub(label_width + 4);

    let mut lines: Vec<(Option<&str>, String)> = detail
        .facts
        .iter()
        .map(|(label, value)| (Some(label.as_str()), crate::app::state::truncate(value, value_width)))
        .collect();
    if let Some(description) = &detail.description {
        lines.extend(wrap_text(description, cols.saturating_sub(2)).into_iter().map(|l| (None, l)));
    }

    for offset in 0..body_rows {
        position_cursor(row + 2 + offset, 1);
        match lines.get(offset) {
            Some((Some(label), value)) => {
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!(" {label:<label_width$}  ");
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!("{value}");
                let used = label_width + 3 + display_width(value);
                print!("{}", " ".repeat(cols.saturating_sub(used)));
            }
            Some((None, text)) => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
                print!(" {text}");
                print!("{}", " ".repeat(cols.saturating_sub(display_width(text) + 1)));
            }
            None => print!("{}", " ".repeat(cols)),
        }
        print!("{}", Theme::reset());
    }
}
