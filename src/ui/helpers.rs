//! Shared rendering utilities and helpers.
//!
//! Cursor positioning, match highlighting and word wrapping used by more
//! than one component. Widths and ranges are counted in characters, never
//! bytes.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` is assumed to occupy.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Prints `text` centered in `cols` with trailing padding to the line end.
pub fn print_centered(text: &str, cols: usize) {
    let len = display_width(text).min(cols);
    let padding = cols.saturating_sub(len) / 2;
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Out-of-bounds ranges are clipped. Selected rows skip
/// match highlighting so the selection background stays uniform.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());
        if start == end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Greedy word wrap to `width` characters.
///
/// Words longer than `width` are split. Whitespace runs collapse to one
/// space. An empty input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn splits_words_longer_than_the_width() {
        assert_eq!(wrap_text("ab abcdefgh c", 4), vec!["ab", "abcd", "efgh", "c"]);
    }

    #[test]
    fn collapses_whitespace_and_ignores_blank_input() {
        assert_eq!(wrap_text("  a \n\n b  ", 10), vec!["a b"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(wrap_text("Pokémon Légendes", 7), vec!["Pokémon", "Légende", "s"]);
        assert_eq!(display_width("é"), 1);
    }
}
