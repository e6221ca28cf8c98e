//! Shared rendering utilities.
//!
//! Every renderer writes into a frame buffer (`&mut String`) instead of
//! printing directly, so layouts can be tested by inspecting the frame.
//! Widths are measured in characters, which matches the terminal cell width
//! for the Latin and Cyrillic text the catalog holds.

use crate::ui::theme::Theme;

/// Appends the ANSI sequence moving the cursor to `row`, `col` (1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Visible width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending with `…` when cut.
///
/// ```rust
/// use castlist::ui::helpers::truncate;
///
/// assert_eq!(truncate("Александр Соколов", 8), "Алексан…");
/// assert_eq!(truncate("Петров", 10), "Петров");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Keeps the parts of `ranges` that fall within the first `visible` characters.
#[must_use]
pub fn clip_ranges(ranges: &[(usize, usize)], visible: usize) -> Vec<(usize, usize)> {
    ranges
        .iter()
        .filter(|&&(start, _)| start < visible)
        .map(|&(start, end)| (start, end.min(visible)))
        .collect()
}

/// Appends `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.push_str(&" ".repeat(count));
}

/// Appends `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with exclusive end; ranges past
/// the end of `text` are clipped. When `is_selected` is set the text is written
/// plainly so the selection colors stay intact.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Removes ANSI color and cursor sequences, leaving the visible text.
#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    let mut plain = String::new();
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'm' | 'H') => in_escape = false,
            (true, _) => {}
            (false, c) => plain.push(c),
        }
    }
    plain
}

/// Splits a frame into its visible lines, one per cursor positioning.
#[cfg(test)]
pub(crate) fn frame_lines(frame: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut in_escape = false;
    for c in frame.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (true, 'H') => {
                in_escape = false;
                lines.push(std::mem::take(&mut current));
            }
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => current.push(c),
        }
    }
    lines.push(current);
    lines.into_iter().filter(|line| !line.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_ranges_cuts_at_visible_width() {
        let ranges = [(0, 3), (5, 9), (12, 14)];
        assert_eq!(clip_ranges(&ranges, 7), vec![(0, 3), (5, 7)]);
        assert_eq!(clip_ranges(&ranges, 5), vec![(0, 3)]);
        assert_eq!(clip_ranges(&ranges, 20), ranges.to_vec());
        assert!(clip_ranges(&ranges, 0).is_empty());
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Михаил Петров", 13), "Михаил Петров");
        assert_eq!(truncate("Михаил Петров", 7), "Михаил…");
        assert_eq!(truncate("abc", 0), "");
        assert_eq!(truncate("abc", 1), "…");
    }

    #[test]
    fn position_cursor_sequence() {
        let mut out = String::new();
        position_cursor(&mut out, 5, 1);
        assert_eq!(out, "\u{1b}[5;1H");
    }

    #[test]
    fn highlighted_text_keeps_all_characters() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Соколов", &[(1, 2), (5, 9)], &theme, false);

        let visible = strip_ansi(&out);
        assert_eq!(visible, "Соколов");
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn frame_lines_split_on_cursor_moves() {
        let mut out = String::new();
        position_cursor(&mut out, 1, 1);
        out.push_str(&Theme::fg("#ffffff"));
        out.push_str("Опыт");
        out.push_str(Theme::reset());
        out.push_str(" 8 лет");
        position_cursor(&mut out, 2, 1);
        out.push_str("Жанр");
        assert_eq!(frame_lines(&out), vec!["Опыт 8 лет", "Жанр"]);
    }

    #[test]
    fn selected_text_is_plain() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "Петров", &[(0, 3)], &theme, true);
        assert_eq!(out, "Петров");
    }
}
