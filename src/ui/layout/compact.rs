//! Compact layout: the result list as a table with one row per actor.
//!
//! Fits many more actors on screen than the poster cards; the filmography
//! column takes whatever width is left.

use super::{Layout, RowWriter};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ActorCard, UIViewModel};

/// Table row per actor.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactLayout;

/// Fixed column widths, including the gap after each column.
const MARKER_WIDTH: usize = 2;
const RATING_WIDTH: usize = 9;
const NAME_WIDTH: usize = 24;
const AGE_WIDTH: usize = 9;
const EXPERIENCE_WIDTH: usize = 10;
const GENRES_WIDTH: usize = 22;

impl Layout for CompactLayout {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn item_rows(&self) -> usize {
        1
    }

    fn list_header_rows(&self) -> usize {
        1
    }

    fn render_list(&self, out: &mut String, row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
        let mut current_row = render_column_titles(out, row, theme, cols);
        for card in &vm.cards {
            current_row = render_row(out, current_row, card, theme, cols);
        }
        current_row
    }
}

/// Renders the column titles in bold header color.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_column_titles(out: &mut String, row: usize, theme: &Theme, cols: usize) -> usize {
    let style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));

    position_cursor(out, row, 1);
    let mut line = RowWriter::new(out, cols, theme, false);
    line.pad(MARKER_WIDTH);
    line.push_column(&style, "РЕЙТИНГ", RATING_WIDTH);
    line.push_column(&style, "ИМЯ", NAME_WIDTH);
    line.push_column(&style, "ВОЗРАСТ", AGE_WIDTH);
    line.push_column(&style, "ОПЫТ", EXPERIENCE_WIDTH);
    line.push_column(&style, "ЖАНРЫ", GENRES_WIDTH);
    line.push(&style, "ФИЛЬМОГРАФИЯ");
    line.finish();

    row + 1
}

/// Renders one actor as a table row.
///
/// The selected row is drawn with the selection colors across the full pane
/// width and marked with `▸`. Names longer than their column are cut.
fn render_row(out: &mut String, row: usize, card: &ActorCard, theme: &Theme, cols: usize) -> usize {
    let rating_style = Theme::fg(&theme.colors.rating_fg);
    let badge_style = Theme::fg(&theme.colors.badge_fg);
    let dim_style = Theme::fg(&theme.colors.text_dim);

    position_cursor(out, row, 1);
    let mut line = RowWriter::new(out, cols, theme, card.is_selected);
    line.push_column("", if card.is_selected { "▸" } else { "" }, MARKER_WIDTH);
    line.push_column(&rating_style, &format!("★ {}", card.rating), RATING_WIDTH);

    let written =
        line.push_highlighted_within(&card.name, &card.highlight_ranges, theme, NAME_WIDTH - 1);
    line.pad(NAME_WIDTH - written);

    line.push_column("", &card.age_label, AGE_WIDTH);
    line.push_column("", &card.experience, EXPERIENCE_WIDTH);
    line.push_column(&badge_style, &card.genres.join(", "), GENRES_WIDTH);
    line.push(&dim_style, &card.filmography);
    line.finish();

    row + 1
}
