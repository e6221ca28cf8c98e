//! Poster layout: each actor as a framed card.
//!
//! ```text
//! ╭──────────────────────────────────────────────╮
//! │ ★ 4.8  Александр Соколов                     │
//! │ 32 лет · 8 лет                               │
//! │ Жанры: [Драма] [Триллер]                     │
//! │ Фильмография: Война и мир, Династия и ещё 2  │
//! ╰──────────────────────────────────────────────╯
//! ```

use super::{Layout, RowWriter};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ActorCard, UIViewModel};

/// Framed card per actor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PosterLayout;

const CARD_ROWS: usize = 6;

impl Layout for PosterLayout {
    fn name(&self) -> &'static str {
        "poster"
    }

    fn item_rows(&self) -> usize {
        CARD_ROWS
    }

    fn render_list(&self, out: &mut String, row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
        vm.cards
            .iter()
            .fold(row, |current_row, card| render_card(out, current_row, card, theme, cols))
    }
}

fn render_card(out: &mut String, row: usize, card: &ActorCard, theme: &Theme, cols: usize) -> usize {
    let frame = if card.is_selected {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.border)
    };
    let inner = cols.saturating_sub(2);
    let content = cols.saturating_sub(4);

    position_cursor(out, row, 1);
    out.push_str(&frame);
    out.push('╭');
    out.push_str(&"─".repeat(inner));
    out.push('╮');
    out.push_str(Theme::reset());

    let rating_style = Theme::fg(&theme.colors.rating_fg);
    let dim_style = Theme::fg(&theme.colors.text_dim);
    let badge_style = Theme::fg(&theme.colors.badge_fg);

    let mut line = open_line(out, row + 1, &frame, theme, card.is_selected, content);
    line.push(&rating_style, &format!("★ {}", card.rating));
    line.pad(2);
    line.push_highlighted(&card.name, &card.highlight_ranges, theme);
    close_line(line.finish(), &frame);

    let mut line = open_line(out, row + 2, &frame, theme, card.is_selected, content);
    line.push("", &card.age_label);
    line.push(&dim_style, " · ");
    line.push("", &card.experience);
    close_line(line.finish(), &frame);

    let badges = card
        .genres
        .iter()
        .map(|genre| format!("[{genre}]"))
        .collect::<Vec<_>>()
        .join(" ");
    let mut line = open_line(out, row + 3, &frame, theme, card.is_selected, content);
    line.push(&dim_style, "Жанры: ");
    line.push(&badge_style, &badges);
    close_line(line.finish(), &frame);

    let mut line = open_line(out, row + 4, &frame, theme, card.is_selected, content);
    line.push(&dim_style, "Фильмография: ");
    line.push("", &card.filmography);
    close_line(line.finish(), &frame);

    position_cursor(out, row + 5, 1);
    out.push_str(&frame);
    out.push('╰');
    out.push_str(&"─".repeat(inner));
    out.push('╯');
    out.push_str(Theme::reset());

    row + CARD_ROWS
}

/// Positions at `row`, draws the left frame and returns a writer for the
/// card interior.
fn open_line<'a>(
    out: &'a mut String,
    row: usize,
    frame: &str,
    theme: &Theme,
    selected: bool,
    content: usize,
) -> RowWriter<'a> {
    position_cursor(out, row, 1);
    out.push_str(frame);
    out.push('│');
    out.push_str(Theme::reset());
    let mut line = RowWriter::new(out, content + 2, theme, selected);
    line.pad(1);
    line
}

/// Draws the right frame after a finished interior.
fn close_line(out: &mut String, frame: &str) {
    out.push_str(frame);
    out.push('│');
    out.push_str(Theme::reset());
}
