//! Filter bar component renderer.
//!
//! Draws the four input controls (name search and the three selects) side by
//! side inside a single bordered box.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ControlInfo, FilterBarInfo};

/// Marker drawn into the top border while edits are waiting for a search.
const PENDING_MARKER: &str = " ● Enter: применить ";

/// Renders the filter bar starting at `row`.
///
/// # Returns
///
/// The next available row position (row + 3)
///
/// # Layout
///
/// ```text
/// ┌─ ● Enter: применить ─────────────────────────────────────┐
/// │ ▸Поиск: алекс  │ Возраст: любой │ Опыт: любой │ Жанр: Драма │
/// └──────────────────────────────────────────────────────────┘
/// ```
pub fn render_filter_bar(out: &mut String, row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let border = Theme::fg(&theme.colors.control_border);
    let inner_width = cols.saturating_sub(2);

    position_cursor(out, row, 1);
    out.push_str(&border);
    out.push('┌');
    if bar.pending && inner_width > display_width(PENDING_MARKER) + 1 {
        out.push('─');
        out.push_str(&Theme::fg(&theme.colors.accent));
        out.push_str(PENDING_MARKER);
        out.push_str(&border);
        out.push_str(&"─".repeat(inner_width - display_width(PENDING_MARKER) - 1));
    } else {
        out.push_str(&"─".repeat(inner_width));
    }
    out.push('┐');
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());
    render_controls(out, &bar.controls, theme, inner_width);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&border);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}

/// Writes the controls into exactly `width` cells, splitting the width evenly.
fn render_controls(out: &mut String, controls: &[ControlInfo], theme: &Theme, width: usize) {
    if controls.is_empty() {
        pad(out, width);
        return;
    }

    let separators = controls.len() - 1;
    let slot = width.saturating_sub(separators) / controls.len();
    let mut written = 0;

    for (idx, control) in controls.iter().enumerate() {
        if idx > 0 && written < width {
            out.push_str(&Theme::fg(&theme.colors.control_border));
            out.push('│');
            out.push_str(Theme::reset());
            written += 1;
        }
        written += render_control(out, control, theme, slot);
    }

    pad(out, width.saturating_sub(written));
}

/// Writes one control padded to `slot` cells and returns the cells written.
fn render_control(out: &mut String, control: &ControlInfo, theme: &Theme, slot: usize) -> usize {
    let marker = if control.is_focused { "▸" } else { " " };
    let label = format!("{marker}{}: ", control.label);
    let label = truncate(&label, slot);
    let label_len = display_width(&label);

    if control.is_focused {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.control_focus));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str(&label);

    let remaining = slot - label_len;
    let value = match &control.value {
        Some(value) => {
            if !control.is_focused {
                out.push_str(&Theme::fg(&theme.colors.text_normal));
            }
            truncate(value, remaining)
        }
        None => {
            out.push_str(Theme::reset());
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            truncate(&control.placeholder, remaining)
        }
    };
    let value_len = display_width(&value);
    out.push_str(&value);
    pad(out, remaining - value_len);
    out.push_str(Theme::reset());

    slot
}
