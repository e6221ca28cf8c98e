//! Empty state component renderer.
//!
//! Shown in place of the result list when no actor matches.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message, centered, starting one row
/// below `row`.
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message = truncate(&empty.message, cols);
    let msg_len = display_width(&message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    pad(out, msg_padding);
    out.push_str(&message);
    pad(out, cols.saturating_sub(msg_padding + msg_len));
    out.push_str(Theme::reset());

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_len = display_width(&subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(out, row + 2, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, sub_padding);
    out.push_str(&subtitle);
    pad(out, cols.saturating_sub(sub_padding + sub_len));
    out.push_str(Theme::reset());

    row + 3
}
