//! Header component renderer.
//!
//! Renders the page title and subtitle, both centered.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title at `row` and the subtitle below it.
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
/// [padding] ★ ACTORS CATALOG ★ [padding]
/// [padding] subtitle           [padding]
/// ```
///
/// The title line is padded to the full width so an optional `header_bg`
/// forms a solid bar. A subtitle wider than the pane is truncated.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&format!("★ {} ★", header.title), cols);
    let title_len = display_width(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    pad(out, padding);
    out.push_str(&title);
    pad(out, cols.saturating_sub(padding + title_len));
    out.push_str(Theme::reset());

    let subtitle = truncate(&header.subtitle, cols);
    let sub_len = display_width(&subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, sub_padding);
    out.push_str(&subtitle);
    pad(out, cols.saturating_sub(sub_padding + sub_len));
    out.push_str(Theme::reset());

    row + 2
}
