//! Composable UI component renderers.
//!
//! Each component draws one part of the page into the frame buffer and
//! returns the next free row. Layouts compose them through
//! [`render_page_top`] and [`render_page_bottom`] and only draw the result
//! list themselves.
//!
//! # Components
//!
//! - [`header`]: Title and subtitle
//! - [`filter_bar`]: The four input controls in one box
//! - [`summary`]: Section heading with result counts
//! - [`empty`]: Empty state message for no matches
//! - [`footer`]: Keybinding hints
//!
//! # Page Rows
//!
//! ```text
//! 1        [blank line]
//! 2-3      [Header]
//! 4        [Border]
//! 5-7      [Filter bar]
//! 8        [Summary]
//! 9..      [Result list, drawn by the layout]
//! rows-2   [Border]
//! rows-1   [Footer]
//! ```

mod empty;
mod filter_bar;
mod footer;
mod header;
mod summary;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use filter_bar::render_filter_bar;
use footer::render_footer;
use header::render_header;
use summary::render_summary;

/// Rows taken by the page around the result list: eight above it, the
/// bottom border and footer below it, and one spare row.
pub const PAGE_CHROME_ROWS: usize = 11;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders everything above the result list.
///
/// # Returns
///
/// The first row available to the result list.
pub fn render_page_top(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(out, current_row, &vm.filter_bar, theme, cols);
    render_summary(out, current_row, &vm.summary, theme, cols)
}

/// Renders the bottom border and footer, anchored to the pane height.
pub fn render_page_bottom(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_start, &vm.footer, theme, cols);
}
