//! Result summary line: section heading on the left, counts on the right.

use crate::ui::helpers::{display_width, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SummaryInfo;

/// Renders the summary line at `row`.
///
/// ```text
///  Наши таланты                                  Найдено: 1 из 3
/// ```
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_summary(out: &mut String, row: usize, summary: &SummaryInfo, theme: &Theme, cols: usize) -> usize {
    let counts = format!("Найдено: {} из {} ", summary.count, summary.total);
    let counts = truncate(&counts, cols);
    let counts_len = display_width(&counts);

    let heading = truncate(&format!(" {}", summary.heading), cols - counts_len);
    let heading_len = display_width(&heading);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&heading);
    out.push_str(Theme::reset());
    pad(out, cols - counts_len - heading_len);
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&counts);
    out.push_str(Theme::reset());

    row + 1
}
