//! Swappable page presentations.
//!
//! Both layouts render the same [`UIViewModel`] with the same page chrome
//! (header, filter bar, summary, footer) and differ only in how the result
//! list is drawn:
//!
//! - [`PosterLayout`]: one framed card per actor with every detail
//! - [`CompactLayout`]: one table row per actor
//!
//! Either works with any [`Theme`].

mod compact;
mod poster;

pub use compact::CompactLayout;
pub use poster::PosterLayout;

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{CastlistError, Result};
use crate::ui::components::{self, PAGE_CHROME_ROWS};
use crate::ui::helpers::{clip_ranges, display_width, pad, render_highlighted_text, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// A presentation of the catalog page.
pub trait Layout: Send + Sync {
    /// Name used in configuration.
    fn name(&self) -> &'static str;

    /// Rows taken by one actor in the result list.
    fn item_rows(&self) -> usize;

    /// Rows drawn above the first actor, such as column titles.
    fn list_header_rows(&self) -> usize {
        0
    }

    /// Rows of the page not available to actors.
    fn chrome_rows(&self) -> usize {
        PAGE_CHROME_ROWS + self.list_header_rows()
    }

    /// Draws the result list starting at `row` and returns the next free row.
    ///
    /// Called only when the view model has at least one card.
    fn render_list(&self, out: &mut String, row: usize, vm: &UIViewModel, theme: &Theme, cols: usize) -> usize;

    /// Renders a full frame.
    fn render(&self, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
        let mut out = String::new();
        let list_row = components::render_page_top(&mut out, vm, theme, cols);

        match &vm.empty_state {
            Some(empty) => {
                components::render_empty_state(&mut out, list_row, empty, theme, cols);
            }
            None => {
                self.render_list(&mut out, list_row, vm, theme, cols);
            }
        }

        components::render_page_bottom(&mut out, vm, theme, rows, cols);
        out
    }
}

/// Selects one of the built-in layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutKind {
    #[default]
    Poster,
    Compact,
}

impl LayoutKind {
    /// The layout implementation for this kind.
    #[must_use]
    pub fn layout(self) -> &'static dyn Layout {
        match self {
            Self::Poster => &PosterLayout,
            Self::Compact => &CompactLayout,
        }
    }

    /// The other layout.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Poster => Self::Compact,
            Self::Compact => Self::Poster,
        }
    }
}

impl FromStr for LayoutKind {
    type Err = CastlistError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "poster" => Ok(Self::Poster),
            "compact" => Ok(Self::Compact),
            other => Err(CastlistError::Config(format!("unknown layout: {other}"))),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.layout().name())
    }
}

/// Writes styled segments into a fixed number of cells.
///
/// Every segment is truncated to the cells left, and [`RowWriter::finish`]
/// pads the rest, so a row never exceeds its width. On a selected row segment
/// styles are dropped in favour of the selection colors.
struct RowWriter<'a> {
    out: &'a mut String,
    remaining: usize,
    base: String,
    selected: bool,
}

impl<'a> RowWriter<'a> {
    fn new(out: &'a mut String, width: usize, theme: &Theme, selected: bool) -> Self {
        let base = if selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_normal)
        };
        out.push_str(&base);

        Self {
            out,
            remaining: width,
            base,
            selected,
        }
    }

    /// Appends `text` in the given style.
    fn push(&mut self, style: &str, text: &str) {
        let text = truncate(text, self.remaining);
        self.remaining -= display_width(&text);
        if self.selected || style.is_empty() {
            self.out.push_str(&text);
            return;
        }
        self.out.push_str(style);
        self.out.push_str(&text);
        self.restore();
    }

    /// Appends `text` with search matches highlighted.
    fn push_highlighted(&mut self, text: &str, ranges: &[(usize, usize)], theme: &Theme) {
        self.push_highlighted_within(text, ranges, theme, self.remaining);
    }

    /// Appends `text` with search matches highlighted, cut to at most `width`
    /// cells, and returns the cells written.
    ///
    /// Highlights stop before the `…` of a cut name.
    fn push_highlighted_within(
        &mut self,
        text: &str,
        ranges: &[(usize, usize)],
        theme: &Theme,
        width: usize,
    ) -> usize {
        let cut = truncate(text, width.min(self.remaining));
        let written = display_width(&cut);
        let visible = if written < display_width(text) {
            written.saturating_sub(1)
        } else {
            written
        };
        self.remaining -= written;
        let ranges = clip_ranges(ranges, visible);
        render_highlighted_text(self.out, &cut, &ranges, theme, self.selected);
        self.restore();
        written
    }

    /// Appends `text` padded or cut to exactly `width` cells.
    fn push_column(&mut self, style: &str, text: &str, width: usize) {
        let width = width.min(self.remaining);
        let cell = truncate(text, width);
        let fill = width - display_width(&cell);
        self.push(style, &cell);
        self.pad(fill);
    }

    fn pad(&mut self, count: usize) {
        let count = count.min(self.remaining);
        pad(self.out, count);
        self.remaining -= count;
    }

    fn restore(&mut self) {
        self.out.push_str(Theme::reset());
        self.out.push_str(&self.base);
    }

    /// Pads to the full width, clears styling and hands the buffer back.
    fn finish(self) -> &'a mut String {
        pad(self.out, self.remaining);
        self.out.push_str(Theme::reset());
        self.out
    }
}
