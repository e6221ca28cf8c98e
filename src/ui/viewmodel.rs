//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! a [`Layout`](crate::ui::layout::Layout). They hold display-ready strings
//! and flags only; both layouts render the same view model.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// The four input controls.
    pub filter_bar: FilterBarInfo,

    /// Result heading and counts.
    pub summary: SummaryInfo,

    /// Cards that fit in the pane, in result order.
    pub cards: Vec<ActorCard>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    /// Shown instead of cards when the result is empty.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// Page title block.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub subtitle: String,
}

/// Input controls in display order: search, age, experience, genre.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    pub controls: Vec<ControlInfo>,

    /// The criteria were edited after the last search.
    pub pending: bool,
}

/// One input control.
#[derive(Debug, Clone)]
pub struct ControlInfo {
    pub label: String,
    /// Shown when `value` is `None`.
    pub placeholder: String,
    pub value: Option<String>,
    pub is_focused: bool,
}

/// Result heading with counts, drawn as "Наши таланты ... Найдено: 1 из 3".
#[derive(Debug, Clone)]
pub struct SummaryInfo {
    pub heading: String,
    /// Size of the displayed result.
    pub count: usize,
    /// Size of the catalog.
    pub total: usize,
}

/// Display information for one actor.
#[derive(Debug, Clone)]
pub struct ActorCard {
    pub name: String,
    /// Age with unit, e.g. "32 лет".
    pub age_label: String,
    pub experience: String,
    pub genres: Vec<String>,
    /// First titles plus a remainder count, e.g. "Война и мир, Династия и ещё 2".
    pub filmography: String,
    /// Rating with one decimal, e.g. "4.8".
    pub rating: String,
    pub is_selected: bool,

    /// Character ranges of `name` matching the applied search term.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Message shown when no actor matches.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Keybinding hints.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}
