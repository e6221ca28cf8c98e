//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the page shows: the
//! catalog, the search [`Session`], keyboard focus, the selected card and the
//! active presentation (layout and theme). The event handler mutates it; the
//! renderer only reads it through [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use castlist::app::AppState;
//! use castlist::catalog::Catalog;
//! use castlist::ui::{LayoutKind, Theme};
//!
//! let state = AppState::new(Catalog::builtin(), Theme::default(), LayoutKind::Poster);
//! let viewmodel = state.compute_viewmodel(40);
//! assert_eq!(viewmodel.summary.count, 3);
//! ```

use super::modes::Focus;
use super::session::Session;
use crate::catalog::Catalog;
use crate::domain::{Actor, AgeBracket, ExperienceTier, GenreToken};
use crate::filter::fold_case;
use crate::ui::layout::LayoutKind;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ActorCard, ControlInfo, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, SummaryInfo,
    UIViewModel,
};

/// Number of filmography titles shown on a card before the remainder is counted.
const FILMOGRAPHY_PREVIEW: usize = 2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only catalog every search starts from.
    pub catalog: Catalog,

    /// Criteria under edit and the displayed result.
    pub session: Session,

    /// Control that receives keyboard input.
    pub focus: Focus,

    /// Zero-based index of the selected card within the displayed result.
    ///
    /// Reset to 0 whenever the result is replaced.
    pub selected_index: usize,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Active presentation layout.
    pub layout: LayoutKind,
}

impl AppState {
    /// Creates the initial state: empty criteria, full catalog on display,
    /// focus on the search field.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, layout: LayoutKind) -> Self {
        let session = Session::new(&catalog);
        Self {
            catalog,
            session,
            focus: Focus::default(),
            selected_index: 0,
            theme,
            layout,
        }
    }

    /// Applies a session transition in place.
    pub fn update_session(&mut self, transition: impl FnOnce(Session, &Catalog) -> Session) {
        let session = std::mem::take(&mut self.session);
        self.session = transition(session, &self.catalog);
    }

    /// Moves the selected card down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.session.result_count();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the selected card up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.session.result_count();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_actor(&self) -> Option<&Actor> {
        self.session.result().get(self.selected_index)
    }

    /// Pane title summarizing the displayed result.
    #[must_use]
    pub fn pane_title(&self) -> String {
        format!(
            "Актёры: {} из {}",
            self.session.result_count(),
            self.catalog.len()
        )
    }

    /// Computes a renderable view model for a pane `rows` high.
    ///
    /// Only the cards that fit are included. The window is centered on the
    /// selected card and shifted to stay full near the end of the list.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UIViewModel {
        let layout = self.layout.layout();
        let result = self.session.result();

        let capacity = (rows.saturating_sub(layout.chrome_rows()) / layout.item_rows()).max(1);

        let mut visible_start = self.selected_index.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(result.len());
        if visible_end - visible_start < capacity && result.len() >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let cards = result
            .get(visible_start..visible_end)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(offset, actor)| self.compute_card(actor, visible_start + offset))
            .collect();

        let empty_state = result.is_empty().then(|| EmptyState {
            message: "Актёры не найдены".to_string(),
            subtitle: "Попробуйте изменить параметры поиска".to_string(),
        });

        UIViewModel {
            header: Self::compute_header(),
            filter_bar: self.compute_filter_bar(),
            summary: SummaryInfo {
                heading: "Наши таланты".to_string(),
                count: result.len(),
                total: self.catalog.len(),
            },
            cards,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state,
            footer: self.compute_footer(),
        }
    }

    fn compute_card(&self, actor: &Actor, absolute_idx: usize) -> ActorCard {
        ActorCard {
            name: actor.name.clone(),
            age_label: format!("{} лет", actor.age),
            experience: actor.experience.clone(),
            genres: actor.genres.clone(),
            filmography: summarize_filmography(&actor.filmography),
            rating: format!("{:.1}", actor.rating),
            is_selected: self.focus == Focus::Results && absolute_idx == self.selected_index,
            highlight_ranges: match_ranges(&actor.name, &self.session.applied().search_term),
        }
    }

    fn compute_header() -> HeaderInfo {
        HeaderInfo {
            title: "ACTORS CATALOG".to_string(),
            subtitle: "Откройте для себя талантливых актёров для вашего следующего проекта"
                .to_string(),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        let criteria = self.session.criteria();
        let search_value = (!criteria.search_term.is_empty()).then(|| criteria.search_term.clone());

        FilterBarInfo {
            controls: vec![
                ControlInfo {
                    label: "Поиск".to_string(),
                    placeholder: "имя актёра...".to_string(),
                    value: search_value,
                    is_focused: self.focus == Focus::SearchField,
                },
                ControlInfo {
                    label: "Возраст".to_string(),
                    placeholder: "любой".to_string(),
                    value: criteria.age.map(|a| AgeBracket::label(a).to_string()),
                    is_focused: self.focus == Focus::AgeSelect,
                },
                ControlInfo {
                    label: "Опыт".to_string(),
                    placeholder: "любой".to_string(),
                    value: criteria.experience.map(|e| ExperienceTier::label(e).to_string()),
                    is_focused: self.focus == Focus::ExperienceSelect,
                },
                ControlInfo {
                    label: "Жанр".to_string(),
                    placeholder: "любой".to_string(),
                    value: criteria.genre.map(|g| GenreToken::label(g).to_string()),
                    is_focused: self.focus == Focus::GenreSelect,
                },
            ],
            pending: self.session.has_pending_changes(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.focus.is_select() {
            "←/→: выбрать  Backspace: очистить  Enter: найти  Tab: далее  Ctrl+r: сбросить"
        } else if self.focus == Focus::Results {
            "j/k: листать  /: поиск  Enter: найти  v: вид  Ctrl+r: сбросить  q: закрыть"
        } else {
            "Ввод: имя  Enter: найти  Tab: фильтры  Esc: к списку  Ctrl+r: сбросить"
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Formats the first titles of a filmography, counting the rest.
///
/// ```rust
/// use castlist::app::state::summarize_filmography;
///
/// let titles = vec!["Война и мир".to_string(), "Династия".to_string(), "Империя".to_string()];
/// assert_eq!(summarize_filmography(&titles), "Война и мир, Династия и ещё 1");
/// ```
#[must_use]
pub fn summarize_filmography(titles: &[String]) -> String {
    let shown = titles
        .iter()
        .take(FILMOGRAPHY_PREVIEW)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    if titles.len() > FILMOGRAPHY_PREVIEW {
        format!("{shown} и ещё {}", titles.len() - FILMOGRAPHY_PREVIEW)
    } else {
        shown
    }
}

/// Character ranges of every non-overlapping, case-insensitive occurrence of
/// `needle` in `text`.
///
/// Ranges are `(start, end)` character indices into `text` with exclusive end.
/// Case is folded with [`fold_case`], the same folding the name filter uses,
/// so a character whose lowercase form is several characters still maps back
/// to exactly one character of `text`.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = fold_case(needle).chars().collect();
    if needle.is_empty() {
        return vec![];
    }
    let haystack: Vec<char> = fold_case(text).chars().collect();

    // Folded offset of each character boundary of `text`.
    let mut bounds: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| fold_case(&text[..byte]).chars().count())
        .collect();
    bounds.push(haystack.len());

    let start_of = |folded: usize| bounds.iter().rposition(|&b| b <= folded).unwrap_or(0);
    let end_of = |folded: usize| {
        bounds
            .iter()
            .position(|&b| b >= folded)
            .unwrap_or(bounds.len() - 1)
    };

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if haystack[pos..pos + needle.len()] == needle[..] {
            ranges.push((start_of(pos), end_of(pos + needle.len())));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}
