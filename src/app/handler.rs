//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place that mutates [`AppState`]. Control edits
//! become [`Session`](super::Session) transitions; `Search` and `Reset` are
//! the only events that replace the displayed result.
//!
//! # Event Types
//!
//! - **Criteria**: `EditSearchText`, `SelectAgeFilter`, `SelectExperienceFilter`, `SelectGenreFilter`
//! - **Commands**: `Search`, `Reset`
//! - **Input**: `Char`, `Backspace`, `OptionNext`, `OptionPrev`
//! - **Focus**: `FocusNext`, `FocusPrev`, `FocusSearchBar`, `FocusResults`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Presentation**: `ToggleLayout`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use castlist::app::{handle_event, AppState, Event};
//! use castlist::catalog::Catalog;
//! use castlist::ui::{LayoutKind, Theme};
//!
//! let mut state = AppState::new(Catalog::builtin(), Theme::default(), LayoutKind::Poster);
//! for c in "петр".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (should_render, _actions) = handle_event(&mut state, &Event::Search)?;
//! assert!(should_render);
//! assert_eq!(state.session.result_count(), 1);
//! # Ok::<(), castlist::CastlistError>(())
//! ```

use super::modes::{cycle_option, Focus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{AgeBracket, ExperienceTier, GenreToken};

/// Events produced by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the search term.
    EditSearchText(String),
    /// Sets or clears the age bracket.
    SelectAgeFilter(Option<AgeBracket>),
    /// Sets or clears the experience tier.
    SelectExperienceFilter(Option<ExperienceTier>),
    /// Sets or clears the genre.
    SelectGenreFilter(Option<GenreToken>),

    /// Recomputes the result from the full catalog.
    Search,
    /// Clears every criterion and shows the full catalog.
    Reset,

    /// Typed character. Appended to the search term when the search field has focus.
    Char(char),
    /// Deletes the last search character, or clears the focused select.
    Backspace,
    /// Advances the focused select to its next option.
    OptionNext,
    /// Moves the focused select to its previous option.
    OptionPrev,

    /// Moves focus forward in tab order.
    FocusNext,
    /// Moves focus backward in tab order.
    FocusPrev,
    /// Focuses the search field.
    FocusSearchBar,
    /// Focuses the result list.
    FocusResults,

    /// Selects the next card (wraps to top).
    KeyDown,
    /// Selects the previous card (wraps to bottom).
    KeyUp,

    /// Swaps between the poster and compact layouts.
    ToggleLayout,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event left
/// the visible state unchanged.
///
/// # Errors
///
/// No current transition fails; the `Result` keeps the plugin shim's error
/// path uniform.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, focus = ?state.focus).entered();

    match event {
        Event::EditSearchText(text) => {
            let text = text.clone();
            state.update_session(|s, _| s.edit_search_text(text));
            tracing::trace!(query = %state.session.criteria().search_term, "search text updated");
            Ok((true, vec![]))
        }
        Event::SelectAgeFilter(value) => {
            let value = *value;
            state.update_session(|s, _| s.select_age_filter(value));
            Ok((true, vec![]))
        }
        Event::SelectExperienceFilter(value) => {
            let value = *value;
            state.update_session(|s, _| s.select_experience_filter(value));
            Ok((true, vec![]))
        }
        Event::SelectGenreFilter(value) => {
            let value = *value;
            state.update_session(|s, _| s.select_genre_filter(value));
            Ok((true, vec![]))
        }
        Event::Search => {
            state.update_session(|s, catalog| s.search(catalog));
            state.selected_index = 0;

            tracing::debug!(
                criteria = ?state.session.criteria(),
                result_count = state.session.result_count(),
                "search applied"
            );
            Ok((true, vec![Action::RenamePane { title: state.pane_title() }]))
        }
        Event::Reset => {
            state.update_session(|s, catalog| s.reset(catalog));
            state.selected_index = 0;
            state.focus = Focus::SearchField;

            tracing::debug!(result_count = state.session.result_count(), "filters reset");
            Ok((true, vec![Action::RenamePane { title: state.pane_title() }]))
        }
        Event::Char(c) => {
            if state.focus != Focus::SearchField {
                return Ok((false, vec![]));
            }
            let mut text = state.session.criteria().search_term.clone();
            text.push(*c);
            handle_event(state, &Event::EditSearchText(text))
        }
        Event::Backspace => match state.focus {
            Focus::SearchField => {
                let mut text = state.session.criteria().search_term.clone();
                if text.pop().is_none() {
                    return Ok((false, vec![]));
                }
                handle_event(state, &Event::EditSearchText(text))
            }
            Focus::AgeSelect => handle_event(state, &Event::SelectAgeFilter(None)),
            Focus::ExperienceSelect => handle_event(state, &Event::SelectExperienceFilter(None)),
            Focus::GenreSelect => handle_event(state, &Event::SelectGenreFilter(None)),
            Focus::Results => Ok((false, vec![])),
        },
        Event::OptionNext | Event::OptionPrev => {
            let forward = *event == Event::OptionNext;
            let criteria = state.session.criteria();

            let next = match state.focus {
                Focus::AgeSelect => Event::SelectAgeFilter(cycle_option(
                    criteria.age,
                    &AgeBracket::ALL,
                    forward,
                )),
                Focus::ExperienceSelect => Event::SelectExperienceFilter(cycle_option(
                    criteria.experience,
                    &ExperienceTier::ALL,
                    forward,
                )),
                Focus::GenreSelect => Event::SelectGenreFilter(cycle_option(
                    criteria.genre,
                    &GenreToken::ALL,
                    forward,
                )),
                Focus::SearchField | Focus::Results => return Ok((false, vec![])),
            };
            handle_event(state, &next)
        }
        Event::FocusNext => {
            state.focus = state.focus.next();
            Ok((true, vec![]))
        }
        Event::FocusPrev => {
            state.focus = state.focus.prev();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.focus = Focus::SearchField;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.focus = Focus::Results;
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.focus = Focus::Results;
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.focus = Focus::Results;
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::ToggleLayout => {
            state.layout = state.layout.toggled();
            tracing::debug!(layout = %state.layout, "layout switched");
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ui::{LayoutKind, Theme};

    fn state() -> AppState {
        AppState::new(Catalog::builtin(), Theme::default(), LayoutKind::Poster)
    }

    fn send(state: &mut AppState, events: &[Event]) {
        for event in events {
            handle_event(state, event).unwrap();
        }
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn typing_edits_search_term_without_filtering() {
        let mut state = state();
        type_text(&mut state, "Zzz");

        assert_eq!(state.session.criteria().search_term, "Zzz");
        assert_eq!(state.session.result_count(), 3);
    }

    #[test]
    fn search_filters_and_renames_pane() {
        let mut state = state();
        type_text(&mut state, "Zzz");

        let (render, actions) = handle_event(&mut state, &Event::Search).unwrap();
        assert!(render);
        assert_eq!(state.session.result_count(), 0);
        assert_eq!(
            actions,
            vec![Action::RenamePane { title: "Актёры: 0 из 3".to_string() }]
        );
    }

    #[test]
    fn chars_are_ignored_outside_search_field() {
        let mut state = state();
        send(&mut state, &[Event::FocusNext]);

        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.session.criteria().search_term.is_empty());
    }

    #[test]
    fn backspace_edits_search_then_is_noop() {
        let mut state = state();
        type_text(&mut state, "ab");
        send(&mut state, &[Event::Backspace]);
        assert_eq!(state.session.criteria().search_term, "a");

        send(&mut state, &[Event::Backspace]);
        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
    }

    #[test]
    fn option_keys_cycle_focused_select() {
        let mut state = state();
        send(&mut state, &[Event::FocusNext, Event::OptionNext, Event::OptionNext]);
        assert_eq!(state.session.criteria().age, Some(AgeBracket::ThirtyToForty));

        send(&mut state, &[Event::FocusNext, Event::OptionPrev]);
        assert_eq!(state.session.criteria().experience, Some(ExperienceTier::Master));

        send(&mut state, &[Event::FocusNext, Event::OptionNext]);
        assert_eq!(state.session.criteria().genre, Some(GenreToken::Drama));
    }

    #[test]
    fn backspace_clears_focused_select() {
        let mut state = state();
        send(
            &mut state,
            &[
                Event::SelectGenreFilter(Some(GenreToken::Action)),
                Event::FocusPrev,
                Event::FocusPrev,
            ],
        );
        assert_eq!(state.focus, Focus::GenreSelect);

        send(&mut state, &[Event::Backspace]);
        assert_eq!(state.session.criteria().genre, None);
    }

    #[test]
    fn option_keys_ignored_on_search_field() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::OptionNext).unwrap();
        assert!(!render);
        assert!(state.session.criteria().is_empty());
    }

    #[test]
    fn combined_filter_scenario() {
        let mut state = state();
        send(
            &mut state,
            &[
                Event::SelectAgeFilter(Some(AgeBracket::ThirtyToForty)),
                Event::SelectExperienceFilter(Some(ExperienceTier::Experienced)),
                Event::SelectGenreFilter(Some(GenreToken::Drama)),
                Event::Search,
            ],
        );

        let result = state.session.result();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].age, 32);
        assert_eq!(result[0].experience, "8 лет");
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = state();
        type_text(&mut state, "михаил");
        send(
            &mut state,
            &[
                Event::SelectAgeFilter(Some(AgeBracket::FortyPlus)),
                Event::Search,
                Event::KeyDown,
            ],
        );
        assert_eq!(state.session.result_count(), 1);
        assert_eq!(state.focus, Focus::Results);

        let (render, actions) = handle_event(&mut state, &Event::Reset).unwrap();
        assert!(render);
        assert!(state.session.criteria().is_empty());
        assert_eq!(state.session.result_count(), 3);
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.focus, Focus::SearchField);
        assert_eq!(
            actions,
            vec![Action::RenamePane { title: "Актёры: 3 из 3".to_string() }]
        );
    }

    #[test]
    fn search_resets_selection() {
        let mut state = state();
        send(&mut state, &[Event::KeyDown, Event::KeyDown]);
        assert_eq!(state.selected_index, 2);

        send(&mut state, &[Event::SelectGenreFilter(Some(GenreToken::Drama)), Event::Search]);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn toggle_layout_and_close() {
        let mut state = state();
        send(&mut state, &[Event::ToggleLayout]);
        assert_eq!(state.layout, LayoutKind::Compact);

        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn focus_jumps() {
        let mut state = state();
        send(&mut state, &[Event::FocusResults]);
        assert_eq!(state.focus, Focus::Results);
        send(&mut state, &[Event::FocusSearchBar]);
        assert_eq!(state.focus, Focus::SearchField);
    }
}
