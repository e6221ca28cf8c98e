//! Search session: the criteria being edited and the result on display.
//!
//! A [`Session`] is a value. Every transition consumes the current session and
//! returns the next one, so the filter engine stays a pure function and each
//! transition can be tested on its own.
//!
//! Editing a control never recomputes the result. Only [`Session::search`]
//! and [`Session::reset`] replace it.
//!
//! # Example
//!
//! ```rust
//! use castlist::app::Session;
//! use castlist::catalog::Catalog;
//! use castlist::domain::AgeBracket;
//!
//! let catalog = Catalog::builtin();
//! let session = Session::new(&catalog)
//!     .edit_search_text("михаил")
//!     .select_age_filter(Some(AgeBracket::FortyPlus));
//! assert_eq!(session.result_count(), 3);
//!
//! let session = session.search(&catalog);
//! assert_eq!(session.result_count(), 1);
//!
//! let session = session.reset(&catalog);
//! assert!(session.criteria().is_empty());
//! assert_eq!(session.result_count(), 3);
//! ```

use crate::catalog::Catalog;
use crate::domain::{Actor, AgeBracket, ExperienceTier, FilterCriteria, GenreToken};
use crate::filter;

/// Criteria under edit plus the last computed result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    criteria: FilterCriteria,
    /// Criteria the current `result` was computed from.
    applied: FilterCriteria,
    result: Vec<Actor>,
}

impl Session {
    /// Initial session: empty criteria, the full catalog on display.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            applied: FilterCriteria::default(),
            result: catalog.get_all().to_vec(),
        }
    }

    /// Replaces the search term.
    #[must_use]
    pub fn edit_search_text(mut self, text: impl Into<String>) -> Self {
        self.criteria.search_term = text.into();
        self
    }

    #[must_use]
    pub fn select_age_filter(mut self, value: Option<AgeBracket>) -> Self {
        self.criteria.age = value;
        self
    }

    #[must_use]
    pub fn select_experience_filter(mut self, value: Option<ExperienceTier>) -> Self {
        self.criteria.experience = value;
        self
    }

    #[must_use]
    pub fn select_genre_filter(mut self, value: Option<GenreToken>) -> Self {
        self.criteria.genre = value;
        self
    }

    /// Recomputes the result from the full catalog and the current criteria.
    #[must_use]
    pub fn search(mut self, catalog: &Catalog) -> Self {
        self.result = filter::apply(catalog.get_all(), &self.criteria);
        self.applied = self.criteria.clone();
        self
    }

    /// Clears every criterion and shows the full catalog again.
    #[must_use]
    pub fn reset(self, catalog: &Catalog) -> Self {
        Self::new(catalog)
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Criteria the displayed result was computed from.
    #[must_use]
    pub const fn applied(&self) -> &FilterCriteria {
        &self.applied
    }

    #[must_use]
    pub fn result(&self) -> &[Actor] {
        &self.result
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.result.len()
    }

    /// Returns `true` when the criteria were edited after the last search.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.criteria != self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_full_catalog() {
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog);

        assert!(session.criteria().is_empty());
        assert_eq!(session.result(), catalog.get_all());
        assert!(!session.has_pending_changes());
    }

    #[test]
    fn edits_do_not_recompute_result() {
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog)
            .edit_search_text("Zzz")
            .select_age_filter(Some(AgeBracket::TwentyToThirty))
            .select_experience_filter(Some(ExperienceTier::Master))
            .select_genre_filter(Some(GenreToken::Romance));

        assert_eq!(session.result_count(), 3);
        assert_eq!(session.criteria().active_count(), 4);
        assert!(session.has_pending_changes());
    }

    #[test]
    fn each_select_touches_only_its_criterion() {
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog)
            .edit_search_text("ал")
            .select_genre_filter(Some(GenreToken::Drama));

        let criteria = session.criteria();
        assert_eq!(criteria.search_term, "ал");
        assert_eq!(criteria.age, None);
        assert_eq!(criteria.experience, None);
        assert_eq!(criteria.genre, Some(GenreToken::Drama));
    }

    #[test]
    fn search_replaces_result() {
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog)
            .select_experience_filter(Some(ExperienceTier::Master))
            .search(&catalog);

        assert_eq!(session.result_count(), 1);
        assert_eq!(session.result()[0].name, "Михаил Петров");
        assert!(!session.has_pending_changes());
        assert_eq!(session.applied(), session.criteria());
    }

    #[test]
    fn search_always_starts_from_full_catalog() {
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog)
            .edit_search_text("Zzz")
            .search(&catalog)
            .edit_search_text("екатерина")
            .search(&catalog);

        assert_eq!(session.result_count(), 1);
    }

    #[test]
    fn empty_match_is_not_an_error() {
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog).edit_search_text("Zzz").search(&catalog);

        assert_eq!(session.result_count(), 0);
        assert!(session.result().is_empty());
    }

    #[test]
    fn reset_restores_everything() {
        let catalog = Catalog::builtin();
        let session = Session::new(&catalog)
            .edit_search_text("михаил")
            .select_age_filter(Some(AgeBracket::FortyPlus))
            .search(&catalog)
            .select_genre_filter(Some(GenreToken::Comedy))
            .reset(&catalog);

        assert_eq!(session, Session::new(&catalog));
        assert_eq!(session.result_count(), 3);
    }
}
