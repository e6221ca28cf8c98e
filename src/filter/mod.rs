//! Filter engine: maps a catalog and criteria to the matching actors.
//!
//! An actor is kept when all four clauses hold. Each clause is vacuously true
//! when its criterion is unset:
//!
//! 1. **Name**: the search term is a case-insensitive substring of the name
//! 2. **Age**: the age lies in the selected [`AgeBracket`](crate::domain::AgeBracket)
//! 3. **Experience**: the parsed years lie in the selected
//!    [`ExperienceTier`](crate::domain::ExperienceTier); an unparseable
//!    experience string matches no tier
//! 4. **Genre**: some genre label contains the selected token, ignoring case
//!
//! [`apply`] is a stable filter: catalog order is preserved and nothing is
//! re-sorted. An empty result is a normal outcome.
//!
//! # Example
//!
//! ```rust
//! use castlist::catalog::Catalog;
//! use castlist::domain::{FilterCriteria, GenreToken};
//! use castlist::filter;
//!
//! let catalog = Catalog::builtin();
//! let criteria = FilterCriteria {
//!     genre: Some(GenreToken::Comedy),
//!     ..FilterCriteria::default()
//! };
//!
//! let result = filter::apply(catalog.get_all(), &criteria);
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].name, "Екатерина Волкова");
//! ```

use crate::domain::{Actor, FilterCriteria};

/// Returns the actors of `catalog` that satisfy every active clause of
/// `criteria`, in catalog order.
#[must_use]
pub fn apply(catalog: &[Actor], criteria: &FilterCriteria) -> Vec<Actor> {
    let _span = tracing::debug_span!(
        "filter_apply",
        total_actors = catalog.len(),
        active_clauses = criteria.active_count()
    )
    .entered();

    let needle = fold_case(&criteria.search_term);

    let result: Vec<Actor> = catalog
        .iter()
        .filter(|actor| {
            name_contains(&actor.name, &needle)
                && matches_age(actor, criteria)
                && matches_experience(actor, criteria)
                && matches_genre(actor, criteria)
        })
        .cloned()
        .collect();

    tracing::debug!(kept = result.len(), "filter applied");
    result
}

/// Returns `true` if `actor` satisfies every active clause of `criteria`.
#[must_use]
pub fn matches(actor: &Actor, criteria: &FilterCriteria) -> bool {
    matches_name(actor, criteria)
        && matches_age(actor, criteria)
        && matches_experience(actor, criteria)
        && matches_genre(actor, criteria)
}

/// Name clause: case-insensitive substring search.
#[must_use]
pub fn matches_name(actor: &Actor, criteria: &FilterCriteria) -> bool {
    name_contains(&actor.name, &fold_case(&criteria.search_term))
}

/// Age clause.
#[must_use]
pub fn matches_age(actor: &Actor, criteria: &FilterCriteria) -> bool {
    criteria.age.map_or(true, |bracket| bracket.contains(actor.age))
}

/// Experience clause.
#[must_use]
pub fn matches_experience(actor: &Actor, criteria: &FilterCriteria) -> bool {
    criteria
        .experience
        .map_or(true, |tier| tier.contains(actor.experience_years()))
}

/// Genre clause.
#[must_use]
pub fn matches_genre(actor: &Actor, criteria: &FilterCriteria) -> bool {
    criteria
        .genre
        .map_or(true, |genre| genre.matches_any(&actor.genres))
}

/// Case folding shared by the name clause and match highlighting.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// `needle` must already be folded.
fn name_contains(name: &str, needle: &str) -> bool {
    needle.is_empty() || fold_case(name).contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::domain::{AgeBracket, ExperienceTier, GenreToken};

    fn actor(id: u32, name: &str, age: u32, experience: &str, genres: &[&str]) -> Actor {
        Actor {
            id,
            name: name.to_string(),
            age,
            experience: experience.to_string(),
            genres: genres.iter().map(ToString::to_string).collect(),
            image: format!("/img/{id}.jpg"),
            filmography: vec![],
            rating: 4.0,
        }
    }

    fn ids(actors: &[Actor]) -> Vec<u32> {
        actors.iter().map(|a| a.id).collect()
    }

    #[test]
    fn empty_criteria_keeps_everything() {
        let catalog = Catalog::builtin();
        let result = apply(catalog.get_all(), &FilterCriteria::default());
        assert_eq!(result, catalog.get_all());
    }

    #[test]
    fn name_search_ignores_case() {
        let catalog = Catalog::builtin();
        let criteria = FilterCriteria {
            search_term: "александр".to_string(),
            ..FilterCriteria::default()
        };

        let result = apply(catalog.get_all(), &criteria);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn name_search_matches_inner_substring() {
        let catalog = Catalog::builtin();
        let criteria = FilterCriteria {
            search_term: "ОВ".to_string(),
            ..FilterCriteria::default()
        };

        // Соколов, Волкова, Петров
        assert_eq!(ids(&apply(catalog.get_all(), &criteria)), vec![1, 2, 3]);
    }

    #[test]
    fn unknown_name_yields_empty_result() {
        let catalog = Catalog::builtin();
        let criteria = FilterCriteria {
            search_term: "Zzz".to_string(),
            ..FilterCriteria::default()
        };

        assert!(apply(catalog.get_all(), &criteria).is_empty());
    }

    #[test]
    fn age_thirty_is_in_both_lower_brackets() {
        let thirty = actor(1, "Иван", 30, "5 лет", &["Драма"]);

        for bracket in [AgeBracket::TwentyToThirty, AgeBracket::ThirtyToForty] {
            let criteria = FilterCriteria {
                age: Some(bracket),
                ..FilterCriteria::default()
            };
            assert!(matches_age(&thirty, &criteria), "{bracket}");
        }

        let criteria = FilterCriteria {
            age: Some(AgeBracket::FortyPlus),
            ..FilterCriteria::default()
        };
        assert!(!matches_age(&thirty, &criteria));
    }

    #[test]
    fn experience_tier_boundaries() {
        let three = actor(1, "А", 25, "3 лет", &["Драма"]);
        let ten = actor(2, "Б", 35, "10 лет", &["Драма"]);

        let tier = |tier| FilterCriteria {
            experience: Some(tier),
            ..FilterCriteria::default()
        };

        assert!(matches_experience(&three, &tier(ExperienceTier::Beginner)));
        assert!(!matches_experience(&three, &tier(ExperienceTier::Experienced)));
        assert!(matches_experience(&ten, &tier(ExperienceTier::Experienced)));
        assert!(!matches_experience(&ten, &tier(ExperienceTier::Master)));
    }

    #[test]
    fn malformed_experience_only_passes_when_unset() {
        let vague = actor(1, "В", 40, "много лет", &["Драма"]);

        assert!(matches_experience(&vague, &FilterCriteria::default()));
        for tier in ExperienceTier::ALL {
            let criteria = FilterCriteria {
                experience: Some(tier),
                ..FilterCriteria::default()
            };
            assert!(!matches_experience(&vague, &criteria));
        }
    }

    #[test]
    fn genre_token_matches_labels_case_insensitively() {
        let drama = actor(1, "Г", 30, "5 лет", &["Драма"]);
        let comedy = actor(2, "Д", 30, "5 лет", &["Комедия"]);
        let criteria = FilterCriteria {
            genre: Some(GenreToken::Drama),
            ..FilterCriteria::default()
        };

        assert_eq!(ids(&apply(&[drama, comedy], &criteria)), vec![1]);
    }

    #[test]
    fn combined_filters_pick_single_actor() {
        let catalog = Catalog::builtin();
        let criteria = FilterCriteria {
            search_term: String::new(),
            age: Some(AgeBracket::ThirtyToForty),
            experience: Some(ExperienceTier::Experienced),
            genre: Some(GenreToken::Drama),
        };

        let result = apply(catalog.get_all(), &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].age, 32);
        assert_eq!(result[0].experience, "8 лет");
    }

    #[test]
    fn preserves_catalog_order() {
        let actors = vec![
            actor(9, "Яна", 25, "2 года", &["Комедия"]),
            actor(3, "Анна", 26, "1 год", &["Комедия"]),
            actor(5, "Инна", 50, "20 лет", &["Драма"]),
            actor(1, "Жанна", 27, "3 года", &["Комедия", "Драма"]),
        ];
        let criteria = FilterCriteria {
            search_term: "нна".to_string(),
            age: Some(AgeBracket::TwentyToThirty),
            ..FilterCriteria::default()
        };

        assert_eq!(ids(&apply(&actors, &criteria)), vec![3, 1]);
    }

    #[test]
    fn matches_agrees_with_apply() {
        let catalog = Catalog::builtin();
        let criteria = FilterCriteria {
            search_term: "в".to_string(),
            age: Some(AgeBracket::TwentyToThirty),
            ..FilterCriteria::default()
        };

        let expected: Vec<u32> = catalog
            .get_all()
            .iter()
            .filter(|a| matches(a, &criteria))
            .map(|a| a.id)
            .collect();
        assert_eq!(ids(&apply(catalog.get_all(), &criteria)), expected);
        assert_eq!(expected, vec![2]);
    }
}
