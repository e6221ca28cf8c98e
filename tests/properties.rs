//! Algebraic laws of the filter engine over generated catalogs.

use castlist::domain::{AgeBracket, ExperienceTier, GenreToken};
use castlist::filter::apply;
use castlist::{Actor, FilterCriteria};
use proptest::prelude::*;

const NAMES: [&str; 6] = [
    "Александр Соколов",
    "Екатерина Волкова",
    "Михаил Петров",
    "Анна Орлова",
    "Иван Сидоров",
    "Ольга Смирнова",
];

const GENRES: [&str; 7] = [
    "Драма", "Комедия", "Боевик", "Триллер", "Романтика", "Историческое кино", "Мюзикл",
];

fn arb_actor() -> impl Strategy<Value = Actor> {
    (
        0..NAMES.len(),
        15u32..80,
        prop_oneof![
            (0i64..40).prop_map(|y| format!("{y} лет")),
            Just("много лет".to_string()),
            Just(String::new()),
        ],
        proptest::sample::subsequence(GENRES.to_vec(), 0..=3),
    )
        .prop_map(|(name, age, experience, genres)| Actor {
            id: 0,
            name: NAMES[name].to_string(),
            age,
            experience,
            genres: genres.into_iter().map(String::from).collect(),
            image: String::new(),
            filmography: vec![],
            rating: 4.0,
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<Actor>> {
    prop::collection::vec(arb_actor(), 0..12).prop_map(|mut actors| {
        for (id, actor) in actors.iter_mut().enumerate() {
            actor.id = u32::try_from(id).unwrap_or(u32::MAX);
        }
        actors
    })
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        prop_oneof![
            Just(String::new()),
            Just("ов".to_string()),
            Just("АННА".to_string()),
            Just("zzz".to_string()),
        ],
        proptest::option::of(proptest::sample::select(AgeBracket::ALL.to_vec())),
        proptest::option::of(proptest::sample::select(ExperienceTier::ALL.to_vec())),
        proptest::option::of(proptest::sample::select(GenreToken::ALL.to_vec())),
    )
        .prop_map(|(search_term, age, experience, genre)| FilterCriteria {
            search_term,
            age,
            experience,
            genre,
        })
}

/// Returns true when `sub` appears in `all` in the same relative order.
fn is_ordered_subsequence(sub: &[Actor], all: &[Actor]) -> bool {
    let mut rest = all.iter();
    sub.iter().all(|wanted| rest.any(|candidate| candidate.id == wanted.id))
}

proptest! {
    #[test]
    fn result_is_ordered_subsequence(catalog in arb_catalog(), criteria in arb_criteria()) {
        let result = apply(&catalog, &criteria);
        prop_assert!(is_ordered_subsequence(&result, &catalog));
    }

    #[test]
    fn empty_criteria_is_identity(catalog in arb_catalog()) {
        prop_assert_eq!(apply(&catalog, &FilterCriteria::default()), catalog);
    }

    #[test]
    fn adding_a_constraint_never_grows_result(
        catalog in arb_catalog(),
        criteria in arb_criteria(),
        extra in arb_criteria(),
    ) {
        let base = apply(&catalog, &criteria);

        let narrowed = [
            FilterCriteria { age: criteria.age.or(extra.age), ..criteria.clone() },
            FilterCriteria { experience: criteria.experience.or(extra.experience), ..criteria.clone() },
            FilterCriteria { genre: criteria.genre.or(extra.genre), ..criteria.clone() },
            FilterCriteria {
                search_term: if criteria.search_term.is_empty() {
                    "ов".to_string()
                } else {
                    criteria.search_term.clone()
                },
                ..criteria.clone()
            },
        ];
        for tighter in &narrowed {
            let result = apply(&catalog, tighter);
            prop_assert!(result.len() <= base.len());
            prop_assert!(is_ordered_subsequence(&result, &base));
        }
    }

    #[test]
    fn filtering_is_idempotent(catalog in arb_catalog(), criteria in arb_criteria()) {
        let once = apply(&catalog, &criteria);
        prop_assert_eq!(apply(&once, &criteria), once.clone());
    }
}
