//! Filter criteria and the enumerated filter options.
//!
//! [`FilterCriteria`] is the user's current query: a free-text name search and
//! three optional selections. `None` on a selection means "no constraint".
//! Each option enum carries the token used in configuration and tests, a
//! menu label, and the membership rule for its clause.

use std::fmt;
use std::str::FromStr;

use super::error::CastlistError;

/// Age bracket selection.
///
/// Brackets share their boundaries: an actor aged exactly 30 belongs to both
/// [`AgeBracket::TwentyToThirty`] and [`AgeBracket::ThirtyToForty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    /// `20-30`: 20 to 30 inclusive.
    TwentyToThirty,
    /// `30-40`: 30 to 40 inclusive.
    ThirtyToForty,
    /// `40+`: 40 and older.
    FortyPlus,
}

impl AgeBracket {
    /// All brackets in menu order.
    pub const ALL: [Self; 3] = [Self::TwentyToThirty, Self::ThirtyToForty, Self::FortyPlus];

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::TwentyToThirty => "20-30",
            Self::ThirtyToForty => "30-40",
            Self::FortyPlus => "40+",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TwentyToThirty => "20-30 лет",
            Self::ThirtyToForty => "30-40 лет",
            Self::FortyPlus => "40+ лет",
        }
    }

    /// Returns `true` if `age` falls inside this bracket.
    #[must_use]
    pub const fn contains(self, age: u32) -> bool {
        match self {
            Self::TwentyToThirty => age >= 20 && age <= 30,
            Self::ThirtyToForty => age >= 30 && age <= 40,
            Self::FortyPlus => age >= 40,
        }
    }
}

/// Experience tier selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceTier {
    /// `начинающий`: up to 3 years.
    Beginner,
    /// `опытный`: more than 3, up to 10 years.
    Experienced,
    /// `мастер`: more than 10 years.
    Master,
}

impl ExperienceTier {
    /// All tiers in menu order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Experienced, Self::Master];

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Beginner => "начинающий",
            Self::Experienced => "опытный",
            Self::Master => "мастер",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Начинающий (до 3 лет)",
            Self::Experienced => "Опытный (3-10 лет)",
            Self::Master => "Мастер (10+ лет)",
        }
    }

    /// Returns `true` if `years` falls inside this tier.
    ///
    /// `None` (an experience string without a numeric prefix) belongs to no tier.
    #[must_use]
    pub const fn contains(self, years: Option<i64>) -> bool {
        let Some(years) = years else {
            return false;
        };
        match self {
            Self::Beginner => years <= 3,
            Self::Experienced => years > 3 && years <= 10,
            Self::Master => years > 10,
        }
    }
}

/// Genre selection.
///
/// The token is lowercase; matching against an actor's genre labels is a
/// case-insensitive substring test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenreToken {
    Drama,
    Comedy,
    Action,
    Thriller,
    Romance,
}

impl GenreToken {
    /// All genres in menu order.
    pub const ALL: [Self; 5] = [
        Self::Drama,
        Self::Comedy,
        Self::Action,
        Self::Thriller,
        Self::Romance,
    ];

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Drama => "драма",
            Self::Comedy => "комедия",
            Self::Action => "боевик",
            Self::Thriller => "триллер",
            Self::Romance => "романтика",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Drama => "Драма",
            Self::Comedy => "Комедия",
            Self::Action => "Боевик",
            Self::Thriller => "Триллер",
            Self::Romance => "Романтика",
        }
    }

    /// Returns `true` if any label in `genres` contains this token, ignoring case.
    #[must_use]
    pub fn matches_any(self, genres: &[String]) -> bool {
        let token = self.as_token();
        genres.iter().any(|genre| genre.to_lowercase().contains(token))
    }
}

macro_rules! token_conversions {
    ($ty:ident, $what:literal) => {
        impl FromStr for $ty {
            type Err = CastlistError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                Self::ALL
                    .into_iter()
                    .find(|option| option.as_token() == needle)
                    .ok_or_else(|| CastlistError::Config(format!("unknown {} '{s}'", $what)))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_token())
            }
        }
    };
}

token_conversions!(AgeBracket, "age bracket");
token_conversions!(ExperienceTier, "experience tier");
token_conversions!(GenreToken, "genre");

/// The user's current query.
///
/// Created empty at session start, edited control by control, and reset to
/// empty on an explicit reset. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free-text name search; empty matches every name.
    pub search_term: String,
    pub age: Option<AgeBracket>,
    pub experience: Option<ExperienceTier>,
    pub genre: Option<GenreToken>,
}

impl FilterCriteria {
    /// Returns `true` when no clause constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of clauses that currently constrain the result.
    #[must_use]
    pub fn active_count(&self) -> usize {
        usize::from(!self.search_term.is_empty())
            + usize::from(self.age.is_some())
            + usize::from(self.experience.is_some())
            + usize::from(self.genre.is_some())
    }
}
