//! Actor domain model.
//!
//! An [`Actor`] is one immutable profile in the catalog. Only `name`, `age`,
//! `experience` and `genres` take part in filtering; the remaining fields are
//! carried for display.

use serde::{Deserialize, Serialize};

/// A single actor profile.
///
/// # Fields
///
/// - `id`: Unique identifier within a catalog
/// - `name`: Display name, searched case-insensitively
/// - `age`: Age in years, used for bracket membership
/// - `experience`: Free-form duration such as `"8 лет"`; its leading integer is the number of years
/// - `genres`: Genre labels in display order
/// - `image`: Opaque asset path, never read by the core
/// - `filmography`: Titles in display order
/// - `rating`: Score, conventionally in `[0, 5]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub experience: String,
    pub genres: Vec<String>,
    pub image: String,
    pub filmography: Vec<String>,
    pub rating: f32,
}

impl Actor {
    /// Parses the number of years of experience from the leading integer of
    /// `experience`.
    ///
    /// Leading whitespace is skipped and an optional sign is accepted. Returns
    /// `None` when the string does not start with a number.
    ///
    /// # Examples
    ///
    /// ```
    /// use castlist::domain::actor::parse_leading_int;
    ///
    /// assert_eq!(parse_leading_int("8 лет"), Some(8));
    /// assert_eq!(parse_leading_int("  25 лет"), Some(25));
    /// assert_eq!(parse_leading_int("много лет"), None);
    /// ```
    #[must_use]
    pub fn experience_years(&self) -> Option<i64> {
        parse_leading_int(&self.experience)
    }
}

/// Parses the integer prefix of `text`.
///
/// Accepts leading whitespace, an optional `+` or `-`, then ASCII digits up to
/// the first non-digit. Values too large for `i64` saturate.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude = digits[..digit_count]
        .bytes()
        .fold(0_i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor_with_experience(experience: &str) -> Actor {
        Actor {
            id: 1,
            name: "Тест".to_string(),
            age: 30,
            experience: experience.to_string(),
            genres: vec!["Драма".to_string()],
            image: String::new(),
            filmography: vec![],
            rating: 4.0,
        }
    }

    #[test]
    fn parses_years_prefix() {
        assert_eq!(actor_with_experience("8 лет").experience_years(), Some(8));
        assert_eq!(actor_with_experience("25 лет").experience_years(), Some(25));
        assert_eq!(actor_with_experience("3").experience_years(), Some(3));
    }

    #[test]
    fn parses_signs_and_whitespace() {
        assert_eq!(parse_leading_int("\t 12 years"), Some(12));
        assert_eq!(parse_leading_int("-2 года"), Some(-2));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("10.5 лет"), Some(10));
    }

    #[test]
    fn non_numeric_prefix_is_none() {
        assert_eq!(actor_with_experience("").experience_years(), None);
        assert_eq!(actor_with_experience("лет 8").experience_years(), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("- 5"), None);
    }

    #[test]
    fn huge_numbers_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999999 лет"), Some(i64::MAX));
    }
}
