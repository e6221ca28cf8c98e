//! Focus state for the catalog page.
//!
//! The page has four input controls and the result list. Exactly one of them
//! holds keyboard focus; focus decides how typed characters, backspace and the
//! left/right keys are interpreted.
//!
//! # Example
//!
//! ```rust
//! use castlist::app::Focus;
//!
//! let focus = Focus::SearchField;
//! assert_eq!(focus.next(), Focus::AgeSelect);
//! assert_eq!(focus.prev(), Focus::Results);
//! ```

/// The control or region that currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Free-text name search. Characters and backspace edit the search term.
    #[default]
    SearchField,

    /// Age bracket select. Left/right cycle the options, backspace clears.
    AgeSelect,

    /// Experience tier select.
    ExperienceSelect,

    /// Genre select.
    GenreSelect,

    /// The displayed result list. Up/down move the selected card.
    Results,
}

impl Focus {
    /// Tab order.
    const ORDER: [Self; 5] = [
        Self::SearchField,
        Self::AgeSelect,
        Self::ExperienceSelect,
        Self::GenreSelect,
        Self::Results,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// The next focus in tab order, wrapping to the search field.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// The previous focus in tab order, wrapping to the result list.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Returns `true` for the three select controls.
    #[must_use]
    pub const fn is_select(self) -> bool {
        matches!(
            self,
            Self::AgeSelect | Self::ExperienceSelect | Self::GenreSelect
        )
    }
}

/// Cycles through `None` followed by every entry of `options`.
///
/// Moving forward from the last option returns to `None`; moving backward from
/// `None` lands on the last option.
#[must_use]
pub fn cycle_option<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }

    // Slot 0 is "unset", slot i + 1 is options[i].
    let slots = options.len() + 1;
    let slot = current
        .and_then(|value| options.iter().position(|o| *o == value))
        .map_or(0, |i| i + 1);

    let next = if forward {
        (slot + 1) % slots
    } else {
        (slot + slots - 1) % slots
    };

    next.checked_sub(1).map(|i| options[i])
}
