//! Domain layer: actors, filter criteria and errors.
//!
//! These types carry no Zellij or rendering concerns and are shared by the
//! catalog, the filter engine and the application layer.
//!
//! # Organization
//!
//! - [`actor`]: The immutable actor profile
//! - [`criteria`]: Filter criteria and the enumerated filter options
//! - [`error`]: Error types and result alias

pub mod actor;
pub mod criteria;
pub mod error;

pub use actor::Actor;
pub use criteria::{AgeBracket, ExperienceTier, FilterCriteria, GenreToken};
pub use error::{CastlistError, Result};
