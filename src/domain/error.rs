//! Error types for the castlist plugin.
//!
//! Filtering itself never fails; errors only arise while loading the catalog,
//! themes or configuration at start-up. All variants are built with `thiserror`.

use thiserror::Error;

/// The main error type for castlist operations.
///
/// # Examples
///
/// ```
/// use castlist::CastlistError;
///
/// fn validate() -> Result<(), CastlistError> {
///     Err(CastlistError::Catalog("duplicate actor id 7".to_string()))
/// }
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CastlistError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data could not be parsed or violates a catalog invariant
    /// (for example duplicate actor ids).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration value is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for castlist operations.
pub type Result<T> = std::result::Result<T, CastlistError>;
