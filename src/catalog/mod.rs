//! Catalog store: the fixed, read-only list of actors.
//!
//! A [`Catalog`] is built once at plugin start, either from the bundled sample
//! (`catalogs/sample.toml`) or from a user-supplied TOML file, and is never
//! mutated afterwards. There is no create, update or delete path.
//!
//! # File Format
//!
//! ```toml
//! version = 1
//!
//! [[actors]]
//! id = 1
//! name = "Александр Соколов"
//! age = 32
//! experience = "8 лет"
//! genres = ["Драма", "Триллер", "Боевик"]
//! image = "/img/sokolov.jpg"
//! filmography = ["Последний герой", "Тени прошлого", "Код доступа"]
//! rating = 4.8
//! ```

use crate::domain::error::{CastlistError, Result};
use crate::domain::Actor;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

const SAMPLE_CATALOG: &str = include_str!("../../catalogs/sample.toml");

/// On-disk catalog container.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Format version, reserved for future migrations.
    #[serde(default = "default_version")]
    #[allow(dead_code)]
    version: u32,

    #[serde(default)]
    actors: Vec<Actor>,
}

const fn default_version() -> u32 {
    1
}

/// Immutable, ordered collection of actors.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    actors: Vec<Actor>,
}

impl Catalog {
    /// Creates a catalog from actors, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CastlistError::Catalog`] if two actors share an id.
    pub fn new(actors: Vec<Actor>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(actors.len());
        for actor in &actors {
            if !seen.insert(actor.id) {
                return Err(CastlistError::Catalog(format!(
                    "duplicate actor id {}",
                    actor.id
                )));
            }
        }

        Ok(Self { actors })
    }

    /// The bundled three-actor sample catalog.
    ///
    /// # Panics
    ///
    /// Panics if the bundled catalog fails to parse (should never occur).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml_str(SAMPLE_CATALOG).expect("bundled sample catalog should always parse")
    }

    /// Parses a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CastlistError::Catalog`] on malformed TOML, missing fields or
    /// duplicate ids.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| CastlistError::Catalog(format!("failed to parse catalog TOML: {e}")))?;
        Self::new(file.actors)
    }

    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CastlistError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Catalog::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading catalog file");

        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;

        tracing::debug!(actor_count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Every actor, in catalog order.
    #[must_use]
    pub fn get_all(&self) -> &[Actor] {
        &self.actors
    }

    /// Looks up an actor by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Actor> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
