//! User interface rendering layer.
//!
//! Transforms application state into ANSI-styled frames. The page chrome is
//! shared; the result list is drawn by one of two swappable layouts, and any
//! layout can be combined with any theme.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → Layout::render → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering entry points
//! - [`layout`]: Poster and compact presentations of the result list
//! - [`components`]: Page chrome (header, filter bar, summary, footer)
//! - [`helpers`]: Cursor positioning, truncation and match highlighting
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{CompactLayout, Layout, LayoutKind, PosterLayout};
pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{
    ActorCard, ControlInfo, EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, SummaryInfo,
    UIViewModel,
};
