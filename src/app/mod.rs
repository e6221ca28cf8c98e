//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (`main.rs`) and the catalog,
//! filter and UI layers.
//!
//! # Architecture
//!
//! ```text
//! Key Input → Events → Event Handler → Session Transitions → Actions → Side Effects
//!                                            │
//!                                            └→ Filter Engine (Search only)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Keyboard focus state
//! - [`session`]: Criteria and displayed result as an immutable value
//! - [`state`]: Central application state and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::Focus;
pub use session::Session;
pub use state::AppState;
