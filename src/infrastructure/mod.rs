//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host` inside the sandbox; the
//! helpers here translate user-facing paths onto that mount.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file_path};
