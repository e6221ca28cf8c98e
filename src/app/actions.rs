//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler stays free of Zellij calls. It returns a `Vec<Action>`
//! and `main.rs` translates each action into the matching plugin API call.
//!
//! # Example
//!
//! ```rust
//! use castlist::app::Action;
//!
//! let actions = vec![Action::RenamePane { title: "Актёры: 1 из 3".to_string() }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Renames the plugin pane, used to show the current result count.
    RenamePane {
        /// New pane title.
        title: String,
    },
}
