//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the castlist library and
//! the Zellij plugin system: it translates key presses into library events,
//! executes the actions the library returns and forwards rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Map keys to events, delegate to [`handle_event`]
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Tab` / `Shift+Tab`: Next / previous control
//! - `Enter`: Search
//! - `Ctrl+r`: Reset every filter
//! - `Ctrl+n` / `Ctrl+p`: Next / previous actor
//! - `Left` / `Right`: Previous / next option of the focused filter
//! - `Backspace`: Delete a search character, or clear the focused filter
//!
//! In the search field every other character is typed. Elsewhere:
//! - `j`/`Down`, `k`/`Up`: Next / previous actor
//! - `/`: Back to the search field
//! - `v`: Switch between poster and compact layout
//! - `q`: Close the plugin
//! - `Esc`: Jump to the results, or close the plugin from there

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use castlist::{handle_event, Action, AppState, Config, Event, Focus};

register_plugin!(State);

struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: castlist::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        castlist::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(config = ?config, "parsed configuration");

        self.app = castlist::initialize(&config);

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.handle_permission_result(status);
                return false;
            }
            _ => return false,
        };

        let _guard = tracing::debug_span!("plugin_update", event = ?our_event).entered();

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        castlist::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('r') => Some(Event::Reset),
                _ => None,
            };
        }

        let typing = self.app.focus == Focus::SearchField;

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrev,
            BareKey::Tab => Event::FocusNext,
            BareKey::Enter => Event::Search,
            BareKey::Backspace => Event::Backspace,
            BareKey::Left => Event::OptionPrev,
            BareKey::Right => Event::OptionNext,
            BareKey::Esc if self.app.focus == Focus::Results => Event::CloseFocus,
            BareKey::Esc => Event::FocusResults,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char(c) if typing => Event::Char(c),
            BareKey::Char('j') => Event::KeyDown,
            BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::FocusSearchBar,
            BareKey::Char('v') => Event::ToggleLayout,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn handle_permission_result(&self, status: PermissionStatus) {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                Self::execute_action(&Action::RenamePane {
                    title: self.app.pane_title(),
                });
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - pane title will not be updated");
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                hide_self();
            }
            Action::RenamePane { title } => {
                rename_plugin_pane(get_plugin_ids().plugin_id, title);
            }
        }
    }
}
