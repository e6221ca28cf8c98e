//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`, sized to the pane
//! 2. **Layout Rendering**: the active [`Layout`](crate::ui::layout::Layout)
//!    turns the view model into a frame
//!
//! # Example
//!
//! ```rust
//! use castlist::app::AppState;
//! use castlist::catalog::Catalog;
//! use castlist::ui::{render_to_string, LayoutKind, Theme};
//!
//! let state = AppState::new(Catalog::builtin(), Theme::default(), LayoutKind::Compact);
//! let frame = render_to_string(&state, 24, 80);
//! assert!(frame.contains("ACTORS CATALOG"));
//! ```

use crate::app::AppState;

/// Renders the plugin UI to stdout.
///
/// # Output
///
/// Prints ANSI-styled output using `print!`. Does not clear the screen;
/// Zellij hands the plugin a fresh pane for every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders one frame with the active layout and theme.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows);
    state.layout.layout().render(&viewmodel, &state.theme, rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ui::helpers::frame_lines;
    use crate::ui::{LayoutKind, Theme};

    #[test]
    fn both_layouts_render_with_both_themes() {
        for layout in [LayoutKind::Poster, LayoutKind::Compact] {
            for name in Theme::BUILTIN {
                let theme = Theme::from_name(name).unwrap();
                let state = AppState::new(Catalog::builtin(), theme, layout);
                let text = frame_lines(&render_to_string(&state, 40, 90)).join("\n");

                assert!(text.contains("Михаил Петров"), "{layout} / {name}");
                assert!(text.contains("Найдено: 3 из 3"), "{layout} / {name}");
            }
        }
    }

    #[test]
    fn no_match_shows_empty_state() {
        let mut state = AppState::new(Catalog::builtin(), Theme::default(), LayoutKind::Poster);
        state.update_session(|s, c| s.edit_search_text("Zzz").search(c));

        let text = frame_lines(&render_to_string(&state, 30, 80)).join("\n");
        assert!(text.contains("Актёры не найдены"));
        assert!(text.contains("Найдено: 0 из 3"));
    }

    #[test]
    fn tiny_pane_does_not_panic() {
        let state = AppState::new(Catalog::builtin(), Theme::default(), LayoutKind::Poster);
        for (rows, cols) in [(0, 0), (1, 1), (3, 5), (12, 8)] {
            let _ = render_to_string(&state, rows, cols);
        }
    }
}
