//! Key classification shared by the screens.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Terminal key predicates.
pub struct EventHandler;

impl EventHandler {
    /// Ctrl+C or Ctrl+Q.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'q'))
    }

    /// Enter.
    #[must_use]
    pub fn is_submit_event(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter)
    }

    /// Esc without modifiers.
    #[must_use]
    pub fn is_dismiss_event(key: &KeyEvent) -> bool {
        key.code == KeyCode::Esc && key.modifiers == KeyModifiers::NONE
    }

    /// Tab moves focus forward, Shift+Tab backward.
    #[must_use]
    pub fn focus_step(key: &KeyEvent) -> Option<FocusStep> {
        match key.code {
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(FocusStep::Previous)
            }
            KeyCode::Tab => Some(FocusStep::Next),
            KeyCode::BackTab => Some(FocusStep::Previous),
            _ => None,
        }
    }

    /// Release and repeat events are reported on some platforms; only
    /// presses drive the UI.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }
}

/// Direction of a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusStep {
    /// Forward.
    Next,
    /// Backward.
    Previous,
}
