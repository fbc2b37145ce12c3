// Game action definitions and mappings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Jump (or restart after game over, for single-button play)
    Jump,
    /// Toggle pause
    Pause,
    /// Start a new run after game over
    Restart,
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Jump: tap/click or the usual keys
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::ArrowUp), Action::Jump),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::mouse(MouseButton::Left), Action::Jump),
        // Meta
        (InputSource::key(KeyCode::KeyP), Action::Pause),
        (InputSource::key(KeyCode::Escape), Action::Pause),
        (InputSource::key(KeyCode::KeyR), Action::Restart),
        (InputSource::key(KeyCode::Enter), Action::Restart),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::Space);
        assert_eq!(source, InputSource::Keyboard(KeyCode::Space));
    }

    #[test]
    fn test_input_source_mouse_creation() {
        let source = InputSource::mouse(MouseButton::Left);
        assert_eq!(source, InputSource::Mouse(MouseButton::Left));
    }

    #[test]
    fn test_every_action_has_a_default() {
        let bindings = default_bindings();
        for action in [Action::Jump, Action::Pause, Action::Restart] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_click_jumps() {
        let bindings = default_bindings();
        assert!(bindings
            .iter()
            .any(|(s, a)| *s == InputSource::mouse(MouseButton::Left) && *a == Action::Jump));
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
