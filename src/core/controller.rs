use super::free_fly::MoveKey;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyF,
    KeyP,
    KeyR,
    Space,
    Shift,
    ArrowLeft,
    ArrowRight,
    MouseLeft,
    MouseMiddle,
    MouseRight,
}

impl Button {
    /// Free-fly key bound to this button, if any
    pub fn move_key(self) -> Option<MoveKey> {
        match self {
            Button::KeyW => Some(MoveKey::Forward),
            Button::KeyS => Some(MoveKey::Backward),
            Button::KeyA => Some(MoveKey::Left),
            Button::KeyD => Some(MoveKey::Right),
            Button::Space => Some(MoveKey::Up),
            Button::Shift => Some(MoveKey::Down),
            _ => None,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn movement_buttons_map_to_all_six_keys() {
        let keys: HashSet<_> = [
            Button::KeyW,
            Button::KeyA,
            Button::KeyS,
            Button::KeyD,
            Button::Space,
            Button::Shift,
        ]
        .iter()
        .filter_map(|b| b.move_key())
        .collect();
        assert_eq!(keys.len(), 6);
    }

    #[test]
    fn command_buttons_do_not_move() {
        for button in [Button::KeyF, Button::KeyP, Button::KeyR, Button::ArrowLeft, Button::MouseLeft] {
            assert_eq!(button.move_key(), None);
        }
    }

    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::MouseRight, Button::Space],
        };

        assert!(controller.is_down(Button::MouseRight));
        assert!(controller.is_down(Button::Space));
        assert!(!controller.is_down(Button::MouseLeft));
    }
}
