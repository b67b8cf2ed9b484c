use std::collections::HashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};
use crate::session::ViewerAction;

const PIXELS_PER_SCROLL_LINE: f32 = 50.0;
const MIDDLE_DRAG_DOLLY: f32 = 0.05; // dolly steps per pixel

/// Pointer drag accumulated since the last frame, already sorted by gesture
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerDrag {
    /// Right button drag, pixels
    pub rotate: (f32, f32),
    /// Left button drag, pixels
    pub pan: (f32, f32),
    /// Wheel lines plus middle drag, positive toward the pivot
    pub dolly: f32,
}

impl PointerDrag {
    pub fn is_empty(&self) -> bool {
        *self == PointerDrag::default()
    }
}

/// Adapter that bridges Winit events to the Controller trait and to viewer actions
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Current cursor position (relative to window)
    mouse_position: Option<(f32, f32)>,
    drag: PointerDrag,
}

impl WinitController {
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            mouse_position: None,
            drag: PointerDrag::default(),
        }
    }

    /// Update button state from a window event and translate edges into an action
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<ViewerAction> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let button = Self::keycode_to_button(keycode)?;
                match event.state {
                    ElementState::Pressed => {
                        if event.repeat || !self.press(button) {
                            return None;
                        }
                        Self::press_action(button)
                    }
                    ElementState::Released => {
                        self.release(button);
                        button.move_key().map(|key| ViewerAction::Move(key, false))
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = Self::mouse_button_to_button(*button)?;
                match state {
                    ElementState::Pressed => {
                        if self.press(button) && button == Button::MouseLeft {
                            return Some(ViewerAction::RetryCapture);
                        }
                    }
                    ElementState::Released => self.release(button),
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                let new_pos = (position.x as f32, position.y as f32);
                if let Some(old_pos) = self.mouse_position {
                    self.accumulate_drag(new_pos.0 - old_pos.0, new_pos.1 - old_pos.1);
                }
                self.mouse_position = Some(new_pos);
                None
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.drag.dolly += match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
                None
            }
            WindowEvent::Focused(false) => {
                self.clear();
                Some(ViewerAction::FocusLost)
            }
            _ => None,
        }
    }

    /// Drag gathered since the previous call
    pub fn take_drag(&mut self) -> PointerDrag {
        std::mem::take(&mut self.drag)
    }

    pub fn mouse_position(&self) -> Option<(f32, f32)> {
        self.mouse_position
    }

    fn accumulate_drag(&mut self, dx: f32, dy: f32) {
        if self.is_down(Button::MouseRight) {
            self.drag.rotate.0 += dx;
            self.drag.rotate.1 += dy;
        }
        if self.is_down(Button::MouseLeft) {
            self.drag.pan.0 += dx;
            self.drag.pan.1 += dy;
        }
        if self.is_down(Button::MouseMiddle) {
            self.drag.dolly -= dy * MIDDLE_DRAG_DOLLY;
        }
    }

    /// Returns false when the button was already down
    fn press(&mut self, button: Button) -> bool {
        self.pressed_keys.insert(button)
    }

    fn release(&mut self, button: Button) {
        self.pressed_keys.remove(&button);
    }

    fn clear(&mut self) {
        self.pressed_keys.clear();
        self.drag = PointerDrag::default();
    }

    fn press_action(button: Button) -> Option<ViewerAction> {
        if let Some(key) = button.move_key() {
            return Some(ViewerAction::Move(key, true));
        }
        match button {
            Button::KeyF => Some(ViewerAction::ToggleFreeCamera),
            Button::KeyR => Some(ViewerAction::ResetView),
            Button::KeyP => Some(ViewerAction::TogglePlay),
            Button::ArrowLeft => Some(ViewerAction::StepBackward),
            Button::ArrowRight => Some(ViewerAction::StepForward),
            _ => None,
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyF => Some(Button::KeyF),
            KeyCode::KeyP => Some(Button::KeyP),
            KeyCode::KeyR => Some(Button::KeyR),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::ArrowLeft => Some(Button::ArrowLeft),
            KeyCode::ArrowRight => Some(Button::ArrowRight),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            MouseButton::Middle => Some(Button::MouseMiddle),
            MouseButton::Right => Some(Button::MouseRight),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
