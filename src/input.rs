use gilrs::{Button, Gilrs};
use log::warn;
use macroquad::prelude::*;

/// Everything the frame loop reads from the outside world, polled once at the
/// top of each frame. Key and button fields are edge-triggered.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub pointer: Vec2,
    pub pointer_down: bool,
    pub pointer_pressed: bool,
    /// Wheel notches this frame, positive away from the user.
    pub wheel: f32,
    pub back: bool,
    pub show_credits: bool,
    pub return_to_menu: bool,
    pub quit_requested: bool,
}

impl FrameInput {
    /// Pointer resting at `pointer` with the button held.
    pub fn holding(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_down: true,
            ..Default::default()
        }
    }

    /// Pointer at `pointer`, button just went down.
    pub fn click(pointer: Vec2) -> Self {
        Self {
            pointer,
            pointer_down: true,
            pointer_pressed: true,
            ..Default::default()
        }
    }
}

pub struct InputState {
    back_key: KeyCode,
    gilrs: Option<Gilrs>,
}

impl InputState {
    pub fn new(back_key_name: &str) -> Self {
        let back_key = key_from_name(back_key_name).unwrap_or_else(|| {
            warn!("Unknown pause key '{back_key_name}', using ESCAPE");
            KeyCode::Escape
        });

        let gilrs = match Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(e) => {
                warn!("Gamepad support unavailable: {e}");
                None
            }
        };

        Self { back_key, gilrs }
    }

    pub fn poll(&mut self) -> FrameInput {
        let mut frame = FrameInput::default();
        self.update_keyboard_and_mouse(&mut frame);
        self.update_controller(&mut frame);
        frame
    }

    fn update_keyboard_and_mouse(&self, frame: &mut FrameInput) {
        let (x, y) = mouse_position();
        frame.pointer = vec2(x, y);
        frame.pointer_down = is_mouse_button_down(MouseButton::Left);
        frame.pointer_pressed = is_mouse_button_pressed(MouseButton::Left);
        // backends disagree on wheel units, only the direction is used
        let (_, wheel_y) = mouse_wheel();
        frame.wheel = if wheel_y == 0.0 { 0.0 } else { wheel_y.signum() };
        frame.back = is_key_pressed(self.back_key);
        frame.show_credits = is_key_pressed(KeyCode::C);
        frame.return_to_menu = is_key_pressed(KeyCode::Q);
        frame.quit_requested = is_quit_requested();
    }

    fn update_controller(&mut self, frame: &mut FrameInput) {
        let Some(gilrs) = self.gilrs.as_mut() else { return };
        while let Some(ev) = gilrs.next_event() {
            if let gilrs::EventType::ButtonPressed(Button::East, _) = ev.event {
                frame.back = true;
            }
        }
    }
}

/// Maps a symbolic key name as stored in settings (e.g. `"ESCAPE"`, `"P"`)
/// to a key code.
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    let key = match name.trim().to_ascii_uppercase().as_str() {
        "ESCAPE" | "ESC" => KeyCode::Escape,
        "BACKSPACE" => KeyCode::Backspace,
        "SPACE" => KeyCode::Space,
        "TAB" => KeyCode::Tab,
        "ENTER" | "RETURN" => KeyCode::Enter,
        "PAUSE" => KeyCode::Pause,
        "A" => KeyCode::A,
        "B" => KeyCode::B,
        "C" => KeyCode::C,
        "D" => KeyCode::D,
        "E" => KeyCode::E,
        "F" => KeyCode::F,
        "G" => KeyCode::G,
        "H" => KeyCode::H,
        "I" => KeyCode::I,
        "J" => KeyCode::J,
        "K" => KeyCode::K,
        "L" => KeyCode::L,
        "M" => KeyCode::M,
        "N" => KeyCode::N,
        "O" => KeyCode::O,
        "P" => KeyCode::P,
        "Q" => KeyCode::Q,
        "R" => KeyCode::R,
        "S" => KeyCode::S,
        "T" => KeyCode::T,
        "U" => KeyCode::U,
        "V" => KeyCode::V,
        "W" => KeyCode::W,
        "X" => KeyCode::X,
        "Y" => KeyCode::Y,
        "Z" => KeyCode::Z,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        "F3" => KeyCode::F3,
        "F4" => KeyCode::F4,
        "F5" => KeyCode::F5,
        "F6" => KeyCode::F6,
        "F7" => KeyCode::F7,
        "F8" => KeyCode::F8,
        "F9" => KeyCode::F9,
        "F10" => KeyCode::F10,
        "F11" => KeyCode::F11,
        "F12" => KeyCode::F12,
        _ => return None,
    };
    Some(key)
}
