use raylib::prelude::*;

use crate::deck::{ControlId, Deck, Layout};
use crate::input::{InputEvent, Key};

pub fn map_key(key: KeyboardKey) -> Key {
    match key {
        KeyboardKey::KEY_RIGHT => Key::ArrowRight,
        KeyboardKey::KEY_LEFT => Key::ArrowLeft,
        KeyboardKey::KEY_SPACE => Key::Space,
        KeyboardKey::KEY_HOME => Key::Home,
        KeyboardKey::KEY_END => Key::End,
        KeyboardKey::KEY_PAGE_UP => Key::PageUp,
        KeyboardKey::KEY_PAGE_DOWN => Key::PageDown,
        _ => Key::Other,
    }
}

/// Collects the window's input for one frame as presentation events.
///
/// The mouse stands in for touch: a press outside the controls starts a
/// drag gesture and the release ends it.
pub struct WindowInput {
    focused: bool,
}

impl WindowInput {
    pub fn new(focused: bool) -> Self {
        Self { focused }
    }

    pub fn poll(&mut self, rl: &mut RaylibHandle, deck: &Deck) -> Vec<InputEvent> {
        let mut events = Vec::new();

        while let Some(key) = rl.get_key_pressed() {
            events.push(InputEvent::KeyDown(map_key(key)));
        }

        let mouse = rl.get_mouse_position();
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            events.push(InputEvent::PointerDown);
            let layout = Layout::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            events.push(match deck.control_at(mouse.x, mouse.y, &layout) {
                Some(ControlId::Previous) => InputEvent::PreviousActivated,
                Some(ControlId::Next) => InputEvent::NextActivated,
                None => InputEvent::TouchStart { x: mouse.x, y: mouse.y },
            });
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            events.push(InputEvent::TouchEnd { x: mouse.x, y: mouse.y });
        }

        if rl.is_window_resized() {
            events.push(InputEvent::Resize);
        }

        let focused = rl.is_window_focused();
        if focused != self.focused {
            self.focused = focused;
            events.push(InputEvent::VisibilityChange { hidden: !focused });
        }

        events
    }
}
