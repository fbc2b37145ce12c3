// Input manager - translates window events into queued actions

use super::action::InputSource;
use super::buffer::{InputQueue, TickInput};
use super::config::InputConfig;
use winit::event::{ElementState, KeyEvent, MouseButton, TouchPhase};
use winit::keyboard::PhysicalKey;

/// Main input manager for the single local player
#[derive(Debug, Default)]
pub struct InputManager {
    config: InputConfig,
    queue: InputQueue,
}

impl InputManager {
    /// Create an input manager with default bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Key repeats aren't new presses
        if event.repeat {
            return;
        }
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_source(InputSource::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.process_source(InputSource::mouse(button), state);
    }

    /// Process a touch event; a touch start counts as a primary click
    pub fn process_touch(&mut self, phase: TouchPhase) {
        if phase == TouchPhase::Started {
            self.process_source(InputSource::mouse(MouseButton::Left), ElementState::Pressed);
        }
    }

    /// Queue the action bound to `source` if it was just pressed
    pub fn process_source(&mut self, source: InputSource, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }
        if let Some(action) = self.config.get_action(source) {
            log::trace!("{:?} -> {:?}", source, action);
            self.queue.push(action);
        }
    }

    /// Take the input for the next tick
    pub fn take_tick_input(&mut self) -> TickInput {
        self.queue.drain()
    }
}
