// Input handling system
//
// Translates keyboard, mouse and touch events into game actions and hands
// them to the simulation once per tick.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `buffer`: Per-tick queue of edge-triggered requests
// - `config`: Input configuration and remapping
// - `manager`: Converts winit events into queued actions
//
// ## Usage Example
//
// ```rust
// use engine::input::InputManager;
//
// let mut input_manager = InputManager::new();
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Once per frame, hand the queued requests to the simulation
// let input = input_manager.take_tick_input();
// session.tick(input, viewport, now);
// ```

pub mod action;
pub mod buffer;
pub mod config;
pub mod manager;

pub use buffer::TickInput;
pub use manager::InputManager;
