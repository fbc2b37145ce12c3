// Game logic: the runner simulation
//
// - `config`: tuning constants and validation
// - `characters`: the runner body, dimensions and sprite animation
// - `world`: scrolling platforms, obstacles, coins and their spawner
// - `collision`: landing, obstacle and coin tests
// - `state`: run state machine and score
// - `session`: owns everything and runs the per-frame tick

pub mod characters;
pub mod collision;
pub mod config;
pub mod session;
pub mod state;
pub mod viewport;
pub mod world;

pub use config::GameConfig;
pub use session::{Session, TickReport};
pub use state::GameState;
pub use viewport::Viewport;
