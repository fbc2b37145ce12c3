// Character system
//
// - Character body and derived sprite/hit boxes
// - Character dimensions
// - Sprite animation clock

pub mod animation;
pub mod character;
pub mod stats;

// Re-export commonly used types
pub use animation::{AnimationClock, AnimationFrameData};
pub use character::Character;
pub use stats::CharacterStats;
