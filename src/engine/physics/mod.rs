// Physics system: kinematic vertical integration and surface queries

pub mod body;
pub mod collision;

pub use body::{Integrator, KinematicBody};
pub use collision::find_landing;
