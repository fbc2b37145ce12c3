// Per-tick input queue
//
// Window events arrive at arbitrary points between frames. They are queued
// here and handed to the simulation as one snapshot at the tick boundary,
// so nothing mutates game state mid-tick.

use super::action::Action;

/// Edge-triggered requests consumed by exactly one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub jump: bool,
    pub pause: bool,
    pub restart: bool,
}

#[cfg(test)]
impl TickInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::default()
        }
    }

    pub fn pause() -> Self {
        Self {
            pause: true,
            ..Self::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Self::default()
        }
    }
}

/// Collects action presses between ticks
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: TickInput,
}

impl InputQueue {
    /// Record a press; repeated presses before the next tick collapse
    pub fn push(&mut self, action: Action) {
        match action {
            Action::Jump => self.pending.jump = true,
            Action::Pause => self.pending.pause = true,
            Action::Restart => self.pending.restart = true,
        }
    }

    /// Take everything queued since the last tick
    pub fn drain(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }
}
