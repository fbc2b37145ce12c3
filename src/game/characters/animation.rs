// Sprite animation clock
//
// Runs independently of the simulation tick rate: frames advance only
// when enough wall-clock time has passed since the last advance.

use std::time::Duration;

use crate::game::config::AnimationConfig;

/// Which sprite sheet is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteCycle {
    Run,
    Jump,
}

impl SpriteCycle {
    /// Jump cycle while airborne, run cycle otherwise
    pub fn for_airborne(airborne: bool) -> Self {
        if airborne {
            Self::Jump
        } else {
            Self::Run
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::Jump => "jump",
        }
    }
}

/// A looping frame counter for one sprite sheet
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Number of frames in the cycle
    pub frame_count: usize,
    /// Current frame index
    pub frame: usize,
}

impl AnimationClip {
    pub fn new(frame_count: usize) -> Self {
        Self {
            frame_count,
            frame: 0,
        }
    }

    /// Step to the next frame, wrapping at the end
    pub fn advance(&mut self) {
        self.frame = (self.frame + 1) % self.frame_count.max(1);
    }

    pub fn rewind(&mut self) {
        self.frame = 0;
    }
}

/// Data needed to render the current animation frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrameData {
    pub cycle: SpriteCycle,
    pub frame_index: usize,
}

/// Time-gated frame indices for the run and jump cycles
#[derive(Debug, Clone)]
pub struct AnimationClock {
    run: AnimationClip,
    jump: AnimationClip,
    /// Minimum time between advances
    frame_interval: Duration,
    /// Timestamp of the last advance
    last_advance: Duration,
}

impl AnimationClock {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            run: AnimationClip::new(config.run_frames),
            jump: AnimationClip::new(config.jump_frames),
            frame_interval: config.frame_interval,
            last_advance: Duration::ZERO,
        }
    }

    /// Advance the active cycle if more than one interval has elapsed
    ///
    /// Returns true if a frame advanced.
    pub fn update(&mut self, now: Duration, airborne: bool) -> bool {
        if now.saturating_sub(self.last_advance) <= self.frame_interval {
            return false;
        }

        self.last_advance = now;
        match SpriteCycle::for_airborne(airborne) {
            SpriteCycle::Run => self.run.advance(),
            SpriteCycle::Jump => self.jump.advance(),
        }
        true
    }

    /// Start the jump cycle from its first frame
    pub fn restart_jump(&mut self) {
        self.jump.rewind();
    }

    /// Rewind both cycles and the timer
    pub fn reset(&mut self) {
        self.run.rewind();
        self.jump.rewind();
        self.last_advance = Duration::ZERO;
    }

    /// Frame to draw for the given airborne state
    pub fn frame_data(&self, airborne: bool) -> AnimationFrameData {
        let cycle = SpriteCycle::for_airborne(airborne);
        let frame_index = match cycle {
            SpriteCycle::Run => self.run.frame,
            SpriteCycle::Jump => self.jump.frame,
        };
        AnimationFrameData { cycle, frame_index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock() -> AnimationClock {
        AnimationClock::new(&AnimationConfig {
            run_frames: 3,
            jump_frames: 4,
            frame_interval: Duration::from_millis(50),
        })
    }

    fn run_frame(clock: &AnimationClock) -> usize {
        clock.frame_data(false).frame_index
    }

    fn jump_frame(clock: &AnimationClock) -> usize {
        clock.frame_data(true).frame_index
    }

    #[test]
    fn test_clip_wraps() {
        let mut clip = AnimationClip::new(2);
        clip.advance();
        assert_eq!(clip.frame, 1);
        clip.advance();
        assert_eq!(clip.frame, 0);
    }

    #[test]
    fn test_no_advance_within_interval() {
        let mut clock = clock();
        assert!(!clock.update(Duration::from_millis(30), false));
        assert!(!clock.update(Duration::from_millis(50), false));
        assert_eq!(run_frame(&clock), 0);
    }

    #[test]
    fn test_advance_after_interval() {
        let mut clock = clock();
        assert!(clock.update(Duration::from_millis(51), false));
        assert_eq!(run_frame(&clock), 1);

        // Interval restarts from the last advance
        assert!(!clock.update(Duration::from_millis(100), false));
        assert!(clock.update(Duration::from_millis(102), false));
        assert_eq!(run_frame(&clock), 2);
    }

    #[test]
    fn test_gating_ignores_call_count() {
        let mut clock = clock();
        for ms in 0..=50 {
            clock.update(Duration::from_millis(ms), false);
        }
        assert_eq!(run_frame(&clock), 0);
    }

    #[test]
    fn test_run_cycle_loops() {
        let mut clock = clock();
        for i in 1..=3 {
            clock.update(Duration::from_millis(60 * i), false);
        }
        assert_eq!(run_frame(&clock), 0);
    }

    #[test]
    fn test_airborne_advances_jump_cycle() {
        let mut clock = clock();
        clock.update(Duration::from_millis(60), true);
        assert_eq!(jump_frame(&clock), 1);
        assert_eq!(run_frame(&clock), 0);

        let data = clock.frame_data(true);
        assert_eq!(data.cycle, SpriteCycle::Jump);
        assert_eq!(data.frame_index, 1);
    }

    #[test]
    fn test_restart_jump() {
        let mut clock = clock();
        clock.update(Duration::from_millis(60), true);
        clock.restart_jump();
        assert_eq!(jump_frame(&clock), 0);
    }

    #[test]
    fn test_reset() {
        let mut clock = clock();
        clock.update(Duration::from_millis(60), false);
        clock.update(Duration::from_millis(120), true);
        clock.reset();

        assert_eq!(run_frame(&clock), 0);
        assert_eq!(jump_frame(&clock), 0);
        // Timer is back at zero, so 51ms advances again
        assert!(clock.update(Duration::from_millis(51), false));
    }

    #[test]
    fn test_cycle_names() {
        assert_eq!(SpriteCycle::Run.name(), "run");
        assert_eq!(SpriteCycle::Jump.name(), "jump");
    }
}
