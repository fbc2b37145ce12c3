/// Game loop timing
///
/// The runner advances exactly one simulation tick per displayed frame.
/// This clock hands each frame a monotonic timestamp (time since start)
/// for time-gated systems such as sprite animation, and keeps frame
/// statistics for diagnostics.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// How often (in frames) the FPS estimate is refreshed
const FPS_REFRESH_INTERVAL: u64 = 10;

/// Frame timing state
pub struct GameLoop {
    /// Time when the loop started
    start_time: Instant,

    /// Time of last frame
    last_frame_time: Instant,

    /// Frame timing history for FPS calculation
    frame_times: VecDeque<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl GameLoop {
    /// Create a new game loop starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a game loop with an explicit start instant
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start_time: start,
            last_frame_time: start,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE + 1),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame, returning its timestamp
    pub fn begin_frame(&mut self) -> Duration {
        self.begin_frame_at(Instant::now())
    }

    /// Begin a new frame observed at `now`
    ///
    /// Timestamps never go backwards even if `now` does.
    pub fn begin_frame_at(&mut self, now: Instant) -> Duration {
        let now = now.max(self.last_frame_time);
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        if self.frame_count % FPS_REFRESH_INTERVAL == 0 {
            self.update_fps();
        }

        now.duration_since(self.start_time)
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
