// Game state machine and score

use super::config::ScoreConfig;

/// Top-level run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    /// Simulation advances every tick
    #[default]
    Running,
    /// Simulation frozen; rendering continues
    Paused,
    /// Hit an obstacle; only a restart leaves this state
    GameOver,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Accumulated score
///
/// Only the counts are stored; the point value is computed from them on
/// read, so the configured rates are applied as given and never drift
/// through repeated addition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// Running ticks since the last restart
    ticks: u64,
    /// Coins collected since the last restart
    coins: u64,
    per_tick: f64,
    coin_reward: f64,
}

impl Score {
    pub fn new(config: &ScoreConfig) -> Self {
        Self {
            ticks: 0,
            coins: 0,
            per_tick: config.per_tick,
            coin_reward: config.coin_reward,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn coins(&self) -> u64 {
        self.coins
    }

    /// Accumulated real value
    pub fn points(&self) -> f64 {
        self.ticks as f64 * self.per_tick + self.coins as f64 * self.coin_reward
    }

    /// Value shown to the player (truncated to whole points)
    pub fn display(&self) -> u64 {
        self.points().floor() as u64
    }

    fn reset(&mut self) {
        self.ticks = 0;
        self.coins = 0;
    }
}

/// Tracks the run state and score
#[derive(Debug, Clone)]
pub struct GameStateMachine {
    state: GameState,
    score: Score,
}

impl GameStateMachine {
    pub fn new(config: &ScoreConfig) -> Self {
        Self {
            state: GameState::Running,
            score: Score::new(config),
        }
    }

    /// Get the current state
    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Flip between running and paused; ignored after game over
    ///
    /// Returns true if the state changed.
    pub fn toggle_pause(&mut self) -> bool {
        match self.state {
            GameState::Running => {
                self.state = GameState::Paused;
                log::info!("Game paused");
                true
            }
            GameState::Paused => {
                self.state = GameState::Running;
                log::info!("Game resumed");
                true
            }
            GameState::GameOver => false,
        }
    }

    /// Credit one running tick
    pub fn accrue_tick(&mut self) {
        if self.is_running() {
            self.score.ticks += 1;
        }
    }

    /// Credit collected coins
    pub fn collect_coins(&mut self, count: usize) {
        if self.is_running() {
            self.score.coins += count as u64;
        }
    }

    /// End the run after a fatal collision
    pub fn game_over(&mut self) {
        if self.is_running() {
            self.state = GameState::GameOver;
            log::info!(
                "Game over after {} ticks and {} coins, score {}",
                self.score.ticks(),
                self.score.coins(),
                self.score.display()
            );
        }
    }

    /// Back to a fresh run
    pub fn reset(&mut self) {
        self.state = GameState::Running;
        self.score.reset();
    }
}
