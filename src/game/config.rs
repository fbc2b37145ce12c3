// Game tuning - every constant the simulation reads lives here

use std::time::Duration;

use super::characters::CharacterStats;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("gravity must be positive, got {0}")]
    Gravity(f32),

    #[error("jump impulse must be negative (upward), got {0}")]
    JumpImpulse(f32),

    #[error("scroll speed must be positive, got {0}")]
    ScrollSpeed(f32),

    #[error("platform width range [{min}, {max}) is empty")]
    PlatformWidthRange { min: f32, max: f32 },

    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{0} animation cycle has no frames")]
    EmptyCycle(&'static str),

    #[error("{name} must be a finite, non-negative score, got {value}")]
    Score { name: &'static str, value: f64 },
}

/// Vertical motion tuning
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsConfig {
    /// Added to vertical velocity each tick (pixels/tick²)
    pub gravity: f32,
    /// Velocity at the start of a jump (negative is up)
    pub jump_impulse: f32,
    /// Extra landing band below a platform top. Tuned for the gravity and
    /// tick rate above; re-derive it if either changes.
    pub landing_tolerance: f32,
}

/// Scrolling and platform layout
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    /// Horizontal world speed (pixels/tick)
    pub scroll_speed: f32,
    /// Top of every platform
    pub ground_y: f32,
    pub platform_height: f32,
    /// Width of the platform present at start and after restart
    pub initial_platform_width: f32,
    /// Spawned platform widths are drawn from [min, max)
    pub platform_width_min: f32,
    pub platform_width_max: f32,
}

/// Obstacle and coin spawning
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnConfig {
    /// Per-tick chance of spawning an obstacle
    pub obstacle_chance: f64,
    /// Obstacles are square
    pub obstacle_size: f32,
    /// Flying obstacles sit this far above the character's top
    pub flying_obstacle_lift: f32,
    /// Ground obstacles sit this far above the last platform's top
    pub ground_obstacle_lift: f32,
    /// Per-tick chance of spawning a coin
    pub coin_chance: f64,
    pub coin_size: f32,
    /// Coins spawn in [0, viewport height - margin)
    pub coin_spawn_margin: f32,
}

/// Score accrual
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreConfig {
    /// Points per running tick
    pub per_tick: f64,
    /// Points per collected coin
    pub coin_reward: f64,
}

/// Sprite animation timing
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub run_frames: usize,
    pub jump_frames: usize,
    /// Minimum wall-clock time between frame advances
    pub frame_interval: Duration,
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub character: CharacterStats,
    pub physics: PhysicsConfig,
    pub world: WorldConfig,
    pub spawn: SpawnConfig,
    pub score: ScoreConfig,
    pub animation: AnimationConfig,
}

/// The tuning the game ships with
pub const BASE_CONFIG: GameConfig = GameConfig {
    character: CharacterStats::BASE,
    physics: PhysicsConfig {
        gravity: 0.6,
        jump_impulse: -14.0,
        landing_tolerance: 5.0,
    },
    world: WorldConfig {
        scroll_speed: 3.0,
        ground_y: 320.0,
        platform_height: 20.0,
        initial_platform_width: 800.0,
        platform_width_min: 300.0,
        platform_width_max: 500.0,
    },
    spawn: SpawnConfig {
        obstacle_chance: 0.008,
        obstacle_size: 30.0,
        flying_obstacle_lift: 60.0,
        ground_obstacle_lift: 30.0,
        coin_chance: 0.02,
        coin_size: 32.0,
        coin_spawn_margin: 50.0,
    },
    score: ScoreConfig {
        per_tick: 0.05,
        coin_reward: 10.0,
    },
    animation: AnimationConfig {
        run_frames: 15,
        jump_frames: 15,
        frame_interval: Duration::from_millis(50),
    },
};

impl Default for GameConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl GameConfig {
    /// Check that the configuration describes a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        let physics = &self.physics;
        if !(physics.gravity > 0.0) {
            return Err(ConfigError::Gravity(physics.gravity));
        }
        if !(physics.jump_impulse < 0.0) {
            return Err(ConfigError::JumpImpulse(physics.jump_impulse));
        }
        positive("landing tolerance", physics.landing_tolerance)?;

        let world = &self.world;
        if !(world.scroll_speed > 0.0) {
            return Err(ConfigError::ScrollSpeed(world.scroll_speed));
        }
        positive("platform height", world.platform_height)?;
        positive("initial platform width", world.initial_platform_width)?;
        positive("minimum platform width", world.platform_width_min)?;
        if !(world.platform_width_min < world.platform_width_max) {
            return Err(ConfigError::PlatformWidthRange {
                min: world.platform_width_min,
                max: world.platform_width_max,
            });
        }

        let spawn = &self.spawn;
        probability("obstacle chance", spawn.obstacle_chance)?;
        probability("coin chance", spawn.coin_chance)?;
        positive("obstacle size", spawn.obstacle_size)?;
        positive("coin size", spawn.coin_size)?;

        score("per-tick score", self.score.per_tick)?;
        score("coin reward", self.score.coin_reward)?;

        if self.animation.run_frames == 0 {
            return Err(ConfigError::EmptyCycle("run"));
        }
        if self.animation.jump_frames == 0 {
            return Err(ConfigError::EmptyCycle("jump"));
        }

        let character = &self.character;
        positive("character width", character.width)?;
        positive("character height", character.height)?;

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { name, value })
    }
}

fn score(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Score { name, value })
    }
}
