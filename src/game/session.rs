// A single play session: owns all mutable game state and runs the tick

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::math::Rect;
use crate::engine::input::TickInput;
use crate::engine::physics::Integrator;

use super::characters::{AnimationClock, AnimationFrameData, Character};
use super::collision;
use super::config::{ConfigError, GameConfig};
use super::state::{GameState, GameStateMachine, Score};
use super::viewport::Viewport;
use super::world::{Coin, Obstacle, ObstacleKind, Platform, Spawner, World};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The tick was spent restarting
    pub restarted: bool,
    pub jumped: bool,
    pub landed: bool,
    pub coins_collected: usize,
    pub platform_appended: bool,
    pub obstacle_spawned: Option<ObstacleKind>,
    pub coin_spawned: bool,
    /// This tick ended the run
    pub game_over: bool,
}

/// Owns the character, world, score and animation for one player
///
/// Nothing else mutates this state; input is applied only at the start of
/// [`Session::tick`].
pub struct Session<R = StdRng> {
    config: GameConfig,
    integrator: Integrator,
    character: Character,
    world: World,
    state: GameStateMachine,
    animation: AnimationClock,
    spawner: Spawner<R>,
}

impl Session<StdRng> {
    /// Create a session with an OS-seeded random source
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a reproducible session
    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Session<R> {
    /// Create a session drawing spawns from `rng`
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            integrator: Integrator::new(config.physics.gravity, config.physics.jump_impulse),
            character: Character::new(config.character.clone()),
            world: World::new(&config.world),
            state: GameStateMachine::new(&config.score),
            animation: AnimationClock::new(&config.animation),
            spawner: Spawner::new(rng),
            config,
        })
    }

    /// Advance the game by one displayed frame
    ///
    /// Input is applied first (restart, then pause, then jump). While the
    /// game is running the stages then run in a fixed order: animation,
    /// physics, collision, scroll and spawn, score and state.
    pub fn tick(&mut self, input: TickInput, viewport: Viewport, now: Duration) -> TickReport {
        let mut report = TickReport::default();

        if self.state.state() == GameState::GameOver {
            // Single-button play: a tap after game over restarts
            if input.restart || input.jump {
                self.restart();
                report.restarted = true;
            }
            return report;
        }

        if input.pause {
            self.state.toggle_pause();
        }

        if !self.state.is_running() {
            return report;
        }

        if input.jump && self.integrator.try_jump(self.character.body_mut()) {
            self.animation.restart_jump();
            report.jumped = true;
        }

        self.animation.update(now, self.character.is_airborne());

        self.integrator.step(self.character.body_mut());

        let collisions = collision::resolve(
            &mut self.character,
            &mut self.world,
            self.config.physics.landing_tolerance,
        );
        report.landed = collisions.landed_on.is_some();
        report.coins_collected = collisions.coins_collected;
        if collisions.coins_collected > 0 {
            log::debug!("Collected {} coin(s)", collisions.coins_collected);
        }

        self.world.scroll(self.config.world.scroll_speed);
        let spawns = self.spawner.spawn(
            &mut self.world,
            self.character.position().y,
            viewport,
            &self.config,
        );
        report.platform_appended = spawns.platform_appended;
        report.obstacle_spawned = spawns.obstacle;
        report.coin_spawned = spawns.coin_spawned;

        self.state.collect_coins(collisions.coins_collected);
        self.state.accrue_tick();
        if collisions.hit_obstacle {
            self.state.game_over();
            report.game_over = true;
        }

        log::trace!(
            "tick {}: y={:.1} v={:.2} score={:.2}",
            self.state.score().ticks(),
            self.character.position().y,
            self.character.velocity(),
            self.state.score().points()
        );
        report
    }

    /// Reset character, world, score and animation to their initial values
    pub fn restart(&mut self) {
        self.character.reset();
        self.world.reset(&self.config.world);
        self.state.reset();
        self.animation.reset();
        log::info!("Game restarted");
    }

    pub fn state(&self) -> GameState {
        self.state.state()
    }

    pub fn score(&self) -> Score {
        self.state.score()
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u64 {
        self.state.score().display()
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Hitbox for debug overlays
    pub fn hitbox(&self) -> Rect {
        self.character.hitbox()
    }

    /// Sprite cycle and frame to draw
    pub fn sprite_frame(&self) -> AnimationFrameData {
        self.animation.frame_data(self.character.is_airborne())
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.world.platforms
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.world.obstacles
    }

    pub fn coins(&self) -> &[Coin] {
        &self.world.coins
    }

    pub fn scroll_offset(&self) -> f32 {
        self.world.scroll_offset()
    }

    #[cfg(test)]
    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub(crate) fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }
}
