// Procedural spawning of platforms, obstacles and coins

use glam::Vec2;
use rand::Rng;

use super::entities::{Coin, Obstacle, ObstacleKind, Platform};
use super::World;
use crate::game::config::GameConfig;
use crate::game::viewport::Viewport;

/// What a spawn pass added to the world
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub platform_appended: bool,
    pub obstacle: Option<ObstacleKind>,
    pub coin_spawned: bool,
}

/// Spawns new objects at the right edge of the viewport
///
/// Obstacles and coins are independent per-tick Bernoulli draws with no
/// cooldown, so clusters can happen. The random source is injected; draws
/// happen in a fixed order so a seeded source replays the same run.
#[derive(Debug)]
pub struct Spawner<R> {
    rng: R,
}

impl<R: Rng> Spawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Run one spawn pass after the world has scrolled
    ///
    /// `character_top` is used to place flying obstacles.
    pub fn spawn(
        &mut self,
        world: &mut World,
        character_top: f32,
        viewport: Viewport,
        config: &GameConfig,
    ) -> SpawnReport {
        SpawnReport {
            platform_appended: self.extend_ground(world, viewport, config),
            obstacle: self.maybe_spawn_obstacle(world, character_top, viewport, config),
            coin_spawned: self.maybe_spawn_coin(world, viewport, config),
        }
    }

    /// Append a platform when the ground ends inside the viewport
    fn extend_ground(&mut self, world: &mut World, viewport: Viewport, config: &GameConfig) -> bool {
        let edge = world.last_platform().map_or(0.0, |p| p.rect.right());
        if edge >= viewport.width {
            return false;
        }

        let world_config = &config.world;
        let width = self
            .rng
            .gen_range(world_config.platform_width_min..world_config.platform_width_max);
        world.platforms.push(Platform::new(
            edge,
            world_config.ground_y,
            width,
            world_config.platform_height,
        ));
        log::debug!("Platform appended at x={:.1}, width {:.1}", edge, width);
        true
    }

    fn maybe_spawn_obstacle(
        &mut self,
        world: &mut World,
        character_top: f32,
        viewport: Viewport,
        config: &GameConfig,
    ) -> Option<ObstacleKind> {
        let spawn = &config.spawn;
        if !self.rng.gen_bool(spawn.obstacle_chance) {
            return None;
        }

        let (kind, y) = if self.rng.gen_bool(0.5) {
            (ObstacleKind::Flying, character_top - spawn.flying_obstacle_lift)
        } else {
            let ground = world
                .last_platform()
                .map_or(config.world.ground_y, |p| p.rect.top());
            (ObstacleKind::Ground, ground - spawn.ground_obstacle_lift)
        };

        world
            .obstacles
            .push(Obstacle::new(kind, Vec2::new(viewport.width, y), spawn.obstacle_size));
        log::debug!("{:?} obstacle spawned at y={:.1}", kind, y);
        Some(kind)
    }

    fn maybe_spawn_coin(&mut self, world: &mut World, viewport: Viewport, config: &GameConfig) -> bool {
        let spawn = &config.spawn;
        if !self.rng.gen_bool(spawn.coin_chance) {
            return false;
        }

        let span = (viewport.height - spawn.coin_spawn_margin).max(0.0);
        let y = self.rng.gen::<f32>() * span;
        world
            .coins
            .push(Coin::new(Vec2::new(viewport.width, y), spawn.coin_size));
        log::debug!("Coin spawned at y={:.1}", y);
        true
    }
}
