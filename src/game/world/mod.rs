// World state: platforms, obstacles, coins and the scroll position

pub mod entities;
pub mod spawner;

pub use entities::{Coin, Obstacle, ObstacleKind, Platform};
pub use spawner::Spawner;

use super::config::WorldConfig;

/// Everything that scrolls past the runner
#[derive(Debug, Clone)]
pub struct World {
    /// Contiguous ground, left to right in creation order
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub coins: Vec<Coin>,
    /// Total distance scrolled (drives background parallax)
    scroll_offset: f32,
}

impl World {
    /// Create a world holding only the starting platform
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            platforms: vec![Self::initial_platform(config)],
            obstacles: Vec::new(),
            coins: Vec::new(),
            scroll_offset: 0.0,
        }
    }

    fn initial_platform(config: &WorldConfig) -> Platform {
        Platform::new(
            0.0,
            config.ground_y,
            config.initial_platform_width,
            config.platform_height,
        )
    }

    /// Clear every object and lay down the starting platform again
    ///
    /// The scroll offset is kept so the background doesn't jump.
    pub fn reset(&mut self, config: &WorldConfig) {
        self.platforms.clear();
        self.platforms.push(Self::initial_platform(config));
        self.obstacles.clear();
        self.coins.clear();
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn last_platform(&self) -> Option<&Platform> {
        self.platforms.last()
    }

    /// Shift everything left by `speed` and drop what left the screen
    pub fn scroll(&mut self, speed: f32) {
        self.scroll_offset += speed;

        for platform in &mut self.platforms {
            platform.rect.translate_x(-speed);
        }
        for obstacle in &mut self.obstacles {
            obstacle.rect.translate_x(-speed);
        }
        for coin in &mut self.coins {
            coin.position.x -= speed;
        }

        self.platforms.retain(|p| p.rect.right() > 0.0);
        self.obstacles.retain(|o| o.rect.right() > 0.0);
        self.coins.retain(|c| c.right() > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::BASE_CONFIG;
    use glam::Vec2;

    #[test]
    fn test_initial_world() {
        let world = World::new(&BASE_CONFIG.world);
        assert_eq!(world.platforms, vec![Platform::new(0.0, 320.0, 800.0, 20.0)]);
        assert!(world.obstacles.is_empty());
        assert!(world.coins.is_empty());
        assert_eq!(world.scroll_offset(), 0.0);
    }

    #[test]
    fn test_scroll_shifts_everything() {
        let mut world = World::new(&BASE_CONFIG.world);
        world
            .obstacles
            .push(Obstacle::new(ObstacleKind::Ground, Vec2::new(500.0, 290.0), 30.0));
        world.coins.push(Coin::new(Vec2::new(400.0, 100.0), 32.0));

        world.scroll(3.0);
        assert_eq!(world.platforms[0].rect.x, -3.0);
        assert_eq!(world.obstacles[0].rect.x, 497.0);
        assert_eq!(world.coins[0].position.x, 397.0);
        assert_eq!(world.scroll_offset(), 3.0);
    }

    #[test]
    fn test_scroll_offset_accumulates() {
        let mut world = World::new(&BASE_CONFIG.world);
        for _ in 0..10 {
            world.scroll(3.0);
        }
        assert_eq!(world.scroll_offset(), 30.0);
    }

    #[test]
    fn test_prunes_objects_past_left_edge() {
        let mut world = World::new(&BASE_CONFIG.world);
        world.platforms.push(Platform::new(800.0, 320.0, 300.0, 20.0));
        // Right edges land exactly on 0 after one step
        world
            .obstacles
            .push(Obstacle::new(ObstacleKind::Flying, Vec2::new(-27.0, 100.0), 30.0));
        world.coins.push(Coin::new(Vec2::new(-29.0, 100.0), 32.0));
        // Still partly visible after one step
        world.coins.push(Coin::new(Vec2::new(-28.0, 100.0), 32.0));

        world.scroll(3.0);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.coins.len(), 1);
        assert_eq!(world.coins[0].position.x, -31.0);
    }

    #[test]
    fn test_prunes_platforms() {
        let mut world = World::new(&BASE_CONFIG.world);
        world.platforms[0].rect.w = 3.0;
        world.platforms.push(Platform::new(3.0, 320.0, 300.0, 20.0));

        world.scroll(3.0);
        assert_eq!(world.platforms.len(), 1);
        assert_eq!(world.platforms[0].rect.x, 0.0);
    }

    #[test]
    fn test_reset_keeps_scroll_offset() {
        let mut world = World::new(&BASE_CONFIG.world);
        world.scroll(3.0);
        world.coins.push(Coin::new(Vec2::new(10.0, 10.0), 32.0));

        world.reset(&BASE_CONFIG.world);
        assert_eq!(world.platforms, vec![Platform::new(0.0, 320.0, 800.0, 20.0)]);
        assert!(world.coins.is_empty());
        assert_eq!(world.scroll_offset(), 3.0);
    }
}
