// Collision resolution between the runner and the world

use crate::engine::physics::find_landing;

use super::characters::Character;
use super::world::World;

/// Outcome of one collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Index of the platform the runner landed on
    pub landed_on: Option<usize>,
    pub hit_obstacle: bool,
    pub coins_collected: usize,
}

/// Resolve landing, obstacle hits and coin pickups, in that order
///
/// Landing uses the body box. Obstacles and coins are tested against the
/// hitbox after landing has settled the runner's position.
pub fn resolve(character: &mut Character, world: &mut World, landing_tolerance: f32) -> CollisionReport {
    let landed_on = find_landing(
        &character.body_rect(),
        character.velocity(),
        landing_tolerance,
        world.platforms.iter().map(|p| &p.rect),
    );
    if let Some(index) = landed_on {
        character.land_on(world.platforms[index].rect.top());
    }

    let hitbox = character.hitbox();
    let hit_obstacle = world.obstacles.iter().any(|o| hitbox.intersects(&o.rect));

    let before = world.coins.len();
    world.coins.retain(|c| !hitbox.intersects(&c.bounds()));
    let coins_collected = before - world.coins.len();

    CollisionReport {
        landed_on,
        hit_obstacle,
        coins_collected,
    }
}
