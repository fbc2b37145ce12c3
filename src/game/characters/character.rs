// The runner: body state plus derived boxes

use glam::Vec2;

use crate::core::math::Rect;
use crate::engine::physics::KinematicBody;

use super::stats::CharacterStats;

/// The player-controlled runner
///
/// Only the body is stored; sprite box and hitbox are always derived from
/// the current position so they can't go stale.
#[derive(Debug, Clone)]
pub struct Character {
    stats: CharacterStats,
    body: KinematicBody,
}

impl Character {
    /// Create a character at its spawn point, grounded and at rest
    pub fn new(stats: CharacterStats) -> Self {
        let body = KinematicBody::new(Vec2::new(stats.spawn_x, stats.base_y));
        Self { stats, body }
    }

    /// Put the character back at its spawn point
    pub fn reset(&mut self) {
        self.body = KinematicBody::new(Vec2::new(self.stats.spawn_x, self.stats.base_y));
    }

    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    /// Top-left of the body box
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> f32 {
        self.body.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    pub fn is_airborne(&self) -> bool {
        self.body.airborne
    }

    /// Box used for standing on platforms
    pub fn body_rect(&self) -> Rect {
        Rect::from_origin(
            self.body.position,
            Vec2::new(self.stats.width, self.stats.height),
        )
    }

    /// Top-left of the drawn sprite
    pub fn sprite_origin(&self) -> Vec2 {
        self.body.position - Vec2::new(self.stats.sprite_offset_x, self.stats.sprite_offset_y)
    }

    /// Box the sprite is drawn into
    pub fn sprite_rect(&self) -> Rect {
        Rect::from_origin(
            self.sprite_origin(),
            Vec2::new(self.stats.sprite_width, self.stats.sprite_height),
        )
    }

    /// Box used against obstacles and coins
    pub fn hitbox(&self) -> Rect {
        let origin = self.sprite_origin()
            + Vec2::new(self.stats.hitbox_offset_x, self.stats.hitbox_offset_y);
        Rect::from_origin(origin, Vec2::new(self.stats.width, self.stats.height))
    }

    /// Snap onto a platform top
    pub fn land_on(&mut self, surface_y: f32) {
        self.body.land_on(surface_y, self.stats.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn() {
        let character = Character::new(CharacterStats::BASE);
        assert_eq!(character.position(), Vec2::new(100.0, 200.0));
        assert_eq!(character.velocity(), 0.0);
        assert!(character.is_grounded());
        assert!(!character.is_airborne());
    }

    #[test]
    fn test_hitbox_offsets() {
        let character = Character::new(CharacterStats::BASE);
        // 100 - 34 + 15, 200 - 7 + 4
        assert_eq!(character.hitbox(), Rect::new(81.0, 197.0, 30.0, 90.0));
    }

    #[test]
    fn test_sprite_rect() {
        let character = Character::new(CharacterStats::BASE);
        assert_eq!(character.sprite_rect(), Rect::new(66.0, 193.0, 128.0, 118.0));
    }

    #[test]
    fn test_hitbox_follows_position() {
        let mut character = Character::new(CharacterStats::BASE);
        character.body_mut().position.y = 150.0;
        assert_eq!(character.hitbox().y, 147.0);
        assert_eq!(character.body_rect().y, 150.0);
    }

    #[test]
    fn test_land_on() {
        let mut character = Character::new(CharacterStats::BASE);
        character.body_mut().velocity = 4.2;
        character.body_mut().grounded = false;

        character.land_on(320.0);
        assert_eq!(character.position().y, 230.0);
        assert_eq!(character.velocity(), 0.0);
        assert!(character.is_grounded());
    }

    #[test]
    fn test_reset() {
        let mut character = Character::new(CharacterStats::BASE);
        character.body_mut().position.y = 12.0;
        character.body_mut().velocity = -3.0;
        character.body_mut().airborne = true;

        character.reset();
        assert_eq!(character.position().y, 200.0);
        assert_eq!(character.velocity(), 0.0);
        assert!(!character.is_airborne());
    }
}
