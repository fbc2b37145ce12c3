// Character dimensions and spawn point

/// Geometry of the runner
///
/// The body box (position + width/height) is what stands on platforms.
/// The sprite box is drawn offset from the body, and the hitbox used for
/// obstacles and coins is placed relative to the sprite origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterStats {
    // Spawn
    /// Fixed horizontal position (the world scrolls, the runner doesn't)
    pub spawn_x: f32,
    /// Vertical position at start and after restart
    pub base_y: f32,

    // Body / hitbox size
    pub width: f32,
    pub height: f32,

    // Sprite box
    pub sprite_width: f32,
    pub sprite_height: f32,
    /// Sprite origin is body position minus this offset
    pub sprite_offset_x: f32,
    pub sprite_offset_y: f32,

    // Hitbox
    /// Hitbox origin is sprite origin plus this offset
    pub hitbox_offset_x: f32,
    pub hitbox_offset_y: f32,
}

impl CharacterStats {
    /// Dimensions matching the run/jump sprite sheets
    pub const BASE: CharacterStats = CharacterStats {
        spawn_x: 100.0,
        base_y: 200.0,

        width: 30.0,
        height: 90.0,

        sprite_width: 128.0,
        sprite_height: 118.0,
        sprite_offset_x: 34.0,
        sprite_offset_y: 7.0,

        hitbox_offset_x: 15.0,
        hitbox_offset_y: 4.0,
    };
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = CharacterStats::default();
        assert_eq!(stats.spawn_x, 100.0);
        assert_eq!(stats.base_y, 200.0);
        assert_eq!(stats.width, 30.0);
        assert_eq!(stats.height, 90.0);
    }

    #[test]
    fn test_hitbox_fits_inside_sprite() {
        let stats = CharacterStats::BASE;
        assert!(stats.hitbox_offset_x + stats.width <= stats.sprite_width);
        assert!(stats.hitbox_offset_y + stats.height <= stats.sprite_height);
    }
}
