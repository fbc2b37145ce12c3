// Scrolling world objects

use glam::Vec2;

use crate::core::math::Rect;

/// Walkable ground segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// Where an obstacle was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Sitting on the ground line
    Ground,
    /// Floating near the runner's current height
    Flying,
}

/// Touching one ends the run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, position: Vec2, size: f32) -> Self {
        Self {
            rect: Rect::from_origin(position, Vec2::splat(size)),
            kind,
        }
    }
}

/// Square pickup worth a fixed reward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coin {
    pub position: Vec2,
    pub size: f32,
}

impl Coin {
    pub fn new(position: Vec2, size: f32) -> Self {
        Self { position, size }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.position, Vec2::splat(self.size))
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_is_square() {
        let obstacle = Obstacle::new(ObstacleKind::Ground, Vec2::new(800.0, 290.0), 30.0);
        assert_eq!(obstacle.rect, Rect::new(800.0, 290.0, 30.0, 30.0));
    }

    #[test]
    fn test_coin_bounds() {
        let coin = Coin::new(Vec2::new(10.0, 20.0), 32.0);
        assert_eq!(coin.bounds(), Rect::new(10.0, 20.0, 32.0, 32.0));
        assert_eq!(coin.right(), 42.0);
    }
}
