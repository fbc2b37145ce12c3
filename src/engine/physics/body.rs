use glam::Vec2;

/// Per-tick integration parameters
///
/// Units are pixels and ticks: one call to [`Integrator::step`] is one
/// display refresh. Screen space grows downward, so gravity is positive
/// and the jump impulse is negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    /// Added to the vertical velocity every tick
    pub gravity: f32,
    /// Velocity assigned when a jump starts
    pub jump_impulse: f32,
}

impl Integrator {
    pub fn new(gravity: f32, jump_impulse: f32) -> Self {
        Self {
            gravity,
            jump_impulse,
        }
    }

    /// Advance the body by one tick
    ///
    /// Position uses the pre-update velocity. The body loses ground contact
    /// until a surface query puts it back.
    pub fn step(&self, body: &mut KinematicBody) {
        body.position.y += body.velocity;
        body.velocity += self.gravity;
        body.grounded = false;
    }

    /// Start a jump if the body is standing on something
    ///
    /// Returns false (and changes nothing) while airborne.
    pub fn try_jump(&self, body: &mut KinematicBody) -> bool {
        if body.airborne || !body.grounded {
            return false;
        }

        body.velocity = self.jump_impulse;
        body.grounded = false;
        body.airborne = true;
        true
    }
}

/// A body that moves only vertically; the world scrolls past it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicBody {
    /// Top-left corner of the body box
    pub position: Vec2,
    /// Vertical velocity (pixels per tick, positive is down)
    pub velocity: f32,
    /// Resting on a surface this tick
    pub grounded: bool,
    /// Inside a jump that hasn't landed yet
    pub airborne: bool,
}

impl KinematicBody {
    /// Create a body at rest, eligible to jump
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: 0.0,
            grounded: true,
            airborne: false,
        }
    }

    /// Snap the body onto a surface whose top is `surface_y`
    pub fn land_on(&mut self, surface_y: f32, height: f32) {
        self.position.y = surface_y - height;
        self.velocity = 0.0;
        self.grounded = true;
        self.airborne = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_uses_pre_update_velocity() {
        let integrator = Integrator::new(0.6, -14.0);
        let mut body = KinematicBody::new(Vec2::new(100.0, 200.0));
        body.velocity = 2.0;

        integrator.step(&mut body);
        assert_eq!(body.position.y, 202.0);
        assert_eq!(body.velocity, 2.0 + 0.6);
        assert!(!body.grounded);
    }

    #[test]
    fn test_step_never_moves_horizontally() {
        let integrator = Integrator::new(0.6, -14.0);
        let mut body = KinematicBody::new(Vec2::new(100.0, 200.0));
        for _ in 0..10 {
            integrator.step(&mut body);
        }
        assert_eq!(body.position.x, 100.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let integrator = Integrator::new(0.6, -14.0);
        let mut body = KinematicBody::new(Vec2::new(100.0, 230.0));

        assert!(integrator.try_jump(&mut body));
        assert_eq!(body.velocity, -14.0);
        assert!(body.airborne);
        assert!(!body.grounded);
    }

    #[test]
    fn test_no_double_jump() {
        let integrator = Integrator::new(0.6, -14.0);
        let mut body = KinematicBody::new(Vec2::new(100.0, 230.0));
        integrator.try_jump(&mut body);
        integrator.step(&mut body);

        let before = body;
        assert!(!integrator.try_jump(&mut body));
        assert_eq!(body, before);
    }

    #[test]
    fn test_no_jump_while_falling() {
        let integrator = Integrator::new(0.6, -14.0);
        let mut body = KinematicBody::new(Vec2::new(100.0, 0.0));
        integrator.step(&mut body);
        assert!(!integrator.try_jump(&mut body));
    }

    #[test]
    fn test_land_on() {
        let integrator = Integrator::new(0.6, -14.0);
        let mut body = KinematicBody::new(Vec2::new(100.0, 230.0));
        integrator.try_jump(&mut body);

        body.land_on(320.0, 90.0);
        assert_eq!(body.position.y, 230.0);
        assert_eq!(body.velocity, 0.0);
        assert!(body.grounded);
        assert!(!body.airborne);
    }
}
