//! Drifting circle entity.

use glam::Vec2;

use crate::core::surface::Surface;

/// A circle moving in a straight line at constant velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Move one frame along the velocity. No acceleration, no damping.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Whether the whole circle has left `surface`.
    pub fn is_outside(&self, surface: &Surface) -> bool {
        surface.is_outside(self.pos, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_linear_in_frames() {
        let start = Vec2::new(10.0, 20.0);
        let vel = Vec2::new(1.5, -0.75);
        let mut p = Particle::new(start, vel, 7.5);
        for _ in 0..40 {
            p.advance();
        }
        let expected = start + vel * 40.0;
        assert!((p.pos - expected).length() < 1e-3, "got {:?}", p.pos);
        assert_eq!(p.vel, vel, "velocity must not change");
    }

    #[test]
    fn leaves_surface_after_crossing_left_edge() {
        let surface = Surface::new(1000.0, 600.0);
        let radius = 7.5;
        let mut p = Particle::new(Vec2::new(-radius, 300.0), Vec2::new(-1.0, 0.0), radius);
        assert!(!p.is_outside(&surface));
        p.advance();
        assert!(p.is_outside(&surface));
    }
}
