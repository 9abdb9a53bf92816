//! Edge spawning: new particles enter from one of the four sides, heading inward.

use glam::Vec2;

use crate::components::particle::Particle;
use crate::core::rng::Rng;
use crate::core::surface::Surface;

/// Side of the surface a particle enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    /// Pick an edge uniformly at random.
    pub fn random(rng: &mut Rng) -> Self {
        Self::ALL[rng.next_int(4) as usize]
    }
}

/// Spawn a particle on a uniformly chosen edge.
pub fn spawn(surface: &Surface, radius: f32, rng: &mut Rng) -> Particle {
    let edge = Edge::random(rng);
    spawn_on_edge(edge, surface, radius, rng)
}

/// Spawn a particle on `edge`.
///
/// The coordinate along the edge is uniform in `[radius, extent - radius)`.
/// Both velocity components start uniform in `[-1, 1)`; the one perpendicular
/// to the edge is then pushed inward to a magnitude in `[1, 2]`.
pub fn spawn_on_edge(edge: Edge, surface: &Surface, radius: f32, rng: &mut Rng) -> Particle {
    let mut vel = Vec2::new(rng.next_signed(), rng.next_signed());
    let along_x = rng.next_f32() * (surface.width - 2.0 * radius) + radius;
    let along_y = rng.next_f32() * (surface.height - 2.0 * radius) + radius;

    let pos = match edge {
        Edge::Left => {
            vel.x = vel.x.abs() + 1.0;
            Vec2::new(0.0, along_y)
        }
        Edge::Top => {
            vel.y = vel.y.abs() + 1.0;
            Vec2::new(along_x, 0.0)
        }
        Edge::Right => {
            vel.x = -vel.x.abs() - 1.0;
            Vec2::new(surface.width, along_y)
        }
        Edge::Bottom => {
            vel.y = -vel.y.abs() - 1.0;
            Vec2::new(along_x, surface.height)
        }
    };

    Particle::new(pos, vel, radius)
}
