//! Proximity lines between particles.

use glam::Vec2;

use crate::components::particle::Particle;

/// A line between two particle centers, rebuilt every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub from: Vec2,
    pub to: Vec2,
    /// 1.0 when the endpoints coincide, fading linearly to 0.0 at the threshold.
    pub opacity: f32,
}

/// Fade for a pair `distance` apart: `1 - distance / max_distance`, and 0.0
/// at or beyond `max_distance`.
pub fn connector_opacity(distance: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 || distance >= max_distance {
        return 0.0;
    }
    1.0 - distance / max_distance
}

/// Collect a connector for every pair (i < j) strictly closer than
/// `max_distance`. `out` is cleared first so callers can reuse the allocation.
pub fn collect_connectors(particles: &[Particle], max_distance: f32, out: &mut Vec<Connector>) {
    out.clear();
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let distance = a.pos.distance(b.pos);
            if distance < max_distance {
                out.push(Connector {
                    from: a.pos,
                    to: b.pos,
                    opacity: connector_opacity(distance, max_distance),
                });
            }
        }
    }
}
