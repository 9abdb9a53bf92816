use crate::core::field::ParticleField;
use crate::renderer::traits::{CircleStyle, DrawSurface, LineStroke};

/// Per-frame counters, handy for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub culled: usize,
    pub connectors: usize,
    pub spawned: usize,
}

/// Run one animation frame against `surface`.
///
/// Order matters: clear, move and draw every particle, cull the ones that
/// left, draw connectors between the survivors, then top the population back
/// up. Fresh spawns are first drawn on the next frame.
pub fn render_frame<S: DrawSurface>(field: &mut ParticleField, surface: &mut S) -> FrameStats {
    let mut stats = FrameStats::default();
    surface.clear(field.surface().size());

    let config = field.config();
    let circle = CircleStyle {
        fill: config.fill,
        outline: config.outline,
        outline_width: config.outline_width,
    };
    let connector_style = config.connectors.clone();

    field.advance();
    for particle in field.particles() {
        surface.circle(particle.pos, particle.radius, &circle);
    }
    stats.drawn = field.len();

    stats.culled = field.cull();

    for connector in field.link() {
        let stroke = LineStroke {
            color: connector_style.color.with_alpha(connector.opacity),
            width: connector_style.width,
            cap: connector_style.cap,
        };
        surface.line(connector.from, connector.to, &stroke);
        stats.connectors += 1;
    }

    stats.spawned = field.replenish();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{ConnectorConfig, FieldConfig};
    use crate::components::particle::Particle;
    use crate::renderer::color::Rgba;
    use crate::systems::population::PopulationRule;
    use glam::Vec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Vec2),
        Circle(Vec2, f32),
        Line(Vec2, Vec2, f32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl DrawSurface for Recorder {
        fn backend(&self) -> &'static str {
            "recorder"
        }

        fn clear(&mut self, size: Vec2) {
            self.calls.push(Call::Clear(size));
        }

        fn circle(&mut self, center: Vec2, radius: f32, _style: &CircleStyle) {
            self.calls.push(Call::Circle(center, radius));
        }

        fn line(&mut self, from: Vec2, to: Vec2, stroke: &LineStroke) {
            self.calls.push(Call::Line(from, to, stroke.color.a));
        }
    }

    fn manual_field(connectors: ConnectorConfig) -> ParticleField {
        let config = FieldConfig {
            connectors,
            population: PopulationRule::Fixed { count: 0 },
            ..FieldConfig::connected()
        };
        let mut field = ParticleField::new(config, 1);
        field.resize(1000.0, 600.0);
        field
    }

    #[test]
    fn clears_then_draws_circles_then_lines() {
        let mut field = manual_field(ConnectorConfig::default());
        field.insert(Particle::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0), 7.5));
        field.insert(Particle::new(Vec2::new(145.0, 160.0), Vec2::new(1.0, 0.0), 7.5));

        let mut rec = Recorder::default();
        let stats = render_frame(&mut field, &mut rec);

        assert_eq!(
            rec.calls,
            vec![
                Call::Clear(Vec2::new(1000.0, 600.0)),
                Call::Circle(Vec2::new(101.0, 100.0), 7.5),
                Call::Circle(Vec2::new(146.0, 160.0), 7.5),
                Call::Line(Vec2::new(101.0, 100.0), Vec2::new(146.0, 160.0), 0.5),
            ]
        );
        assert_eq!(stats, FrameStats { drawn: 2, culled: 0, connectors: 1, spawned: 0 });
    }

    #[test]
    fn exiting_particle_is_drawn_once_then_dropped() {
        let mut field = manual_field(ConnectorConfig::default());
        field.insert(Particle::new(Vec2::new(-8.0, 300.0), Vec2::new(-1.0, 0.0), 7.5));

        let mut rec = Recorder::default();
        let stats = render_frame(&mut field, &mut rec);
        assert_eq!(stats.drawn, 1);
        assert_eq!(stats.culled, 1);
        assert!(field.is_empty());
    }

    #[test]
    fn disabled_connectors_draw_no_lines() {
        let mut field = manual_field(ConnectorConfig::disabled());
        field.insert(Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 7.5));
        field.insert(Particle::new(Vec2::new(101.0, 100.0), Vec2::ZERO, 7.5));

        let mut rec = Recorder::default();
        render_frame(&mut field, &mut rec);
        assert!(!rec.calls.iter().any(|c| matches!(c, Call::Line(..))));
    }

    #[test]
    fn connector_color_keeps_rgb() {
        let mut field = manual_field(ConnectorConfig {
            color: Rgba::rgb(1, 2, 3),
            ..ConnectorConfig::default()
        });
        field.insert(Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 7.5));
        field.insert(Particle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 7.5));

        struct ColorProbe(Vec<Rgba>);
        impl DrawSurface for ColorProbe {
            fn backend(&self) -> &'static str {
                "probe"
            }
            fn clear(&mut self, _size: Vec2) {}
            fn circle(&mut self, _center: Vec2, _radius: f32, _style: &CircleStyle) {}
            fn line(&mut self, _from: Vec2, _to: Vec2, stroke: &LineStroke) {
                self.0.push(stroke.color);
            }
        }

        let mut probe = ColorProbe(Vec::new());
        render_frame(&mut field, &mut probe);
        assert_eq!(probe.0, vec![Rgba::new(1, 2, 3, 1.0)]);
    }

    #[test]
    fn replenishes_after_drawing() {
        let config = FieldConfig {
            population: PopulationRule::Fixed { count: 8 },
            ..FieldConfig::connected()
        };
        let mut field = ParticleField::new(config, 21);
        field.resize(800.0, 600.0);

        let mut rec = Recorder::default();
        for _ in 0..300 {
            rec.calls.clear();
            let stats = render_frame(&mut field, &mut rec);
            assert_eq!(stats.drawn, 8);
            assert_eq!(field.len(), 8);
        }
    }
}
