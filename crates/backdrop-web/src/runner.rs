use backdrop_engine::{render_frame, DrawSurface, FieldConfig, FrameStats, ParticleField, Surface};

/// Wires a [`ParticleField`] to whatever surface the host hands it each frame.
///
/// Holds no browser handles, so the frame loop can be driven from tests.
pub struct FieldRunner {
    field: ParticleField,
    initialized: bool,
    frames: u64,
}

impl FieldRunner {
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            field: ParticleField::new(config, seed),
            initialized: false,
            frames: 0,
        }
    }

    /// Size the field to the surface. The first call also marks the runner ready.
    pub fn resize(&mut self, width: f32, height: f32) -> usize {
        let target = self.field.resize(width, height);
        self.initialized = true;
        target
    }

    /// Run one frame. Does nothing before the first [`resize`](Self::resize).
    pub fn frame<S: DrawSurface>(&mut self, surface: &mut S) -> FrameStats {
        if !self.initialized {
            return FrameStats::default();
        }
        self.frames += 1;
        render_frame(&mut self.field, surface)
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    pub fn target(&self) -> usize {
        self.field.target()
    }

    /// Surface size from the last resize; zero before the first.
    pub fn surface(&self) -> Surface {
        self.field.surface()
    }

    /// One-line summary for the start log: live count, target and surface size.
    pub fn summary(&self) -> String {
        let surface = self.surface();
        format!(
            "{} circles (target {}) on {}x{}",
            self.particle_count(),
            self.target(),
            surface.width,
            surface.height
        )
    }

    /// Frames rendered since construction.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
