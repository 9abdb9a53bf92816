use glam::Vec2;

/// The drawable rectangle particles live in, in canvas pixels.
/// Origin is the top-left corner; y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when a circle at `center` with `radius` lies entirely outside the
    /// rectangle on the x axis or entirely outside on the y axis.
    ///
    /// Touching an edge still counts as inside.
    pub fn is_outside(&self, center: Vec2, radius: f32) -> bool {
        if center.x - radius > self.width || center.x + radius < 0.0 {
            return true;
        }
        center.y - radius > self.height || center.y + radius < 0.0
    }
}
