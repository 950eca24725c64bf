/// Orthographic projection and viewport mapping
use nalgebra::{Point2, Point3};

/// Magnification applied when mapping model units to pixels
pub const DEFAULT_SCALE: f32 = 50.0;

/// Maps model coordinates onto a display surface.
///
/// Projection is orthographic: the z coordinate is discarded outright.
/// The viewport then recenters on the surface midpoint and flips y,
/// since display coordinates grow downward.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub center_x: f32,
    pub center_y: f32,
    pub scale: f32,
}

impl Viewport {
    /// Viewport centered on a surface of the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            center_x: width as f32 / 2.0,
            center_y: height as f32 / 2.0,
            scale: DEFAULT_SCALE,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Project a 3D point to 2D screen coordinates.
    pub fn project(&self, p: Point3<f32>) -> Point2<f32> {
        Point2::new(
            self.center_x + p.x * self.scale,
            self.center_y - p.y * self.scale,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
