/// Per-axis rotations and rotation state
use nalgebra::Point3;

/// Rotation angles around the three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Angles {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn from_degrees(x: f32, y: f32, z: f32) -> Self {
        Self {
            x: x.to_radians(),
            y: y.to_radians(),
            z: z.to_radians(),
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Whether all three angles are finite numbers. A render pass must
    /// refuse the frame otherwise rather than draw garbage coordinates.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Default for Angles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotate a point around the Y axis. Y is unchanged.
pub fn rotate_y(p: Point3<f32>, angle: f32) -> Point3<f32> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos)
}

/// Rotate a point around the X axis. X is unchanged.
pub fn rotate_x(p: Point3<f32>, angle: f32) -> Point3<f32> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
}

/// Rotate a point around the Z axis. Z is unchanged.
pub fn rotate_z(p: Point3<f32>, angle: f32) -> Point3<f32> {
    let (sin, cos) = angle.sin_cos();
    Point3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z)
}

/// Apply the full rotation pipeline: Y, then X, then Z.
///
/// The order is fixed. Axis rotations do not commute, so reordering
/// changes the rendered output.
pub fn rotate(p: Point3<f32>, angles: &Angles) -> Point3<f32> {
    rotate_z(rotate_x(rotate_y(p, angles.y), angles.x), angles.z)
}
