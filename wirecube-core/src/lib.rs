/// Wirecube Core Library - Shared geometry and transformation logic
///
/// This library provides the stateless core functionality for wireframe
/// rendering: the transform-and-project pipeline (per-axis rotations,
/// orthographic projection, viewport mapping), the wireframe data model,
/// and OBJ line-element parsing. Frontends supply the drawing surface.

pub mod geometry;
pub mod obj;
pub mod projection;
pub mod render;
pub mod transform;

// Re-export commonly used types
pub use geometry::{Wireframe, WireframeError};
pub use projection::Viewport;
pub use render::{Axis, DrawSurface, ReadoutSink, Scene};
pub use transform::Angles;
