/// Wireframe geometry primitives
use nalgebra::Point3;
use thiserror::Error;

/// Validation failures for wireframe construction
#[derive(Debug, Error, PartialEq)]
pub enum WireframeError {
    #[error("edge ({0}, {1}) references vertex {2} but only {3} vertices exist")]
    IndexOutOfRange(usize, usize, usize, usize),
    #[error("edge ({0}, {0}) connects vertex {0} to itself")]
    SelfLoop(usize),
    #[error("wireframe has no vertices")]
    Empty,
}

/// An edge-list model: ordered vertices plus unordered index pairs.
///
/// Vertex indices are stable identifiers; the edge list never changes
/// after construction.
#[derive(Debug, Clone)]
pub struct Wireframe {
    vertices: Vec<Point3<f32>>,
    edges: Vec<(usize, usize)>,
}

impl Wireframe {
    /// Build a wireframe, validating every edge against the vertex list.
    pub fn new(
        vertices: Vec<Point3<f32>>,
        edges: Vec<(usize, usize)>,
    ) -> Result<Self, WireframeError> {
        if vertices.is_empty() {
            return Err(WireframeError::Empty);
        }
        for &(a, b) in &edges {
            if a == b {
                return Err(WireframeError::SelfLoop(a));
            }
            for idx in [a, b] {
                if idx >= vertices.len() {
                    return Err(WireframeError::IndexOutOfRange(a, b, idx, vertices.len()));
                }
            }
        }
        Ok(Self { vertices, edges })
    }

    /// The canonical unit cube: corners at (±1, ±1, ±1), indices 0-7,
    /// 12 edges (back face, front face, then the four connecting sides).
    pub fn cube() -> Self {
        let vertices = vec![
            Point3::new(-1.0, -1.0, -1.0), // 0
            Point3::new(1.0, -1.0, -1.0),  // 1
            Point3::new(1.0, 1.0, -1.0),   // 2
            Point3::new(-1.0, 1.0, -1.0),  // 3
            Point3::new(-1.0, -1.0, 1.0),  // 4
            Point3::new(1.0, -1.0, 1.0),   // 5
            Point3::new(1.0, 1.0, 1.0),    // 6
            Point3::new(-1.0, 1.0, 1.0),   // 7
        ];
        let edges = vec![
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 4),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ];
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }
}
