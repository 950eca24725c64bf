/// The transform-and-project render pipeline
use nalgebra::Point2;

use crate::geometry::Wireframe;
use crate::projection::Viewport;
use crate::transform::{self, Angles};

/// Radius of the disc drawn at each projected vertex, in pixels
pub const MARKER_RADIUS: f32 = 3.0;

/// Identifies one of the three rotation inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

/// Minimal drawing backend the pipeline needs: clear the surface,
/// stroke straight lines, fill small discs. Concrete backends are a
/// character grid (terminal) and a 2D canvas context (web).
pub trait DrawSurface {
    fn clear(&mut self);
    fn stroke_line(&mut self, from: Point2<f32>, to: Point2<f32>);
    fn fill_disc(&mut self, center: Point2<f32>, radius: f32);
}

/// Receives the textual angle readouts after each frame
pub trait ReadoutSink {
    fn write_readout(&mut self, axis: Axis, text: &str);
}

/// Drop all readouts. For frontends without text targets.
impl ReadoutSink for () {
    fn write_readout(&mut self, _axis: Axis, _text: &str) {}
}

/// A fixed wireframe plus viewport; angles arrive per render call.
///
/// The scene holds no mutable state. Every frame recomputes rotated and
/// projected points from scratch and discards them after drawing.
pub struct Scene {
    wireframe: Wireframe,
    viewport: Viewport,
}

impl Scene {
    pub fn new(wireframe: Wireframe, viewport: Viewport) -> Self {
        Self {
            wireframe,
            viewport,
        }
    }

    pub fn wireframe(&self) -> &Wireframe {
        &self.wireframe
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Render one frame: clear, rotate Y then X then Z, project, stroke
    /// the edges, mark the vertices, update the readouts.
    ///
    /// Non-finite angles skip the frame entirely and return `false`;
    /// the surface is left untouched.
    pub fn render<S, R>(&self, angles: &Angles, surface: &mut S, readouts: &mut R) -> bool
    where
        S: DrawSurface,
        R: ReadoutSink,
    {
        if !angles.is_finite() {
            return false;
        }

        surface.clear();

        let projected: Vec<Point2<f32>> = self
            .wireframe
            .vertices()
            .iter()
            .map(|&v| self.viewport.project(transform::rotate(v, angles)))
            .collect();

        for &(a, b) in self.wireframe.edges() {
            surface.stroke_line(projected[a], projected[b]);
        }

        for &p in &projected {
            surface.fill_disc(p, MARKER_RADIUS);
        }

        readouts.write_readout(Axis::X, &format_degrees(angles.x));
        readouts.write_readout(Axis::Y, &format_degrees(angles.y));
        readouts.write_readout(Axis::Z, &format_degrees(angles.z));

        true
    }
}

/// Format an angle in radians as a whole-degree readout, e.g. `45°`.
pub fn format_degrees(radians: f32) -> String {
    format!("{:.0}°", radians.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Line(Point2<f32>, Point2<f32>),
        Disc(Point2<f32>, f32),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl DrawSurface for RecordingSurface {
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn stroke_line(&mut self, from: Point2<f32>, to: Point2<f32>) {
            self.ops.push(Op::Line(from, to));
        }
        fn fill_disc(&mut self, center: Point2<f32>, radius: f32) {
            self.ops.push(Op::Disc(center, radius));
        }
    }

    #[derive(Default)]
    struct RecordingReadouts {
        lines: Vec<(Axis, String)>,
    }

    impl ReadoutSink for RecordingReadouts {
        fn write_readout(&mut self, axis: Axis, text: &str) {
            self.lines.push((axis, text.to_string()));
        }
    }

    fn cube_scene() -> Scene {
        Scene::new(Wireframe::cube(), Viewport::new(400, 400))
    }

    #[test]
    fn test_frame_clears_before_drawing() {
        let scene = cube_scene();
        let mut surface = RecordingSurface::default();
        assert!(scene.render(&Angles::zero(), &mut surface, &mut ()));
        assert_eq!(surface.ops[0], Op::Clear);
        // 1 clear + 12 edges + 8 markers
        assert_eq!(surface.ops.len(), 21);
    }

    #[test]
    fn test_each_render_is_a_full_frame() {
        let scene = cube_scene();
        let mut surface = RecordingSurface::default();
        scene.render(&Angles::zero(), &mut surface, &mut ());
        scene.render(&Angles::from_degrees(0.0, 30.0, 0.0), &mut surface, &mut ());
        let clears = surface.ops.iter().filter(|op| **op == Op::Clear).count();
        assert_eq!(clears, 2);
        assert_eq!(surface.ops.len(), 42);
        // The second frame starts with its own clear
        assert_eq!(surface.ops[21], Op::Clear);
    }

    #[test]
    fn test_identity_angles_project_unrotated_cube() {
        let scene = cube_scene();
        let mut surface = RecordingSurface::default();
        scene.render(&Angles::zero(), &mut surface, &mut ());

        let viewport = scene.viewport();
        let expected: Vec<Point2<f32>> = scene
            .wireframe()
            .vertices()
            .iter()
            .map(|&v| viewport.project(v))
            .collect();
        let markers: Vec<&Op> = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Disc(..)))
            .collect();
        assert_eq!(markers.len(), 8);
        for (marker, want) in markers.iter().zip(&expected) {
            match marker {
                Op::Disc(center, radius) => {
                    assert_eq!(center, want);
                    assert_eq!(*radius, MARKER_RADIUS);
                }
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn test_edges_connect_projected_endpoints() {
        let scene = cube_scene();
        let mut surface = RecordingSurface::default();
        scene.render(&Angles::zero(), &mut surface, &mut ());

        let viewport = scene.viewport();
        let (a, b) = scene.wireframe().edges()[0];
        let from = viewport.project(scene.wireframe().vertices()[a]);
        let to = viewport.project(scene.wireframe().vertices()[b]);
        assert_eq!(surface.ops[1], Op::Line(from, to));
    }

    #[test]
    fn test_non_finite_angles_skip_frame() {
        let scene = cube_scene();
        let mut surface = RecordingSurface::default();
        let mut readouts = RecordingReadouts::default();
        let angles = Angles::new(f32::NAN, 0.0, 0.0);
        assert!(!scene.render(&angles, &mut surface, &mut readouts));
        assert!(surface.ops.is_empty());
        assert!(readouts.lines.is_empty());
    }

    #[test]
    fn test_readouts_report_degrees() {
        let scene = cube_scene();
        let mut surface = RecordingSurface::default();
        let mut readouts = RecordingReadouts::default();
        let angles = Angles::from_degrees(15.0, 90.0, -45.0);
        scene.render(&angles, &mut surface, &mut readouts);
        assert_eq!(
            readouts.lines,
            vec![
                (Axis::X, "15°".to_string()),
                (Axis::Y, "90°".to_string()),
                (Axis::Z, "-45°".to_string()),
            ]
        );
    }

    #[test]
    fn test_minimal_wireframe_renders() {
        let wireframe = Wireframe::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)],
            vec![(0, 1)],
        )
        .unwrap();
        let scene = Scene::new(wireframe, Viewport::new(100, 100));
        let mut surface = RecordingSurface::default();
        assert!(scene.render(&Angles::zero(), &mut surface, &mut ()));
        assert_eq!(surface.ops.len(), 4);
    }
}
