/// Terminal frontend for the wireframe engine
///
/// Event-driven: the app blocks on keyboard input and re-renders the whole
/// frame once per angle change. There is no frame clock and no animation
/// state; the three angles are the only mutable values.
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use std::io::{self, stdout, Write};
use wirecube_core::{Angles, Axis, ReadoutSink, Scene, Viewport, Wireframe};

pub mod renderer;

pub use renderer::CharCanvas;

/// Step applied per keypress, in degrees
const ANGLE_STEP: f32 = 5.0;

/// Collects the per-axis degree readouts for the header line
#[derive(Default)]
struct HeaderReadouts {
    x: String,
    y: String,
    z: String,
}

impl ReadoutSink for HeaderReadouts {
    fn write_readout(&mut self, axis: Axis, text: &str) {
        match axis {
            Axis::X => self.x = text.to_string(),
            Axis::Y => self.y = text.to_string(),
            Axis::Z => self.z = text.to_string(),
        }
    }
}

/// Main application struct for terminal wireframe rendering
pub struct TerminalApp {
    scene: Scene,
    canvas: CharCanvas,
    /// Angle inputs in degrees: x, y, z
    degrees: [f32; 3],
    running: bool,
}

impl TerminalApp {
    pub fn new(wireframe: Wireframe) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let (canvas, scene) = Self::fit(wireframe, width, height);

        Ok(Self {
            scene,
            canvas,
            degrees: [0.0, 0.0, 0.0],
            running: true,
        })
    }

    /// Size the canvas under a one-row header and pick a scale that keeps
    /// a unit shape inside the smaller dimension.
    fn fit(wireframe: Wireframe, width: u16, height: u16) -> (CharCanvas, Scene) {
        let width = width.max(2) as usize;
        let height = height.max(2) as usize - 1;
        let scale = (width.min(height) as f32 / 2.0 - 1.0).max(1.0) / 2.0;
        let viewport = Viewport::new(width as u32, height as u32).with_scale(scale);
        (CharCanvas::new(width, height), Scene::new(wireframe, viewport))
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        // Initial frame at the default angles
        self.render()?;

        while self.running {
            if self.handle_event(event::read()?) {
                self.render()?;
            }
        }

        Ok(())
    }

    /// Apply one input event. Returns true when the frame needs redrawing.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                    false
                }
                KeyCode::Up => {
                    self.degrees[0] += ANGLE_STEP;
                    true
                }
                KeyCode::Down => {
                    self.degrees[0] -= ANGLE_STEP;
                    true
                }
                KeyCode::Right => {
                    self.degrees[1] += ANGLE_STEP;
                    true
                }
                KeyCode::Left => {
                    self.degrees[1] -= ANGLE_STEP;
                    true
                }
                KeyCode::Char('e') => {
                    self.degrees[2] += ANGLE_STEP;
                    true
                }
                KeyCode::Char('r') => {
                    self.degrees[2] -= ANGLE_STEP;
                    true
                }
                KeyCode::Char('0') => {
                    self.degrees = [0.0, 0.0, 0.0];
                    true
                }
                _ => false,
            },
            Event::Resize(width, height) => {
                let wireframe = self.scene.wireframe().clone();
                let (canvas, scene) = Self::fit(wireframe, width, height);
                self.canvas = canvas;
                self.scene = scene;
                true
            }
            _ => false,
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let angles = Angles::from_degrees(self.degrees[0], self.degrees[1], self.degrees[2]);
        let mut readouts = HeaderReadouts::default();
        self.scene.render(&angles, &mut self.canvas, &mut readouts);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 1))?;
        self.canvas.draw(&mut stdout)?;

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Wirecube | X: {} Y: {} Z: {} | Up/Down=X Left/Right=Y E/R=Z 0=Reset Q=Quit",
                readouts.x, readouts.y, readouts.z
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn app() -> TerminalApp {
        let (canvas, scene) = TerminalApp::fit(Wireframe::cube(), 80, 24);
        TerminalApp {
            scene,
            canvas,
            degrees: [0.0, 0.0, 0.0],
            running: true,
        }
    }

    #[test]
    fn test_arrow_keys_step_angles() {
        let mut app = app();
        assert!(app.handle_event(key(KeyCode::Up)));
        assert!(app.handle_event(key(KeyCode::Right)));
        assert!(app.handle_event(key(KeyCode::Char('e'))));
        assert_eq!(app.degrees, [ANGLE_STEP, ANGLE_STEP, ANGLE_STEP]);
        assert!(app.handle_event(key(KeyCode::Down)));
        assert_eq!(app.degrees[0], 0.0);
    }

    #[test]
    fn test_reset_key() {
        let mut app = app();
        app.degrees = [45.0, -30.0, 10.0];
        assert!(app.handle_event(key(KeyCode::Char('0'))));
        assert_eq!(app.degrees, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_quit_key_does_not_redraw() {
        let mut app = app();
        assert!(!app.handle_event(key(KeyCode::Char('q'))));
        assert!(!app.running);
    }

    #[test]
    fn test_unbound_key_ignored() {
        let mut app = app();
        assert!(!app.handle_event(key(KeyCode::Char('x'))));
        assert_eq!(app.degrees, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_resize_refits_canvas() {
        let mut app = app();
        assert!(app.handle_event(Event::Resize(40, 12)));
        assert_eq!(app.canvas.width(), 40);
        assert_eq!(app.canvas.height(), 11);
    }
}
