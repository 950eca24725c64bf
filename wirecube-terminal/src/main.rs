/// Wirecube Terminal Demo - Interactive Wireframe Cube
///
/// Renders the unit cube as a wireframe and re-renders on every angle
/// change. Controls:
///   - Up/Down: rotate around X
///   - Left/Right: rotate around Y
///   - E/R: rotate around Z
///   - 0: reset all angles
///   - Q/ESC: quit

use std::io;
use wirecube_core::Wireframe;
use wirecube_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let mut app = TerminalApp::new(Wireframe::cube())?;
    app.run()
}
