/// Example: Load and render an OBJ wireframe in the terminal
///
/// Usage: cargo run --example load_obj -- path/to/file.obj
///
/// The file only needs `v` and `l` statements; everything else is skipped.

use std::env;
use std::fs;
use std::io;
use wirecube_core::{obj, Wireframe};
use wirecube_terminal::TerminalApp;

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file>", args[0]);
        eprintln!("\nNo OBJ file provided, using the unit cube...");
        let mut app = TerminalApp::new(Wireframe::cube())?;
        return app.run();
    }

    let obj_path = &args[1];

    let text = fs::read_to_string(obj_path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read OBJ file: {}", e),
        )
    })?;

    let wireframe = obj::parse_obj(&text).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse OBJ: {}", e),
        )
    })?;

    let mut app = TerminalApp::new(wireframe)?;
    app.run()
}
