/// Character-grid drawing surface for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;
use wirecube_core::DrawSurface;

const EDGE_CHAR: char = '#';
const MARKER_CHAR: char = 'o';

/// A fixed-size character grid implementing the core drawing interface.
/// One pixel maps to one terminal cell.
pub struct CharCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[cfg(test)]
    pub fn cell(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    fn plot(&mut self, x: i32, y: i32, c: char) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = c;
    }

    /// Write the grid to the terminal, one styled row at a time.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.cells[y * self.width + x];
                let color = match c {
                    MARKER_CHAR => Color::Red,
                    EDGE_CHAR => Color::Cyan,
                    _ => Color::DarkGrey,
                };
                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl DrawSurface for CharCanvas {
    fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = ' ';
        }
    }

    // Bresenham over rounded endpoints
    fn stroke_line(&mut self, from: Point2<f32>, to: Point2<f32>) {
        let (mut x0, mut y0) = (from.x.round() as i32, from.y.round() as i32);
        let (x1, y1) = (to.x.round() as i32, to.y.round() as i32);

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, EDGE_CHAR);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn fill_disc(&mut self, center: Point2<f32>, radius: f32) {
        let cx = center.x.round() as i32;
        let cy = center.y.round() as i32;
        let r = radius.ceil() as i32;
        let r2 = radius * radius;

        for y in (cy - r)..=(cy + r) {
            for x in (cx - r)..=(cx + r) {
                let dx = x as f32 - center.x;
                let dy = y as f32 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.plot(x, y, MARKER_CHAR);
                }
            }
        }
    }
}
