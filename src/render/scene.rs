//! Composes background, frame and cells into one draw pass

use super::canvas::{Canvas, Rgb};
use super::frame::Frame;
use super::theme::Theme;
use crate::automaton::Grid;

/// Cell outline weight
const CELL_STROKE_WEIGHT: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub theme: Theme,
    pub frame: Frame,
    /// Offset of the frame and the grid from the canvas corner
    pub margin: f32,
    /// Cell size in canvas units
    pub resolution: f32,
}

impl Scene {
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, grid: &Grid) {
        canvas.background(self.theme.background);
        self.frame.draw(canvas, self.margin, self.margin);

        canvas.set_stroke(Rgb::BLACK, CELL_STROKE_WEIGHT);
        let mut fill = None;
        canvas.set_fill(fill);

        let size = self.resolution - 1.0;
        for x in 0..grid.cols() {
            for y in 0..grid.rows() {
                let wanted = grid.get(x, y).then_some(self.theme.cell);
                if wanted != fill {
                    fill = wanted;
                    canvas.set_fill(fill);
                }
                canvas.rect(
                    x as f32 * self.resolution + self.margin,
                    y as f32 * self.resolution + self.margin,
                    size,
                    size,
                );
            }
        }
    }
}
