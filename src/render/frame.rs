//! Decorative borders drawn around the grid

use super::canvas::{Canvas, Rgb};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStyle {
    /// Gray tiles along every edge
    Straight,
    /// Lighter tiles with gold corner blocks
    Ornate,
}

/// A border of square tiles, `thickness` wide, around a `width x height` area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub style: FrameStyle,
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
}

impl Frame {
    pub fn new(style: FrameStyle, width: f32, height: f32, thickness: f32) -> Self {
        Self {
            style,
            width,
            height,
            thickness,
        }
    }

    /// Draw the frame with its top-left corner at `(origin_x, origin_y)`
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, origin_x: f32, origin_y: f32) {
        match self.style {
            FrameStyle::Straight => {
                canvas.set_fill(Some(Rgb::gray(100)));
                canvas.set_stroke(Rgb::BLACK, 1.0);
                self.draw_tiles(canvas, origin_x, origin_y);
            }
            FrameStyle::Ornate => {
                canvas.set_fill(Some(Rgb::gray(150)));
                canvas.set_stroke(Rgb::gray(50), 1.0);
                self.draw_tiles(canvas, origin_x, origin_y);

                canvas.set_fill(Some(Rgb::GOLD));
                let corner = self.thickness * 3.0;
                let right = origin_x + self.width - corner;
                let bottom = origin_y + self.height - corner;
                for (x, y) in [
                    (origin_x, origin_y),
                    (right, origin_y),
                    (origin_x, bottom),
                    (right, bottom),
                ] {
                    canvas.rect(x, y, corner, corner);
                }
            }
        }
    }

    fn draw_tiles<C: Canvas + ?Sized>(&self, canvas: &mut C, origin_x: f32, origin_y: f32) {
        let t = self.thickness;
        if t <= 0.0 {
            return;
        }

        let mut x = 0.0;
        while x < self.width {
            canvas.rect(origin_x + x, origin_y, t, t);
            canvas.rect(origin_x + x, origin_y + self.height - t, t, t);
            x += t;
        }

        let mut y = 0.0;
        while y < self.height {
            canvas.rect(origin_x, origin_y + y, t, t);
            canvas.rect(origin_x + self.width - t, origin_y + y, t, t);
            y += t;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::canvas::CommandRecorder;

    #[test]
    fn test_straight_frame_tiles() {
        let mut canvas = CommandRecorder::new();
        Frame::new(FrameStyle::Straight, 100.0, 50.0, 10.0).draw(&mut canvas, 25.0, 25.0);

        // 10 tiles per horizontal edge, 5 per vertical edge
        let tiles = canvas.rects_filled_with(Some(Rgb::gray(100)));
        assert_eq!(tiles.len(), 2 * 10 + 2 * 5);
        assert!(tiles.contains(&(25.0, 25.0, 10.0, 10.0)));
        assert!(tiles.contains(&(115.0, 65.0, 10.0, 10.0)));
    }

    #[test]
    fn test_ornate_frame_corners() {
        let mut canvas = CommandRecorder::new();
        Frame::new(FrameStyle::Ornate, 650.0, 650.0, 10.0).draw(&mut canvas, 0.0, 0.0);

        let corners = canvas.rects_filled_with(Some(Rgb::GOLD));
        assert_eq!(
            corners,
            vec![
                (0.0, 0.0, 30.0, 30.0),
                (620.0, 0.0, 30.0, 30.0),
                (0.0, 620.0, 30.0, 30.0),
                (620.0, 620.0, 30.0, 30.0),
            ]
        );
        assert_eq!(canvas.rects_filled_with(Some(Rgb::gray(150))).len(), 4 * 65);
    }

    #[test]
    fn test_zero_thickness_draws_no_tiles() {
        let mut canvas = CommandRecorder::new();
        Frame::new(FrameStyle::Straight, 100.0, 100.0, 0.0).draw(&mut canvas, 0.0, 0.0);
        assert!(canvas.rects_filled_with(Some(Rgb::gray(100))).is_empty());
    }
}
