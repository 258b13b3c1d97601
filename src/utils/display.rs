//! Terminal rendering of grids and status output

use crate::automaton::Grid;
use crate::render::{Rgb, Theme};

/// Format grids for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows() * (grid.cols() * 3 + 1));
        for y in 0..grid.rows() {
            for x in 0..grid.cols() {
                output.push(if grid.get(x, y) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.cols() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for y in 0..grid.rows() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.cols() {
                output.push_str(if grid.get(x, y) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Two terminal columns per cell, painted in the theme's colours
    pub fn format_grid_themed(grid: &Grid, theme: &Theme) -> String {
        if !ColorOutput::supports_color() {
            return Self::format_grid_compact(grid);
        }

        let mut output = String::new();
        for y in 0..grid.rows() {
            output.push_str(&ColorOutput::background_code(theme.background));
            let mut painted = None;
            for x in 0..grid.cols() {
                let alive = grid.get(x, y);
                if painted != Some(alive) {
                    let color = if alive { theme.cell } else { theme.background };
                    output.push_str(&ColorOutput::foreground_code(color));
                    painted = Some(alive);
                }
                output.push_str(if alive { "██" } else { "  " });
            }
            output.push_str(ColorOutput::RESET);
            output.push('\n');
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    const RESET: &'static str = "\x1b[0m";

    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}{}", color.code(), text, Self::RESET)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    pub fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    fn foreground_code(color: Rgb) -> String {
        format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
    }

    fn background_code(color: Rgb) -> String {
        format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
    }

    /// Move the cursor home and clear the screen
    pub fn clear_screen() -> &'static str {
        "\x1b[H\x1b[2J"
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_formatting() {
        let grid = Grid::with_living(3, 2, &[(0, 0), (2, 1)]).unwrap();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert_eq!(compact, "█··\n··█\n");

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.starts_with("    0 1 2\n"));
        assert!(with_coords.contains(" 1 ····██"));
    }

    #[test]
    fn test_themed_formatting_keeps_shape() {
        let grid = Grid::with_living(4, 3, &[(1, 1)]).unwrap();
        let themed = GridFormatter::format_grid_themed(&grid, &Theme::default());
        assert_eq!(themed.lines().count(), 3);
        assert!(themed.contains('█'));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));

        let error = ColorOutput::error("Error: boom");
        assert!(error.contains("Error: boom"));
    }
}
