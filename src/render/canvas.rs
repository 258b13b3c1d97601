//! Drawing primitives and a recording backend

use crate::error::{LifeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::gray(0);
    pub const GOLD: Rgb = Rgb::new(255, 215, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::new(level, level, level)
    }

    /// Parse a `#RRGGBB` literal (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || LifeError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = LifeError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

/// The drawing surface the scene is rendered onto.
///
/// Mirrors an immediate-mode sketch API: colour and stroke are state that
/// applies to every following `rect`.
pub trait Canvas {
    /// Clear the whole surface with a colour
    fn background(&mut self, color: Rgb);

    /// Fill colour for following rectangles; `None` leaves them hollow
    fn set_fill(&mut self, color: Option<Rgb>);

    /// Outline colour and weight for following rectangles
    fn set_stroke(&mut self, color: Rgb, weight: f32);

    /// Draw a rectangle with the current fill and stroke
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Background { color: Rgb },
    Fill { color: Option<Rgb> },
    Stroke { color: Rgb, weight: f32 },
    Rect { x: f32, y: f32, width: f32, height: f32 },
}

/// Canvas that records every call, used for snapshots and tests
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Rectangles drawn while `fill` was the active fill colour
    pub fn rects_filled_with(&self, fill: Option<Rgb>) -> Vec<(f32, f32, f32, f32)> {
        let mut current = None;
        let mut rects = Vec::new();
        for command in &self.commands {
            match *command {
                DrawCommand::Fill { color } => current = color,
                DrawCommand::Rect { x, y, width, height } if current == fill => {
                    rects.push((x, y, width, height));
                }
                _ => {}
            }
        }
        rects
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.commands)
    }
}

impl Canvas for CommandRecorder {
    fn background(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Background { color });
    }

    fn set_fill(&mut self, color: Option<Rgb>) {
        self.commands.push(DrawCommand::Fill { color });
    }

    fn set_stroke(&mut self, color: Rgb, weight: f32) {
        self.commands.push(DrawCommand::Stroke { color, weight });
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::Rect { x, y, width, height });
    }
}
