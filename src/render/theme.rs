//! Colour themes

use super::canvas::Rgb;
use crate::error::{LifeError, Result};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

/// Background and live-cell colour pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub cell: Rgb,
}

const fn theme(name: &'static str, background: Rgb, cell: Rgb) -> Theme {
    Theme { name, background, cell }
}

/// Built-in palette
pub const THEMES: [Theme; 10] = [
    theme("ember", Rgb::new(0xF0, 0xF0, 0xF0), Rgb::new(0xFF, 0x45, 0x00)),
    theme("terminal", Rgb::new(0x22, 0x22, 0x22), Rgb::new(0x00, 0xFF, 0x00)),
    theme("tomato", Rgb::new(0xFF, 0xFF, 0xFF), Rgb::new(0xFF, 0x63, 0x47)),
    theme("deep-blue", Rgb::new(0x0D, 0x3B, 0x66), Rgb::new(0xFA, 0xF0, 0xCA)),
    theme("orchid", Rgb::new(0x54, 0x0D, 0x6E), Rgb::new(0xEE, 0x42, 0x66)),
    theme("lemon", Rgb::new(0xFF, 0xE7, 0x4C), Rgb::new(0x2D, 0x31, 0x42)),
    theme("slate", Rgb::new(0x2F, 0x48, 0x58), Rgb::new(0xF6, 0xAE, 0x2D)),
    theme("ocean", Rgb::new(0x33, 0x65, 0x8A), Rgb::new(0xF6, 0xF7, 0xEB)),
    theme("navy", Rgb::new(0x08, 0x67, 0x88), Rgb::new(0xF0, 0xC8, 0x08)),
    theme("indigo", Rgb::new(0x2E, 0x29, 0x4E), Rgb::new(0xEF, 0xBC, 0xD5)),
];

impl Theme {
    /// Look up a built-in theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Result<Self> {
        THEMES
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| LifeError::UnknownTheme {
                name: name.to_string(),
                available: Self::names().join(", "),
            })
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *THEMES.choose(rng).unwrap_or(&THEMES[0])
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        THEMES.iter().map(|theme| theme.name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[1]
    }
}
