//! Drawing the automaton: canvas abstraction, themes, frames

pub mod canvas;
pub mod frame;
pub mod scene;
pub mod theme;

pub use canvas::{Canvas, CommandRecorder, DrawCommand, Rgb};
pub use frame::{Frame, FrameStyle};
pub use scene::Scene;
pub use theme::{Theme, THEMES};
