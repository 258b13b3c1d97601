//! Configuration management for the framed automaton

pub mod settings;

pub use settings::{
    AnimationConfig, AppearanceConfig, CanvasConfig, CliOverrides, FrameChoice, Settings,
    VariantChoice,
};
