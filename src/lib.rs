//! Framed Life
//!
//! An animated cellular automaton on a toroidal grid, drawn inside a
//! decorative frame. Each run picks a rule variant (free-running or
//! left/right mirror-symmetric), a colour theme and a frame style.

pub mod automaton;
pub mod config;
pub mod error;
pub mod host;
pub mod render;
pub mod utils;

pub use automaton::{Automaton, Grid, RulePolicy, RuleSet};
pub use config::Settings;
pub use error::LifeError;
pub use host::Session;

use anyhow::Result;

/// Run a headless session for `ticks` ticks and return it for inspection
pub fn run_headless(settings: &Settings, ticks: u64) -> Result<Session> {
    let mut session = Session::new(settings)?;
    for _ in 0..ticks {
        session.update();
    }
    Ok(session)
}
