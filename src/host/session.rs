//! One animation session: the automaton plus its randomized presentation

use crate::automaton::{Automaton, RandomSource, RulePolicy};
use crate::config::{Settings, VariantChoice};
use crate::render::{Canvas, Frame, FrameStyle, Scene, Theme};
use anyhow::{Context, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Drives the automaton at a fixed number of generations per host tick.
///
/// The host calls [`Session::update`] and then [`Session::render`] once per
/// tick; the two never overlap, so the renderer always sees a complete
/// generation.
#[derive(Debug)]
pub struct Session {
    automaton: Automaton,
    scene: Scene,
    generations_per_tick: usize,
    tick: u64,
}

impl Session {
    /// Pick the variant, theme and frame (random unless pinned) and seed the grid
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let rng = match settings.animation.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut source = RandomSource::new(rng);

        let policy = match settings.appearance.variant {
            VariantChoice::Standard => RulePolicy::standard(settings.rules),
            VariantChoice::Symmetric => RulePolicy::symmetric(),
            VariantChoice::Random => {
                if source.rng_mut().gen_bool(0.5) {
                    RulePolicy::standard(settings.rules)
                } else {
                    RulePolicy::symmetric()
                }
            }
        };

        let theme = match settings.appearance.theme {
            Some(ref name) => Theme::by_name(name)?,
            None => Theme::random(source.rng_mut()),
        };

        let style = settings.appearance.frame.style().unwrap_or_else(|| {
            if source.rng_mut().gen_bool(0.5) {
                FrameStyle::Straight
            } else {
                FrameStyle::Ornate
            }
        });

        let canvas = &settings.canvas;
        let (inner_width, inner_height) = canvas.inner_size();
        let (cols, rows) = canvas.grid_dimensions();

        let automaton = Automaton::new(policy, cols, rows, &mut source)
            .context("Failed to construct automaton")?;

        tracing::info!(
            policy = %policy,
            theme = theme.name,
            frame = ?style,
            cols,
            rows,
            "session started"
        );

        Ok(Self {
            automaton,
            scene: Scene {
                theme,
                frame: Frame::new(
                    style,
                    inner_width as f32,
                    inner_height as f32,
                    canvas.frame_thickness as f32,
                ),
                margin: canvas.margin as f32,
                resolution: canvas.resolution as f32,
            },
            generations_per_tick: settings.animation.generations_per_tick,
            tick: 0,
        })
    }

    /// Advance by `generations_per_tick` generations
    pub fn update(&mut self) {
        self.automaton.step_n(self.generations_per_tick);
        self.tick += 1;
    }

    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.scene.draw(canvas, self.automaton.grid());
    }

    /// One host tick: update, then render the new generation
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.update();
        self.render(canvas);
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }
}
