//! Command line host for the framed automaton

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use framed_life::{
    automaton::RuleSet,
    config::{CliOverrides, FrameChoice, Settings, VariantChoice},
    render::CommandRecorder,
    utils::{ColorOutput, GridFormatter},
    Session,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "framed_life")]
#[command(about = "Animated cellular automaton inside a decorative frame")]
#[command(version = "0.1.0")]
struct Cli {
    /// Log at debug level (per-generation change counts)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Settings overrides shared by the commands that start a session
#[derive(clap::Args, Debug, Default)]
struct SessionArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Random seed (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Rule variant (overrides config)
    #[arg(long, value_enum)]
    variant: Option<VariantChoice>,

    /// Birth/survival rule for the standard variant, e.g. B36/S23
    #[arg(short, long)]
    rule: Option<RuleSet>,

    /// Frame style (overrides config)
    #[arg(long, value_enum)]
    frame: Option<FrameChoice>,

    /// Theme name (overrides config)
    #[arg(long)]
    theme: Option<String>,

    /// Generations computed per tick (overrides config)
    #[arg(short, long)]
    generations_per_tick: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the automaton in the terminal
    Run {
        #[command(flatten)]
        session: SessionArgs,

        /// Number of ticks to run (overrides config)
        #[arg(short, long)]
        ticks: Option<u64>,

        /// Step without drawing, then print a summary
        #[arg(long)]
        headless: bool,

        /// Draw the grid with row and column numbers instead of theme colours
        #[arg(long)]
        coords: bool,
    },

    /// Run some ticks and write the final frame's draw commands as JSON
    Snapshot {
        #[command(flatten)]
        session: SessionArgs,

        /// Number of ticks before capturing
        #[arg(short, long, default_value_t = 0)]
        ticks: u64,

        /// Output file
        #[arg(short, long, default_value = "output/snapshot.json")]
        output: PathBuf,
    },

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run { session, ticks, headless, coords } => {
            run_command(session, ticks, headless, coords)
        }
        Commands::Snapshot { session, ticks, output } => snapshot_command(session, ticks, output),
        Commands::Setup { directory, force } => setup_command(directory, force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", ColorOutput::error(&format!("Error: {err:#}")));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "framed_life=debug" } else { "framed_life=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the config file (or defaults) and apply command line overrides
fn load_settings(args: &SessionArgs, ticks: Option<u64>) -> Result<Settings> {
    let mut settings = if args.config.exists() {
        Settings::from_file(&args.config)
            .with_context(|| format!("Failed to load config from {}", args.config.display()))?
    } else {
        tracing::warn!("Config file {} not found, using defaults", args.config.display());
        Settings::default()
    };

    let cli_overrides = CliOverrides {
        seed: args.seed,
        ticks,
        generations_per_tick: args.generations_per_tick,
        rules: args.rule,
        variant: args.variant,
        frame: args.frame,
        theme: args.theme.clone(),
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

/// One terminal frame: the grid followed by a status line
fn frame_text(session: &Session, coords: bool) -> String {
    let automaton = session.automaton();
    let grid = if coords {
        GridFormatter::format_grid_with_coords(automaton.grid())
    } else {
        GridFormatter::format_grid_themed(automaton.grid(), &session.scene().theme)
    };
    format!(
        "{}{} | generation {} | changes {} | living {}",
        grid,
        automaton.policy(),
        automaton.generation(),
        automaton.last_changes().unwrap_or(0),
        automaton.grid().living_count(),
    )
}

fn run_command(args: SessionArgs, ticks: Option<u64>, headless: bool, coords: bool) -> Result<()> {
    let settings = load_settings(&args, ticks)?;
    let limit = settings.animation.ticks;
    let start_time = Instant::now();

    let session = if headless {
        let limit = limit.context("Headless runs need a tick limit (--ticks)")?;
        framed_life::run_headless(&settings, limit)?
    } else {
        let mut session = Session::new(&settings).context("Failed to start session")?;
        let tick_length = Duration::from_millis(settings.animation.tick_millis);
        let mut stdout = std::io::stdout().lock();
        while limit.map_or(true, |limit| session.ticks() < limit) {
            let frame_start = Instant::now();
            session.update();

            writeln!(
                stdout,
                "{}{}",
                ColorOutput::clear_screen(),
                frame_text(&session, coords)
            )?;
            stdout.flush()?;

            if let Some(rest) = tick_length.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
        session
    };

    let automaton = session.automaton();
    println!(
        "{}",
        ColorOutput::success(&format!(
            "Ran {} tick(s), {} generation(s) of {} in {:.3}s; {} living cells",
            session.ticks(),
            automaton.generation(),
            automaton.policy(),
            start_time.elapsed().as_secs_f64(),
            automaton.grid().living_count(),
        ))
    );

    Ok(())
}

fn snapshot_command(args: SessionArgs, ticks: u64, output: PathBuf) -> Result<()> {
    let settings = load_settings(&args, Some(ticks))?;
    let session = framed_life::run_headless(&settings, ticks)?;

    let mut canvas = CommandRecorder::new();
    session.render(&mut canvas);
    write_file(&output, &canvas.to_json().context("Failed to serialize draw commands")?)?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Wrote {} draw commands for generation {} to {}",
            canvas.commands().len(),
            session.automaton().generation(),
            output.display()
        ))
    );
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_dir = directory.join("config");
    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)
        .with_context(|| format!("Failed to create directory {}", examples_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!("Skipped: {} (already exists)", config_path.display()))
        );
    }

    // Mirror-symmetric variant with a pinned look
    let mut symmetric = Settings::default();
    symmetric.appearance.variant = VariantChoice::Symmetric;
    symmetric.appearance.frame = FrameChoice::Ornate;
    symmetric.appearance.theme = Some("indigo".to_string());
    symmetric.to_file(&examples_dir.join("symmetric.yaml"))?;

    // HighLife on a small, fast canvas
    let mut high_life = Settings::default();
    high_life.appearance.variant = VariantChoice::Standard;
    high_life.rules = "B36/S23".parse()?;
    high_life.canvas.width = 330;
    high_life.canvas.height = 330;
    high_life.animation.generations_per_tick = 2;
    high_life.to_file(&examples_dir.join("high_life.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "framed_life",
            "run",
            "--config",
            "test.yaml",
            "--rule",
            "B36/S23",
            "--variant",
            "symmetric",
            "--ticks",
            "5",
        ]);
        assert!(cli.is_ok());

        let bad_rule = Cli::try_parse_from(["framed_life", "run", "--rule", "B9/S23"]);
        assert!(bad_rule.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        let default_path = temp_dir.path().join("config/default.yaml");
        assert!(default_path.exists());
        let high_life =
            Settings::from_file(&temp_dir.path().join("config/examples/high_life.yaml")).unwrap();
        assert_eq!(high_life.rules.to_string(), "B36/S23");
        assert_eq!(high_life.canvas.grid_dimensions(), (28, 28));
    }

    #[test]
    fn test_snapshot_command() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("out/snapshot.json");
        let args = SessionArgs {
            config: temp_dir.path().join("missing.yaml"),
            seed: Some(4),
            ..Default::default()
        };
        snapshot_command(args, 3, output.clone()).unwrap();

        let json = std::fs::read_to_string(&output).unwrap();
        let commands: Vec<framed_life::render::DrawCommand> = serde_json::from_str(&json).unwrap();
        assert!(!commands.is_empty());
    }

    #[test]
    fn test_headless_run_needs_tick_limit() {
        let temp_dir = tempdir().unwrap();
        let args = || SessionArgs {
            config: temp_dir.path().join("missing.yaml"),
            seed: Some(6),
            ..Default::default()
        };

        assert!(run_command(args(), Some(4), true, false).is_ok());

        let err = run_command(args(), None, true, false).unwrap_err();
        assert!(err.to_string().contains("tick limit"));
    }

    #[test]
    fn test_frame_text_with_coords() {
        let mut settings = Settings::default();
        settings.canvas.width = 90;
        settings.canvas.height = 70;
        settings.animation.seed = Some(2);
        let session = framed_life::run_headless(&settings, 1).unwrap();

        let text = frame_text(&session, true);
        assert!(text.starts_with("    0 1 2 3\n 0 "));
        assert!(text.contains("| generation 1 |"));
        assert!(text.ends_with(&format!(
            "living {}",
            session.automaton().grid().living_count()
        )));
    }
}
