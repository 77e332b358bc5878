//! Terminal runner (default binary).
//!
//! Polls crossterm for key events between frames, feeds them through the
//! configured key map, and advances the host driver by the measured frame time.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameConfig;
use blockfall::host::Driver;
use blockfall::input::{should_quit, KeyMap};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

/// Falling-block puzzle with freshly generated piece shapes every game.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON configuration file (camelCase keys, missing keys take defaults).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible shapes, pieces and colors.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the default configuration as JSON and exit.
    #[arg(long)]
    print_default_config: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    if args.print_default_config {
        println!("{}", GameConfig::default().to_json_pretty()?);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, args.seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig, seed: Option<u64>) -> Result<()> {
    let keys = KeyMap::new(&config.keys);
    let mut driver = Driver::new(config, seed);
    log::info!("starting, seed={:?}", seed);

    let view = GameView;
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(&view.render(&driver, Viewport::new(w, h)))?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if should_quit(&keys, key) {
                        return Ok(());
                    }
                    if let Some(action) = keys.handle_key_event(key) {
                        driver.handle(action);
                    }
                }
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            driver.advance(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}
