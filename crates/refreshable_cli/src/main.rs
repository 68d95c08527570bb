//! Refreshable CLI
//!
//! Drives a pull-to-refresh list with a simulated pull gesture and prints
//! each frame the host would draw.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::LocalSet;
use tracing::{info, warn};

mod config;
mod gesture;

use config::DemoFile;
use gesture::PullSimulator;
use refreshable_widgets::prelude::*;

#[derive(Parser)]
#[command(name = "refreshable")]
#[command(about = "Simulate pull-to-refresh on a scrolling list", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to refresh.toml (or a directory containing one)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Finger travel of the simulated pull, in pixels
    #[arg(long)]
    pull_distance: Option<f32>,

    /// How long the simulated refresh takes, in milliseconds
    #[arg(long)]
    refresh_ms: Option<u64>,

    /// Number of list rows after row 0
    #[arg(long)]
    items: Option<u32>,

    /// Make the refresh action fail
    #[arg(long)]
    fail: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut file = match &cli.config {
        Some(path) => DemoFile::load(path)?,
        None => DemoFile::default(),
    };
    if let Some(distance) = cli.pull_distance {
        file.demo.pull_distance = distance;
    }
    if let Some(ms) = cli.refresh_ms {
        file.demo.refresh_ms = ms;
    }
    if let Some(items) = cli.items {
        file.demo.items = items;
    }
    file.demo.fail |= cli.fail;

    if cli.print_config {
        print!("{}", file.to_toml()?);
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    LocalSet::new().block_on(&runtime, run(file))
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_target(false)
        .init();
}

async fn run(file: DemoFile) -> Result<()> {
    let demo = file.demo;
    let dt = demo.frame_dt();
    let refresh_delay = Duration::from_millis(demo.refresh_ms);
    let fail = demo.fail;

    let rows: Vec<String> = (0..=demo.items).map(|i| i.to_string()).collect();
    let mut list = refreshable(rows)
        .config(file.refresh)
        .spinner(file.spinner)
        .on_refresh(move || async move {
            tokio::time::sleep(refresh_delay).await;
            if fail {
                Err(RefreshError::action("simulated refresh failure"))
            } else {
                Ok(())
            }
        })
        .build();

    info!(
        "Pulling {:.0}px over {} rows (threshold {:.0})",
        demo.pull_distance,
        list.content().len(),
        list.config().pull_threshold
    );
    print_header();

    let mut gesture = PullSimulator::new(demo.viewport_height, file.overscroll);
    let mut pending = None;
    for offset in gesture.pull_and_release(demo.pull_distance, dt) {
        if let Some(handle) = list.handle_offset(offset) {
            pending = Some(handle);
        }
        list.update(dt);
        print_frame(&list);
    }

    let Some(mut handle) = pending else {
        info!("Pull released before reaching the threshold, no refresh");
        return Ok(());
    };

    // Keep presenting frames while the action runs
    let mut frames = tokio::time::interval(Duration::from_secs_f32(dt));
    let result = loop {
        tokio::select! {
            result = &mut handle => break result,
            _ = frames.tick() => {
                list.update(dt);
            }
        }
    };

    while list.update(dt) {
        print_frame(&list);
    }
    print_frame(&list);

    match result {
        Ok(()) => {
            info!("Refresh complete, {} rows", list.content().len());
            Ok(())
        }
        Err(err) => {
            warn!("Refresh failed: {}", err);
            Err(err).context("Refresh action failed")
        }
    }
}

fn print_header() {
    println!(
        "{:>8}  {:<10}  {:>9}  {:>7}  {:>5}  {:>6}",
        "offset", "phase", "spinner_y", "opacity", "scale", "spacer"
    );
}

fn print_frame<C>(list: &RefreshableScroll<C>) {
    let layout = list.build();
    println!(
        "{:>8.1}  {:<10}  {:>9.1}  {:>7.2}  {:>5.2}  {:>6.1}",
        list.scroll_offset(),
        format!("{:?}", list.phase()),
        layout.spinner.offset_y,
        layout.spinner.opacity,
        layout.spinner.scale,
        layout.spacer_height
    );
}
