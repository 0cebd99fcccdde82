//! Binary entrypoint for marquee.
//!
//! Delegates all logic to the library crate; no local modules here.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use marquee::carousel::Carousel;
use marquee::config::Configuration;
use marquee::error::Error;
use marquee::events::{Click, Tick};
use marquee::menu::Menu;
use marquee::surface::LogSurface;
use marquee::tasks::{input, ticker, viewer};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "marquee", about = "Headless looping carousel engine")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the advance interval (ms)
    #[arg(long, value_name = "MILLIS")]
    interval_ms: Option<u64>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("marquee={}", level).parse()?);
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = Configuration::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?
        .validated()
        .context("validating configuration")?;
    if let Some(ms) = cli.interval_ms {
        cfg.advance_interval = Duration::from_millis(ms);
    }
    info!(
        slides = cfg.slides.len(),
        interval = %humantime::format_duration(cfg.advance_interval),
        "configuration loaded"
    );

    let carousel = match Carousel::from_slides(&cfg.slides, cfg.transition_duration) {
        Ok(carousel) => Some(carousel),
        Err(Error::EmptyTrack) => {
            warn!("no slides configured; carousel disabled");
            None
        }
        Err(err) => return Err(err.into()),
    };
    let menu = match &cfg.menu {
        Some(opts) => {
            info!(toggle = %opts.toggle_id, menu = %opts.menu_id, "menu controller bound");
            Some(Menu::new())
        }
        None => {
            info!("no menu configured; toggle handling skipped");
            None
        }
    };

    let cancel = CancellationToken::new();
    let (tick_tx, tick_rx) = mpsc::channel::<Tick>(8);
    let (click_tx, click_rx) = mpsc::channel::<Click>(16);

    // Without slides there is nothing to advance, so the timer never starts.
    let ticker_handle = carousel.is_some().then(|| {
        tokio::spawn(ticker::run(
            cfg.advance_interval,
            tick_tx,
            cancel.clone(),
        ))
    });
    let input_handle = tokio::spawn(input::run(click_tx, cancel.clone()));

    let surface = LogSurface::new(
        carousel
            .as_ref()
            .map(Carousel::track_labels)
            .unwrap_or_default(),
    );
    let viewer_handle = tokio::spawn(viewer::run(
        carousel,
        menu,
        surface,
        tick_rx,
        click_rx,
        cancel.clone(),
    ));

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    info!("shutdown requested");
    cancel.cancel();

    if let Some(handle) = ticker_handle {
        let _ = handle.await;
    }
    let _ = input_handle.await;
    let _ = viewer_handle.await;
    Ok(())
}
