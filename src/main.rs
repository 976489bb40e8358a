use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use bestshot::loader::load_workout_log;
use bestshot::report::{render_exercise, render_json, render_overview};
use bestshot::watcher::{WatcherConfig, watch_file};

/// Estimated one-rep-max tracking from a plain-text workout log.
#[derive(Parser, Debug)]
#[command(name = "bestshot")]
#[command(about = "Estimate one-rep maxes per exercise from a workout log")]
#[command(version)]
struct Args {
    /// Path to the workout log (`Oct 11 2020,Back Squat,10,45` per line).
    /// Can also be set via BESTSHOT_FILE environment variable.
    #[arg(value_name = "FILE", env = "BESTSHOT_FILE")]
    file: PathBuf,

    /// Show the per-date 1RM series for this exercise.
    /// Can also be set via BESTSHOT_EXERCISE environment variable.
    #[arg(short, long, value_name = "NAME", env = "BESTSHOT_EXERCISE")]
    exercise: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Keep running and print the report again whenever the file changes.
    #[arg(short, long)]
    watch: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Arc::new(Args::parse());

    // A missing or unreadable log is fatal, including in watch mode
    report(&args).with_context(|| format!("Failed to report on {}", args.file.display()))?;

    if !args.watch {
        return Ok(());
    }

    let config = WatcherConfig::default();
    let retry_config = config.clone();
    let watch_path = args.file.clone();

    println!();
    println!("Live reload enabled - watching for file changes");

    watch_file(&watch_path, config, move || {
        let args = args.clone();
        let config = retry_config.clone();
        tokio::spawn(async move {
            reload_with_retry(&args, &config).await;
        });
    })
    .await
    .context("File watcher failed")?;

    Ok(())
}

/// Loads the log and prints the requested report.
fn report(args: &Args) -> Result<()> {
    let log = load_log(&args.file)?;

    let output = if args.json {
        render_json(&log, args.exercise.as_deref())?
    } else {
        match &args.exercise {
            Some(name) => format!("{}\n{}", render_overview(&log), render_exercise(&log, name)?),
            None => render_overview(&log),
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_log(path: &Path) -> Result<bestshot::WorkoutLog> {
    load_workout_log(path)
        .with_context(|| format!("Failed to load workout log from {}", path.display()))
}

/// Reloads and reprints with retry logic for transient failures.
async fn reload_with_retry(args: &Args, config: &WatcherConfig) {
    let mut last_error = None;

    for attempt in 0..config.retry_attempts {
        match report(args) {
            Ok(()) => {
                log::info!("Workout log reloaded successfully");
                return;
            }
            Err(e) => {
                log::warn!("Reload attempt {} failed: {:#}", attempt + 1, e);
                last_error = Some(e);
                tokio::time::sleep(config.retry_delay).await;
            }
        }
    }

    if let Some(e) = last_error {
        log::error!(
            "Failed to reload workout log after {} attempts: {:#}",
            config.retry_attempts,
            e
        );
    }
}
