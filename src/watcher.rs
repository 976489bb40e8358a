//! File watching for automatic workout log reload.
//!
//! Watches the record file for modifications and triggers a reload callback
//! once the file has been quiet for the debounce period. Editors often write
//! a file in several steps, so a burst of events produces a single reload.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;
use tokio::sync::mpsc;

/// Configuration for file watching.
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// Quiet time required after the last event (default: 2 seconds).
    pub debounce_duration: Duration,
    /// Number of retry attempts for reload (default: 3).
    pub retry_attempts: u32,
    /// Delay between retry attempts (default: 500ms).
    pub retry_delay: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            debounce_duration: Duration::from_secs(2),
            retry_attempts: 3,
            retry_delay: Duration::from_millis(500),
        }
    }
}

/// Errors that can occur during file watching.
#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("Failed to create watcher: {0}")]
    NotifyError(#[from] notify::Error),

    #[error("Watch path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

/// Trailing-edge debouncer: fires once no event arrived for `quiet_period`.
#[derive(Debug)]
struct Debouncer {
    last_event: Option<Instant>,
    quiet_period: Duration,
}

impl Debouncer {
    fn new(quiet_period: Duration) -> Self {
        Self {
            last_event: None,
            quiet_period,
        }
    }

    /// Records an event at `now`, pushing the deadline back.
    fn touch(&mut self, now: Instant) {
        self.last_event = Some(now);
    }

    /// When the pending trigger is due, if any.
    fn deadline(&self) -> Option<Instant> {
        self.last_event.map(|t| t + self.quiet_period)
    }

    /// Returns true and clears the pending trigger if it is due at `now`.
    fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }
}

/// Returns true if the event is a create, write or removal of `file_name`.
fn is_relevant(event: &Event, file_name: Option<&std::ffi::OsStr>) -> bool {
    let touches_file = event
        .paths
        .iter()
        .any(|p| file_name.is_some_and(|name| p.file_name() == Some(name)));

    touches_file
        && matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
        )
}

/// Starts watching a file for modifications.
///
/// Calls `on_change` after a burst of modifications has settled.
///
/// This function blocks until an error occurs or the watcher is dropped.
pub async fn watch_file<F>(
    path: impl AsRef<Path>,
    config: WatcherConfig,
    on_change: F,
) -> Result<(), WatcherError>
where
    F: Fn() + Send + 'static,
{
    let path = path.as_ref();

    let canonical_path = path
        .canonicalize()
        .map_err(|_| WatcherError::PathNotFound(path.to_path_buf()))?;
    let watch_dir = canonical_path.parent().unwrap_or(&canonical_path);
    let file_name = canonical_path.file_name().map(|s| s.to_owned());

    log::info!("Watching file: {}", canonical_path.display());
    log::debug!("Watch directory: {}", watch_dir.display());

    let (tx, mut rx) = mpsc::channel::<Event>(100);

    let mut watcher = RecommendedWatcher::new(
        move |result: Result<Event, notify::Error>| {
            if let Ok(event) = result {
                // Drop the event if the channel is full; a reload is pending anyway
                let _ = tx.try_send(event);
            }
        },
        notify::Config::default(),
    )?;

    // Watch the parent directory (more reliable for file replacements)
    watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;

    let mut debouncer = Debouncer::new(config.debounce_duration);

    loop {
        let next = match debouncer.deadline() {
            Some(deadline) => {
                let deadline = tokio::time::Instant::from_std(deadline);
                match tokio::time::timeout_at(deadline, rx.recv()).await {
                    Ok(next) => next,
                    Err(_) => {
                        if debouncer.take_due(Instant::now()) {
                            log::info!("File changed, triggering reload");
                            on_change();
                        }
                        continue;
                    }
                }
            }
            None => rx.recv().await,
        };

        let Some(event) = next else {
            return Err(WatcherError::ChannelClosed);
        };

        if is_relevant(&event, file_name.as_deref()) {
            log::debug!("File event: {:?}", event.kind);
            debouncer.touch(Instant::now());
        }
    }
}
