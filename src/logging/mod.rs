//! Diagnostics and the event journal.
//!
//! Diagnostics go through `tracing` to stderr. When enabled, the journal
//! appends every applied event as a JSON line to a daily file named
//! `events_<date>.log` in the configured directory
//! (default: `~/.local/share/ircsync/journal/`).

use crate::app::event::Event;
use crate::config::JournalConfig;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "IRCSYNC_LOG";

/// Install the stderr subscriber. `IRCSYNC_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Writes applied events to daily journal files.
///
/// File handles are cached for the lifetime of the journal. A file that
/// cannot be opened is reported once per write attempt and skipped.
pub struct EventJournal {
    enabled: bool,
    dir: PathBuf,
    file_handles: HashMap<String, fs::File>,
}

impl EventJournal {
    pub fn new(config: &JournalConfig) -> Self {
        Self {
            enabled: config.enabled,
            dir: expand_home(&config.dir),
            file_handles: HashMap::new(),
        }
    }

    pub fn record(&mut self, event: &Event) {
        if !self.enabled {
            return;
        }

        let now = chrono::Local::now();
        let line = serde_json::json!({
            "at": now.to_rfc3339(),
            "event": event,
        });
        let filename = format!("events_{}.log", now.format("%Y-%m-%d"));

        if !self.file_handles.contains_key(&filename) {
            let _ = fs::create_dir_all(&self.dir);
            match OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.dir.join(&filename))
            {
                Ok(file) => {
                    self.file_handles.insert(filename.clone(), file);
                }
                Err(e) => {
                    tracing::warn!(error = %e, dir = %self.dir.display(), "cannot open journal");
                    return;
                }
            }
        }

        if let Some(handle) = self.file_handles.get_mut(&filename) {
            if let Err(e) = writeln!(handle, "{}", line) {
                tracing::warn!(error = %e, "journal write failed");
            }
        }
    }
}

fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(dir)),
        None => PathBuf::from(dir),
    }
}
