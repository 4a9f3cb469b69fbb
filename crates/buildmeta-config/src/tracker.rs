//! Configuration file change tracking.
//!
//! A host creates one [`FileChangeTracker`] per session and shares it
//! between the services that load project configurations. Entries are keyed
//! by absolute path and are independent of each other.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::trace;

/// Last-seen modification times, safe to share across threads.
#[derive(Debug, Default)]
pub struct FileChangeTracker {
    stamps: Mutex<HashMap<PathBuf, DateTime<Utc>>>,
}

impl FileChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the file was modified since the last check, recording the
    /// current time stamp when it was. A missing file never counts as
    /// changed.
    pub fn check_and_update(&self, path: &Path) -> bool {
        let Some(modified) = modified_at(path) else {
            return false;
        };
        let key = absolute(path);

        let mut stamps = self.stamps.lock().unwrap_or_else(PoisonError::into_inner);
        let changed = stamps.get(&key).is_none_or(|seen| modified > *seen);
        if changed {
            trace!(path = %key.display(), %modified, "Recorded configuration time stamp");
            stamps.insert(key, modified);
        }
        changed
    }

    /// Start tracking a file at its current time stamp. Missing files are
    /// ignored.
    pub fn register(&self, path: &Path) {
        if let Some(modified) = modified_at(path) {
            self.stamps
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .insert(absolute(path), modified);
        }
    }

    /// Forget a file, so the next check reports it as changed.
    pub fn clear(&self, path: &Path) {
        self.stamps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&absolute(path));
    }

    /// Last recorded time stamp for a file.
    pub fn last_seen(&self, path: &Path) -> Option<DateTime<Utc>> {
        self.stamps
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&absolute(path))
            .copied()
    }
}

fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
