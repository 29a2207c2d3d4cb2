//! Disk-backed store for the selected station.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::domain::StationId;

use super::error::SelectionError;

/// Default selection file, relative to the working directory.
pub const DEFAULT_SELECTION_FILE: &str = "selected_station.json";

/// On-disk representation of the selection.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSelection {
    station_id: String,
    /// Unix timestamp when the station was selected.
    selected_at_secs: u64,
}

/// Configuration for the selection store.
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    /// Path to the selection file.
    pub path: PathBuf,
}

impl SelectionConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION_FILE)
    }
}

/// The station the user pinned, persisted across restarts.
///
/// The file is read once on construction. Every change is written back to
/// disk and published to subscribers.
#[derive(Debug)]
pub struct SelectionStore {
    config: SelectionConfig,
    sender: watch::Sender<Option<StationId>>,
}

impl SelectionStore {
    /// Open the store, loading any previous selection.
    ///
    /// A missing file means nothing is selected. An unreadable or corrupt
    /// file is logged and treated the same way.
    pub fn new(config: SelectionConfig) -> Self {
        let current = load(&config.path);
        let (sender, _) = watch::channel(current);
        Self { config, sender }
    }

    /// The currently selected station, if any.
    pub fn get(&self) -> Option<StationId> {
        self.sender.borrow().clone()
    }

    /// Select `station` and persist the choice.
    pub fn set(&self, station: StationId) -> Result<(), SelectionError> {
        let selected_at_secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| SelectionError::Clock)?
            .as_secs();

        let persisted = PersistedSelection {
            station_id: station.as_str().to_string(),
            selected_at_secs,
        };

        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(SelectionError::CreateDir)?;
        }

        let json = serde_json::to_string_pretty(&persisted)?;
        std::fs::write(&self.config.path, json).map_err(SelectionError::Write)?;

        info!(station = station.as_str(), "selected station");
        self.sender.send_replace(Some(station));
        Ok(())
    }

    /// Forget the selection and delete the file.
    pub fn clear(&self) -> Result<(), SelectionError> {
        match std::fs::remove_file(&self.config.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(SelectionError::Write(e)),
        }

        info!("cleared station selection");
        self.sender.send_replace(None);
        Ok(())
    }

    /// Receive every future change of the selection.
    pub fn subscribe(&self) -> watch::Receiver<Option<StationId>> {
        self.sender.subscribe()
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

fn load(path: &Path) -> Option<StationId> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read selection file");
            return None;
        }
    };

    let persisted: PersistedSelection = match serde_json::from_str(&contents) {
        Ok(persisted) => persisted,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring corrupt selection file");
            return None;
        }
    };

    match StationId::parse(&persisted.station_id) {
        Ok(id) => Some(id),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring invalid selected station");
            None
        }
    }
}
