//! Stations loaded from a JSON dump on disk.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::WeatherStation;

use super::convert::convert_stations;
use super::error::SourceError;
use super::types::StationDump;
use super::{SourceFuture, StationSource};

/// Default dump file, relative to the working directory.
pub const DEFAULT_STATIONS_FILE: &str = "stations.json";

/// Reads the station dump on every fetch.
///
/// The dump is refreshed by whatever exports it, so nothing is cached here.
#[derive(Debug, Clone)]
pub struct FileStationSource {
    path: PathBuf,
}

impl FileStationSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<WeatherStation>, SourceError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let dtos = serde_json::from_str::<StationDump>(&contents)?.into_stations();
        if dtos.is_empty() {
            return Err(SourceError::Empty {
                path: self.path.clone(),
            });
        }

        let stations = convert_stations(&dtos);
        debug!(
            path = %self.path.display(),
            records = dtos.len(),
            stations = stations.len(),
            "loaded station dump"
        );
        Ok(stations)
    }
}

impl Default for FileStationSource {
    fn default() -> Self {
        Self::new(DEFAULT_STATIONS_FILE)
    }
}

impl StationSource for FileStationSource {
    fn load(&self) -> SourceFuture<'_, Vec<WeatherStation>> {
        Box::pin(self.read())
    }
}
