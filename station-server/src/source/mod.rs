//! Where stations come from.
//!
//! The station feed is owned by a separate data service. This module reads
//! its JSON dump and converts it to domain types; screens only ever see
//! [`WeatherStation`]s.

mod convert;
mod error;
mod file;
mod memory;
mod types;

use std::future::Future;
use std::pin::Pin;

pub use convert::{ConversionError, convert_station, convert_stations};
pub use error::SourceError;
pub use file::{DEFAULT_STATIONS_FILE, FileStationSource};
pub use memory::StaticStationSource;
pub use types::{DateDto, GeoPointDto, StationDto, StationDump, ValueArrayDto, ValueDto};

use crate::domain::{StationId, WeatherStation};

/// Boxed future returned by [`StationSource`] methods.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + Send + 'a>>;

/// A provider of weather stations.
///
/// Implementors only supply [`load`](StationSource::load); the fetch
/// methods filter its result.
pub trait StationSource: Send + Sync {
    /// Every station record, including stations under maintenance.
    fn load(&self) -> SourceFuture<'_, Vec<WeatherStation>>;

    /// Stations that are in service, in feed order.
    fn fetch_all(&self) -> SourceFuture<'_, Vec<WeatherStation>> {
        Box::pin(async move {
            let mut stations = self.load().await?;
            stations.retain(|s| !s.maintenance);
            Ok(stations)
        })
    }

    /// The in-service station with the given id.
    fn fetch_by_id<'a>(&'a self, id: &'a StationId) -> SourceFuture<'a, Option<WeatherStation>> {
        Box::pin(async move {
            let stations = self.fetch_all().await?;
            Ok(stations.into_iter().find(|s| &s.id == id))
        })
    }
}
