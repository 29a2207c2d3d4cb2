//! The user's pinned station.
//!
//! The pinned station always heads ranked lists and is the station shown
//! when no deeplink names one.

mod error;
mod store;

pub use error::SelectionError;
pub use store::{DEFAULT_SELECTION_FILE, SelectionConfig, SelectionStore};

use crate::domain::{StationId, WeatherStation};

/// The station a screen should open with.
///
/// The pinned station if it is in `ranked`, else the first ranked station.
pub fn default_selection<'a>(
    ranked: &'a [WeatherStation],
    pinned: Option<&StationId>,
) -> Option<&'a WeatherStation> {
    pinned
        .and_then(|id| ranked.iter().find(|s| &s.id == id))
        .or_else(|| ranked.first())
}
