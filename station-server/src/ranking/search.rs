//! Station search for the selection screen.

use crate::domain::WeatherStation;

/// Filter stations whose name, short name, city or id contains `query`.
///
/// Matching is case-insensitive. A blank query matches everything. The
/// input order is preserved, so searching a ranked list stays ranked.
pub fn search_stations(stations: &[WeatherStation], query: &str) -> Vec<WeatherStation> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return stations.to_vec();
    }

    stations
        .iter()
        .filter(|s| matches(s, &needle))
        .cloned()
        .collect()
}

fn matches(station: &WeatherStation, needle: &str) -> bool {
    let fields = [
        Some(station.name.as_str()),
        station.short_name.as_deref(),
        station.city.as_deref(),
        Some(station.id.as_str()),
    ];

    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}
