//! Station list screen.

use serde::Serialize;

use crate::domain::{StationId, WeatherStation};
use crate::format::{
    FormatConfig, NOT_AVAILABLE, distance_label, is_raining, rain_label, temperature_label,
};
use crate::ranking::RankingContext;

/// One row of the list. Also used for widget cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRow {
    pub id: StationId,
    /// Short name, or `n/a` when the feed has none.
    pub name: String,
    pub temperature: String,
    pub rain: String,
    pub is_raining: bool,
    pub distance_meters: Option<f64>,
    pub distance: Option<String>,
    pub is_selected: bool,
}

impl StationRow {
    pub fn build(
        station: &WeatherStation,
        context: &RankingContext,
        config: &FormatConfig,
    ) -> Self {
        let distance_meters = context
            .reference_point
            .as_ref()
            .and_then(|point| station.distance_from(point));

        Self {
            id: station.id.clone(),
            name: station
                .short_name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            temperature: temperature_label(station, config),
            rain: rain_label(station, config),
            is_raining: is_raining(station),
            distance_meters,
            distance: distance_meters.map(|m| distance_label(m, config)),
            is_selected: context.pinned_station_id.as_ref() == Some(&station.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationListScreen {
    pub rows: Vec<StationRow>,
}

impl StationListScreen {
    /// Rank `stations` and build a row for each.
    pub fn build(
        stations: &[WeatherStation],
        context: &RankingContext,
        config: &FormatConfig,
    ) -> Self {
        let rows = context
            .rank(stations)
            .iter()
            .map(|station| StationRow::build(station, context, config))
            .collect();
        Self { rows }
    }
}
