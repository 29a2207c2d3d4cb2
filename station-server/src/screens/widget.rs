//! Home-screen widget: the few stations closest to the user.

use serde::Serialize;

use crate::domain::{GeoPoint, StationId, WeatherStation};
use crate::format::{FormatConfig, air_pressure_label, wind_speed_label};
use crate::ranking::{RankingContext, pin_station};

use super::list::StationRow;

/// Default number of stations in the widget.
pub const DEFAULT_MAX_ITEMS: usize = 3;

/// Widget settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub max_items: usize,
    /// Allow the larger single-station layout.
    pub allow_extended_layout: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            allow_extended_layout: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellMode {
    Classic,
    Extended,
}

impl CellMode {
    /// Extended only when allowed and there is exactly one station to show.
    pub fn for_count(count: usize, allow_extended_layout: bool) -> Self {
        if allow_extended_layout && count == 1 {
            CellMode::Extended
        } else {
            CellMode::Classic
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetItem {
    #[serde(flatten)]
    pub row: StationRow,
    pub wind_speed: String,
    pub air_pressure: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetScreen {
    pub mode: CellMode,
    pub items: Vec<WidgetItem>,
}

impl WidgetScreen {
    /// The `max_items` located stations nearest to `reference`, pinned first.
    ///
    /// Stations without a location never appear. The pinned station is only
    /// moved to the front if it is among the nearest.
    pub fn build(
        stations: &[WeatherStation],
        reference: GeoPoint,
        pinned: Option<&StationId>,
        widget: &WidgetConfig,
        config: &FormatConfig,
    ) -> Self {
        let mut nearest: Vec<(f64, &WeatherStation)> = stations
            .iter()
            .filter_map(|s| Some((s.distance_from(&reference)?, s)))
            .collect();
        nearest.sort_by(|a, b| a.0.total_cmp(&b.0));
        nearest.truncate(widget.max_items);

        let mut shown: Vec<WeatherStation> = nearest.into_iter().map(|(_, s)| s.clone()).collect();
        if let Some(id) = pinned {
            shown = pin_station(shown, id);
        }

        let context = RankingContext::new(Some(reference), pinned.cloned());
        let items = shown
            .iter()
            .map(|station| WidgetItem {
                row: StationRow::build(station, &context, config),
                wind_speed: wind_speed_label(station, config),
                air_pressure: air_pressure_label(station, config),
            })
            .collect::<Vec<_>>();

        Self {
            mode: CellMode::for_count(items.len(), widget.allow_extended_layout),
            items,
        }
    }
}
