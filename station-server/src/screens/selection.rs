//! Station selection screen: a searchable list plus a map.

use serde::Serialize;

use crate::domain::{GeoPoint, StationId, WeatherStation};
use crate::format::{FormatConfig, distance_label};
use crate::ranking::{RankingContext, search_stations};
use crate::selection::default_selection;

/// Width and height of the map region around the selected station.
pub const REGION_SPAN_METERS: f64 = 2000.0;

/// A map pin for a station.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapAnnotation {
    pub station_id: StationId,
    pub title: String,
    pub coordinate: GeoPoint,
}

/// Visible map area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    pub center: GeoPoint,
    pub latitudinal_meters: f64,
    pub longitudinal_meters: f64,
}

impl MapRegion {
    pub fn around(center: GeoPoint) -> Self {
        Self {
            center,
            latitudinal_meters: REGION_SPAN_METERS,
            longitudinal_meters: REGION_SPAN_METERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRow {
    pub id: StationId,
    pub name: String,
    /// Distance to the user, e.g. `1,2 km`.
    pub distance: Option<String>,
    pub is_selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionScreen {
    pub query: String,
    pub rows: Vec<SelectionRow>,
    /// Pins for the listed stations that have a location.
    pub annotations: Vec<MapAnnotation>,
    pub selected: Option<StationId>,
    pub selected_annotation: Option<MapAnnotation>,
    pub region: Option<MapRegion>,
}

impl SelectionScreen {
    /// Rank `stations`, then filter them by `query`.
    ///
    /// The selected station is the pinned one, or the first ranked station
    /// when nothing is pinned. It is chosen before filtering, so a search
    /// never changes the selection.
    pub fn build(
        stations: &[WeatherStation],
        context: &RankingContext,
        query: &str,
        config: &FormatConfig,
    ) -> Self {
        let ranked = context.rank(stations);
        let selected = default_selection(&ranked, context.pinned_station_id.as_ref());
        let selected_id = selected.map(|s| s.id.clone());

        let listed = search_stations(&ranked, query);

        let rows = listed
            .iter()
            .map(|station| SelectionRow {
                id: station.id.clone(),
                name: station.name.clone(),
                distance: context
                    .reference_point
                    .as_ref()
                    .and_then(|point| station.distance_from(point))
                    .map(|m| distance_label(m, config)),
                is_selected: selected_id.as_ref() == Some(&station.id),
            })
            .collect();

        let annotations: Vec<MapAnnotation> = listed.iter().filter_map(annotation).collect();

        let selected_annotation = selected_id
            .as_ref()
            .and_then(|id| annotations.iter().find(|a| &a.station_id == id))
            .cloned();

        Self {
            query: query.trim().to_string(),
            rows,
            annotations,
            region: selected.and_then(|s| s.geopoint).map(MapRegion::around),
            selected: selected_id,
            selected_annotation,
        }
    }
}

fn annotation(station: &WeatherStation) -> Option<MapAnnotation> {
    Some(MapAnnotation {
        station_id: station.id.clone(),
        title: station.name.clone(),
        coordinate: station.geopoint?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, name: &str, location: Option<(f64, f64)>) -> WeatherStation {
        let mut s = WeatherStation::new(StationId::parse(id).unwrap(), name);
        s.geopoint = location.map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap());
        s
    }

    fn stations() -> Vec<WeatherStation> {
        vec![
            station("wald", "Wald", Some((51.18, 7.05))),
            station("ohligs", "Ohligs", Some((51.166, 7.068))),
            station("burg", "Burg", None),
        ]
    }

    fn here() -> Option<GeoPoint> {
        Some(GeoPoint::new(51.1652, 7.0671).unwrap())
    }

    #[test]
    fn nearest_is_selected_without_pin() {
        let context = RankingContext::new(here(), None);
        let screen = SelectionScreen::build(&stations(), &context, "", &FormatConfig::default());

        assert_eq!(screen.selected.as_ref().map(StationId::as_str), Some("ohligs"));
        assert!(screen.rows[0].is_selected);
        assert_eq!(screen.rows[0].distance.as_deref(), Some("0,1 km"));

        let region = screen.region.unwrap();
        assert_eq!(region.center.latitude(), 51.166);
        assert_eq!(region.latitudinal_meters, 2000.0);
        assert_eq!(region.longitudinal_meters, 2000.0);
    }

    #[test]
    fn annotations_only_for_located_stations() {
        let context = RankingContext::new(here(), None);
        let screen = SelectionScreen::build(&stations(), &context, "", &FormatConfig::default());

        let ids: Vec<_> = screen
            .annotations
            .iter()
            .map(|a| a.station_id.as_str())
            .collect();
        assert_eq!(ids, ["ohligs", "wald"]);
        assert_eq!(
            screen.selected_annotation.map(|a| a.title),
            Some("Ohligs".to_string())
        );
    }

    #[test]
    fn pinned_without_location_has_no_region() {
        let context = RankingContext::new(here(), Some(StationId::parse("burg").unwrap()));
        let screen = SelectionScreen::build(&stations(), &context, "", &FormatConfig::default());

        assert_eq!(screen.rows[0].id.as_str(), "burg");
        assert!(screen.rows[0].is_selected);
        assert_eq!(screen.rows[0].distance, None);
        assert!(screen.selected_annotation.is_none());
        assert!(screen.region.is_none());
    }

    #[test]
    fn search_filters_rows_but_keeps_selection() {
        let context = RankingContext::new(here(), None);
        let screen =
            SelectionScreen::build(&stations(), &context, " wal ", &FormatConfig::default());

        assert_eq!(screen.query, "wal");
        assert_eq!(screen.rows.len(), 1);
        assert_eq!(screen.rows[0].id.as_str(), "wald");
        assert!(!screen.rows[0].is_selected);
        assert_eq!(screen.selected.as_ref().map(StationId::as_str), Some("ohligs"));
        assert!(screen.selected_annotation.is_none());
        assert!(screen.region.is_some());
    }

    #[test]
    fn empty_feed() {
        let screen =
            SelectionScreen::build(&[], &RankingContext::default(), "", &FormatConfig::default());
        assert!(screen.rows.is_empty());
        assert!(screen.selected.is_none());
        assert!(screen.region.is_none());
    }
}
