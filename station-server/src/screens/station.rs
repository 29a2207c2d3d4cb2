//! Single-station screen.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{GeoPoint, StationId, WeatherStation};
use crate::format::{FormatConfig, WeatherCell, observed_label, station_cells, temperature_label};
use crate::ranking::rank_stations;

/// Which station the single-station screen opens with.
///
/// A requested id (deeplink or URL) is authoritative: if it is unknown the
/// lookup fails instead of falling back. Otherwise the pinned station, then
/// the configured default station, then the station nearest to `reference`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StationLookup<'a> {
    pub requested: Option<&'a StationId>,
    pub pinned: Option<&'a StationId>,
    pub fallback: Option<&'a StationId>,
    pub reference: Option<&'a GeoPoint>,
}

impl StationLookup<'_> {
    pub fn find<'s>(&self, stations: &'s [WeatherStation]) -> Option<&'s WeatherStation> {
        let by_id = |id: &StationId| stations.iter().find(|s| &s.id == id);

        if let Some(id) = self.requested {
            return by_id(id);
        }

        self.pinned
            .and_then(by_id)
            .or_else(|| self.fallback.and_then(by_id))
            .or_else(|| self.nearest(stations))
    }

    fn nearest<'s>(&self, stations: &'s [WeatherStation]) -> Option<&'s WeatherStation> {
        let ranked = rank_stations(stations, self.reference, None);
        let first = ranked.first()?;
        stations.iter().find(|s| s.id == first.id)
    }
}

/// Header above the measurement cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationHeader {
    pub title: String,
    pub detailed_title: Option<String>,
    /// `Heute, 14:05 Uhr` and friends; absent when the feed has no timestamp.
    pub observed: Option<String>,
    pub temperature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationScreen {
    pub station_id: StationId,
    pub header: StationHeader,
    pub cells: Vec<WeatherCell>,
    /// Whether this is the user's pinned station.
    pub is_selected: bool,
}

impl StationScreen {
    pub fn build(
        station: &WeatherStation,
        pinned: Option<&StationId>,
        now: DateTime<Utc>,
        config: &FormatConfig,
    ) -> Self {
        let header = StationHeader {
            title: station.title().to_string(),
            detailed_title: station.detailed_title().map(str::to_string),
            observed: station
                .date_observed
                .map(|observed| observed_label(observed, now, config.utc_offset)),
            temperature: temperature_label(station, config),
        };

        Self {
            station_id: station.id.clone(),
            header,
            cells: station_cells(station, config),
            is_selected: pinned == Some(&station.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ObservedValue, ValueType};
    use chrono::TimeZone;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn station(s: &str, location: Option<(f64, f64)>) -> WeatherStation {
        let mut station = WeatherStation::new(id(s), s);
        station.geopoint = location.map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap());
        station
    }

    fn stations() -> Vec<WeatherStation> {
        vec![
            station("far", Some((51.3, 7.3))),
            station("near", Some((51.17, 7.07))),
            station("nowhere", None),
        ]
    }

    #[test]
    fn requested_id_wins() {
        let stations = stations();
        let requested = id("far");
        let pinned = id("near");
        let lookup = StationLookup {
            requested: Some(&requested),
            pinned: Some(&pinned),
            ..Default::default()
        };
        assert_eq!(lookup.find(&stations).unwrap().id, requested);
    }

    #[test]
    fn unknown_requested_id_is_not_found() {
        let stations = stations();
        let requested = id("gone");
        let pinned = id("near");
        let lookup = StationLookup {
            requested: Some(&requested),
            pinned: Some(&pinned),
            ..Default::default()
        };
        assert!(lookup.find(&stations).is_none());
    }

    #[test]
    fn pinned_then_fallback_then_nearest() {
        let stations = stations();
        let pinned = id("nowhere");
        let fallback = id("far");
        let gone = id("gone");
        let here = GeoPoint::new(51.1652, 7.0671).unwrap();

        let lookup = StationLookup {
            pinned: Some(&pinned),
            fallback: Some(&fallback),
            reference: Some(&here),
            ..Default::default()
        };
        assert_eq!(lookup.find(&stations).unwrap().id, pinned);

        let lookup = StationLookup {
            pinned: Some(&gone),
            fallback: Some(&fallback),
            reference: Some(&here),
            ..Default::default()
        };
        assert_eq!(lookup.find(&stations).unwrap().id, fallback);

        let lookup = StationLookup {
            pinned: Some(&gone),
            reference: Some(&here),
            ..Default::default()
        };
        assert_eq!(lookup.find(&stations).unwrap().id, id("near"));
    }

    #[test]
    fn no_location_uses_feed_order() {
        let stations = stations();
        assert_eq!(StationLookup::default().find(&stations).unwrap().id, id("far"));
        assert!(StationLookup::default().find(&[]).is_none());
    }

    #[test]
    fn header_with_city() {
        let mut s = station("s1", None);
        s.name = "Wetterstation Ohligs".into();
        s.short_name = Some("Ohligs".into());
        s.city = Some("Solingen".into());
        s.date_observed = Some(Utc.with_ymd_and_hms(2024, 5, 3, 9, 30, 0).unwrap());
        s.values = vec![ObservedValue::new(ValueType::Temperature, Some(18.44)).with_unit("°C")];

        let now = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        let pinned = id("s1");
        let screen = StationScreen::build(&s, Some(&pinned), now, &FormatConfig::default());

        assert_eq!(screen.header.title, "Solingen");
        assert_eq!(screen.header.detailed_title.as_deref(), Some("Ohligs"));
        assert_eq!(screen.header.observed.as_deref(), Some("Heute, 10:30 Uhr"));
        assert_eq!(screen.header.temperature, "18,4°C");
        assert!(screen.is_selected);
        assert!(screen.cells.is_empty());
    }

    #[test]
    fn header_without_city() {
        let mut s = station("s1", None);
        s.short_name = Some("Ohligs".into());
        let screen = StationScreen::build(&s, None, Utc::now(), &FormatConfig::default());

        assert_eq!(screen.header.title, "Ohligs");
        assert_eq!(screen.header.detailed_title, None);
        assert_eq!(screen.header.observed, None);
        assert_eq!(screen.header.temperature, "n/a");
        assert!(!screen.is_selected);
    }
}
