//! Nearest-first station ranking.
//!
//! Orders stations by great-circle distance to a reference point and keeps
//! the user's pinned station in front.

use tracing::debug;

use crate::domain::{GeoPoint, StationId, WeatherStation};

/// Inputs for ranking, rebuilt on every screen load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingContext {
    /// Where the user is (or the configured fallback location).
    pub reference_point: Option<GeoPoint>,
    /// The station the user last selected.
    pub pinned_station_id: Option<StationId>,
}

impl RankingContext {
    pub fn new(reference_point: Option<GeoPoint>, pinned_station_id: Option<StationId>) -> Self {
        Self {
            reference_point,
            pinned_station_id,
        }
    }

    /// Rank `stations` with this context. See [`rank_stations`].
    pub fn rank(&self, stations: &[WeatherStation]) -> Vec<WeatherStation> {
        rank_stations(
            stations,
            self.reference_point.as_ref(),
            self.pinned_station_id.as_ref(),
        )
    }
}

/// Rank stations nearest-first, with the pinned station at index 0.
///
/// The input is never mutated and nothing is filtered out.
///
/// Distance only orders stations that both have a geopoint. A station without
/// one is never moved: it keeps its input slot, and the located stations are
/// sorted among the remaining slots. Without a reference point the input
/// order is kept.
///
/// The pinned station, if present, is taken out before sorting and placed
/// first. With full geodata this is the same as sorting first and moving it
/// afterwards.
///
/// # Examples
///
/// ```
/// use station_server::domain::{GeoPoint, StationId, WeatherStation};
/// use station_server::ranking::rank_stations;
///
/// let station = |id: &str, lon: f64| {
///     let mut s = WeatherStation::new(StationId::parse(id).unwrap(), id);
///     s.geopoint = Some(GeoPoint::new(0.0, lon).unwrap());
///     s
/// };
/// let stations = vec![station("A", 0.0), station("B", 10.0), station("C", 5.0)];
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
///
/// let ranked = rank_stations(&stations, Some(&origin), None);
/// let ids: Vec<_> = ranked.iter().map(|s| s.id.as_str()).collect();
/// assert_eq!(ids, ["A", "C", "B"]);
///
/// let pinned = StationId::parse("B").unwrap();
/// let ranked = rank_stations(&stations, Some(&origin), Some(&pinned));
/// let ids: Vec<_> = ranked.iter().map(|s| s.id.as_str()).collect();
/// assert_eq!(ids, ["B", "A", "C"]);
/// ```
pub fn rank_stations(
    stations: &[WeatherStation],
    reference: Option<&GeoPoint>,
    pinned: Option<&StationId>,
) -> Vec<WeatherStation> {
    let mut ranked = stations.to_vec();

    let pinned_station = pinned
        .and_then(|id| ranked.iter().position(|s| &s.id == id))
        .map(|idx| ranked.remove(idx));

    if let Some(reference) = reference {
        sort_located_by_distance(&mut ranked, reference);
    }

    if let Some(station) = pinned_station {
        ranked.insert(0, station);
    }

    debug!(
        count = ranked.len(),
        has_reference = reference.is_some(),
        pinned = ?pinned.map(StationId::as_str),
        "ranked stations"
    );

    ranked
}

/// Move the pinned station to the front, keeping everything else in order.
///
/// Returns the input unchanged when no station has the given id.
pub fn pin_station(mut stations: Vec<WeatherStation>, pinned: &StationId) -> Vec<WeatherStation> {
    if let Some(idx) = stations.iter().position(|s| &s.id == pinned) {
        let station = stations.remove(idx);
        stations.insert(0, station);
    }
    stations
}

/// Stable distance sort of located stations within their own slots.
fn sort_located_by_distance(stations: &mut [WeatherStation], reference: &GeoPoint) {
    let slots: Vec<(usize, f64)> = stations
        .iter()
        .enumerate()
        .filter_map(|(idx, s)| s.distance_from(reference).map(|d| (idx, d)))
        .collect();

    if slots.len() < 2 {
        return;
    }

    let mut by_distance = slots.clone();
    // `sort_by` is stable, so equidistant stations keep their input order
    by_distance.sort_by(|a, b| a.1.total_cmp(&b.1));

    let sorted: Vec<WeatherStation> = by_distance
        .iter()
        .map(|(idx, _)| stations[*idx].clone())
        .collect();

    for ((slot, _), station) in slots.iter().zip(sorted) {
        stations[*slot] = station;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn station(name: &str, point: Option<(f64, f64)>) -> WeatherStation {
        let mut s = WeatherStation::new(id(name), name);
        s.geopoint = point.map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap());
        s
    }

    fn ids(stations: &[WeatherStation]) -> Vec<&str> {
        stations.iter().map(|s| s.id.as_str()).collect()
    }

    fn origin() -> GeoPoint {
        GeoPoint::new(0.0, 0.0).unwrap()
    }

    fn abc() -> Vec<WeatherStation> {
        vec![
            station("A", Some((0.0, 0.0))),
            station("B", Some((0.0, 10.0))),
            station("C", Some((0.0, 5.0))),
        ]
    }

    #[test]
    fn nearest_first() {
        let ranked = rank_stations(&abc(), Some(&origin()), None);
        assert_eq!(ids(&ranked), ["A", "C", "B"]);
    }

    #[test]
    fn pinned_goes_first() {
        let ranked = rank_stations(&abc(), Some(&origin()), Some(&id("B")));
        assert_eq!(ids(&ranked), ["B", "A", "C"]);
    }

    #[test]
    fn pinned_goes_first_without_reference() {
        let ranked = rank_stations(&abc(), None, Some(&id("C")));
        assert_eq!(ids(&ranked), ["C", "A", "B"]);
    }

    #[test]
    fn unknown_pin_is_ignored() {
        let ranked = rank_stations(&abc(), Some(&origin()), Some(&id("Z")));
        assert_eq!(ids(&ranked), ["A", "C", "B"]);
    }

    #[test]
    fn no_reference_keeps_input_order() {
        let ranked = rank_stations(&abc(), None, None);
        assert_eq!(ids(&ranked), ["A", "B", "C"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_stations(&[], Some(&origin()), Some(&id("A"))).is_empty());
    }

    #[test]
    fn input_is_not_mutated() {
        let stations = abc();
        let before = stations.clone();
        let _ = rank_stations(&stations, Some(&origin()), Some(&id("B")));
        assert_eq!(stations, before);
    }

    #[test]
    fn stations_without_geopoint_keep_their_slot() {
        let stations = vec![
            station("far", Some((0.0, 20.0))),
            station("x", None),
            station("near", Some((0.0, 1.0))),
            station("y", None),
            station("mid", Some((0.0, 5.0))),
        ];

        let ranked = rank_stations(&stations, Some(&origin()), None);
        assert_eq!(ids(&ranked), ["near", "x", "mid", "y", "far"]);
    }

    #[test]
    fn all_without_geopoint_keep_order() {
        let stations = vec![station("a", None), station("b", None), station("c", None)];
        let ranked = rank_stations(&stations, Some(&origin()), None);
        assert_eq!(ids(&ranked), ["a", "b", "c"]);
    }

    #[test]
    fn equidistant_stations_are_stable() {
        let stations = vec![
            station("east", Some((0.0, 1.0))),
            station("west", Some((0.0, -1.0))),
            station("north", Some((1.0, 0.0))),
        ];
        let ranked = rank_stations(&stations, Some(&origin()), None);
        // East and west are exactly equidistant
        let pos = |name: &str| ranked.iter().position(|s| s.id.as_str() == name).unwrap();
        assert!(pos("east") < pos("west"));
    }

    #[test]
    fn pinned_without_geopoint_still_first() {
        let stations = vec![
            station("B", Some((0.0, 10.0))),
            station("P", None),
            station("A", Some((0.0, 1.0))),
        ];
        let ranked = rank_stations(&stations, Some(&origin()), Some(&id("P")));
        assert_eq!(ids(&ranked), ["P", "A", "B"]);
    }

    #[test]
    fn context_delegates() {
        let ctx = RankingContext::new(Some(origin()), Some(id("C")));
        assert_eq!(ids(&ctx.rank(&abc())), ["C", "A", "B"]);

        let ctx = RankingContext::default();
        assert_eq!(ids(&ctx.rank(&abc())), ["A", "B", "C"]);
    }

    #[test]
    fn pin_station_moves_to_front() {
        let pinned = pin_station(abc(), &id("C"));
        assert_eq!(ids(&pinned), ["C", "A", "B"]);

        let unchanged = pin_station(abc(), &id("Z"));
        assert_eq!(ids(&unchanged), ["A", "B", "C"]);

        let already = pin_station(abc(), &id("A"));
        assert_eq!(ids(&already), ["A", "B", "C"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn stations() -> impl Strategy<Value = Vec<WeatherStation>> {
        prop::collection::vec(
            prop::option::weighted(0.8, (-90.0f64..=90.0, -180.0f64..=180.0)),
            0..24,
        )
        .prop_map(|points| {
            points
                .into_iter()
                .enumerate()
                .map(|(i, point)| {
                    let mut s = WeatherStation::new(StationId::parse(&format!("s{i}")).unwrap(), "");
                    s.geopoint = point.map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap());
                    s
                })
                .collect()
        })
    }

    fn reference() -> impl Strategy<Value = GeoPoint> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| GeoPoint::new(lat, lon).unwrap())
    }

    fn sorted_ids(stations: &[WeatherStation]) -> Vec<String> {
        let mut ids: Vec<String> = stations.iter().map(|s| s.id.to_string()).collect();
        ids.sort();
        ids
    }

    proptest! {
        /// Output is a permutation of the input
        #[test]
        fn permutation(stations in stations(), r in reference(), pin in 0usize..30) {
            let pinned = StationId::parse(&format!("s{pin}")).unwrap();
            let ranked = rank_stations(&stations, Some(&r), Some(&pinned));
            prop_assert_eq!(sorted_ids(&ranked), sorted_ids(&stations));
        }

        /// Nearer located stations never come after farther ones
        #[test]
        fn nearer_first(stations in stations(), r in reference()) {
            let ranked = rank_stations(&stations, Some(&r), None);
            let distances: Vec<f64> = ranked.iter().filter_map(|s| s.distance_from(&r)).collect();
            for pair in distances.windows(2) {
                prop_assert!(pair[0] <= pair[1]);
            }
        }

        /// A pinned station that exists is always first
        #[test]
        fn pinned_first(stations in stations(), r in prop::option::of(reference()), pick in any::<prop::sample::Index>()) {
            prop_assume!(!stations.is_empty());
            let pinned = stations[pick.index(stations.len())].id.clone();
            let ranked = rank_stations(&stations, r.as_ref(), Some(&pinned));
            prop_assert_eq!(&ranked[0].id, &pinned);
        }

        /// Ranking twice changes nothing
        #[test]
        fn idempotent(stations in stations(), r in prop::option::of(reference()), pin in 0usize..30) {
            let pinned = StationId::parse(&format!("s{pin}")).unwrap();
            let once = rank_stations(&stations, r.as_ref(), Some(&pinned));
            let twice = rank_stations(&once, r.as_ref(), Some(&pinned));
            prop_assert_eq!(once, twice);
        }

        /// Stations without a geopoint stay where they were (no pin)
        #[test]
        fn unlocated_keep_slot(stations in stations(), r in reference()) {
            let ranked = rank_stations(&stations, Some(&r), None);
            for (before, after) in stations.iter().zip(&ranked) {
                if before.geopoint.is_none() {
                    prop_assert_eq!(&before.id, &after.id);
                }
            }
        }
    }
}
