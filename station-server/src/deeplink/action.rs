//! Mapping parsed deeplinks to navigation actions.

use tracing::debug;

use crate::domain::StationId;

use super::parser::DeeplinkPayload;

/// Target that opens a specific station.
pub const DETAIL_TARGET: &str = "detail";

/// Query parameter carrying the station id for [`DETAIL_TARGET`].
pub const STATION_PARAM: &str = "station";

/// What the app should show in response to a deeplink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeeplinkAction {
    /// Show the weather screen for a specific station.
    ShowStation(StationId),
    /// Show the weather screen for the user's current station.
    ShowMain,
}

impl DeeplinkAction {
    /// Resolve a parse result to an action.
    ///
    /// A failed parse, an unknown target, or a `detail` link without a valid
    /// `station` parameter all resolve to [`DeeplinkAction::ShowMain`].
    pub fn resolve(payload: Option<&DeeplinkPayload>) -> Self {
        let Some(payload) = payload else {
            return DeeplinkAction::ShowMain;
        };

        if payload.target() != DETAIL_TARGET {
            return DeeplinkAction::ShowMain;
        }

        match payload.parameter(STATION_PARAM).map(StationId::parse) {
            Some(Ok(id)) => DeeplinkAction::ShowStation(id),
            Some(Err(e)) => {
                debug!(error = %e, "detail deeplink has an unusable station id");
                DeeplinkAction::ShowMain
            }
            None => DeeplinkAction::ShowMain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deeplink::DeeplinkParser;

    fn resolve(url: &str) -> DeeplinkAction {
        let parser = DeeplinkParser::new("solingen");
        DeeplinkAction::resolve(parser.parse(url).as_ref())
    }

    #[test]
    fn detail_with_station() {
        assert_eq!(
            resolve("solingen://sensorstation/detail?station=O9ukYZqbSE"),
            DeeplinkAction::ShowStation(StationId::parse("O9ukYZqbSE").unwrap())
        );
    }

    #[test]
    fn detail_without_station_shows_main() {
        assert_eq!(resolve("solingen://sensorstation/detail"), DeeplinkAction::ShowMain);
        assert_eq!(
            resolve("solingen://sensorstation/detail?station="),
            DeeplinkAction::ShowMain
        );
    }

    #[test]
    fn main_target_ignores_station() {
        assert_eq!(
            resolve("solingen://sensorstation?station=XYZ"),
            DeeplinkAction::ShowMain
        );
    }

    #[test]
    fn unknown_target_shows_main() {
        assert_eq!(
            resolve("solingen://sensorstation/map?station=XYZ"),
            DeeplinkAction::ShowMain
        );
    }

    #[test]
    fn parse_failure_shows_main() {
        assert_eq!(resolve("otherapp://foo"), DeeplinkAction::ShowMain);
        assert_eq!(DeeplinkAction::resolve(None), DeeplinkAction::ShowMain);
    }
}
