//! In-memory station source.

use std::future;

use crate::domain::WeatherStation;

use super::{SourceFuture, StationSource};

/// A fixed list of stations, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct StaticStationSource {
    stations: Vec<WeatherStation>,
}

impl StaticStationSource {
    pub fn new(stations: Vec<WeatherStation>) -> Self {
        Self { stations }
    }
}

impl StationSource for StaticStationSource {
    fn load(&self) -> SourceFuture<'_, Vec<WeatherStation>> {
        Box::pin(future::ready(Ok(self.stations.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    #[tokio::test]
    async fn serves_active_stations() {
        let mut down = WeatherStation::new(StationId::parse("down").unwrap(), "Down");
        down.maintenance = true;
        let up = WeatherStation::new(StationId::parse("up").unwrap(), "Up");

        let source = StaticStationSource::new(vec![down, up.clone()]);
        assert_eq!(source.fetch_all().await.unwrap(), vec![up]);
    }
}
