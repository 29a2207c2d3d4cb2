//! Application state for the web layer.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::deeplink::DeeplinkParser;
use crate::selection::SelectionStore;
use crate::source::StationSource;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Where stations are loaded from
    pub source: Arc<dyn StationSource>,

    /// The user's pinned station
    pub selection: Arc<SelectionStore>,

    /// Parser for incoming deeplinks
    pub deeplinks: Arc<DeeplinkParser>,

    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        source: impl StationSource + 'static,
        selection: SelectionStore,
        config: AppConfig,
    ) -> Self {
        Self {
            source: Arc::new(source),
            selection: Arc::new(selection),
            deeplinks: Arc::new(DeeplinkParser::new(config.deeplink_scheme.clone())),
            config: Arc::new(config),
        }
    }
}
