use station_server::config::AppConfig;
use station_server::selection::{SelectionConfig, SelectionStore};
use station_server::source::{FileStationSource, StationSource};
use station_server::web::{AppState, create_router};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "station_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // The dump may be written later, so a missing file is not fatal
    let source = FileStationSource::new(&config.stations_file);
    match source.fetch_all().await {
        Ok(stations) => info!(
            count = stations.len(),
            path = %source.path().display(),
            "loaded stations"
        ),
        Err(e) => warn!(error = %e, "station dump not readable yet"),
    }

    let selection = SelectionStore::new(SelectionConfig::new(&config.selection_file));
    match selection.get() {
        Some(id) => info!(station = %id, "restored pinned station"),
        None => info!("no pinned station"),
    }

    let mut changes = selection.subscribe();
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let current = changes.borrow_and_update().clone();
            info!(station = ?current, "pinned station changed");
        }
    });

    let addr = config.bind_addr;
    let static_dir = config.static_dir.clone();
    let state = AppState::new(source, selection, config);
    let app = create_router(state, static_dir);

    info!("Weather station server listening on http://{addr}");
    info!("  GET  /health            - Health check");
    info!("  GET  /                  - Current station");
    info!("  GET  /stations          - Stations, nearest first");
    info!("  GET  /stations/:id      - A specific station");
    info!("  GET  /selection         - Station picker");
    info!("  POST /selection         - Pin a station");
    info!("  GET  /widget            - Widget");
    info!("  GET  /deeplink?url=...  - Open a deeplink");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
