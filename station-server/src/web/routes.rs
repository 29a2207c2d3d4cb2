//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Json, Router,
    extract::{self, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::Utc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};
use url::Url;

use crate::deeplink::DeeplinkAction;
use crate::domain::{GeoPoint, InvalidGeoPoint, StationId};
use crate::ranking::RankingContext;
use crate::screens::{
    SelectionScreen, StationListScreen, StationLookup, StationScreen, WidgetScreen,
};
use crate::selection::SelectionError;
use crate::source::SourceError;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(station_page))
        .route("/health", get(health))
        .route("/stations", get(station_list))
        .route("/stations/:id", get(station_detail))
        .route("/selection", get(selection_page).post(select_station))
        .route("/widget", get(widget))
        .route("/deeplink", get(open_deeplink))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

fn render(template: &impl Template) -> Result<Response, AppError> {
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;
    Ok(Html(html).into_response())
}

fn parse_station_id(s: &str) -> Result<StationId, AppError> {
    StationId::parse(s).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Single-station screen for the pinned (or default, or nearest) station.
async fn station_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<StationQuery>,
) -> Result<Response, AppError> {
    let requested = query
        .station
        .as_deref()
        .map(parse_station_id)
        .transpose()?;
    let reference = query.reference_point()?;

    show_station(&state, &headers, requested.as_ref(), reference).await
}

/// Single-station screen for a specific station.
async fn station_detail(
    State(state): State<AppState>,
    headers: HeaderMap,
    extract::Path(id): extract::Path<String>,
) -> Result<Response, AppError> {
    let id = parse_station_id(&id)?;
    show_station(&state, &headers, Some(&id), None).await
}

async fn show_station(
    state: &AppState,
    headers: &HeaderMap,
    requested: Option<&StationId>,
    reference: Option<GeoPoint>,
) -> Result<Response, AppError> {
    let stations = state.source.fetch_all().await?;
    let pinned = state.selection.get();
    let reference = reference.unwrap_or(state.config.default_location);

    let lookup = StationLookup {
        requested,
        pinned: pinned.as_ref(),
        fallback: state.config.default_station.as_ref(),
        reference: Some(&reference),
    };
    let station = lookup.find(&stations).ok_or_else(|| AppError::NotFound {
        message: match requested {
            Some(id) => format!("Unknown station: {id}"),
            None => "No stations available".to_string(),
        },
    })?;

    let screen = StationScreen::build(station, pinned.as_ref(), Utc::now(), &state.config.format);

    if accepts_html(headers) {
        render(&StationTemplate { screen })
    } else {
        Ok(Json(screen).into_response())
    }
}

/// All stations, nearest first.
async fn station_list(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LocationQuery>,
) -> Result<Response, AppError> {
    let reference = query.reference_point()?;
    let stations = state.source.fetch_all().await?;

    let context = RankingContext::new(reference, state.selection.get());
    let screen = StationListScreen::build(&stations, &context, &state.config.format);

    if accepts_html(&headers) {
        render(&StationListTemplate { screen })
    } else {
        Ok(Json(screen).into_response())
    }
}

/// Station picker.
async fn selection_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SelectionQuery>,
) -> Result<Response, AppError> {
    let reference = query.reference_point()?;
    let stations = state.source.fetch_all().await?;

    let context = RankingContext::new(reference, state.selection.get());
    let screen = SelectionScreen::build(
        &stations,
        &context,
        query.q.as_deref().unwrap_or(""),
        &state.config.format,
    );

    if accepts_html(&headers) {
        render(&SelectionTemplate { screen })
    } else {
        Ok(Json(screen).into_response())
    }
}

/// Pin a station.
async fn select_station(
    State(state): State<AppState>,
    Json(req): Json<SelectStationRequest>,
) -> Result<Json<SelectStationResponse>, AppError> {
    let id = parse_station_id(&req.station_id)?;

    if state.source.fetch_by_id(&id).await?.is_none() {
        return Err(AppError::NotFound {
            message: format!("Unknown station: {id}"),
        });
    }

    state.selection.set(id.clone())?;
    Ok(Json(SelectStationResponse { station_id: id }))
}

/// Home-screen widget.
async fn widget(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LocationQuery>,
) -> Result<Response, AppError> {
    let reference = query
        .reference_point()?
        .unwrap_or(state.config.default_location);
    let stations = state.source.fetch_all().await?;
    let pinned = state.selection.get();

    let screen = WidgetScreen::build(
        &stations,
        reference,
        pinned.as_ref(),
        &state.config.widget,
        &state.config.format,
    );

    if accepts_html(&headers) {
        render(&WidgetTemplate::new(screen))
    } else {
        Ok(Json(screen).into_response())
    }
}

/// Resolve a deeplink and redirect to the screen it names.
///
/// Links this server can't open fall back to the main screen.
async fn open_deeplink(
    State(state): State<AppState>,
    Query(query): Query<DeeplinkQuery>,
) -> Result<Redirect, AppError> {
    let payload = state.deeplinks.parse(&query.url);

    match DeeplinkAction::resolve(payload.as_ref()) {
        DeeplinkAction::ShowStation(id) => Ok(Redirect::to(&station_path(&id)?)),
        DeeplinkAction::ShowMain => Ok(Redirect::to("/")),
    }
}

/// `/stations/{id}` with the id percent-encoded as a single path segment.
fn station_path(id: &StationId) -> Result<String, AppError> {
    let internal = || AppError::Internal {
        message: "failed to build station URL".to_string(),
    };

    let mut url = Url::parse("http://localhost/").map_err(|_| internal())?;
    url.path_segments_mut()
        .map_err(|_| internal())?
        .clear()
        .push("stations")
        .push(id.as_str());
    Ok(url.path().to_string())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<InvalidGeoPoint> for AppError {
    fn from(e: InvalidGeoPoint) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<SourceError> for AppError {
    fn from(e: SourceError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<SelectionError> for AppError {
    fn from(e: SelectionError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
