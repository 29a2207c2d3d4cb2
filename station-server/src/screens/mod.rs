//! View models for the four station screens.
//!
//! Each screen is built from a station list plus the caller's context and
//! is rendered either as HTML or serialized to JSON by the web layer.

mod list;
mod selection;
mod station;
mod widget;

pub use list::{StationListScreen, StationRow};
pub use selection::{MapAnnotation, MapRegion, REGION_SPAN_METERS, SelectionRow, SelectionScreen};
pub use station::{StationHeader, StationLookup, StationScreen};
pub use widget::{CellMode, DEFAULT_MAX_ITEMS, WidgetConfig, WidgetItem, WidgetScreen};
