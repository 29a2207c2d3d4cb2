//! Askama templates for the web frontend.

use askama::Template;

use crate::screens::{CellMode, SelectionScreen, StationListScreen, StationScreen, WidgetScreen};

/// Single-station page.
#[derive(Template)]
#[template(path = "station.html")]
pub struct StationTemplate {
    pub screen: StationScreen,
}

/// Ranked station list.
#[derive(Template)]
#[template(path = "stations.html")]
pub struct StationListTemplate {
    pub screen: StationListScreen,
}

/// Station picker with search and map pins.
#[derive(Template)]
#[template(path = "selection.html")]
pub struct SelectionTemplate {
    pub screen: SelectionScreen,
}

/// Widget fragment (no base.html).
#[derive(Template)]
#[template(path = "widget.html")]
pub struct WidgetTemplate {
    pub screen: WidgetScreen,
    pub extended: bool,
}

impl WidgetTemplate {
    pub fn new(screen: WidgetScreen) -> Self {
        Self {
            extended: screen.mode == CellMode::Extended,
            screen,
        }
    }
}
