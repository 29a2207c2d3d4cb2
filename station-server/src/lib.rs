//! Weather station server.
//!
//! Serves the screens of a city weather-station feature: the current
//! station, a ranked station list, a searchable station picker and a small
//! home-screen widget. Stations are ranked nearest-first around the user,
//! and deeplinks such as `solingen://sensorstation/detail?station=<id>`
//! open a specific station.

pub mod config;
pub mod deeplink;
pub mod domain;
pub mod format;
pub mod ranking;
pub mod screens;
pub mod selection;
pub mod source;
pub mod web;
