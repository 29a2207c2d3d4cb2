//! Weather deeplinks.
//!
//! The app receives URLs such as
//! `solingen://sensorstation/detail?station=O9ukYZqbSE` from the operating
//! system. This module decodes them into a [`DeeplinkPayload`] and resolves
//! the payload to a [`DeeplinkAction`]. Parsing is total: anything that is
//! not a weather deeplink yields `None` and resolves to the default action.

mod action;
mod parser;

pub use action::{DETAIL_TARGET, DeeplinkAction, STATION_PARAM};
pub use parser::{DEFAULT_SCHEME, DEFAULT_TARGET, DeeplinkParser, DeeplinkPayload, FEATURE_HOST};
