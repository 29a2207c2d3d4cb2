//! Web layer for the weather station screens.
//!
//! Every screen is served as HTML to browsers and as JSON otherwise.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
