//! Station ordering for every screen.
//!
//! Answers "which station should be shown first?": nearest to the user,
//! except that the station the user picked last always wins.

mod rank;
mod search;

pub use rank::{RankingContext, pin_station, rank_stations};
pub use search::search_stations;
