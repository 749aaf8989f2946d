mod ai;
mod command;
mod common;
mod config;
mod dispatch;
mod game;
mod geometry;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod render;
pub mod rules;
mod ship;
mod snapshot;

pub use ai::{draw_placement, place_fleet, play_turn, Placement};
pub use command::*;
pub use common::*;
pub use config::*;
pub use dispatch::*;
pub use game::*;
pub use geometry::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
pub use snapshot::snapshot;
