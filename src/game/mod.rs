//! Game flow for Freedom
//!
//! The controller owns the authoritative board, alternates turns between the
//! two seats and applies the last-cell rule that ends every game.

pub mod controller;

pub use controller::{
    Command, GameController, GameMode, GameSettings, MoveRecord, Outcome, SearchRequest, Seat,
};
