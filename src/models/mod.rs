//! Data structures for the team maker: players, roster, team assignments.

mod assignment;
mod player;
mod roster;

pub use assignment::TeamAssignment;
pub use player::{Player, PlayerId, PlayerRole};
pub use roster::{Roster, RosterError, RosterId, MIN_SELECTED_PLAYERS};
