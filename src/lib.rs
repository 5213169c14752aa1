//! Cricket team maker web app: library with models and team making logic.

pub mod logic;
pub mod models;

pub use logic::{assign_teams, make_teams};
pub use models::{
    Player, PlayerId, PlayerRole, Roster, RosterError, RosterId, TeamAssignment,
    MIN_SELECTED_PLAYERS,
};
