//! Roster state: the fixed player list, selection flags, and the latest teams.

use crate::models::assignment::TeamAssignment;
use crate::models::player::{Player, PlayerId, PlayerRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of selected players required to make teams.
pub const MIN_SELECTED_PLAYERS: usize = 4;

/// Errors that can occur during roster operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterError {
    /// Not enough players selected to make teams (need at least 4).
    NotEnoughPlayersSelected { required: usize, selected: usize },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::NotEnoughPlayersSelected { required, selected } => {
                write!(
                    f,
                    "Select at least {} players to make teams ({} selected)",
                    required, selected
                )
            }
        }
    }
}

/// Unique identifier for a roster.
pub type RosterId = Uuid;

/// Name and role of each player on the default cricket roster.
const DEFAULT_ROSTER: [(&str, PlayerRole); 16] = [
    ("Niraj", PlayerRole::Bowler),
    ("Keshav", PlayerRole::GoodPlayer),
    ("Lalan", PlayerRole::AveragePlayer),
    ("Harshit", PlayerRole::GoodPlayer),
    ("Vishnu", PlayerRole::Bowler),
    ("Abhishek", PlayerRole::GoodPlayer),
    ("Nishant", PlayerRole::AveragePlayer),
    ("Gaurav", PlayerRole::GoodPlayer),
    ("Aman", PlayerRole::GoodPlayer),
    ("Sujal", PlayerRole::AveragePlayer),
    ("Lokesh", PlayerRole::GoodPlayer),
    ("Aryan", PlayerRole::GoodPlayer),
    ("Amandeep", PlayerRole::GoodPlayer),
    ("Krishna", PlayerRole::AveragePlayer),
    ("Raj", PlayerRole::AveragePlayer),
    ("Vasu", PlayerRole::Unknown),
];

/// Full roster state: players with selection flags and the latest assignment.
///
/// The player list is fixed after creation; only each player's `selected`
/// flag changes at runtime. The assignment is replaced wholesale each time
/// teams are made.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    pub id: RosterId,
    pub players: Vec<Player>,
    /// Latest team assignment, if teams have been made at least once.
    pub assignment: Option<TeamAssignment>,
}

impl Roster {
    /// Create a roster with the default 16 cricket players, none selected.
    pub fn new() -> Self {
        Self::with_players(
            DEFAULT_ROSTER
                .iter()
                .map(|&(name, role)| Player::new(name, role))
                .collect(),
        )
    }

    /// Create a roster from an explicit player list (e.g. for tests).
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            id: Uuid::new_v4(),
            players,
            assignment: None,
        }
    }

    /// Flip the selection flag of the player with the given id.
    /// An unknown id leaves the roster unchanged.
    pub fn toggle_selection(&mut self, player_id: PlayerId) {
        if let Some(p) = self.players.iter_mut().find(|p| p.id == player_id) {
            p.toggle_selected();
        }
    }

    /// Currently selected players, in roster order.
    pub fn selected_players(&self) -> Vec<Player> {
        self.players.iter().filter(|p| p.selected).cloned().collect()
    }

    /// Number of currently selected players.
    pub fn selected_count(&self) -> usize {
        self.players.iter().filter(|p| p.selected).count()
    }

    /// Whether enough players are selected to make teams.
    pub fn can_make_teams(&self) -> bool {
        self.selected_count() >= MIN_SELECTED_PLAYERS
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
