//! Player data structures: identity, role, and selection flag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in selection and lookups).
pub type PlayerId = Uuid;

/// Rough skill category of a player. Assigned when the roster is built and
/// never changed at runtime.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerRole {
    Bowler,
    GoodPlayer,
    AveragePlayer,
    #[default]
    Unknown,
}

/// A player on the roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: PlayerRole,
    pub selected: bool,
}

impl Player {
    /// Create a new unselected player with the given name and role.
    pub fn new(name: impl Into<String>, role: PlayerRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            selected: false,
        }
    }

    /// Flip this player's selection flag.
    pub fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}
