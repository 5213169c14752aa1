//! Team assignment: two balanced teams plus the optional common player.

use crate::models::player::Player;
use serde::{Deserialize, Serialize};

/// Result of splitting the selected players into two teams.
///
/// Created fresh on each "make teams" action and replaced wholesale on
/// recomputation; never persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub team_a: Vec<Player>,
    pub team_b: Vec<Player>,
    /// Player left out of both teams when an odd number was selected.
    pub common_player: Option<Player>,
}

impl TeamAssignment {
    /// Total number of players covered: both teams plus the common player.
    pub fn player_count(&self) -> usize {
        self.team_a.len() + self.team_b.len() + usize::from(self.common_player.is_some())
    }
}
