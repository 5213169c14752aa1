//! Team making: validate the selection, shuffle, and split into two teams.

use crate::models::{Player, Roster, RosterError, TeamAssignment, MIN_SELECTED_PLAYERS};
use rand::seq::SliceRandom;

/// Split the given players into two balanced teams.
///
/// 1. Require at least 4 players.
/// 2. If the count is odd, set the last player aside as the common player.
/// 3. Shuffle the rest uniformly and split at the midpoint.
///
/// The split is even by construction; the composition varies per call.
pub fn assign_teams(mut selected: Vec<Player>) -> Result<TeamAssignment, RosterError> {
    if selected.len() < MIN_SELECTED_PLAYERS {
        return Err(RosterError::NotEnoughPlayersSelected {
            required: MIN_SELECTED_PLAYERS,
            selected: selected.len(),
        });
    }

    let common_player = if selected.len() % 2 != 0 {
        selected.pop()
    } else {
        None
    };

    selected.shuffle(&mut rand::thread_rng());

    let midpoint = selected.len() / 2;
    let team_b = selected.split_off(midpoint);

    Ok(TeamAssignment {
        team_a: selected,
        team_b,
        common_player,
    })
}

/// Make teams from the roster's current selection and store the result.
///
/// Any previous assignment is replaced. The roster's players and their
/// selection flags are left untouched.
pub fn make_teams(roster: &mut Roster) -> Result<(), RosterError> {
    let assignment = assign_teams(roster.selected_players())?;
    roster.assignment = Some(assignment);
    Ok(())
}
