//! Integration tests for the team maker: selection toggling and team assignment.

use std::collections::HashSet;

use cricket_team_web::{
    assign_teams, make_teams, Player, PlayerRole, Roster, RosterError, MIN_SELECTED_PLAYERS,
};
use uuid::Uuid;

/// Default roster with the first `n` players selected.
fn roster_with_selected(n: usize) -> Roster {
    let mut r = Roster::new();
    let ids: Vec<_> = r.players.iter().take(n).map(|p| p.id).collect();
    for id in ids {
        r.toggle_selection(id);
    }
    r
}

#[test]
fn default_roster_has_16_unselected_players() {
    let r = Roster::new();
    assert_eq!(r.players.len(), 16);
    assert!(r.players.iter().all(|p| !p.selected));
    assert!(r.assignment.is_none());
    assert!(!r.can_make_teams());
}

#[test]
fn can_make_teams_starting_at_4_selected() {
    let r = roster_with_selected(3);
    assert!(!r.can_make_teams());
    let r = roster_with_selected(MIN_SELECTED_PLAYERS);
    assert!(r.can_make_teams());
}

#[test]
fn make_teams_requires_at_least_4_selected() {
    let mut r = roster_with_selected(3);
    assert!(matches!(
        make_teams(&mut r),
        Err(RosterError::NotEnoughPlayersSelected {
            required: 4,
            selected: 3
        })
    ));
    assert!(r.assignment.is_none());
}

#[test]
fn even_selection_splits_in_half_with_no_common_player() {
    let mut r = roster_with_selected(6);
    make_teams(&mut r).unwrap();
    let a = r.assignment.as_ref().unwrap();
    assert_eq!(a.team_a.len(), 3);
    assert_eq!(a.team_b.len(), 3);
    assert!(a.common_player.is_none());
}

#[test]
fn odd_selection_sets_the_last_selected_player_aside() {
    let mut r = roster_with_selected(5);
    let last_selected_id = r.selected_players().last().unwrap().id;
    make_teams(&mut r).unwrap();
    let a = r.assignment.as_ref().unwrap();
    // 5 selected -> common player plus a 2/2 split
    assert_eq!(a.team_a.len(), 2);
    assert_eq!(a.team_b.len(), 2);
    assert_eq!(a.common_player.as_ref().unwrap().id, last_selected_id);
}

#[test]
fn assignment_covers_exactly_the_selected_players() {
    let mut r = roster_with_selected(9);
    make_teams(&mut r).unwrap();
    let a = r.assignment.as_ref().unwrap();
    assert_eq!(a.player_count(), 9);

    let mut covered = HashSet::new();
    for p in a
        .team_a
        .iter()
        .chain(a.team_b.iter())
        .chain(a.common_player.iter())
    {
        assert!(covered.insert(p.id), "player assigned twice");
    }
    let selected: HashSet<_> = r.selected_players().iter().map(|p| p.id).collect();
    assert_eq!(covered, selected);
}

#[test]
fn make_teams_leaves_selection_flags_untouched() {
    let mut r = roster_with_selected(8);
    let before: Vec<_> = r.players.iter().map(|p| (p.id, p.selected)).collect();
    make_teams(&mut r).unwrap();
    let after: Vec<_> = r.players.iter().map(|p| (p.id, p.selected)).collect();
    assert_eq!(before, after);
}

#[test]
fn remaking_teams_replaces_the_assignment() {
    let mut r = roster_with_selected(8);
    make_teams(&mut r).unwrap();
    make_teams(&mut r).unwrap();
    let a = r.assignment.as_ref().unwrap();
    assert_eq!(a.team_a.len(), 4);
    assert_eq!(a.team_b.len(), 4);
    assert!(a.common_player.is_none());
}

#[test]
fn toggling_twice_restores_the_original_state() {
    let mut r = Roster::new();
    let before = r.players.clone();
    let id = before[0].id;

    r.toggle_selection(id);
    assert!(r.players[0].selected);
    // Everyone else untouched by the first toggle
    assert_eq!(&before[1..], &r.players[1..]);

    r.toggle_selection(id);
    assert_eq!(before, r.players);
}

#[test]
fn toggling_an_unknown_id_changes_nothing() {
    let mut r = Roster::new();
    let before = r.players.clone();
    r.toggle_selection(Uuid::new_v4());
    assert_eq!(before, r.players);
}

#[test]
fn assign_teams_rejects_fewer_than_4_players() {
    let players: Vec<Player> = (0..3)
        .map(|i| Player::new(format!("P{i}"), PlayerRole::Unknown))
        .collect();
    assert!(matches!(
        assign_teams(players),
        Err(RosterError::NotEnoughPlayersSelected {
            required: 4,
            selected: 3
        })
    ));
}

#[test]
fn assign_teams_balances_any_even_input() {
    let players: Vec<Player> = (0..10)
        .map(|i| Player::new(format!("P{i}"), PlayerRole::AveragePlayer))
        .collect();
    let a = assign_teams(players).unwrap();
    assert_eq!(a.team_a.len(), 5);
    assert_eq!(a.team_b.len(), 5);
    assert!(a.common_player.is_none());
}
