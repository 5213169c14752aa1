//! Team maker business logic: selection validation and team assignment.

mod teams;

pub use teams::{assign_teams, make_teams};
