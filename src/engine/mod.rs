//! The pure core: ranked views computed from fetched records. Nothing in
//! here performs I/O except the catalog's existence probe, which takes the
//! store as a collaborator.

pub mod catalog;
pub mod ranking;
pub mod roster;
pub mod totals;

pub use catalog::{chip_counts, filter_programs, results_probe, ChipCount, ProgramFilter};
pub use ranking::{category_leaderboard, rank_teams, student_rank_badge, team_place_medal, CategoryBoard, Medal, RankedStudent, RankedTeam, LEADERBOARD_TOP_N};
pub use roster::{filter_roster, roster_counts, RosterFilter, TeamCount};
pub use totals::{format_prize_place, MarkSheet, MarkSheetRow};
