//! View-layer state machines over the record store. Each view owns its
//! fetched snapshot, catches store failures (empty data, recorded message),
//! and discards fetch results that resolve after the view moved on.

pub mod catalog;
pub mod leaderboard;
pub mod program_results;
pub mod student_detail;
pub mod view;

pub use catalog::CatalogView;
pub use leaderboard::LeaderboardView;
pub use program_results::{ProgramResultsView, ResultRow, ResultsState};
pub use student_detail::StudentDetailView;
pub use view::{Generation, Ticket};
