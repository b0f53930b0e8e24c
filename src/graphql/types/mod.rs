pub mod chip;
pub mod leaderboard;
pub mod program;
pub mod result_row;
pub mod standing;
pub mod student;

pub use chip::CategoryChip;
pub use leaderboard::{CategoryBoard, LeaderboardEntry};
pub use program::Program;
pub use result_row::ResultRow;
pub use standing::TeamStanding;
pub use student::{MarkSheetEntry, Student, StudentProfile};
