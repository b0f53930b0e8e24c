/// Table name constants for the deployed schema, to ensure consistency
/// between the REST store and the fixture loader.

// Entity collections
pub const STUDENTS_TABLE: &str = "students";
pub const PROGRAMS_TABLE: &str = "programs";
pub const RESULTS_TABLE: &str = "results";

// Note: per-program team placements live in a table literally named "teams",
// while team standings live in "totalmarkteam". Keep the mapping in one place.
pub const TEAM_RESULTS_TABLE: &str = "teams";
pub const TEAM_TOTALS_TABLE: &str = "totalmarkteam";
pub const STUDENT_TOTALS_TABLE: &str = "totalmarkstudent";

// Display placeholders shared across views
pub const UNKNOWN_LABEL: &str = "Unknown";
pub const UNKNOWN_STUDENT_LABEL: &str = "Unknown Student";
pub const NOT_AVAILABLE_LABEL: &str = "N/A";
pub const BLANK_PRIZE_LABEL: &str = "-";
pub const NO_PLACE_LABEL: &str = "\u{2014}";
pub const NO_MARKS_LABEL: &str = "No marks";
pub const NO_PLACEMENT_LABEL: &str = "No placement";
pub const TOTAL_ROW_LABEL: &str = "TOTAL";
