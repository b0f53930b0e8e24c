use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod category;
pub mod team;

pub use category::{Category, CatalogChip, CATALOG_CHIPS};
pub use team::{team_color, TeamInfo, TEAMS};

use crate::constants::{NOT_AVAILABLE_LABEL, UNKNOWN_LABEL, UNKNOWN_STUDENT_LABEL};

/// A team standings row: one record per team with its running total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<Uuid>,
    pub name: String,
    pub total_mark: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Total with the null-means-zero rule applied.
    pub fn total(&self) -> i64 {
        self.total_mark.unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: Option<Uuid>,
    pub name: String,
    pub class: String,
    pub team: String,
    pub created_at: DateTime<Utc>,
}

/// Embedded student fields carried by joined rows. Any field may be missing
/// on a dangling reference; accessors substitute placeholders.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRef {
    pub name: Option<String>,
    pub class: Option<String>,
    pub team: Option<String>,
}

/// Embedded program fields carried by joined result rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgramRef {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// The separately stored per-student total record. The displayed student
/// total is recomputed from raw results; this record drives the category
/// leaderboard and the category hint on student detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentTotal {
    pub id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub total_mark: Option<i64>,
    pub category: Option<String>,
    pub student: Option<StudentRef>,
    pub created_at: DateTime<Utc>,
}

impl StudentTotal {
    pub fn total(&self) -> i64 {
        self.total_mark.unwrap_or(0)
    }

    pub fn student_name(&self) -> &str {
        self.student
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or(UNKNOWN_STUDENT_LABEL)
    }

    pub fn student_class(&self) -> &str {
        self.student
            .as_ref()
            .and_then(|s| s.class.as_deref())
            .unwrap_or(NOT_AVAILABLE_LABEL)
    }

    pub fn student_team(&self) -> &str {
        self.student
            .as_ref()
            .and_then(|s| s.team.as_deref())
            .unwrap_or(NOT_AVAILABLE_LABEL)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: Option<Uuid>,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Program {
    /// General programs are team events; everything else is judged per
    /// student. The stored category is compared exactly.
    pub fn is_general(&self) -> bool {
        self.category == Category::General.label()
    }
}

/// One student's placement in one program. `program` and `student` are
/// filled when the row was fetched with the corresponding join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResult {
    pub id: Option<Uuid>,
    pub student_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub prize_place: Option<u32>,
    pub mark: Option<i64>,
    pub marks: Option<i64>,
    pub program: Option<ProgramRef>,
    pub student: Option<StudentRef>,
    pub created_at: DateTime<Utc>,
}

impl StudentResult {
    /// Mark with the null-means-zero rule applied, for totalling.
    pub fn mark_value(&self) -> i64 {
        self.mark.unwrap_or(0)
    }

    /// Mark for display: `mark` when non-zero, else the legacy `marks`
    /// column when non-zero, else nothing.
    pub fn display_mark(&self) -> Option<i64> {
        self.mark
            .filter(|m| *m != 0)
            .or(self.marks.filter(|m| *m != 0))
    }

    pub fn student_name(&self) -> &str {
        self.student
            .as_ref()
            .and_then(|s| s.name.as_deref())
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn program_name(&self) -> &str {
        self.program
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn program_category(&self) -> Option<&str> {
        self.program.as_ref().and_then(|p| p.category.as_deref())
    }
}

/// A team's placement in a General program. Teams are referenced by name
/// here, matching the deployed schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResult {
    pub id: Option<Uuid>,
    pub team: String,
    pub program_id: Option<Uuid>,
    pub prize_place: Option<u32>,
    pub mark: Option<i64>,
    pub marks: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl TeamResult {
    pub fn display_mark(&self) -> Option<i64> {
        self.mark
            .filter(|m| *m != 0)
            .or(self.marks.filter(|m| *m != 0))
    }
}
