use crate::domain::{team_color, Student as DomainStudent, StudentResult, StudentTotal};
use crate::engine::{MarkSheet, MarkSheetRow};
use async_graphql::{Object, ID};

/// GraphQL representation of a Student
#[derive(Clone)]
pub struct Student {
    pub inner: DomainStudent,
}

impl From<DomainStudent> for Student {
    fn from(student: DomainStudent) -> Self {
        Self { inner: student }
    }
}

#[Object]
impl Student {
    /// The unique identifier for the student
    async fn id(&self) -> ID {
        ID(self.inner.id.unwrap_or_default().to_string())
    }

    /// The student's name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// The student's class
    async fn class(&self) -> &str {
        &self.inner.class
    }

    /// The student's team, as stored
    async fn team(&self) -> &str {
        &self.inner.team
    }

    /// Display color for the team, when it is one of the known teams
    async fn team_color(&self) -> Option<&'static str> {
        team_color(&self.inner.team)
    }

    /// When the student was registered
    async fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.inner.created_at
    }
}

/// One line of a student's mark sheet
#[derive(Clone)]
pub struct MarkSheetEntry {
    pub inner: MarkSheetRow,
}

impl From<MarkSheetRow> for MarkSheetEntry {
    fn from(row: MarkSheetRow) -> Self {
        Self { inner: row }
    }
}

#[Object]
impl MarkSheetEntry {
    /// Program name, with a placeholder when the join is dangling
    async fn program(&self) -> &str {
        &self.inner.program
    }

    /// Formatted prize caption, `-` when unplaced
    async fn prize(&self) -> &str {
        &self.inner.prize
    }

    /// Mark counted into the total, missing stored as zero
    async fn mark(&self) -> i64 {
        self.inner.mark
    }
}

/// A student together with their recomputed mark sheet
#[derive(Clone)]
pub struct StudentProfile {
    pub student: DomainStudent,
    pub results: Vec<StudentResult>,
    pub total_record: Option<StudentTotal>,
}

#[Object]
impl StudentProfile {
    /// The student record
    async fn student(&self) -> Student {
        self.student.clone().into()
    }

    /// One line per result, oldest first
    async fn mark_sheet(&self) -> Vec<MarkSheetEntry> {
        MarkSheet::from_results(&self.results)
            .rows
            .into_iter()
            .map(Into::into)
            .collect()
    }

    /// Total recomputed from the raw results, never the stored record
    async fn total_marks(&self) -> i64 {
        MarkSheet::from_results(&self.results).total_marks
    }

    /// Number of programs entered
    async fn program_count(&self) -> i32 {
        self.results.len() as i32
    }

    /// Category from the stored totals record, when one exists
    async fn category(&self) -> Option<&str> {
        self.total_record.as_ref().and_then(|t| t.category.as_deref())
    }
}
