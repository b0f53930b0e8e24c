use crate::domain::{Program, Student, StudentResult, StudentTotal, Team, TeamResult};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use uuid::Uuid;

pub mod memory;
pub mod rest;
mod rows;

pub use memory::InMemoryStore;
pub use rest::RestStore;

/// Read contract over the record collections. The engine and views depend
/// only on this trait; implementations own ordering and join synthesis.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Team standings rows, ordered by total mark descending.
    async fn get_all_teams(&self) -> Result<Vec<Team>>;

    // Student operations
    async fn get_all_students(&self) -> Result<Vec<Student>>;
    async fn get_student_by_id(&self, id: Uuid) -> Result<Option<Student>>;

    /// Per-student total records joined with student name/class/team,
    /// ordered by total mark descending.
    async fn get_all_student_totals(&self) -> Result<Vec<StudentTotal>>;
    async fn get_student_total_by_student_id(&self, student_id: Uuid)
        -> Result<Option<StudentTotal>>;

    /// Programs, newest first.
    async fn get_all_programs(&self) -> Result<Vec<Program>>;
    async fn get_program_by_id(&self, id: Uuid) -> Result<Option<Program>>;

    /// One student's results joined with program name/category, oldest
    /// first.
    async fn get_results_by_student_id(&self, student_id: Uuid) -> Result<Vec<StudentResult>>;

    /// One program's student results joined with student name, ordered by
    /// prize place ascending with unplaced rows last.
    async fn get_results_by_program_id(&self, program_id: Uuid) -> Result<Vec<StudentResult>>;

    /// One program's team results, same ordering as student results.
    async fn get_team_results_by_program_id(&self, program_id: Uuid) -> Result<Vec<TeamResult>>;

    /// The subset of `program_ids` having at least one student result with
    /// a recorded prize place. One query regardless of batch size.
    async fn get_program_ids_with_placed_results(
        &self,
        program_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>>;

    /// The subset of `program_ids` having at least one team result with a
    /// recorded prize place. One query regardless of batch size.
    async fn get_program_ids_with_placed_team_results(
        &self,
        program_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>>;
}
