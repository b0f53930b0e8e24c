use super::rows::Fixture;
use super::RecordStore;
use crate::domain::{Program, ProgramRef, Student, StudentRef, StudentResult, StudentTotal, Team, TeamResult};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use uuid::Uuid;

/// In-memory store implementation for development/testing. Collections
/// keep insertion order, so tie order in the derived views is
/// deterministic.
pub struct InMemoryStore {
    teams: Arc<Mutex<Vec<Team>>>,
    students: Arc<Mutex<Vec<Student>>>,
    student_totals: Arc<Mutex<Vec<StudentTotal>>>,
    programs: Arc<Mutex<Vec<Program>>>,
    results: Arc<Mutex<Vec<StudentResult>>>,
    team_results: Arc<Mutex<Vec<TeamResult>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            teams: Arc::new(Mutex::new(Vec::new())),
            students: Arc::new(Mutex::new(Vec::new())),
            student_totals: Arc::new(Mutex::new(Vec::new())),
            programs: Arc::new(Mutex::new(Vec::new())),
            results: Arc::new(Mutex::new(Vec::new())),
            team_results: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed the store from a whole-schema JSON export keyed by table name.
    pub fn from_fixture<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let fixture: Fixture = serde_json::from_str(&content)?;
        let store = Self::new();

        info!(
            students = fixture.students.len(),
            programs = fixture.programs.len(),
            results = fixture.results.len(),
            team_results = fixture.teams.len(),
            "Loading fixture into in-memory store"
        );

        *store.teams.lock().unwrap() =
            fixture.totalmarkteam.into_iter().map(Into::into).collect();
        *store.students.lock().unwrap() =
            fixture.students.into_iter().map(Into::into).collect();
        *store.student_totals.lock().unwrap() =
            fixture.totalmarkstudent.into_iter().map(Into::into).collect();
        *store.programs.lock().unwrap() =
            fixture.programs.into_iter().map(Into::into).collect();
        *store.results.lock().unwrap() =
            fixture.results.into_iter().map(Into::into).collect();
        *store.team_results.lock().unwrap() =
            fixture.teams.into_iter().map(Into::into).collect();

        Ok(store)
    }

    pub fn create_team(&self, team: &mut Team) {
        let id = Uuid::new_v4();
        team.id = Some(id);
        self.teams.lock().unwrap().push(team.clone());
        debug!("Created team standings row: {} with id {}", team.name, id);
    }

    pub fn create_student(&self, student: &mut Student) {
        let id = Uuid::new_v4();
        student.id = Some(id);
        self.students.lock().unwrap().push(student.clone());
        debug!("Created student: {} with id {}", student.name, id);
    }

    pub fn create_student_total(&self, total: &mut StudentTotal) {
        let id = Uuid::new_v4();
        total.id = Some(id);
        self.student_totals.lock().unwrap().push(total.clone());
        debug!("Created student total record with id {}", id);
    }

    pub fn create_program(&self, program: &mut Program) {
        let id = Uuid::new_v4();
        program.id = Some(id);
        self.programs.lock().unwrap().push(program.clone());
        debug!("Created program: {} with id {}", program.name, id);
    }

    pub fn create_result(&self, result: &mut StudentResult) {
        let id = Uuid::new_v4();
        result.id = Some(id);
        self.results.lock().unwrap().push(result.clone());
        debug!("Created result with id {}", id);
    }

    pub fn create_team_result(&self, result: &mut TeamResult) {
        let id = Uuid::new_v4();
        result.id = Some(id);
        self.team_results.lock().unwrap().push(result.clone());
        debug!("Created team result for {} with id {}", result.team, id);
    }

    fn student_ref(students: &[Student], student_id: Option<Uuid>) -> Option<StudentRef> {
        let id = student_id?;
        students
            .iter()
            .find(|s| s.id == Some(id))
            .map(|s| StudentRef {
                name: Some(s.name.clone()),
                class: Some(s.class.clone()),
                team: Some(s.team.clone()),
            })
    }

    fn program_ref(programs: &[Program], program_id: Option<Uuid>) -> Option<ProgramRef> {
        let id = program_id?;
        programs
            .iter()
            .find(|p| p.id == Some(id))
            .map(|p| ProgramRef {
                name: Some(p.name.clone()),
                category: Some(p.category.clone()),
            })
    }

    fn by_place_nulls_last<T>(rows: &mut [T], place: impl Fn(&T) -> Option<u32>) {
        rows.sort_by_key(|row| {
            let p = place(row);
            (p.is_none(), p.unwrap_or(0))
        });
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get_all_teams(&self) -> Result<Vec<Team>> {
        let mut teams = self.teams.lock().unwrap().clone();
        teams.sort_by(|a, b| b.total().cmp(&a.total()));
        Ok(teams)
    }

    async fn get_all_students(&self) -> Result<Vec<Student>> {
        Ok(self.students.lock().unwrap().clone())
    }

    async fn get_student_by_id(&self, id: Uuid) -> Result<Option<Student>> {
        let students = self.students.lock().unwrap();
        Ok(students.iter().find(|s| s.id == Some(id)).cloned())
    }

    async fn get_all_student_totals(&self) -> Result<Vec<StudentTotal>> {
        let students = self.students.lock().unwrap().clone();
        let mut totals = self.student_totals.lock().unwrap().clone();
        for total in &mut totals {
            if total.student.is_none() {
                total.student = Self::student_ref(&students, total.student_id);
            }
        }
        totals.sort_by(|a, b| b.total().cmp(&a.total()));
        Ok(totals)
    }

    async fn get_student_total_by_student_id(
        &self,
        student_id: Uuid,
    ) -> Result<Option<StudentTotal>> {
        let students = self.students.lock().unwrap().clone();
        let totals = self.student_totals.lock().unwrap();
        let mut total = totals
            .iter()
            .find(|t| t.student_id == Some(student_id))
            .cloned();
        if let Some(record) = &mut total {
            if record.student.is_none() {
                record.student = Self::student_ref(&students, record.student_id);
            }
        }
        Ok(total)
    }

    async fn get_all_programs(&self) -> Result<Vec<Program>> {
        let mut programs = self.programs.lock().unwrap().clone();
        programs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(programs)
    }

    async fn get_program_by_id(&self, id: Uuid) -> Result<Option<Program>> {
        let programs = self.programs.lock().unwrap();
        Ok(programs.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn get_results_by_student_id(&self, student_id: Uuid) -> Result<Vec<StudentResult>> {
        let programs = self.programs.lock().unwrap().clone();
        let mut rows: Vec<StudentResult> = {
            let results = self.results.lock().unwrap();
            results
                .iter()
                .filter(|r| r.student_id == Some(student_id))
                .cloned()
                .collect()
        };
        for row in &mut rows {
            if row.program.is_none() {
                row.program = Self::program_ref(&programs, row.program_id);
            }
        }
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }

    async fn get_results_by_program_id(&self, program_id: Uuid) -> Result<Vec<StudentResult>> {
        let students = self.students.lock().unwrap().clone();
        let mut rows: Vec<StudentResult> = {
            let results = self.results.lock().unwrap();
            results
                .iter()
                .filter(|r| r.program_id == Some(program_id))
                .cloned()
                .collect()
        };
        for row in &mut rows {
            if row.student.is_none() {
                row.student = Self::student_ref(&students, row.student_id);
            }
        }
        Self::by_place_nulls_last(&mut rows, |r| r.prize_place);
        Ok(rows)
    }

    async fn get_team_results_by_program_id(&self, program_id: Uuid) -> Result<Vec<TeamResult>> {
        let mut rows: Vec<TeamResult> = {
            let team_results = self.team_results.lock().unwrap();
            team_results
                .iter()
                .filter(|r| r.program_id == Some(program_id))
                .cloned()
                .collect()
        };
        Self::by_place_nulls_last(&mut rows, |r| r.prize_place);
        Ok(rows)
    }

    async fn get_program_ids_with_placed_results(
        &self,
        program_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>> {
        let wanted: HashSet<Uuid> = program_ids.iter().copied().collect();
        let results = self.results.lock().unwrap();
        Ok(results
            .iter()
            .filter(|r| r.prize_place.is_some())
            .filter_map(|r| r.program_id)
            .filter(|id| wanted.contains(id))
            .collect())
    }

    async fn get_program_ids_with_placed_team_results(
        &self,
        program_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>> {
        let wanted: HashSet<Uuid> = program_ids.iter().copied().collect();
        let team_results = self.team_results.lock().unwrap();
        Ok(team_results
            .iter()
            .filter(|r| r.prize_place.is_some())
            .filter_map(|r| r.program_id)
            .filter(|id| wanted.contains(id))
            .collect())
    }
}
