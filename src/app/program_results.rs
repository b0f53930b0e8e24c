use super::view::{Generation, Ticket};
use crate::constants::{NO_MARKS_LABEL, NO_PLACEMENT_LABEL, NO_PLACE_LABEL};
use crate::domain::{Program, StudentResult, TeamResult};
use crate::error::Result;
use crate::observability;
use crate::storage::RecordStore;
use tracing::{debug, warn};

const VIEW: &str = "program_results";

/// Lifecycle of the result panel. `Ready` with no rows means the fetch
/// completed and the program has nothing recorded, which renders differently
/// from `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsState {
    Idle,
    Loading,
    Ready,
}

/// One display row, shaped identically whether the program was judged per
/// team or per student.
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub name: String,
    pub prize_place: Option<u32>,
    pub mark: Option<i64>,
}

impl ResultRow {
    pub fn from_team(result: &TeamResult) -> Self {
        Self {
            name: result.team.clone(),
            prize_place: result.prize_place,
            mark: result.display_mark(),
        }
    }

    pub fn from_student(result: &StudentResult) -> Self {
        Self {
            name: result.student_name().to_string(),
            prize_place: result.prize_place,
            mark: result.display_mark(),
        }
    }

    /// `#3` style rank, with a dash for unplaced rows. A stored place of
    /// zero counts as unplaced.
    pub fn rank_label(&self) -> String {
        match self.prize_place.filter(|p| *p > 0) {
            Some(place) => format!("#{}", place),
            None => NO_PLACE_LABEL.to_string(),
        }
    }

    pub fn mark_label(&self) -> String {
        match self.mark {
            Some(mark) => format!("Marks: {}", mark),
            None => NO_MARKS_LABEL.to_string(),
        }
    }

    pub fn placement_label(&self) -> String {
        match self.prize_place.filter(|p| *p > 0) {
            Some(place) => format!("Place: {}", place),
            None => NO_PLACEMENT_LABEL.to_string(),
        }
    }
}

/// Results panel for one selected program. The program's category decides
/// which collection is fetched: General programs read team results, every
/// other category reads student results.
pub struct ProgramResultsView {
    state: ResultsState,
    program: Option<Program>,
    rows: Vec<ResultRow>,
    last_error: Option<String>,
    generation: Generation,
}

impl ProgramResultsView {
    pub fn new() -> Self {
        Self {
            state: ResultsState::Idle,
            program: None,
            rows: Vec::new(),
            last_error: None,
            generation: Generation::new(),
        }
    }

    pub fn open(&mut self, program: &Program) -> Ticket {
        debug!("opening results for program '{}'", program.name);
        self.state = ResultsState::Loading;
        self.program = Some(program.clone());
        self.rows = Vec::new();
        self.last_error = None;
        self.generation.advance()
    }

    pub async fn load(store: &dyn RecordStore, program: &Program) -> Result<Vec<ResultRow>> {
        let Some(program_id) = program.id else {
            return Ok(Vec::new());
        };
        if program.is_general() {
            let results = store.get_team_results_by_program_id(program_id).await?;
            Ok(results.iter().map(ResultRow::from_team).collect())
        } else {
            let results = store.get_results_by_program_id(program_id).await?;
            Ok(results.iter().map(ResultRow::from_student).collect())
        }
    }

    pub fn apply(&mut self, ticket: Ticket, outcome: Result<Vec<ResultRow>>) {
        if !self.generation.is_current(ticket) {
            debug!("discarding results for a program no longer selected");
            observability::views::stale_discard(VIEW);
            return;
        }
        self.state = ResultsState::Ready;
        match outcome {
            Ok(rows) => {
                self.rows = rows;
                self.last_error = None;
                observability::views::refresh(VIEW);
            }
            Err(e) => {
                warn!("program results fetch failed: {}", e);
                self.rows = Vec::new();
                self.last_error = Some(e.to_string());
                observability::views::refresh_error(VIEW);
            }
        }
    }

    pub async fn show(&mut self, store: &dyn RecordStore, program: &Program) {
        let ticket = self.open(program);
        let outcome = Self::load(store, program).await;
        self.apply(ticket, outcome);
    }

    pub fn close(&mut self) {
        self.state = ResultsState::Idle;
        self.program = None;
        self.rows = Vec::new();
        self.last_error = None;
        self.generation.invalidate();
    }

    pub fn state(&self) -> ResultsState {
        self.state
    }

    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Fetch finished and found nothing recorded.
    pub fn is_empty_ready(&self) -> bool {
        self.state == ResultsState::Ready && self.rows.is_empty()
    }
}
