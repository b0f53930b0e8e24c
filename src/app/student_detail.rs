use super::view::{Generation, Ticket};
use crate::domain::{Student, StudentResult, StudentTotal};
use crate::engine::MarkSheet;
use crate::error::Result;
use crate::observability;
use crate::storage::RecordStore;
use tracing::{debug, warn};
use uuid::Uuid;

const VIEW: &str = "student_detail";

#[derive(Debug, Clone)]
pub struct StudentDetailData {
    pub student: Option<Student>,
    pub results: Vec<StudentResult>,
    pub total_record: Option<StudentTotal>,
}

/// One student's profile: the student record, their raw results, and the
/// stored total record. Displayed totals are always recomputed from the
/// results; the stored record only supplies the category hint.
pub struct StudentDetailView {
    student: Option<Student>,
    results: Vec<StudentResult>,
    total_record: Option<StudentTotal>,
    loading: bool,
    last_error: Option<String>,
    generation: Generation,
}

impl StudentDetailView {
    pub fn new() -> Self {
        Self {
            student: None,
            results: Vec::new(),
            total_record: None,
            loading: false,
            last_error: None,
            generation: Generation::new(),
        }
    }

    pub fn open(&mut self, student_id: Uuid) -> Ticket {
        debug!("opening student detail for {}", student_id);
        self.student = None;
        self.results = Vec::new();
        self.total_record = None;
        self.loading = true;
        self.last_error = None;
        self.generation.advance()
    }

    /// The stored total record is optional data; losing it only loses the
    /// category hint.
    pub async fn load(store: &dyn RecordStore, student_id: Uuid) -> Result<StudentDetailData> {
        let student = store.get_student_by_id(student_id).await?;
        let results = store.get_results_by_student_id(student_id).await?;
        let total_record = match store.get_student_total_by_student_id(student_id).await {
            Ok(record) => record,
            Err(e) => {
                warn!("student total record fetch failed: {}", e);
                None
            }
        };
        Ok(StudentDetailData {
            student,
            results,
            total_record,
        })
    }

    pub fn apply(&mut self, ticket: Ticket, outcome: Result<StudentDetailData>) {
        if !self.generation.is_current(ticket) {
            debug!("discarding stale student detail fetch");
            observability::views::stale_discard(VIEW);
            return;
        }
        self.loading = false;
        match outcome {
            Ok(data) => {
                self.student = data.student;
                self.results = data.results;
                self.total_record = data.total_record;
                self.last_error = None;
                observability::views::refresh(VIEW);
            }
            Err(e) => {
                warn!("student detail fetch failed: {}", e);
                self.student = None;
                self.results = Vec::new();
                self.total_record = None;
                self.last_error = Some(e.to_string());
                observability::views::refresh_error(VIEW);
            }
        }
    }

    pub async fn show(&mut self, store: &dyn RecordStore, student_id: Uuid) {
        let ticket = self.open(student_id);
        let outcome = Self::load(store, student_id).await;
        self.apply(ticket, outcome);
    }

    pub fn close(&mut self) {
        self.student = None;
        self.results = Vec::new();
        self.total_record = None;
        self.loading = false;
        self.last_error = None;
        self.generation.invalidate();
    }

    pub fn student(&self) -> Option<&Student> {
        self.student.as_ref()
    }

    pub fn results(&self) -> &[StudentResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Recomputed table: one row per result plus the synthetic TOTAL row.
    pub fn mark_sheet(&self) -> MarkSheet {
        MarkSheet::from_results(&self.results)
    }

    pub fn category_hint(&self) -> Option<&str> {
        self.total_record.as_ref().and_then(|t| t.category.as_deref())
    }
}
