use super::view::{Generation, Ticket};
use crate::domain::{Category, Program};
use crate::engine::{chip_counts, filter_programs, results_probe, ChipCount, ProgramFilter};
use crate::error::Result;
use crate::observability;
use crate::storage::RecordStore;
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

const VIEW: &str = "catalog";

#[derive(Debug, Clone)]
pub struct CatalogData {
    pub programs: Vec<Program>,
    pub has_results: HashMap<Uuid, bool>,
}

/// The program catalog: the full program set, the per-program has-results
/// flags, and the active chip/search filter.
pub struct CatalogView {
    programs: Vec<Program>,
    has_results: HashMap<Uuid, bool>,
    filter: ProgramFilter,
    last_error: Option<String>,
    generation: Generation,
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            programs: Vec::new(),
            has_results: HashMap::new(),
            filter: ProgramFilter::all(),
            last_error: None,
            generation: Generation::new(),
        }
    }

    pub fn begin_refresh(&mut self) -> Ticket {
        self.generation.advance()
    }

    /// Program fetch failure fails the load; a probe failure only loses the
    /// status flags, programs still show.
    pub async fn load(store: &dyn RecordStore) -> Result<CatalogData> {
        let programs = store.get_all_programs().await?;
        let has_results = match results_probe(store, &programs).await {
            Ok(map) => map,
            Err(e) => {
                warn!("results probe failed: {}", e);
                HashMap::new()
            }
        };
        Ok(CatalogData {
            programs,
            has_results,
        })
    }

    pub fn apply(&mut self, ticket: Ticket, outcome: Result<CatalogData>) {
        if !self.generation.is_current(ticket) {
            debug!("discarding stale catalog fetch");
            observability::views::stale_discard(VIEW);
            return;
        }
        match outcome {
            Ok(data) => {
                self.programs = data.programs;
                self.has_results = data.has_results;
                self.last_error = None;
                observability::views::refresh(VIEW);
            }
            Err(e) => {
                warn!("catalog fetch failed: {}", e);
                self.programs = Vec::new();
                self.has_results = HashMap::new();
                self.last_error = Some(e.to_string());
                observability::views::refresh_error(VIEW);
            }
        }
    }

    pub async fn refresh(&mut self, store: &dyn RecordStore) {
        let ticket = self.begin_refresh();
        let outcome = Self::load(store).await;
        self.apply(ticket, outcome);
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.filter.category = category;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn filter(&self) -> &ProgramFilter {
        &self.filter
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// The filtered catalog, category chip first, then search.
    pub fn visible(&self) -> Vec<&Program> {
        filter_programs(&self.programs, &self.filter)
    }

    pub fn visible_count(&self) -> usize {
        self.visible().len()
    }

    /// Chip badges, always over the unfiltered catalog.
    pub fn chips(&self) -> Vec<ChipCount> {
        chip_counts(&self.programs)
    }

    pub fn total_count(&self) -> usize {
        self.programs.len()
    }

    pub fn has_results(&self, program: &Program) -> bool {
        program
            .id
            .and_then(|id| self.has_results.get(&id).copied())
            .unwrap_or(false)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
