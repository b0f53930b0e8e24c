use super::view::{Generation, Ticket};
use crate::engine::{category_leaderboard, rank_teams, CategoryBoard, RankedTeam, LEADERBOARD_TOP_N};
use crate::error::Result;
use crate::observability;
use crate::storage::RecordStore;
use tracing::{debug, warn};

const VIEW: &str = "leaderboard";

#[derive(Debug, Clone)]
pub struct LeaderboardData {
    pub standings: Vec<RankedTeam>,
    pub boards: Vec<CategoryBoard>,
}

/// Team standings plus the per-category top performers. A fetch failure
/// empties both and records the message; the view itself never errors.
pub struct LeaderboardView {
    standings: Vec<RankedTeam>,
    boards: Vec<CategoryBoard>,
    last_error: Option<String>,
    generation: Generation,
}

impl LeaderboardView {
    pub fn new() -> Self {
        Self {
            standings: Vec::new(),
            // buckets exist from the start, before any data arrives
            boards: category_leaderboard(Vec::new(), LEADERBOARD_TOP_N),
            last_error: None,
            generation: Generation::new(),
        }
    }

    pub fn standings(&self) -> &[RankedTeam] {
        &self.standings
    }

    pub fn boards(&self) -> &[CategoryBoard] {
        &self.boards
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn begin_refresh(&mut self) -> Ticket {
        self.generation.advance()
    }

    pub async fn load(store: &dyn RecordStore) -> Result<LeaderboardData> {
        let teams = store.get_all_teams().await?;
        let totals = store.get_all_student_totals().await?;
        Ok(LeaderboardData {
            standings: rank_teams(teams),
            boards: category_leaderboard(totals, LEADERBOARD_TOP_N),
        })
    }

    pub fn apply(&mut self, ticket: Ticket, outcome: Result<LeaderboardData>) {
        if !self.generation.is_current(ticket) {
            debug!("discarding stale leaderboard fetch");
            observability::views::stale_discard(VIEW);
            return;
        }
        match outcome {
            Ok(data) => {
                self.standings = data.standings;
                self.boards = data.boards;
                self.last_error = None;
                observability::views::refresh(VIEW);
            }
            Err(e) => {
                warn!("leaderboard fetch failed: {}", e);
                self.standings = Vec::new();
                self.boards = category_leaderboard(Vec::new(), LEADERBOARD_TOP_N);
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
}
