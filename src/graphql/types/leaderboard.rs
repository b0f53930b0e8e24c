use crate::engine::{CategoryBoard as EngineBoard, RankedStudent};
use async_graphql::{Object, ID};

/// GraphQL representation of one category leaderboard bucket
#[derive(Clone)]
pub struct CategoryBoard {
    pub inner: EngineBoard,
}

impl From<EngineBoard> for CategoryBoard {
    fn from(board: EngineBoard) -> Self {
        Self { inner: board }
    }
}

#[Object]
impl CategoryBoard {
    /// The bucket's category label
    async fn category(&self) -> &'static str {
        self.inner.category.label()
    }

    /// The category's fixed display color
    async fn color(&self) -> &'static str {
        self.inner.category.color()
    }

    /// Top students in this category, best first. Empty when nothing is
    /// recorded yet.
    async fn entries(&self) -> Vec<LeaderboardEntry> {
        self.inner.entries.iter().cloned().map(Into::into).collect()
    }
}

/// GraphQL representation of one leaderboard entry
#[derive(Clone)]
pub struct LeaderboardEntry {
    pub inner: RankedStudent,
}

impl From<RankedStudent> for LeaderboardEntry {
    fn from(entry: RankedStudent) -> Self {
        Self { inner: entry }
    }
}

#[Object]
impl LeaderboardEntry {
    /// The unique identifier for the underlying totals record
    async fn id(&self) -> ID {
        ID(self.inner.record.id.unwrap_or_default().to_string())
    }

    /// 1-based position within the bucket
    async fn rank(&self) -> i32 {
        self.inner.rank as i32 + 1
    }

    /// Medal emoji for the top three, ordinal text below
    async fn badge(&self) -> String {
        self.inner.badge()
    }

    /// Student name, with a placeholder when the join is dangling
    async fn name(&self) -> &str {
        self.inner.record.student_name()
    }

    async fn class(&self) -> &str {
        self.inner.record.student_class()
    }

    async fn team(&self) -> &str {
        self.inner.record.student_team()
    }

    /// Stored total driving the ranking, missing counted as zero
    async fn total_mark(&self) -> i64 {
        self.inner.record.total()
    }
}
