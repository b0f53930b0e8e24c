use crate::app::ResultRow as ViewRow;
use async_graphql::Object;

/// GraphQL representation of one program result row
#[derive(Clone)]
pub struct ResultRow {
    pub inner: ViewRow,
}

impl From<ViewRow> for ResultRow {
    fn from(row: ViewRow) -> Self {
        Self { inner: row }
    }
}

#[Object]
impl ResultRow {
    /// Competitor name: the team for General programs, the student otherwise
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Awarded place. A stored place of zero reads as unplaced.
    async fn prize_place(&self) -> Option<u32> {
        self.inner.prize_place.filter(|p| *p > 0)
    }

    /// `#3` style rank caption, a dash when unplaced
    async fn rank_label(&self) -> String {
        self.inner.rank_label()
    }

    /// Display mark, when one was recorded
    async fn mark(&self) -> Option<i64> {
        self.inner.mark
    }

    async fn mark_label(&self) -> String {
        self.inner.mark_label()
    }

    async fn placement_label(&self) -> String {
        self.inner.placement_label()
    }
}
