use crate::engine::ChipCount;
use async_graphql::Object;

/// GraphQL representation of one catalog filter chip with its count
#[derive(Clone)]
pub struct CategoryChip {
    pub inner: ChipCount,
}

impl From<ChipCount> for CategoryChip {
    fn from(count: ChipCount) -> Self {
        Self { inner: count }
    }
}

#[Object]
impl CategoryChip {
    /// Chip caption, `All` first
    async fn label(&self) -> &'static str {
        self.inner.chip.label
    }

    /// The chip's accent color
    async fn color(&self) -> &'static str {
        self.inner.chip.color
    }

    /// Two-stop background gradient
    async fn gradient(&self) -> Vec<&'static str> {
        self.inner.chip.gradient.to_vec()
    }

    /// Number of programs carrying this category, ignoring the active filter
    async fn count(&self) -> i32 {
        self.inner.count as i32
    }
}
