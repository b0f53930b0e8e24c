use crate::domain::{Category, Program as DomainProgram};
use crate::graphql::loaders::{StudentResultsExistLoader, TeamResultsExistLoader};
use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, FieldResult, Object, ID};

/// GraphQL representation of a Program
#[derive(Clone)]
pub struct Program {
    pub inner: DomainProgram,
}

impl From<DomainProgram> for Program {
    fn from(program: DomainProgram) -> Self {
        Self { inner: program }
    }
}

#[Object]
impl Program {
    /// The unique identifier for the program
    async fn id(&self) -> ID {
        ID(self.inner.id.unwrap_or_default().to_string())
    }

    /// The program name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// The stored category label
    async fn category(&self) -> &str {
        &self.inner.category
    }

    /// Display color for the category, when it is a known one
    async fn category_color(&self) -> Option<&'static str> {
        Category::parse(&self.inner.category).map(|c| c.color())
    }

    /// Free-form description
    async fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// When the program was created
    async fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.inner.created_at
    }

    /// Whether any placement has been recorded for this program. General
    /// programs check team results, every other category student results.
    /// Lookups batch through a dataloader, one probe query per kind per
    /// request.
    async fn has_results(&self, ctx: &Context<'_>) -> FieldResult<bool> {
        let id = match self.inner.id {
            Some(id) => id,
            None => return Ok(false),
        };

        let flag = if self.inner.is_general() {
            let loader = ctx.data::<DataLoader<TeamResultsExistLoader>>()?;
            loader.load_one(id).await?
        } else {
            let loader = ctx.data::<DataLoader<StudentResultsExistLoader>>()?;
            loader.load_one(id).await?
        };

        Ok(flag.unwrap_or(false))
    }
}
