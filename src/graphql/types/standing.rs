use crate::domain::team_color;
use crate::engine::RankedTeam;
use async_graphql::{Object, ID};

/// GraphQL representation of one team standings row
#[derive(Clone)]
pub struct TeamStanding {
    pub inner: RankedTeam,
}

impl From<RankedTeam> for TeamStanding {
    fn from(ranked: RankedTeam) -> Self {
        Self { inner: ranked }
    }
}

#[Object]
impl TeamStanding {
    /// The unique identifier for the team record
    async fn id(&self) -> ID {
        ID(self.inner.team.id.unwrap_or_default().to_string())
    }

    /// The team name
    async fn name(&self) -> &str {
        &self.inner.team.name
    }

    /// Accumulated marks, with a missing total counted as zero
    async fn total_mark(&self) -> i64 {
        self.inner.team.total()
    }

    /// 1-based standings position
    async fn rank(&self) -> i32 {
        self.inner.rank as i32 + 1
    }

    /// Medal emoji for this position
    async fn medal_icon(&self) -> &'static str {
        self.inner.medal().icon
    }

    /// Medal caption, e.g. "1st Place"
    async fn medal_label(&self) -> String {
        self.inner.medal().label
    }

    /// The team's fixed display color, when it is one of the known teams
    async fn color(&self) -> Option<&'static str> {
        team_color(&self.inner.team.name)
    }
}
