use crate::app::{ProgramResultsView, StudentDetailView};
use crate::domain::{Category, TEAMS};
use crate::engine::{
    category_leaderboard, chip_counts, filter_programs, filter_roster, rank_teams, ProgramFilter,
    RosterFilter, LEADERBOARD_TOP_N,
};
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{
    CategoryBoard, CategoryChip, Program, ResultRow, Student, StudentProfile, TeamStanding,
};
use async_graphql::{Context, FieldResult, Object, ID};
use uuid::Uuid;

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Team standings, best total first
    async fn team_standings(&self, ctx: &Context<'_>) -> FieldResult<Vec<TeamStanding>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.get_all_teams().await {
            Ok(teams) => Ok(rank_teams(teams).into_iter().map(|t| t.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Top students per category bucket
    async fn category_leaderboard(&self, ctx: &Context<'_>) -> FieldResult<Vec<CategoryBoard>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.get_all_student_totals().await {
            Ok(records) => Ok(category_leaderboard(records, LEADERBOARD_TOP_N)
                .into_iter()
                .map(|b| b.into())
                .collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Programs, newest first, optionally narrowed by category and search
    async fn programs(
        &self,
        ctx: &Context<'_>,
        category: Option<String>,
        search: Option<String>,
    ) -> FieldResult<Vec<Program>> {
        let context = ctx.data::<GraphQLContext>()?;

        let category = match category.as_deref() {
            None | Some("All") => None,
            Some(label) => match Category::parse(label) {
                Some(parsed) => Some(parsed),
                // an unknown label cannot match any stored category exactly
                None => return Ok(Vec::new()),
            },
        };
        let filter = ProgramFilter {
            category,
            search: search.unwrap_or_default(),
        };

        match context.store.get_all_programs().await {
            Ok(programs) => Ok(filter_programs(&programs, &filter)
                .into_iter()
                .cloned()
                .map(|p| p.into())
                .collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Get a program by ID
    async fn program(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<Program>> {
        let context = ctx.data::<GraphQLContext>()?;
        let program_id = Uuid::parse_str(&id)?;

        match context.store.get_program_by_id(program_id).await {
            Ok(program) => Ok(program.map(|p| p.into())),
            Err(e) => Err(e.into()),
        }
    }

    /// Result rows for one program. General programs list team placements,
    /// every other category lists student placements.
    async fn program_results(
        &self,
        ctx: &Context<'_>,
        program_id: ID,
    ) -> FieldResult<Vec<ResultRow>> {
        let context = ctx.data::<GraphQLContext>()?;
        let program_id = Uuid::parse_str(&program_id)?;

        let program = match context.store.get_program_by_id(program_id).await {
            Ok(Some(program)) => program,
            Ok(None) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        match ProgramResultsView::load(context.store.as_ref(), &program).await {
            Ok(rows) => Ok(rows.into_iter().map(|r| r.into()).collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// Students on one team tab, optionally narrowed by a name search.
    /// Unknown team names fall back to the default tab.
    async fn students(
        &self,
        ctx: &Context<'_>,
        team: Option<String>,
        search: Option<String>,
    ) -> FieldResult<Vec<Student>> {
        let context = ctx.data::<GraphQLContext>()?;

        let team = team
            .as_deref()
            .map(str::to_uppercase)
            .and_then(|upper| TEAMS.iter().find(|info| info.name == upper))
            .map(|info| info.name)
            .unwrap_or(TEAMS[0].name);
        let filter = RosterFilter {
            team,
            search: search.unwrap_or_default(),
        };

        match context.store.get_all_students().await {
            Ok(students) => Ok(filter_roster(&students, &filter)
                .into_iter()
                .cloned()
                .map(|s| s.into())
                .collect()),
            Err(e) => Err(e.into()),
        }
    }

    /// A student's profile with their recomputed mark sheet
    async fn student(&self, ctx: &Context<'_>, id: ID) -> FieldResult<Option<StudentProfile>> {
        let context = ctx.data::<GraphQLContext>()?;
        let student_id = Uuid::parse_str(&id)?;

        match StudentDetailView::load(context.store.as_ref(), student_id).await {
            Ok(data) => match data.student {
                Some(student) => Ok(Some(StudentProfile {
                    student,
                    results: data.results,
                    total_record: data.total_record,
                })),
                None => Ok(None),
            },
            Err(e) => Err(e.into()),
        }
    }

    /// The catalog chip row with per-category program counts
    async fn catalog_chips(&self, ctx: &Context<'_>) -> FieldResult<Vec<CategoryChip>> {
        let context = ctx.data::<GraphQLContext>()?;

        match context.store.get_all_programs().await {
            Ok(programs) => Ok(chip_counts(&programs)
                .into_iter()
                .map(|c| c.into())
                .collect()),
            Err(e) => Err(e.into()),
        }
    }
}
