use super::rows::{ProbeRow, ProgramRow, StudentResultRow, StudentRow, StudentTotalRow, TeamResultRow, TeamTotalRow};
use super::RecordStore;
use crate::config::StoreConfig;
use crate::constants::{PROGRAMS_TABLE, RESULTS_TABLE, STUDENTS_TABLE, STUDENT_TOTALS_TABLE, TEAM_RESULTS_TABLE, TEAM_TOTALS_TABLE};
use crate::domain::{Program, Student, StudentResult, StudentTotal, Team, TeamResult};
use crate::error::{Result, ResultsError};
use crate::observability;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::debug;
use uuid::Uuid;

/// PostgREST client for the deployed schema. Authenticates with the
/// project's anon key in both the `apikey` and `Authorization` headers.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .clone()
            .ok_or_else(|| ResultsError::Config("store.base_url is not set".to_string()))?;
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ResultsError::Config("store.api_key is not set".to_string()))?;
        Self::new(base_url, api_key)
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        collection: &'static str,
        query: &str,
    ) -> Result<Vec<T>> {
        let url = format!("{}/rest/v1/{}", self.base_url, query);
        debug!(collection, %url, "store query");
        let started = Instant::now();

        let response = match self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                observability::store::query_error(collection);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            observability::store::query_error(collection);
            return Err(ResultsError::Store {
                message: format!("{} query failed: {} - {}", collection, status, body),
            });
        }

        let rows = match response.json::<Vec<T>>().await {
            Ok(rows) => rows,
            Err(e) => {
                observability::store::query_error(collection);
                return Err(e.into());
            }
        };

        observability::store::query_success(collection);
        observability::store::query_duration(collection, started.elapsed().as_secs_f64());
        Ok(rows)
    }

    fn in_filter(ids: &[Uuid]) -> String {
        let joined = ids
            .iter()
            .map(Uuid::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("in.({})", joined)
    }

    async fn probe(
        &self,
        collection: &'static str,
        program_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>> {
        if program_ids.is_empty() {
            return Ok(HashSet::new());
        }
        let query = format!(
            "{}?select=program_id&program_id={}&prize_place=not.is.null",
            collection,
            Self::in_filter(program_ids)
        );
        let rows: Vec<ProbeRow> = self.fetch_rows(collection, &query).await?;
        Ok(rows.into_iter().filter_map(|row| row.program_id).collect())
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn get_all_teams(&self) -> Result<Vec<Team>> {
        let query = format!("{}?select=*&order=totalmark.desc.nullslast", TEAM_TOTALS_TABLE);
        let rows: Vec<TeamTotalRow> = self.fetch_rows(TEAM_TOTALS_TABLE, &query).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_all_students(&self) -> Result<Vec<Student>> {
        let query = format!("{}?select=*", STUDENTS_TABLE);
        let rows: Vec<StudentRow> = self.fetch_rows(STUDENTS_TABLE, &query).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_student_by_id(&self, id: Uuid) -> Result<Option<Student>> {
        let query = format!("{}?select=*&id=eq.{}&limit=1", STUDENTS_TABLE, id);
        let rows: Vec<StudentRow> = self.fetch_rows(STUDENTS_TABLE, &query).await?;
        Ok(rows.into_iter().next().map(Into::into))
    }

    async fn get_all_student_totals(&self) -> Result<Vec<StudentTotal>> {
        let query = format!(
            "{}?select=*,students(name,class,team)&order=totalmark.desc.nullslast",
            STUDENT_TOTALS_TABLE
        );
        let rows: Vec<StudentTotalRow> = self.fetch_rows(STUDENT_TOTALS_TABLE, &query).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_student_total_by_student_id(
        &self,
        student_id: Uuid,
    ) -> Result<Option<StudentTotal>> {
        let query = format!(
            "{}?select=*,students(name,class,team)&student_id=eq.{}&limit=1",
            STUDENT_TOTALS_TABLE, student_id
        );
        let rows: Vec<StudentTotalRow> = self.fetch_rows(STUDENT_TOTALS_TABLE, &query).await?;
        Ok(rows.into_iter().next().map(Into::into))
    }

    async fn get_all_programs(&self) -> Result<Vec<Program>> {
        let query = format!("{}?select=*&order=created_at.desc", PROGRAMS_TABLE);
        let rows: Vec<ProgramRow> = self.fetch_rows(PROGRAMS_TABLE, &query).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_program_by_id(&self, id: Uuid) -> Result<Option<Program>> {
        let query = format!("{}?select=*&id=eq.{}&limit=1", PROGRAMS_TABLE, id);
        let rows: Vec<ProgramRow> = self.fetch_rows(PROGRAMS_TABLE, &query).await?;
        Ok(rows.into_iter().next().map(Into::into))
    }

    async fn get_results_by_student_id(&self, student_id: Uuid) -> Result<Vec<StudentResult>> {
        let query = format!(
            "{}?select=*,programs(name,category)&student_id=eq.{}&order=created_at.asc",
            RESULTS_TABLE, student_id
        );
        let rows: Vec<StudentResultRow> = self.fetch_rows(RESULTS_TABLE, &query).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_results_by_program_id(&self, program_id: Uuid) -> Result<Vec<StudentResult>> {
        let query = format!(
            "{}?select=*,students(name)&program_id=eq.{}&order=prize_place.asc.nullslast",
            RESULTS_TABLE, program_id
        );
        let rows: Vec<StudentResultRow> = self.fetch_rows(RESULTS_TABLE, &query).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_team_results_by_program_id(&self, program_id: Uuid) -> Result<Vec<TeamResult>> {
        let query = format!(
            "{}?select=*&program_id=eq.{}&order=prize_place.asc.nullslast",
            TEAM_RESULTS_TABLE, program_id
        );
        let rows: Vec<TeamResultRow> = self.fetch_rows(TEAM_RESULTS_TABLE, &query).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_program_ids_with_placed_results(
        &self,
        program_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>> {
        self.probe(RESULTS_TABLE, program_ids).await
    }

    async fn get_program_ids_with_placed_team_results(
        &self,
        program_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>> {
        self.probe(TEAM_RESULTS_TABLE, program_ids).await
    }
}
