//! Wire rows of the deployed schema. Numeric columns arrive as JSON numbers
//! or numeric strings depending on each column's history, and embedded joins
//! may be null on dangling references, so decoding is lenient: anything
//! unreadable becomes `None` and defaults at the domain boundary.

use crate::constants::{NOT_AVAILABLE_LABEL, UNKNOWN_LABEL};
use crate::domain::{Program, ProgramRef, Student, StudentRef, StudentResult, StudentTotal, Team, TeamResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => {
            n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))
        }
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    })
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_i64(deserializer)?;
    Ok(value.and_then(|n| u32::try_from(n).ok()))
}

fn or_epoch(value: Option<DateTime<Utc>>) -> DateTime<Utc> {
    value.unwrap_or(DateTime::UNIX_EPOCH)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamTotalRow {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub teamname: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub totalmark: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<TeamTotalRow> for Team {
    fn from(row: TeamTotalRow) -> Self {
        Team {
            id: row.id,
            name: row.teamname.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            total_mark: row.totalmark,
            created_at: or_epoch(row.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudentRow {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Student {
            id: row.id,
            name: row.name.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            class: row.class.unwrap_or_else(|| NOT_AVAILABLE_LABEL.to_string()),
            team: row.team.unwrap_or_else(|| NOT_AVAILABLE_LABEL.to_string()),
            created_at: or_epoch(row.created_at),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StudentRefRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

impl From<StudentRefRow> for StudentRef {
    fn from(row: StudentRefRow) -> Self {
        StudentRef {
            name: row.name,
            class: row.class,
            team: row.team,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProgramRefRow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<ProgramRefRow> for ProgramRef {
    fn from(row: ProgramRefRow) -> Self {
        ProgramRef {
            name: row.name,
            category: row.category,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudentTotalRow {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub student_id: Option<Uuid>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub totalmark: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub students: Option<StudentRefRow>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<StudentTotalRow> for StudentTotal {
    fn from(row: StudentTotalRow) -> Self {
        StudentTotal {
            id: row.id,
            student_id: row.student_id,
            total_mark: row.totalmark,
            category: row.category,
            student: row.students.map(Into::into),
            created_at: or_epoch(row.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramRow {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ProgramRow> for Program {
    fn from(row: ProgramRow) -> Self {
        Program {
            id: row.id,
            name: row.name.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            category: row.category.unwrap_or_default(),
            description: row.description,
            created_at: or_epoch(row.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudentResultRow {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub program_id: Option<Uuid>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub prize_place: Option<u32>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub mark: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub marks: Option<i64>,
    #[serde(default)]
    pub programs: Option<ProgramRefRow>,
    #[serde(default)]
    pub students: Option<StudentRefRow>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<StudentResultRow> for StudentResult {
    fn from(row: StudentResultRow) -> Self {
        StudentResult {
            id: row.id,
            student_id: row.student_id,
            program_id: row.program_id,
            prize_place: row.prize_place,
            mark: row.mark,
            marks: row.marks,
            program: row.programs.map(Into::into),
            student: row.students.map(Into::into),
            created_at: or_epoch(row.created_at),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamResultRow {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub program_id: Option<Uuid>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub prize_place: Option<u32>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub mark: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub marks: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<TeamResultRow> for TeamResult {
    fn from(row: TeamResultRow) -> Self {
        TeamResult {
            id: row.id,
            team: row.team.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            program_id: row.program_id,
            prize_place: row.prize_place,
            mark: row.mark,
            marks: row.marks,
            created_at: or_epoch(row.created_at),
        }
    }
}

/// A probe row: `select=program_id` with the placement filter applied.
#[derive(Debug, Deserialize)]
pub(crate) struct ProbeRow {
    #[serde(default)]
    pub program_id: Option<Uuid>,
}

/// A whole-schema JSON export, keyed by table name. Used to seed the
/// in-memory store from a fixture file.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Fixture {
    #[serde(default)]
    pub students: Vec<StudentRow>,
    #[serde(default)]
    pub programs: Vec<ProgramRow>,
    #[serde(default)]
    pub results: Vec<StudentResultRow>,
    #[serde(default)]
    pub teams: Vec<TeamResultRow>,
    #[serde(default)]
    pub totalmarkteam: Vec<TeamTotalRow>,
    #[serde(default)]
    pub totalmarkstudent: Vec<StudentTotalRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_strings_and_rejects_garbage() {
        let row: StudentResultRow = serde_json::from_str(
            r#"{"prize_place": "2", "mark": "17", "marks": null}"#,
        )
        .unwrap();
        assert_eq!(row.prize_place, Some(2));
        assert_eq!(row.mark, Some(17));
        assert_eq!(row.marks, None);

        let row: StudentResultRow =
            serde_json::from_str(r#"{"prize_place": "dnf", "mark": "12.9"}"#).unwrap();
        assert_eq!(row.prize_place, None);
        // fractional strings truncate like the legacy parser did
        assert_eq!(row.mark, Some(12));
    }

    #[test]
    fn negative_places_are_dropped() {
        let row: StudentResultRow = serde_json::from_str(r#"{"prize_place": -3}"#).unwrap();
        assert_eq!(row.prize_place, None);
    }

    #[test]
    fn team_total_row_maps_schema_names() {
        let row: TeamTotalRow =
            serde_json::from_str(r#"{"teamname": "QUTNIYYA", "totalmark": 120}"#).unwrap();
        let team: Team = row.into();
        assert_eq!(team.name, "QUTNIYYA");
        assert_eq!(team.total(), 120);
    }

    #[test]
    fn missing_join_target_stays_none() {
        let row: StudentResultRow =
            serde_json::from_str(r#"{"students": null, "programs": null}"#).unwrap();
        let result: StudentResult = row.into();
        assert_eq!(result.student_name(), "Unknown");
        assert_eq!(result.program_name(), "Unknown");
    }
}
