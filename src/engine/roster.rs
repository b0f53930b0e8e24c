//! Student directory: team tabs plus name search.

use crate::domain::{Student, TeamInfo, TEAMS};

/// Active roster filter. There is no "all teams" tab; the directory always
/// shows one team at a time, defaulting to the first.
#[derive(Debug, Clone)]
pub struct RosterFilter {
    pub team: &'static str,
    pub search: String,
}

impl Default for RosterFilter {
    fn default() -> Self {
        Self {
            team: TEAMS[0].name,
            search: String::new(),
        }
    }
}

impl RosterFilter {
    /// Stored team names are compared uppercased; the search is a
    /// lowercased name substring.
    pub fn matches(&self, student: &Student) -> bool {
        let team_match = student.team.to_uppercase() == self.team;
        let search_match = student
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        team_match && search_match
    }
}

pub fn filter_roster<'a>(students: &'a [Student], filter: &RosterFilter) -> Vec<&'a Student> {
    students.iter().filter(|s| filter.matches(s)).collect()
}

#[derive(Debug, Clone)]
pub struct TeamCount {
    pub team: TeamInfo,
    pub count: usize,
}

/// Per-team tab badges over the whole roster, using the same uppercased
/// match as the filter.
pub fn roster_counts(students: &[Student]) -> Vec<TeamCount> {
    TEAMS
        .iter()
        .map(|team| TeamCount {
            team: *team,
            count: students
                .iter()
                .filter(|s| s.team.to_uppercase() == team.name)
                .count(),
        })
        .collect()
}
