//! The fixed team table shared by the roster, standings, and API layers.

/// One competing team with its display color.
#[derive(Debug, Clone, Copy)]
pub struct TeamInfo {
    pub name: &'static str,
    pub color: &'static str,
}

/// All teams, in display order. The roster defaults to the first entry.
pub const TEAMS: [TeamInfo; 3] = [
    TeamInfo {
        name: "QUTNIYYA",
        color: "#FF5252",
    },
    TeamInfo {
        name: "JIRAHIYYA",
        color: "#4CAF50",
    },
    TeamInfo {
        name: "SWALAHIYYA",
        color: "#2196F3",
    },
];

/// Color for a stored team name. Matching is case-insensitive since the
/// data carries both cased and uppercased spellings.
pub fn team_color(name: &str) -> Option<&'static str> {
    let upper = name.trim().to_uppercase();
    TEAMS
        .iter()
        .find(|team| team.name == upper)
        .map(|team| team.color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_colors_case_insensitively() {
        assert_eq!(team_color("QUTNIYYA"), Some("#FF5252"));
        assert_eq!(team_color("jirahiyya"), Some("#4CAF50"));
        assert_eq!(team_color("Swalahiyya "), Some("#2196F3"));
        assert_eq!(team_color("UNKNOWN TEAM"), None);
    }
}
