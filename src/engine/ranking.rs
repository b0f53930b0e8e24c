//! Team standings and the per-category top performers.

use crate::domain::{Category, StudentTotal, Team};

/// How many students each category bucket shows.
pub const LEADERBOARD_TOP_N: usize = 3;

/// Medal presentation for a zero-based rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medal {
    pub icon: &'static str,
    pub label: String,
}

/// Medal for a standings row. Ranks past the podium get the generic medal
/// and a plain "th" suffix; the suffix is intentionally not corrected for
/// English ordinals.
pub fn team_place_medal(rank: usize) -> Medal {
    match rank {
        0 => Medal {
            icon: "\u{1F947}",
            label: "1st Place".to_string(),
        },
        1 => Medal {
            icon: "\u{1F948}",
            label: "2nd Place".to_string(),
        },
        2 => Medal {
            icon: "\u{1F949}",
            label: "3rd Place".to_string(),
        },
        _ => Medal {
            icon: "\u{1F3C5}",
            label: format!("{}th Place", rank + 1),
        },
    }
}

/// Compact badge for a leaderboard entry: medal icon on the podium, the
/// bare ordinal elsewhere.
pub fn student_rank_badge(rank: usize) -> String {
    match rank {
        0 => "\u{1F947}".to_string(),
        1 => "\u{1F948}".to_string(),
        2 => "\u{1F949}".to_string(),
        _ => format!("{}th", rank + 1),
    }
}

#[derive(Debug, Clone)]
pub struct RankedTeam {
    /// Zero-based standings position.
    pub rank: usize,
    pub team: Team,
}

impl RankedTeam {
    pub fn medal(&self) -> Medal {
        team_place_medal(self.rank)
    }
}

/// Standings: total mark descending with the null-means-zero rule, equal
/// totals keeping their fetch order.
pub fn rank_teams(teams: Vec<Team>) -> Vec<RankedTeam> {
    let mut teams = teams;
    teams.sort_by(|a, b| b.total().cmp(&a.total()));
    teams
        .into_iter()
        .enumerate()
        .map(|(rank, team)| RankedTeam { rank, team })
        .collect()
}

#[derive(Debug, Clone)]
pub struct RankedStudent {
    /// Zero-based position within the bucket.
    pub rank: usize,
    pub record: StudentTotal,
}

impl RankedStudent {
    pub fn badge(&self) -> String {
        student_rank_badge(self.rank)
    }
}

#[derive(Debug, Clone)]
pub struct CategoryBoard {
    pub category: Category,
    pub entries: Vec<RankedStudent>,
}

/// Groups total records into the four fixed tier buckets (case-insensitive
/// category match, unmatched records dropped), sorts each bucket by total
/// descending, and keeps the top `top_n`. All buckets appear in fixed
/// order even when empty.
pub fn category_leaderboard(records: Vec<StudentTotal>, top_n: usize) -> Vec<CategoryBoard> {
    let mut boards: Vec<CategoryBoard> = Category::TIERS
        .into_iter()
        .map(|category| CategoryBoard {
            category,
            entries: Vec::new(),
        })
        .collect();

    for record in records {
        let tier = record
            .category
            .as_deref()
            .and_then(Category::from_bucket);
        if let Some(tier) = tier {
            if let Some(board) = boards.iter_mut().find(|b| b.category == tier) {
                board.entries.push(RankedStudent { rank: 0, record });
            }
        }
    }

    for board in &mut boards {
        board
            .entries
            .sort_by(|a, b| b.record.total().cmp(&a.record.total()));
        board.entries.truncate(top_n);
        for (rank, entry) in board.entries.iter_mut().enumerate() {
            entry.rank = rank;
        }
    }

    boards
}
