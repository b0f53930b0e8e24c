//! Randomized demo dataset for running without a remote store. The shape is
//! fixed (three teams, four tiers, a handful of programs per tier) while
//! names, marks, and placements vary per run.

use crate::domain::{Category, Program, Student, StudentResult, StudentTotal, Team, TeamResult, TEAMS};
use crate::storage::InMemoryStore;
use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

const FIRST_NAMES: &[&str] = &[
    "Ayisha", "Fathima", "Zainab", "Mariyam", "Hiba", "Sana", "Hamza", "Bilal", "Yusuf", "Imran",
    "Salman", "Rashid",
];

const LAST_NAMES: &[&str] = &["K", "P", "T", "M", "C", "V"];

const TEAM_PROGRAMS: &[&str] = &["Oppana", "Daff Muttu", "Group Nasheed"];

fn tier_program_names(tier: Category) -> &'static [&'static str] {
    match tier {
        Category::SubJunior => &["Rhyme Recitation", "Coloring", "Story Telling", "Adhan"],
        Category::Junior => &["Qirath", "Hifz", "Handwriting", "Quiz"],
        Category::Senior => &["Essay Writing", "Speech", "Mappila Song", "Calligraphy"],
        Category::SuperSenior => &["Debate", "Elocution", "Translation", "News Reading"],
        Category::General => &[],
    }
}

fn class_for(tier: Category, rng: &mut impl Rng) -> String {
    let range = match tier {
        Category::SubJunior => 1..=4,
        Category::Junior => 5..=7,
        Category::Senior => 8..=10,
        _ => 11..=12,
    };
    rng.gen_range(range).to_string()
}

/// Seed the store with a full festival snapshot. The final program of each
/// tier is left unjudged so the catalog shows both probe outcomes.
pub fn seed(store: &InMemoryStore) {
    let mut rng = rand::thread_rng();

    let mut students: Vec<(Category, Student)> = Vec::new();
    let mut name_index = 0;
    for tier in Category::TIERS {
        for team in &TEAMS {
            for _ in 0..3 {
                let name = format!(
                    "{} {}",
                    FIRST_NAMES[name_index % FIRST_NAMES.len()],
                    LAST_NAMES[(name_index / FIRST_NAMES.len()) % LAST_NAMES.len()]
                );
                name_index += 1;
                let mut student = Student {
                    id: None,
                    name,
                    class: class_for(tier, &mut rng),
                    team: team.name.to_string(),
                    created_at: Utc::now() - Duration::days(rng.gen_range(30..90)),
                };
                store.create_student(&mut student);
                students.push((tier, student));
            }
        }
    }

    let mut programs: Vec<(Category, Program, bool)> = Vec::new();
    for tier in Category::TIERS {
        let names = tier_program_names(tier);
        for (index, name) in names.iter().enumerate() {
            let judged = index != names.len() - 1;
            let mut program = Program {
                id: None,
                name: (*name).to_string(),
                category: tier.label().to_string(),
                description: None,
                created_at: Utc::now() - Duration::hours(rng.gen_range(1..240)),
            };
            store.create_program(&mut program);
            programs.push((tier, program, judged));
        }
    }
    for name in TEAM_PROGRAMS {
        let mut program = Program {
            id: None,
            name: (*name).to_string(),
            category: Category::General.label().to_string(),
            description: None,
            created_at: Utc::now() - Duration::hours(rng.gen_range(1..240)),
        };
        store.create_program(&mut program);
        programs.push((Category::General, program, true));
    }

    let mut marks_by_student: HashMap<Uuid, i64> = HashMap::new();
    let mut marks_by_team: HashMap<String, i64> = HashMap::new();
    let mut result_count = 0;

    for (tier, program, judged) in &programs {
        if *tier == Category::General {
            let mut order = TEAMS.to_vec();
            order.shuffle(&mut rng);
            for (index, team) in order.iter().enumerate() {
                let mark = 10 - (index as i64) * 2 + rng.gen_range(0..2);
                let mut result = TeamResult {
                    id: None,
                    team: team.name.to_string(),
                    program_id: program.id,
                    prize_place: Some(index as u32 + 1),
                    mark: Some(mark),
                    marks: None,
                    created_at: Utc::now() - Duration::minutes(rng.gen_range(10..600)),
                };
                store.create_team_result(&mut result);
                result_count += 1;
                *marks_by_team.entry(team.name.to_string()).or_insert(0) += mark;
            }
            continue;
        }

        let mut entrants: Vec<&Student> = students
            .iter()
            .filter(|(t, _)| t == tier)
            .map(|(_, s)| s)
            .collect();
        entrants.shuffle(&mut rng);

        let entered = if *judged { 6 } else { 4 };
        for (index, entrant) in entrants.iter().take(entered).enumerate() {
            let (prize_place, mark) = if *judged && index < 3 {
                let mark = 10 - (index as i64) * 2 + rng.gen_range(0..2);
                (Some(index as u32 + 1), Some(mark))
            } else if *judged {
                (None, Some(rng.gen_range(1..5)))
            } else {
                (None, None)
            };

            let mut result = StudentResult {
                id: None,
                student_id: entrant.id,
                program_id: program.id,
                prize_place,
                mark,
                marks: None,
                program: None,
                student: None,
                created_at: Utc::now() - Duration::minutes(rng.gen_range(10..600)),
            };
            store.create_result(&mut result);
            result_count += 1;

            let earned = mark.unwrap_or(0);
            if let Some(id) = entrant.id {
                *marks_by_student.entry(id).or_insert(0) += earned;
            }
            *marks_by_team.entry(entrant.team.clone()).or_insert(0) += earned;
        }
    }

    for (tier, student) in &students {
        let total = student
            .id
            .and_then(|id| marks_by_student.get(&id))
            .copied()
            .unwrap_or(0);
        let mut record = StudentTotal {
            id: None,
            student_id: student.id,
            total_mark: Some(total),
            category: Some(tier.label().to_string()),
            student: None,
            created_at: Utc::now(),
        };
        store.create_student_total(&mut record);
    }

    for team in &TEAMS {
        let mut record = Team {
            id: None,
            name: team.name.to_string(),
            total_mark: Some(marks_by_team.get(team.name).copied().unwrap_or(0)),
            created_at: Utc::now(),
        };
        store.create_team(&mut record);
    }

    info!(
        teams = TEAMS.len(),
        students = students.len(),
        programs = programs.len(),
        results = result_count,
        "Seeded demo dataset"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{category_leaderboard, LEADERBOARD_TOP_N};
    use crate::storage::RecordStore;

    #[tokio::test]
    async fn seed_fills_every_view() {
        let store = InMemoryStore::new();
        seed(&store);

        let teams = store.get_all_teams().await.unwrap();
        assert_eq!(teams.len(), 3);
        assert!(teams[0].total() >= teams[2].total());

        let totals = store.get_all_student_totals().await.unwrap();
        let boards = category_leaderboard(totals, LEADERBOARD_TOP_N);
        for board in boards {
            assert!(!board.entries.is_empty(), "empty {} board", board.category);
        }
    }

    #[tokio::test]
    async fn seed_leaves_some_programs_unjudged() {
        let store = InMemoryStore::new();
        seed(&store);

        let programs = store.get_all_programs().await.unwrap();
        let student_ids: Vec<Uuid> = programs
            .iter()
            .filter(|p| !p.is_general())
            .filter_map(|p| p.id)
            .collect();
        let placed = store
            .get_program_ids_with_placed_results(&student_ids)
            .await
            .unwrap();

        assert!(!placed.is_empty());
        assert!(placed.len() < student_ids.len());
    }
}
