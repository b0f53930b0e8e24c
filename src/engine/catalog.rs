//! Program catalog filtering, chip counts, and the batched
//! result-existence probe.

use crate::domain::{CatalogChip, Category, Program, CATALOG_CHIPS};
use crate::error::Result;
use crate::observability;
use crate::storage::RecordStore;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Active catalog filter. `category: None` is the `All` chip; the search
/// text is matched case-insensitively against program name and category.
#[derive(Debug, Clone, Default)]
pub struct ProgramFilter {
    pub category: Option<Category>,
    pub search: String,
}

impl ProgramFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Category first (exact match against the stored label), then the
    /// trimmed, lowercased search over name or category.
    pub fn matches(&self, program: &Program) -> bool {
        if let Some(category) = self.category {
            if program.category != category.label() {
                return false;
            }
        }
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        program.name.to_lowercase().contains(&query)
            || program.category.to_lowercase().contains(&query)
    }
}

pub fn filter_programs<'a>(programs: &'a [Program], filter: &ProgramFilter) -> Vec<&'a Program> {
    programs.iter().filter(|p| filter.matches(p)).collect()
}

#[derive(Debug, Clone)]
pub struct ChipCount {
    pub chip: CatalogChip,
    pub count: usize,
}

/// Per-chip counts, always over the unfiltered catalog.
pub fn chip_counts(programs: &[Program]) -> Vec<ChipCount> {
    CATALOG_CHIPS
        .iter()
        .map(|chip| ChipCount {
            chip: *chip,
            count: match chip.category {
                None => programs.len(),
                Some(category) => programs
                    .iter()
                    .filter(|p| p.category == category.label())
                    .count(),
            },
        })
        .collect()
}

/// Whether each program has at least one recorded placement. Programs are
/// split into the team bucket (General) and the student bucket, and each
/// non-empty bucket costs exactly one store query.
pub async fn results_probe(
    store: &dyn RecordStore,
    programs: &[Program],
) -> Result<HashMap<Uuid, bool>> {
    let mut student_ids = Vec::new();
    let mut team_ids = Vec::new();
    for program in programs {
        let Some(id) = program.id else { continue };
        if program.is_general() {
            team_ids.push(id);
        } else {
            student_ids.push(id);
        }
    }

    let mut placed: HashSet<Uuid> = HashSet::new();
    let mut queries = 0;
    if !student_ids.is_empty() {
        placed.extend(store.get_program_ids_with_placed_results(&student_ids).await?);
        queries += 1;
    }
    if !team_ids.is_empty() {
        placed.extend(
            store
                .get_program_ids_with_placed_team_results(&team_ids)
                .await?,
        );
        queries += 1;
    }
    observability::probe::batch(programs.len(), queries);

    Ok(programs
        .iter()
        .filter_map(|p| p.id)
        .map(|id| (id, placed.contains(&id)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StudentResult, TeamResult};
    use crate::storage::InMemoryStore;
    use chrono::Utc;

    fn program(name: &str, category: &str) -> Program {
        Program {
            id: None,
            name: name.to_string(),
            category: category.to_string(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn category_filter_is_exact() {
        let programs = vec![program("Quiz", "Junior"), program("Debate", "Senior")];
        let filter = ProgramFilter {
            category: Some(Category::Senior),
            search: String::new(),
        };
        let visible = filter_programs(&programs, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Debate");
    }

    #[test]
    fn search_matches_name_or_category_lowercased() {
        let programs = vec![program("Quiz", "Junior"), program("Debate", "Senior")];

        let by_name = ProgramFilter {
            category: None,
            search: "qu".to_string(),
        };
        let visible = filter_programs(&programs, &by_name);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Quiz");

        let by_category = ProgramFilter {
            category: None,
            search: "  SENIOR ".to_string(),
        };
        let visible = filter_programs(&programs, &by_category);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Debate");
    }

    #[test]
    fn search_applies_after_category() {
        let programs = vec![
            program("Quiz", "Junior"),
            program("Quiz", "Senior"),
            program("Debate", "Senior"),
        ];
        let filter = ProgramFilter {
            category: Some(Category::Senior),
            search: "quiz".to_string(),
        };
        let visible = filter_programs(&programs, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category, "Senior");
    }

    #[test]
    fn chip_counts_ignore_any_active_filter() {
        let programs = vec![
            program("Quiz", "Junior"),
            program("Debate", "Senior"),
            program("Group Song", "General"),
        ];
        let counts = chip_counts(&programs);
        assert_eq!(counts[0].chip.label, "All");
        assert_eq!(counts[0].count, 3);
        let senior = counts.iter().find(|c| c.chip.label == "Senior").unwrap();
        assert_eq!(senior.count, 1);
        let sub_junior = counts.iter().find(|c| c.chip.label == "Sub Junior").unwrap();
        assert_eq!(sub_junior.count, 0);
    }

    #[tokio::test]
    async fn probe_splits_buckets_and_defaults_false() {
        let store = InMemoryStore::new();

        let mut quiz = program("Quiz", "Junior");
        store.create_program(&mut quiz);
        let mut march = program("March Past", "General");
        store.create_program(&mut march);
        let mut silent = program("Essay Writing", "Senior");
        store.create_program(&mut silent);

        let mut placed = StudentResult {
            id: None,
            student_id: Some(Uuid::new_v4()),
            program_id: quiz.id,
            prize_place: Some(1),
            mark: Some(10),
            marks: None,
            program: None,
            student: None,
            created_at: Utc::now(),
        };
        store.create_result(&mut placed);

        let mut team_row = TeamResult {
            id: None,
            team: "QUTNIYYA".to_string(),
            program_id: march.id,
            prize_place: Some(2),
            mark: Some(15),
            marks: None,
            created_at: Utc::now(),
        };
        store.create_team_result(&mut team_row);

        let programs = vec![quiz.clone(), march.clone(), silent.clone()];
        let map = results_probe(&store, &programs).await.unwrap();
        assert_eq!(map.get(&quiz.id.unwrap()), Some(&true));
        assert_eq!(map.get(&march.id.unwrap()), Some(&true));
        assert_eq!(map.get(&silent.id.unwrap()), Some(&false));
    }

    #[tokio::test]
    async fn unplaced_rows_do_not_count_as_results() {
        let store = InMemoryStore::new();
        let mut quiz = program("Quiz", "Junior");
        store.create_program(&mut quiz);

        let mut unplaced = StudentResult {
            id: None,
            student_id: Some(Uuid::new_v4()),
            program_id: quiz.id,
            prize_place: None,
            mark: Some(5),
            marks: None,
            program: None,
            student: None,
            created_at: Utc::now(),
        };
        store.create_result(&mut unplaced);

        let map = results_probe(&store, &[quiz.clone()]).await.unwrap();
        assert_eq!(map.get(&quiz.id.unwrap()), Some(&false));
    }
}
