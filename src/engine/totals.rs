//! Per-student mark sheet: recomputed totals and prize labels.

use crate::constants::{BLANK_PRIZE_LABEL, TOTAL_ROW_LABEL};
use crate::domain::StudentResult;

/// Prize label for a recorded place. First three places get proper
/// ordinals; everything else gets a bare "th" suffix, deliberately
/// uncorrected (a 21st place reads "21th Prize", matching the records
/// everyone is used to).
pub fn format_prize_place(place: Option<u32>) -> String {
    match place {
        None => BLANK_PRIZE_LABEL.to_string(),
        Some(1) => "1st Prize".to_string(),
        Some(2) => "2nd Prize".to_string(),
        Some(3) => "3rd Prize".to_string(),
        Some(n) => format!("{}th Prize", n),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkSheetRow {
    pub program: String,
    pub prize: String,
    pub mark: i64,
}

/// A student's results table: one row per result plus a recomputed total.
/// The synthetic TOTAL row is not part of `rows` and never counts as a
/// program.
#[derive(Debug, Clone)]
pub struct MarkSheet {
    pub rows: Vec<MarkSheetRow>,
    pub total_marks: i64,
}

impl MarkSheet {
    pub fn from_results(results: &[StudentResult]) -> Self {
        let total_marks = results.iter().map(|r| r.mark_value()).sum();
        let rows = results
            .iter()
            .map(|r| MarkSheetRow {
                program: r.program_name().to_string(),
                prize: format_prize_place(r.prize_place),
                mark: r.mark_value(),
            })
            .collect();
        Self { rows, total_marks }
    }

    pub fn program_count(&self) -> usize {
        self.rows.len()
    }

    pub fn total_row(&self) -> MarkSheetRow {
        MarkSheetRow {
            program: TOTAL_ROW_LABEL.to_string(),
            prize: BLANK_PRIZE_LABEL.to_string(),
            mark: self.total_marks,
        }
    }
}
