//! Table rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, CellAlignment, Table, presets::UTF8_FULL_CONDENSED};
use serde::Serialize;
use tl_core::RankedTeacher;
use tl_keywords::ScoredKeyword;

/// Prints `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Right-aligned numeric cell.
fn number(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Builds the ranking table, one row per teacher in rank order.
pub fn ranking_table(ranked: &[RankedTeacher]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["#", "Id", "Name", "T1", "T2", "T3", "Score", "Count"]);

    for (position, entry) in ranked.iter().enumerate() {
        let stats = &entry.stats;
        table.add_row(vec![
            number(position + 1),
            Cell::new(entry.teacher.id.to_string()),
            Cell::new(entry.teacher.name().unwrap_or_default()),
            number(stats.count_t1),
            number(stats.count_t2),
            number(stats.count_t3),
            number(stats.total_score),
            number(stats.count),
        ]);
    }

    table
}

/// Builds the keyword table with the statistics behind each score.
pub fn keyword_table(keywords: &[ScoredKeyword]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Keyword", "Score", "Docs", "Weight"]);

    for keyword in keywords {
        table.add_row(vec![
            Cell::new(&keyword.phrase),
            number(format!("{:.2}", keyword.score)),
            number(keyword.document_frequency),
            number(keyword.weight),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use tl_core::{Teacher, TeacherStats};

    use super::*;

    #[test]
    fn ranking_table_lists_teachers_in_order() {
        let ranked = vec![
            RankedTeacher {
                teacher: Teacher::new(2).with_attribute("name", "王老师"),
                stats: TeacherStats {
                    count_t3: 1,
                    total_score: 15,
                    count: 1,
                    ..TeacherStats::default()
                },
            },
            RankedTeacher {
                teacher: Teacher::new(1),
                stats: TeacherStats::default(),
            },
        ];
        let rendered = ranking_table(&ranked).to_string();
        let first = rendered.find("王老师").unwrap();
        let header = rendered.find("Score").unwrap();
        assert!(header < first);
        assert!(rendered.contains("15"));
    }

    #[test]
    fn keyword_table_formats_scores() {
        let keywords = vec![ScoredKeyword {
            phrase: "板书".into(),
            score: 1.621_86,
            document_frequency: 3,
            occurrences: 3,
            weight: 8,
        }];
        let rendered = keyword_table(&keywords).to_string();
        assert!(rendered.contains("板书"));
        assert!(rendered.contains("1.62"));
    }
}
