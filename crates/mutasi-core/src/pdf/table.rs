//! Table detection from word positions.
//!
//! Statements draw few or no ruling lines, so tables are inferred from
//! whitespace alone: a wide horizontal gap separates cells, and a wide
//! vertical gap separates tables.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{PositionedWord, Table};
use crate::layout::{group_words_into_lines, Line};

/// Settings for table detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Horizontal gap that starts a new cell.
    pub cell_gap: f64,
    /// Vertical tolerance for words on the same row.
    pub line_tolerance: f64,
    /// Vertical distance between rows beyond which a table ends.
    pub max_row_gap: f64,
    /// Cells a row needs for its block to count as a table.
    pub min_cells: usize,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            cell_gap: 15.0,
            line_tolerance: 3.0,
            max_row_gap: 20.0,
            min_cells: 2,
        }
    }
}

impl TableSettings {
    /// Set the cell gap.
    pub fn with_cell_gap(mut self, gap: f64) -> Self {
        self.cell_gap = gap;
        self
    }

    /// Set the row gap that separates tables.
    pub fn with_max_row_gap(mut self, gap: f64) -> Self {
        self.max_row_gap = gap;
        self
    }
}

/// Build tables from the words of a page.
///
/// Rows are visual lines split into cells on wide horizontal gaps. Adjacent
/// rows form a block; a block becomes a table when at least one of its rows
/// has `min_cells` cells. Single-cell rows inside such a block are kept.
pub fn build_tables(words: &[PositionedWord], settings: &TableSettings) -> Vec<Table> {
    let lines = group_words_into_lines(words.to_vec(), settings.line_tolerance);

    let mut tables = Vec::new();
    let mut block: Vec<Vec<String>> = Vec::new();
    let mut block_is_table = false;
    let mut last_top: Option<f64> = None;

    for line in &lines {
        if last_top.is_some_and(|top| line.top - top > settings.max_row_gap) {
            finish_block(&mut tables, &mut block, block_is_table);
            block_is_table = false;
        }

        let cells = split_cells(line, settings.cell_gap);
        block_is_table |= cells.len() >= settings.min_cells;
        block.push(cells);
        last_top = Some(line.top);
    }
    finish_block(&mut tables, &mut block, block_is_table);

    trace!("Detected {} tables from {} lines", tables.len(), lines.len());
    tables
}

fn finish_block(tables: &mut Vec<Table>, block: &mut Vec<Vec<String>>, is_table: bool) {
    let rows = std::mem::take(block);
    if is_table && !rows.is_empty() {
        tables.push(rows);
    }
}

fn split_cells(line: &Line, gap: f64) -> Vec<String> {
    let mut words = line.words.iter().collect::<Vec<_>>();
    words.sort_by(|a, b| a.x0.total_cmp(&b.x0));

    let mut cells: Vec<String> = Vec::new();
    let mut right_edge: Option<f64> = None;

    for word in words {
        let joins = right_edge.is_some_and(|edge| word.x0 - edge <= gap);
        match cells.last_mut() {
            Some(cell) if joins => {
                cell.push(' ');
                cell.push_str(&word.text);
            }
            _ => cells.push(word.text.clone()),
        }
        right_edge = Some(right_edge.map_or(word.x1, |edge| edge.max(word.x1)));
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Word with an explicit width.
    fn word(text: &str, x0: f64, width: f64, top: f64) -> PositionedWord {
        PositionedWord::new(text, x0, top).with_extent(x0 + width, top + 10.0)
    }

    #[test]
    fn test_summary_block() {
        let words = vec![
            word("Saldo", 30.0, 25.0, 600.0),
            word("Awal", 58.0, 20.0, 600.0),
            word("Saldo", 400.0, 25.0, 600.0),
            word("Akhir", 428.0, 25.0, 600.0),
            word("1,500.00", 30.0, 40.0, 614.0),
            word("900.00", 400.0, 30.0, 614.0),
            word("SEMBILAN", 30.0, 45.0, 628.0),
            word("RATUS", 78.0, 30.0, 628.0),
            word("RUPIAH", 111.0, 35.0, 628.0),
        ];

        let tables = build_tables(&words, &TableSettings::default());

        assert_eq!(
            tables,
            vec![vec![
                vec!["Saldo Awal".to_string(), "Saldo Akhir".to_string()],
                vec!["1,500.00".to_string(), "900.00".to_string()],
                vec!["SEMBILAN RATUS RUPIAH".to_string()],
            ]]
        );
    }

    #[test]
    fn test_plain_paragraph_is_not_a_table() {
        let words = vec![
            word("Kepada", 30.0, 35.0, 100.0),
            word("Yth.", 68.0, 20.0, 100.0),
            word("BUDI", 30.0, 25.0, 112.0),
        ];

        assert!(build_tables(&words, &TableSettings::default()).is_empty());
    }

    #[test]
    fn test_row_gap_separates_tables() {
        let words = vec![
            word("A", 30.0, 5.0, 100.0),
            word("B", 200.0, 5.0, 100.0),
            word("C", 30.0, 5.0, 300.0),
            word("D", 200.0, 5.0, 300.0),
        ];

        let tables = build_tables(&words, &TableSettings::default());

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1], vec![vec!["C".to_string(), "D".to_string()]]);

        let loose = TableSettings::default().with_max_row_gap(250.0);
        let tables = build_tables(&words, &loose);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].len(), 2);
    }

    #[test]
    fn test_cell_gap_setting() {
        let words = vec![word("A", 30.0, 5.0, 100.0), word("B", 45.0, 5.0, 100.0)];

        assert!(build_tables(&words, &TableSettings::default()).is_empty());

        let tight = TableSettings::default().with_cell_gap(5.0);
        assert_eq!(build_tables(&words, &tight).len(), 1);
    }
}
