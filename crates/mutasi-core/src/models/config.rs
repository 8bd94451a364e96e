//! Configuration structures for statement parsing.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MutasiError, ParseError, Result};
use crate::layout::{
    Column, ColumnBoundary, ColumnLayout, TableStartLocator, BRI_COLUMN_BOUNDARIES,
    DEFAULT_LINE_TOLERANCE,
};
use crate::pdf::TableSettings;

/// Main configuration for the mutasi pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MutasiConfig {
    /// Page layout configuration.
    pub layout: LayoutConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Layout calibration for the transaction table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Column boundaries, ordered by increasing `end`.
    pub columns: Vec<ColumnBoundary>,

    /// Column for words right of the last boundary.
    pub fallback_column: Column,

    /// Vertical tolerance for grouping words into lines.
    pub line_tolerance: f64,

    /// Header word that marks the start of the table.
    pub header_anchor: String,

    /// The header word only counts left of this x coordinate.
    pub header_anchor_max_x: f64,

    /// Distance below the header word where rows begin.
    pub header_margin: f64,

    /// Table start used on pages without a header word.
    pub table_start_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: BRI_COLUMN_BOUNDARIES.to_vec(),
            fallback_column: Column::Balance,
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            header_anchor: "Tanggal".to_string(),
            header_anchor_max_x: 100.0,
            header_margin: 15.0,
            table_start_y: 340.0,
        }
    }
}

impl LayoutConfig {
    /// Build the column layout, validating the boundary order.
    pub fn column_layout(&self) -> std::result::Result<ColumnLayout, ParseError> {
        ColumnLayout::new(self.columns.clone(), self.fallback_column)
    }

    /// Build the table start locator.
    pub fn table_start_locator(&self) -> TableStartLocator {
        TableStartLocator {
            anchor: self.header_anchor.clone(),
            max_x: self.header_anchor_max_x,
            margin: self.header_margin,
            default_start: self.table_start_y,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Phrases marking the end of the transaction table.
    pub footer_anchors: Vec<String>,

    /// First-page phrases identifying a BRI statement.
    pub bank_indicators: Vec<String>,

    /// Table detection used for the summary tables.
    pub tables: TableSettings,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            footer_anchors: vec!["Saldo Awal".to_string(), "Opening Balance".to_string()],
            bank_indicators: vec![
                "PT. BANK RAKYAT INDONESIA".to_string(),
                "BRI".to_string(),
                "Britama".to_string(),
                "Unit Kerja".to_string(),
                "Tanggal Laporan".to_string(),
            ],
            tables: TableSettings::default(),
        }
    }
}

impl MutasiConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| MutasiError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| MutasiError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_bri_layout() {
        let config = MutasiConfig::default();

        let layout = config.layout.column_layout().unwrap();
        assert_eq!(layout, ColumnLayout::bri());
        assert_eq!(config.layout.table_start_locator(), TableStartLocator::new());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MutasiConfig =
            serde_json::from_str(r#"{"layout": {"table_start_y": 200.0}}"#).unwrap();

        assert_eq!(config.layout.table_start_y, 200.0);
        assert_eq!(config.layout.line_tolerance, 5.0);
        assert_eq!(config.extraction.footer_anchors.len(), 2);
    }

    #[test]
    fn test_table_settings_from_json() {
        let config: MutasiConfig =
            serde_json::from_str(r#"{"extraction": {"tables": {"cell_gap": 8.0}}}"#).unwrap();

        assert_eq!(config.extraction.tables.cell_gap, 8.0);
        assert_eq!(config.extraction.tables.max_row_gap, 20.0);
        assert_eq!(config.extraction.bank_indicators.len(), 5);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mutasi.json");

        let mut config = MutasiConfig::default();
        config.layout.columns[0].end = 90.0;
        config.save(&path).unwrap();

        let loaded = MutasiConfig::from_file(&path).unwrap();
        assert_eq!(loaded.layout.columns[0].end, 90.0);
        assert_eq!(loaded.layout.columns[0].column, Column::Date);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            MutasiConfig::from_file(&path),
            Err(MutasiError::Config(_))
        ));
    }
}
