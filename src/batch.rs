use crate::analysis::message::MessageAnalyzer;
use crate::analysis::url::UrlAnalyzer;
use crate::assessment::RiskAssessment;
use serde::Serialize;
use std::collections::HashMap;

/// One tabular input row: string-keyed column values.
pub type Row = HashMap<String, String>;

/// One batch output record, tagged with the original input value.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRecord {
    pub input: String,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

/// Runs the rule engines over an ordered sequence of rows. Message-column
/// values are assessed first across all rows, then URL-column values, so
/// output counts are additive when both columns are present.
pub struct BatchRunner {
    message_analyzer: MessageAnalyzer,
    url_analyzer: UrlAnalyzer,
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRunner {
    pub fn new() -> Self {
        Self {
            message_analyzer: MessageAnalyzer::new(),
            url_analyzer: UrlAnalyzer::default(),
        }
    }

    pub fn run(
        &self,
        rows: &[Row],
        message_col: Option<&str>,
        url_col: Option<&str>,
    ) -> Vec<BatchRecord> {
        let mut records = Vec::new();

        if let Some(col) = message_col {
            for value in Self::column_values(rows, col) {
                records.push(BatchRecord {
                    input: value.to_string(),
                    assessment: self.message_analyzer.analyze(value),
                });
            }
        }

        if let Some(col) = url_col {
            for value in Self::column_values(rows, col) {
                records.push(BatchRecord {
                    input: value.to_string(),
                    assessment: self.url_analyzer.analyze(value),
                });
            }
        }

        records
    }

    fn column_values<'a>(rows: &'a [Row], col: &'a str) -> impl Iterator<Item = &'a str> {
        rows.iter()
            .filter_map(move |row| row.get(col))
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}
