//! JSON reporter for machine-readable output

use crate::scorer::Summary;
use crate::AnalysisResult;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Report a single analysis result as JSON
    pub fn report(&self, result: &AnalysisResult) -> String {
        if self.pretty {
            serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string())
        }
    }

    /// Report a batch with its summary
    pub fn report_with_summary(&self, results: &[AnalysisResult], summary: &Summary) -> String {
        let output = JsonOutput { results, summary };
        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    results: &'a [AnalysisResult],
    summary: &'a Summary,
}
