//! JSON reporter for machine-readable output.

use crate::scorer::{AggregateStats, FileReport};
use crate::RubricReport;
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    fn render<T: Serialize>(&self, value: &T, fallback: &str) -> String {
        let result = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.unwrap_or_else(|_| fallback.to_string())
    }

    /// Report a single rubric report as JSON
    pub fn report(&self, report: &RubricReport) -> String {
        self.render(report, "{}")
    }

    /// Report a batch with summary
    pub fn report_with_summary(&self, reports: &[FileReport], stats: &AggregateStats) -> String {
        let output = JsonOutput {
            results: reports,
            summary: stats,
        };
        self.render(&output, "{}")
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
    results: &'a [FileReport],
    summary: &'a AggregateStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::NlpServices;
    use crate::scorer::RubricEngine;
    use crate::EvaluationRequest;

    fn sample_report() -> RubricReport {
        let services = NlpServices::default_stack();
        RubricEngine::new(&services)
            .evaluate(&EvaluationRequest::new(
                "Hello everyone, myself Ria. Thank you!",
                52.0,
            ))
            .unwrap()
    }

    #[test]
    fn output_is_valid_json_with_rubric_fields() {
        let rendered = JsonReporter::new().report(&sample_report());
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert!(value["categories"].is_array());
        assert_eq!(value["categories"].as_array().unwrap().len(), 8);
        assert!(value["total"].is_number());
        assert!(value["status"].is_string());
    }

    #[test]
    fn category_entries_use_published_field_names() {
        let rendered = JsonReporter::new().report(&sample_report());
        assert!(rendered.contains("\"scoreObtained\""));
        assert!(rendered.contains("\"maxScore\""));
        assert!(rendered.contains("\"feedback\""));
        assert!(rendered.contains("\"category\""));
    }

    #[test]
    fn pretty_output_is_multiline() {
        let rendered = JsonReporter::new().pretty().report(&sample_report());
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn summary_includes_batch_stats() {
        let report = sample_report();
        let files = vec![FileReport {
            path: "a.txt".into(),
            report,
        }];
        let stats = RubricEngine::aggregate_stats(&files);
        let rendered = JsonReporter::new().report_with_summary(&files, &stats);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["summary"]["filesEvaluated"], 1);
        assert!(value["results"].is_array());
    }
}
