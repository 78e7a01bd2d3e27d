//! Console reporter with colored output.

use crate::scorer::{AggregateStats, FileReport};
use crate::{RubricReport, Status};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
    /// Whether to show verbose output
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            verbose: false,
        }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        colored::control::set_override(false);
        self.use_colors = false;
        self
    }

    /// Enable verbose output
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    /// Report a single evaluated transcript
    pub fn report(&self, label: &str, report: &RubricReport) {
        self.print_header(label, report);
        self.print_table(report);
        self.print_total(report);
        println!();
    }

    /// Report a batch with summary
    pub fn report_many(&self, reports: &[FileReport], stats: &AggregateStats) {
        for file_report in reports {
            self.report(&file_report.path.display().to_string(), &file_report.report);
            println!("{}", "-".repeat(72));
        }
        self.print_summary(stats);
    }

    /// Quiet mode: one line per transcript
    pub fn report_quiet(&self, label: &str, report: &RubricReport) {
        println!(
            "{}: {}/100 ({})",
            label,
            report.total,
            self.colorize_status(report.status)
        );
    }

    fn print_header(&self, label: &str, report: &RubricReport) {
        println!();
        println!("{}", format!("Rubric Assessment: {}", label).bold());
        println!(
            "   Words: {} | Duration: {:.0}s | Pace: {} WPM",
            report.word_count, report.duration_secs, report.wpm()
        );
        println!();
    }

    fn print_table(&self, report: &RubricReport) {
        println!(
            "   {:<20} {:>14} {:>10}  {}",
            "Category".bold(),
            "Score Obtained".bold(),
            "Max Score".bold(),
            "Feedback".bold()
        );
        for result in &report.categories {
            let score_str = format!("{:>2}/{}", result.score, result.max);
            let colored_score = if result.score == result.max {
                score_str.green()
            } else if result.score * 2 >= result.max {
                score_str.yellow()
            } else {
                score_str.red()
            };
            let bar = self.create_mini_bar(result.score, result.max);
            println!(
                "   {:<20} {} {:>9}  {:>10}  {}",
                result.category.to_string(),
                bar,
                colored_score,
                result.max,
                if self.verbose || result.score < result.max {
                    result.feedback.as_str()
                } else {
                    ""
                }
            );
        }
        println!();
    }

    fn print_total(&self, report: &RubricReport) {
        let bar = self.create_score_bar(report.total);
        println!(
            "   Overall: {} {}  {}",
            bar,
            format!("{}/100", report.total).bold(),
            self.colorize_status(report.status).bold()
        );
    }

    fn print_summary(&self, stats: &AggregateStats) {
        println!();
        println!("{}", "Summary".bold());
        println!("   Transcripts evaluated: {}", stats.files_evaluated);
        println!("   Average score: {}/100", stats.average_total);
        println!("   Rated Excellent: {}", stats.excellent_count);
    }

    fn colorize_status(&self, status: Status) -> colored::ColoredString {
        let label = status.to_string();
        if !self.use_colors {
            return label.normal();
        }
        match status {
            Status::Excellent => label.green(),
            Status::NeedsImprovement => label.yellow(),
        }
    }

    fn create_score_bar(&self, value: u8) -> String {
        let filled = (value as usize * 20) / 100;
        format!("[{}{}]", "#".repeat(filled), "-".repeat(20 - filled))
    }

    fn create_mini_bar(&self, value: u8, max: u8) -> String {
        let width = 8usize;
        let filled = if max == 0 {
            0
        } else {
            (value as usize * width) / max as usize
        };
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}
