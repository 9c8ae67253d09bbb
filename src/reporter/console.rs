//! Console reporter with colored output

use crate::scorer::{QualityScorer, Summary};
use crate::{AnalysisResult, Tier};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Report a single analysis result
    pub fn report(&self, result: &AnalysisResult) {
        println!();
        println!("{}", "Feedback Quality Analysis".bold());
        println!("   {}", truncate(&result.text, 70).dimmed());
        println!();
        println!(
            "   Quality: {} {}",
            self.score_bar(result.score.percent),
            self.badge(result.score.tier)
        );
        println!(
            "   {}",
            QualityScorer::tier_description(result.score.tier).dimmed()
        );
        println!();
    }

    /// Report multiple results with summary
    pub fn report_many(&self, results: &[AnalysisResult], summary: &Summary) {
        for result in results {
            self.report(result);
            println!("{}", "─".repeat(60));
        }
        self.print_summary(summary);
    }

    /// Report in quiet mode (score and tier only)
    pub fn report_quiet(&self, result: &AnalysisResult) {
        println!(
            "{:.2} ({})",
            result.score.percent,
            self.colorize_tier(result.score.tier)
        );
    }

    fn print_summary(&self, summary: &Summary) {
        println!();
        println!("{}", "═".repeat(60));
        println!("{}", "Summary".bold());
        println!("{}", "═".repeat(60));
        println!(
            "   Entries analyzed: {}",
            summary.entries.to_string().bold()
        );
        println!(
            "   Average quality:  {} ({})",
            format!("{:.2}", summary.average_percent).bold(),
            self.colorize_tier(summary.average_tier)
        );
        println!();
    }

    fn badge(&self, tier: Tier) -> String {
        let label = format!(" {} ", tier);
        if !self.use_colors {
            return label;
        }
        // Badge colors mirror the tiers: green, blue, yellow, red
        match tier {
            Tier::Excellent => label.black().on_green().to_string(),
            Tier::Good => label.black().on_blue().to_string(),
            Tier::Average => label.black().on_yellow().to_string(),
            Tier::Poor => label.white().on_red().to_string(),
        }
    }

    fn colorize_tier(&self, tier: Tier) -> colored::ColoredString {
        let s = tier.to_string();
        if !self.use_colors {
            return s.normal();
        }
        match tier {
            Tier::Excellent => s.green().bold(),
            Tier::Good => s.blue(),
            Tier::Average => s.yellow(),
            Tier::Poor => s.red().bold(),
        }
    }

    fn score_bar(&self, percent: f64) -> String {
        let filled = ((percent / 100.0) * 20.0).round() as usize;
        let filled = filled.min(20);
        let empty = 20 - filled;

        let bar = format!(
            "[{}{}] {:>6.2}%",
            "█".repeat(filled),
            "░".repeat(empty),
            percent
        );

        if self.use_colors {
            if percent >= 80.0 {
                bar.green().to_string()
            } else if percent >= 60.0 {
                bar.blue().to_string()
            } else if percent >= 40.0 {
                bar.yellow().to_string()
            } else {
                bar.red().to_string()
            }
        } else {
            bar
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long() {
        let long = "a".repeat(100);
        let cut = truncate(&long, 70);
        assert_eq!(cut.chars().count(), 71); // 70 + ellipsis
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn test_score_bar_bounds() {
        let reporter = ConsoleReporter::new().without_colors();
        assert!(reporter.score_bar(0.0).contains("░░░░░░░░░░░░░░░░░░░░"));
        assert!(reporter.score_bar(100.0).contains("████████████████████"));
    }

    #[test]
    fn test_badge_without_colors() {
        let reporter = ConsoleReporter::new().without_colors();
        assert_eq!(reporter.badge(Tier::Excellent), " Excellent ");
    }
}
