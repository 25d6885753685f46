// src/report/render.rs
// =============================================================================
// Formats a Report for the terminal (or as JSON with --json).
//
// Everything here returns a String instead of printing, so main decides
// where output goes and the tests can compare text directly.
//
// Console layout:
//   RESULTS banner
//   🔴 CRITICAL ISSUES (n)   first 5, "... and N more", or "None found!"
//   🟡 WARNINGS (n)          same rules
//   ✅ PASSED CHECKS (n)     same rules, but nothing printed when empty
//   OVERALL SCORE banner     one decimal place
//   TOP RECOMMENDATIONS      numbered 1..=3
// =============================================================================

use std::fmt::Write;

use super::Report;

/// Only this many findings per bucket are printed
const DISPLAY_LIMIT: usize = 5;

/// Columns between the ║ borders
const FRAME_WIDTH: usize = 54;

pub const HEADER: &str = "\n\
╔══════════════════════════════════════════════════════╗\n\
║     ♿ ACCESS GUARDIAN v0.1                           ║\n\
║     Accessibility audit for a single page            ║\n\
╠══════════════════════════════════════════════════════╣\n";

pub const FOOTER: &str = "\n╚══════════════════════════════════════════════════════╝\n";

pub fn render_usage() -> String {
    "\n\
╔══════════════════════════════════════════════════════╗\n\
║     ♿ ACCESS GUARDIAN v0.1                           ║\n\
╠══════════════════════════════════════════════════════╣\n\
║                                                      ║\n\
║  Usage: access-guardian [--json] [-v] <url>          ║\n\
║                                                      ║\n\
║  Example:                                            ║\n\
║  access-guardian https://example.com                 ║\n\
║                                                      ║\n\
╚══════════════════════════════════════════════════════╝\n"
        .to_string()
}

pub fn render_console(report: &Report) -> String {
    // Writing into a String can't fail, so the fmt::Results are ignored
    let mut out = String::new();

    out.push_str("╔══════════════════════════════════════════════════════╗\n");
    out.push_str("║                    RESULTS                           ║\n");
    out.push_str("╠══════════════════════════════════════════════════════╣\n\n");

    push_section(&mut out, "🔴 CRITICAL ISSUES", &report.critical, true);
    push_section(&mut out, "🟡 WARNINGS", &report.warnings, true);
    push_section(&mut out, "✅ PASSED CHECKS", &report.passed, false);

    out.push_str("╔══════════════════════════════════════════════════════╗\n");
    let score_line = format!("  OVERALL SCORE: {:.1}/10", report.score);
    let _ = writeln!(out, "║{:<width$}║", score_line, width = FRAME_WIDTH);
    out.push_str("╠══════════════════════════════════════════════════════╣\n\n");

    out.push_str("TOP RECOMMENDATIONS:\n");
    for (i, rec) in report.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, rec);
    }

    out
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

// Prints one bucket: a title with the count, then at most DISPLAY_LIMIT
// bullets. `empty_note` controls whether an empty bucket says "None found!".
fn push_section(out: &mut String, title: &str, findings: &[String], empty_note: bool) {
    let _ = writeln!(out, "{} ({})", title, findings.len());

    if findings.is_empty() {
        if empty_note {
            out.push_str("  None found!\n");
        }
    } else {
        for finding in findings.iter().take(DISPLAY_LIMIT) {
            let _ = writeln!(out, "  • {}", finding);
        }
        if findings.len() > DISPLAY_LIMIT {
            let _ = writeln!(out, "  ... and {} more", findings.len() - DISPLAY_LIMIT);
        }
    }

    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(critical: usize, warnings: usize, passed: usize) -> Report {
        let many = |prefix: &str, n: usize| -> Vec<String> {
            (1..=n).map(|i| format!("{} {}", prefix, i)).collect()
        };
        Report {
            url: "https://example.com".to_string(),
            critical: many("critical", critical),
            warnings: many("warning", warnings),
            passed: many("passed", passed),
            score: 7.5,
            recommendations: vec!["First".to_string(), "Second".to_string()],
        }
    }

    #[test]
    fn test_truncates_to_five_with_more_line() {
        let out = render_console(&report(7, 0, 0));
        assert!(out.contains("🔴 CRITICAL ISSUES (7)"));
        assert!(out.contains("  • critical 5\n"));
        assert!(!out.contains("critical 6"));
        assert!(out.contains("  ... and 2 more"));
    }

    #[test]
    fn test_exactly_five_has_no_more_line() {
        let out = render_console(&report(0, 5, 0));
        assert!(out.contains("  • warning 5\n"));
        assert!(!out.contains("more"));
    }

    #[test]
    fn test_empty_sections() {
        let out = render_console(&report(0, 0, 0));
        // critical and warnings say "None found!", passed just shows the count
        assert_eq!(out.matches("None found!").count(), 2);
        assert!(out.contains("✅ PASSED CHECKS (0)\n\n"));
    }

    #[test]
    fn test_score_and_numbered_recommendations() {
        let out = render_console(&report(1, 1, 1));
        let score_line = out.lines().find(|l| l.contains("OVERALL SCORE: 7.5/10")).unwrap();
        assert!(score_line.ends_with('║'));
        assert_eq!(score_line.chars().count(), FRAME_WIDTH + 2);
        assert!(out.contains("  1. First\n  2. Second\n"));
    }

    #[test]
    fn test_json_has_all_buckets() {
        let json = render_json(&report(1, 2, 3)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["critical"].as_array().unwrap().len(), 1);
        assert_eq!(value["warnings"].as_array().unwrap().len(), 2);
        assert_eq!(value["passed"].as_array().unwrap().len(), 3);
        assert_eq!(value["score"], 7.5);
        assert_eq!(value["url"], "https://example.com");
    }

    #[test]
    fn test_usage_mentions_example() {
        let usage = render_usage();
        assert!(usage.contains("Usage: access-guardian"));
        assert!(usage.contains("access-guardian https://example.com"));
    }
}
