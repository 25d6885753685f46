// src/report/mod.rs
// =============================================================================
// Collects check results into a Report.
//
// Submodules:
// - score: the 0-10 scoring formula
// - render: console and JSON output
//
// The order findings appear in is fixed: images, buttons and form problems
// are critical; vague links and a missing lang are warnings; headings,
// labelled form controls, lang and viewport are passed checks.
// =============================================================================

mod render;
mod score;

pub use render::{render_console, render_json, render_usage, FOOTER, HEADER};
pub use score::calculate_score;

use serde::Serialize;
use tracing::debug;

use crate::checker::{self, Document};

/// At most this many recommendations are shown
const MAX_RECOMMENDATIONS: usize = 3;

const FALLBACK_RECOMMENDATION: &str = "Great job! Continue monitoring accessibility";

/// The outcome of auditing one page. Built once by `audit`, then only read.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub url: String,
    pub critical: Vec<String>,
    pub warnings: Vec<String>,
    pub passed: Vec<String>,
    pub score: f64,
    pub recommendations: Vec<String>,
}

// Runs every check against the document and buckets the findings
pub fn audit(url: &str, doc: &Document) -> Report {
    let mut critical = Vec::new();
    let mut warnings = Vec::new();
    let mut passed = Vec::new();

    let images = checker::check_images(doc);
    debug!(count = images.len(), "image alt check");
    critical.extend(images);

    let buttons = checker::check_buttons(doc);
    debug!(count = buttons.len(), "button label check");
    critical.extend(buttons);

    let links = checker::check_links(doc);
    debug!(count = links.len(), "link text check");
    warnings.extend(links);

    passed.extend(checker::check_headings(doc));

    let forms = checker::check_forms(doc);
    debug!(
        missing = forms.missing_labels.len(),
        labelled = forms.labelled.len(),
        "form label check"
    );
    critical.extend(forms.missing_labels);
    passed.extend(forms.labelled);

    if checker::has_language(doc) {
        passed.push("Page language attribute set".to_string());
    } else {
        warnings.push("Missing page language attribute".to_string());
    }

    if checker::has_viewport(doc) {
        passed.push("Responsive viewport meta tag present".to_string());
    }

    let score = calculate_score(critical.len(), warnings.len(), passed.len());
    let recommendations = recommend(&critical, &warnings);

    debug!(
        critical = critical.len(),
        warnings = warnings.len(),
        passed = passed.len(),
        score,
        "audit complete"
    );

    Report {
        url: url.to_string(),
        critical,
        warnings,
        passed,
        score,
        recommendations,
    }
}

// Picks advice based on what went wrong.
// Each rule is checked on its own, in priority order.
fn recommend(critical: &[String], warnings: &[String]) -> Vec<String> {
    let mut recs = Vec::new();

    if critical.iter().any(|issue| issue.contains("alt text")) {
        recs.push("Add descriptive alt text to all images".to_string());
    }
    if critical.iter().any(|issue| issue.to_lowercase().contains("label")) {
        recs.push("Ensure all interactive elements have proper labels".to_string());
    }
    if warnings.iter().any(|warning| warning.contains("vague text")) {
        recs.push("Use descriptive link text instead of 'click here'".to_string());
    }

    if recs.is_empty() {
        recs.push(FALLBACK_RECOMMENDATION.to_string());
    }
    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
