// src/checker/rules.rs
// =============================================================================
// The accessibility heuristics.
//
// Every check is a pure function: it reads the Document and returns the
// findings it produced, in document order. Checks never see each other's
// results; the report module decides which bucket each list goes into.
//
// What we look for:
// - <img> without alt text                        (critical)
// - <button> with neither aria-label nor text     (critical)
// - <a> whose text is "click here", "more", ...   (warning)
// - presence of h1-h6                             (passed, or nothing)
// - form controls without a <label for=...>       (critical / passed)
// - lang on <html>                                (passed / warning)
// - <meta name="viewport">                        (passed, or nothing)
// =============================================================================

use super::dom::Document;

/// Link texts that tell a screen reader user nothing about the target
const VAGUE_LINK_TEXTS: [&str; 5] = ["click here", "read more", "here", "link", "more"];

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

const FORM_CONTROL_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// How much of an image's src we quote in a finding
const SRC_PREVIEW_CHARS: usize = 50;

/// Findings from the form check, which can land in two buckets
#[derive(Debug, Default, PartialEq)]
pub struct FormFindings {
    pub missing_labels: Vec<String>,
    pub labelled: Vec<String>,
}

// <img> with no alt, or an alt that is only whitespace
pub fn check_images(doc: &Document) -> Vec<String> {
    doc.find_all("img")
        .filter(|img| img.attr("alt").map_or(true, |alt| alt.trim().is_empty()))
        .map(|img| {
            let src = img.attr("src").unwrap_or("unknown");
            let preview: String = src.chars().take(SRC_PREVIEW_CHARS).collect();
            format!("Image missing alt text: {}", preview)
        })
        .collect()
}

// <button> that a screen reader would announce as just "button".
// An empty aria-label counts as no aria-label.
pub fn check_buttons(doc: &Document) -> Vec<String> {
    doc.find_all("button")
        .filter(|button| {
            let has_aria_label = button.attr("aria-label").map_or(false, |l| !l.is_empty());
            !has_aria_label && button.text_content().trim().is_empty()
        })
        .map(|_| "Button without accessible label".to_string())
        .collect()
}

pub fn check_links(doc: &Document) -> Vec<String> {
    doc.find_all("a")
        .filter_map(|link| {
            let text = link.text_content().trim().to_lowercase();
            VAGUE_LINK_TEXTS
                .contains(&text.as_str())
                .then(|| format!("Link with vague text: '{}'", text))
        })
        .collect()
}

// A page with no headings gets no finding at all, not a warning
pub fn check_headings(doc: &Document) -> Vec<String> {
    let count = doc.find_all_of(&HEADING_TAGS).count();
    if count > 0 {
        vec![format!("Found {} semantic headings", count)]
    } else {
        Vec::new()
    }
}

// For every control inside every <form>, look for <label for="id"> in the
// same form. The id is compared exactly as written: no trimming, no case
// folding. Hidden inputs are skipped entirely.
pub fn check_forms(doc: &Document) -> FormFindings {
    let mut findings = FormFindings::default();

    for form in doc.find_all("form") {
        for control in form.find_all_of(&FORM_CONTROL_TAGS) {
            if control.attr("type") == Some("hidden") {
                continue;
            }

            let labelled = match control.attr("id") {
                Some(id) => form.find_all_with("label", "for", id).next().is_some(),
                None => false,
            };

            if labelled {
                findings.labelled.push("Form label properly associated".to_string());
            } else {
                findings
                    .missing_labels
                    .push("Form input without associated label".to_string());
            }
        }
    }

    findings
}

pub fn has_language(doc: &Document) -> bool {
    doc.root().attr("lang").map_or(false, |lang| !lang.is_empty())
}

pub fn has_viewport(doc: &Document) -> bool {
    doc.find_all_with("meta", "name", "viewport").next().is_some()
}
