// src/checker/mod.rs
// =============================================================================
// This module contains the page model and the accessibility checks.
//
// Submodules:
// - dom: Wraps scraper's parsed HTML in a small read-only Document/Element API
// - rules: The individual heuristics (images, buttons, links, headings, forms,
//          language, viewport)
//
// This file (mod.rs) is the module root - it re-exports the public API so the
// rest of the app can write `checker::check_images()` instead of
// `checker::rules::check_images()`.
// =============================================================================

mod dom;
mod rules;

pub use dom::Document;
pub use rules::{
    check_buttons, check_forms, check_headings, check_images, check_links, has_language,
    has_viewport,
};
