// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// access-guardian takes one positional argument, the page to audit:
//
//   access-guardian https://example.com
//   access-guardian example.com --json
//
// The URL is an Option on purpose. If clap treated it as required, running
// the tool with no arguments would produce clap's own error (exit code 2).
// We want our usage box on stdout and exit code 1 instead, so main handles
// the None case itself.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "access-guardian",
    version = "0.1.0",
    about = "Audit a web page for common accessibility issues",
    long_about = "access-guardian fetches a single page and checks it for missing alt text, \
                  unlabeled buttons and form controls, vague link text and missing \
                  language/viewport attributes, then prints a scored report."
)]
pub struct Cli {
    /// Page to audit (https:// is added if no scheme is given)
    pub url: Option<String>,

    /// Anything after the URL is ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Output the report as JSON instead of the console layout
    #[arg(long)]
    pub json: bool,

    /// Log what the tool is doing to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
