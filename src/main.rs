// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the page, parse it, run the checks, score them
// 3. Print the report (console layout or JSON)
// 4. Exit with proper code (0 = report printed, 1 = usage or any error)
//
// The whole run is one straight line: fetch → parse → check → score → print.
// We still need an async runtime because reqwest's client is async, but a
// single-threaded one is plenty for one request.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - DOM wrapper and accessibility checks
mod cli; // src/cli.rs - command-line parsing
mod error; // src/error.rs - AuditError
mod fetch; // src/fetch.rs - the single HTTP GET
mod report; // src/report/ - bucketing, scoring, output

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};

use checker::Document;
use cli::Cli;
use error::AuditError;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            // Anything that isn't one of our own error kinds happened after
            // the fetch, so it counts as unexpected
            let err = e
                .downcast::<AuditError>()
                .unwrap_or_else(|other| AuditError::Unexpected(other.to_string()));
            print_error(&err, cli.json);
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so they never mix with the report on stdout
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = report printed
//   Err   = usage error, fetch error or something unexpected
async fn run(cli: &Cli) -> Result<i32> {
    let raw_url = cli.url.as_deref().ok_or(AuditError::Usage)?;
    if !cli.extra.is_empty() {
        debug!(ignored = ?cli.extra, "extra arguments after the URL");
    }
    let url = fetch::normalize_url(raw_url);
    debug!(%url, "auditing");

    if !cli.json {
        print!("{}", report::HEADER);
        println!("Analyzing: {}", url);
    }

    progress(cli.json, "Fetching page")?;
    let body = fetch::fetch_page(&url).await?;
    done(cli.json, "");

    progress(cli.json, "Parsing HTML")?;
    let document = Document::parse(&body);
    done(cli.json, "");

    progress(cli.json, "Running accessibility checks")?;
    let audit = report::audit(&url, &document);
    done(cli.json, "\n");

    if cli.json {
        println!("{}", report::render_json(&audit)?);
    } else {
        print!("{}", report::render_console(&audit));
        print!("{}", report::FOOTER);
    }

    Ok(0)
}

// Prints "⠿ Step... " without a newline; `done` finishes the line
fn progress(json: bool, step: &str) -> Result<()> {
    if !json {
        print!("⠿ {}... ", step);
        std::io::stdout().flush()?;
    }
    Ok(())
}

fn done(json: bool, trailer: &str) {
    if !json {
        println!("✓{}", trailer);
    }
}

fn print_error(err: &AuditError, json: bool) {
    match err {
        AuditError::Usage => print!("{}", report::render_usage()),
        _ if json => println!("{}", err.user_message()),
        _ => {
            println!("\n{}", err.user_message());
            print!("{}", report::FOOTER);
        }
    }
}
