//! actionforge - GitHub Actions workflow generator CLI
//!
//! Generates deployment workflows from a (language, platform, framework)
//! selection, shares configurations as URL-safe tokens, and keeps a
//! short history of saved configurations.
//!
//! ## Commands
//!
//! - `actionforge generate` - Render a workflow for a selection
//! - `actionforge supported` - Show legal platforms and frameworks
//! - `actionforge share` - Encode/decode shareable configuration tokens
//! - `actionforge history` - Browse saved configurations
//! - `actionforge completions` - Generate shell completions
//!
//! ## Quick Start
//!
//! ```bash
//! # Render a workflow to stdout
//! actionforge generate -l python -p azure -f flask
//!
//! # Write it to the conventional file name, skipping the test step
//! actionforge generate -l go -p aws -f lambda --no-tests -o go-lambda-aws.yml
//!
//! # Share the configuration
//! actionforge share encode -l python -p azure -f flask
//!
//! # List saved configurations
//! actionforge history list
//! ```

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    // Initialize tracing for debugging
    if std::env::var("ACTIONFORGE_DEBUG").is_ok() {
        actionforge::init_logging("debug");
    }

    // Run the CLI
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if std::env::var("ACTIONFORGE_VERBOSE").is_ok() {
                eprintln!("{:?}", e);
            }
            ExitCode::FAILURE
        }
    }
}
