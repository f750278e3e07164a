//! cm - content migration CLI
//!
//! Moves content items, language variants and assets between environments
//! of a headless content hub.
//!
//! # Examples
//!
//! ```bash
//! # Export two items into the configured package file
//! cm export --items home:en,about:en
//!
//! # Import a package into the target environment and write a report
//! cm import --filename data.zip --report ./reports
//!
//! # Copy items straight from source to target
//! cm migrate --items home:en --skip-missing-references --force
//! ```

use cm_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials may live in a local .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
