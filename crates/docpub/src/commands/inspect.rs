//! `docpub inspect` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docpub_config::Config;
use docpub_gdocs::publisher::{DryRunResult, dry_run};
use serde_json::json;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inspect command.
#[derive(Args)]
pub(crate) struct InspectArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Print text, directives and requests as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Path to configuration file (default: auto-discover docpub.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the config is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref(), None)?;
        let publish_config = super::publish_config(&config)?;

        let markdown_text = std::fs::read_to_string(&self.markdown_file)?;
        let result = dry_run(&publish_config, &markdown_text)?;

        if self.json {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &to_json(&result))?;
            writeln!(stdout)?;
        } else {
            print_summary(&Output::new(), &result);
        }

        Ok(())
    }
}

fn to_json(result: &DryRunResult) -> serde_json::Value {
    json!({
        "text": result.text,
        "directives": result.directives,
        "requests": result.insert.iter().chain(&result.requests).collect::<Vec<_>>(),
    })
}

fn print_summary(output: &Output, result: &DryRunResult) {
    output.highlight("Plain text:");
    for line in result.text.lines() {
        output.detail(&format!("  | {line}"));
    }

    if result.directives.is_empty() {
        output.info("\nNo directives.");
        return;
    }

    output.highlight(&format!("\nDirectives ({}):", result.directives.len()));
    for directive in &result.directives {
        output.info(&format!("  {directive}"));
    }
}
