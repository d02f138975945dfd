//! `docpub publish` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use docpub_config::{CliSettings, Config, CredentialSource};
use docpub_gdocs::publisher::{DryRunResult, PublishResult, dry_run};
use docpub_gdocs::{Credentials, GoogleDocsClient, Publisher};
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

/// File the document URL is written to, beside the source.
const URL_FILENAME: &str = "gdoc_url.txt";

/// Arguments for the publish command.
#[derive(Args)]
#[command(group(
    clap::ArgGroup::new("target")
        .required(true)
        .args(["title", "document"]),
))]
pub(crate) struct PublishArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Create a new document with this title.
    #[arg(short, long)]
    title: Option<String>,

    /// Publish into an existing document ID.
    #[arg(short, long)]
    document: Option<String>,

    /// Show what would be sent without calling the API.
    #[arg(long)]
    dry_run: bool,

    /// Write the document URL to gdoc_url.txt beside the markdown file.
    #[arg(long)]
    save_url: bool,

    /// OAuth access token (overrides config).
    #[arg(long, env = "DOCPUB_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Document index to insert at (overrides config).
    #[arg(long)]
    insert_index: Option<usize>,

    /// Path to configuration file (default: auto-discover docpub.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PublishArgs {
    /// Execute the publish command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, file access or any API call fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            access_token: self.access_token.clone(),
            insert_index: self.insert_index,
            save_url: self.save_url.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            debug!("Using config {}", path.display());
        }
        let publish_config = super::publish_config(&config)?;

        let markdown_text = std::fs::read_to_string(&self.markdown_file)?;
        output.info(&format!("Publishing {}...", self.markdown_file.display()));

        if self.dry_run {
            let result = dry_run(&publish_config, &markdown_text)?;
            print_dry_run_result(&output, &result);
            return Ok(());
        }

        let credentials = match config.require_credentials()? {
            CredentialSource::AccessToken(token) => Credentials::access_token(token),
            CredentialSource::ServiceAccountKey(path) => Credentials::service_account_file(path)?,
        };
        let client = GoogleDocsClient::new(&config.google_docs.api_url, &credentials)?;
        let publisher = Publisher::new(&client, publish_config);

        let result = match (&self.title, &self.document) {
            (_, Some(document_id)) => publisher.publish_to(document_id, &markdown_text)?,
            (Some(title), None) => publisher.publish(title, &markdown_text)?,
            (None, None) => {
                return Err(CliError::Validation(
                    "--title or --document required".to_owned(),
                ));
            }
        };
        print_publish_result(&output, &result);

        if config.publish.save_url {
            let url_file = save_url(&self.markdown_file, &result.url)?;
            output.info(&format!("URL saved: {}", url_file.display()));
        }

        Ok(())
    }
}

/// Write `url` to [`URL_FILENAME`] in the markdown file's directory.
fn save_url(markdown_file: &Path, url: &str) -> Result<PathBuf, CliError> {
    let dir = markdown_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let url_file = dir.join(URL_FILENAME);
    std::fs::write(&url_file, url)?;
    Ok(url_file)
}

fn print_dry_run_result(output: &Output, result: &DryRunResult) {
    output.highlight("\n[DRY RUN] No changes made.");

    if result.insert.is_none() {
        output.warning("Document text is empty; nothing would be sent.");
        return;
    }

    output.info(&format!(
        "Text: {} characters, {} directive(s)",
        docpub_markup::text_len(&result.text),
        result.directives.len()
    ));
    output.info(&format!(
        "\nFormatting requests ({}):",
        result.requests.len()
    ));
    for request in &result.requests {
        let range = request
            .range()
            .map(|r| format!("[{}, {})", r.start_index, r.end_index))
            .unwrap_or_default();
        output.detail(&format!("  -> {} {range}", request.name()));
    }
}

fn print_publish_result(output: &Output, result: &PublishResult) {
    output.separator();
    output.success("Document published successfully!");
    output.separator();
    output.info(&format!("ID: {}", result.document_id));
    output.info(&format!("URL: {}", result.url));
    output.info(&format!(
        "Inserted: {} characters",
        result.characters_inserted
    ));
    output.info(&format!(
        "Formatting requests: {}",
        result.operations_applied
    ));
}
