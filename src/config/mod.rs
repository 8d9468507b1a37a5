use crate::domain::ports::ScanOptions;
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_positive_number, Validate,
};
use crate::utils::error::Result;
use clap::Parser;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.88 Safari/537.36";

fn default_output_name() -> String {
    format!(
        "document-check-results-{}.csv",
        chrono::Local::now().date_naive()
    )
}

#[derive(Debug, Clone, Parser)]
#[command(name = "docx-linkcheck")]
#[command(about = "Audits Word documents for broken hyperlinks")]
pub struct CliConfig {
    /// Location of file or directory to load
    #[arg(long, default_value = ".")]
    pub target: String,

    /// User-Agent header used when opening URLs
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Time in seconds to give up after when trying to load a URL
    #[arg(long, default_value = "10")]
    pub timeout: u64,

    /// Filename suffixes a candidate document must carry
    #[arg(long, value_delimiter = ',', default_value = "docx")]
    pub extensions: Vec<String>,

    /// Filename prefixes that exclude a candidate (hidden and lock files)
    #[arg(long, value_delimiter = ',', default_value = ".,~")]
    pub exclude_prefixes: Vec<String>,

    /// Maximum number of in-flight URL checks
    #[arg(long, default_value = "5")]
    pub concurrent_requests: usize,

    /// Location of csv file to write results to
    #[arg(long, default_value_t = default_output_name())]
    pub output: String,

    /// Overwrite output file if it exists
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl ScanOptions for CliConfig {
    fn target(&self) -> &str {
        &self.target
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    fn include_suffixes(&self) -> &[String] {
        &self.extensions
    }

    fn exclude_prefixes(&self) -> &[String] {
        &self.exclude_prefixes
    }

    fn concurrent_requests(&self) -> usize {
        self.concurrent_requests
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("target", &self.target)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_non_empty_string("output", &self.output)?;
        validate_non_empty_list("extensions", &self.extensions)?;
        validate_positive_number("timeout", self.timeout as usize, 1)?;
        validate_positive_number("concurrent_requests", self.concurrent_requests, 1)?;
        Ok(())
    }
}
