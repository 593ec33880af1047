use std::path::PathBuf;

use chrono::NaiveDate;
use clap::builder::TypedValueParser as _;
use clap::Parser;
use reqwest::Url;

pub const DEFAULT_USER: &str = "ethanbaker";

/// Regenerates a GitHub profile README from the profile's pinned repositories.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ReadmeUpdater {
    /// GitHub user whose profile is scraped. eg. ethanbaker.
    #[arg(
        short,
        long,
        env = "GITHUB_USER",
        value_name = "User",
        default_value = DEFAULT_USER
    )]
    pub user: String,

    /// Site root the profile lives under. eg. https://github.com.
    #[arg(long, value_name = "Url", default_value = "https://github.com")]
    pub base_url: Url,

    /// Proxy used for the profile request. eg. http://127.0.0.1:8080.
    #[arg(long, value_name = "Proxy")]
    pub proxy: Option<Url>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "Seconds", default_value_t = 15)]
    pub timeout: u64,

    /// Maximum number of pinned repositories listed (0 means unlimited).
    #[arg(short, long, value_name = "Count", default_value_t = 10)]
    pub limit: usize,

    /// Birthdate the age is computed from. eg. 2003-02-08.
    #[arg(short, long, value_name = "YYYY-MM-DD", default_value = "2003-02-08")]
    pub birthdate: NaiveDate,

    /// Custom template file; the built-in README template is used when absent.
    #[arg(short, long, value_name = "Template File")]
    pub template: Option<PathBuf>,

    /// Where the rendered README is written.
    #[arg(short, long, value_name = "Output File", default_value = "README.md")]
    pub output: PathBuf,

    /// Log level (off disables logging).
    #[arg(
        long,
        default_value = "info",
        value_parser = clap::builder::PossibleValuesParser::new(["off", "debug", "info", "warn", "error"])
            .map(|s| s.parse::<log::LevelFilter>().unwrap_or(log::LevelFilter::Info)),
    )]
    pub log_level: log::LevelFilter,
}

impl ReadmeUpdater {
    /// The user to scrape; a blank `--user`/`GITHUB_USER` falls back to the default.
    pub fn user(&self) -> &str {
        match self.user.trim() {
            "" => DEFAULT_USER,
            user => user,
        }
    }
}
