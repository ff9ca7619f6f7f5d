use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

pub const DEFAULT_FOLDER_URL: &str =
    "https://www.dropbox.com/sh/nx3tnilzqz7df8a/AAAYlTq2tiEHl5hsESw6-yfLa?dl=0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSourceKind {
    /// Headless Chromium, needed for the live Dropbox listing.
    Browser,
    /// Plain GET, for pages that are served already rendered.
    Http,
}

/// The env vars read for scraping. Everything has a default.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    #[serde(default = "default_folder_url")]
    folder_url: String,
    #[serde(default = "default_output_path")]
    output_path: PathBuf,
    #[serde(default = "default_true")]
    skip_known_contests: bool,
    #[serde(default = "default_page_source")]
    page_source: PageSourceKind,
    #[serde(default = "default_true")]
    headless: bool,
    #[serde(default = "default_folder_min_rows")]
    folder_min_rows: usize,
    #[serde(default = "default_contest_min_divs")]
    contest_min_divs: usize,
    #[serde(default = "default_wait_timeout_secs")]
    wait_timeout_secs: u64,
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,
}

fn default_folder_url() -> String {
    DEFAULT_FOLDER_URL.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("problems.csv")
}

fn default_true() -> bool {
    true
}

fn default_page_source() -> PageSourceKind {
    PageSourceKind::Browser
}

fn default_folder_min_rows() -> usize {
    485
}

fn default_contest_min_divs() -> usize {
    5
}

fn default_wait_timeout_secs() -> u64 {
    60
}

fn default_poll_interval_ms() -> u64 {
    500
}

#[derive(Debug, Clone)]
pub struct ScrapingConfig {
    pub folder_url: String,
    pub output_path: PathBuf,
    /// Seed the output with the existing CSV and don't revisit its contests.
    pub skip_known_contests: bool,
    pub page_source: PageSourceKind,
    pub headless: bool,
    pub folder_min_rows: usize,
    pub contest_min_divs: usize,
    pub wait_timeout: Duration,
    pub poll_interval: Duration,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self::from(scraping_env))
    }
}

impl From<ScrapingEnv> for ScrapingConfig {
    fn from(env: ScrapingEnv) -> Self {
        Self {
            folder_url: env.folder_url,
            output_path: env.output_path,
            skip_known_contests: env.skip_known_contests,
            page_source: env.page_source,
            headless: env.headless,
            folder_min_rows: env.folder_min_rows,
            contest_min_divs: env.contest_min_divs,
            wait_timeout: Duration::from_secs(env.wait_timeout_secs),
            poll_interval: Duration::from_millis(env.poll_interval_ms),
        }
    }
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            folder_url: default_folder_url(),
            output_path: default_output_path(),
            skip_known_contests: true,
            page_source: default_page_source(),
            headless: true,
            folder_min_rows: default_folder_min_rows(),
            contest_min_divs: default_contest_min_divs(),
            wait_timeout: Duration::from_secs(default_wait_timeout_secs()),
            poll_interval: Duration::from_millis(default_poll_interval_ms()),
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config =
            envy::from_env::<Self>().context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> ScrapingConfig {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>();
        ScrapingConfig::from(envy::from_iter::<_, ScrapingEnv>(vars).unwrap())
    }

    #[test]
    fn defaults_match_unset_env() {
        let config = from_pairs(&[]);
        let default = ScrapingConfig::default();
        assert_eq!(config.folder_url, DEFAULT_FOLDER_URL);
        assert_eq!(config.output_path, default.output_path);
        assert!(config.skip_known_contests);
        assert_eq!(config.page_source, PageSourceKind::Browser);
        assert!(config.headless);
        assert_eq!(config.folder_min_rows, 485);
        assert_eq!(config.contest_min_divs, 5);
        assert_eq!(config.wait_timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides_are_read() {
        let config = from_pairs(&[
            ("FOLDER_URL", "http://localhost:8080/folder"),
            ("OUTPUT_PATH", "out/list.csv"),
            ("SKIP_KNOWN_CONTESTS", "false"),
            ("PAGE_SOURCE", "http"),
            ("HEADLESS", "false"),
            ("FOLDER_MIN_ROWS", "0"),
            ("POLL_INTERVAL_MS", "50"),
        ]);
        assert_eq!(config.folder_url, "http://localhost:8080/folder");
        assert_eq!(config.output_path, PathBuf::from("out/list.csv"));
        assert!(!config.skip_known_contests);
        assert_eq!(config.page_source, PageSourceKind::Http);
        assert!(!config.headless);
        assert_eq!(config.folder_min_rows, 0);
        assert_eq!(config.poll_interval, Duration::from_millis(50));
    }

    #[test]
    fn unknown_page_source_is_rejected() {
        let vars = vec![("PAGE_SOURCE".to_string(), "curl".to_string())];
        assert!(envy::from_iter::<_, ScrapingEnv>(vars).is_err());
    }
}
