mod browser;
mod config;
mod contest;
mod contest_scraper;
mod folder_scraper;
mod page_source;
mod problem;
mod problem_store;
mod ratelimit;
mod requests;
mod scrape_error;
mod scraper;
mod text_manipulators;

pub use browser::BrowserPageSource;
pub use config::{DEFAULT_FOLDER_URL, LoadFromEnv, PageSourceKind, ScrapingConfig};
pub use contest::{ClassifyError, classify_contest};
pub use contest_scraper::extract_problems;
pub use folder_scraper::{FolderEntry, collect_contest_links};
pub use page_source::{PageSource, WaitCondition, wait_for_stable};
pub use problem::{
    CLIENT_PROBLEM_IDS, Contest, ContestType, Problem, is_client_problem_id,
};
pub use problem_store::{CSV_HEADER, KnownContests, load_problems, write_problems};
pub use requests::HttpPageSource;
pub use scrape_error::ScrapeError;
pub use crate::scraper::{ProblemsetScraper, ScrapeReport};
