#[derive(Debug, PartialEq, Eq)]
pub enum ScrapeError {
    /// A problem row (1-based, header excluded) had no anchor with an href.
    MissingAnchor { row: usize },
    /// The folder URL or a contest href could not be turned into a URL.
    InvalidUrl(String),
}

impl std::fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrapeError::MissingAnchor { row } => {
                write!(f, "problem row {row} has no link")
            }
            ScrapeError::InvalidUrl(url) => write!(f, "The supplied URL is not valid: {url}"),
        }
    }
}

impl std::error::Error for ScrapeError {}
