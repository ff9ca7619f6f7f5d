use reqwest::Url;
use scraper::{ElementRef, Selector};

use crate::scrape_error::ScrapeError;

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>().trim().to_string()
}

/// Text and href of the first anchor under `node`, if it has an href.
pub fn first_link(node: ElementRef, anchor_selector: &Selector) -> Option<(String, String)> {
    let anchor = node.select(anchor_selector).next()?;
    let href = anchor.value().attr("href")?;
    Some((extract_text(anchor), href.to_string()))
}

/// Resolves a (possibly relative) href found on `base_url`.
pub fn get_html_link_to_page(base_url: &str, html_fragment: &str) -> Result<String, ScrapeError> {
    let base = Url::parse(base_url).map_err(|_| ScrapeError::InvalidUrl(base_url.to_string()))?;
    base.join(html_fragment)
        .map(String::from)
        .map_err(|_| ScrapeError::InvalidUrl(html_fragment.to_string()))
}
