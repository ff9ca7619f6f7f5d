use dotenv::dotenv;
use problemset_scraper::{
    BrowserPageSource, HttpPageSource, PageSource, PageSourceKind, ProblemsetScraper,
    ScrapingConfig,
};

extern crate env_logger;
extern crate log;

use log::LevelFilter;

use log::info;

async fn run_scraper_job<S: PageSource>(
    config: ScrapingConfig,
    page_source: S,
) -> anyhow::Result<()> {
    let mut scraper = ProblemsetScraper::new(config, page_source);
    let result = scraper.run_and_write().await;
    // Close the browser even when the folder page failed.
    let closed = scraper.close().await;
    let report = result?;
    closed?;
    info!(
        "{} contests listed, {} problems in total",
        report.contests_listed,
        report.problems.len()
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = ScrapingConfig::new()?;
    info!("Scraping contest folder {}", config.folder_url);
    match config.page_source {
        PageSourceKind::Browser => {
            let page_source = BrowserPageSource::launch(&config).await?;
            run_scraper_job(config, page_source).await
        }
        PageSourceKind::Http => {
            let page_source = HttpPageSource::new()?;
            run_scraper_job(config, page_source).await
        }
    }
}
