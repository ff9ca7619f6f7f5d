use anyhow::Context;
use log::{debug, error, info, warn};

use crate::{
    config::ScrapingConfig,
    contest::{ClassifyError, classify_contest},
    contest_scraper::extract_problems,
    folder_scraper::{FOLDER_ROW_SELECTOR, FolderEntry, collect_contest_links},
    page_source::{PageSource, WaitCondition},
    problem::{Contest, Problem, is_client_problem_id},
    problem_store::{KnownContests, load_problems, write_problems},
    text_manipulators::get_html_link_to_page,
};

#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Prior records first (when known contests are skipped), then new ones
    /// in scrape order.
    pub problems: Vec<Problem>,
    pub contests_listed: usize,
    pub skipped_unknown: usize,
    pub skipped_invalid_id: usize,
    pub skipped_known: usize,
    pub failed: usize,
    pub scraped: usize,
    /// Scraped problems whose id the desktop client won't load. They are
    /// still written.
    pub unusual_problem_ids: usize,
}

pub struct ProblemsetScraper<S: PageSource> {
    config: ScrapingConfig,
    page_source: S,
}

impl<S: PageSource> ProblemsetScraper<S> {
    pub fn new(config: ScrapingConfig, page_source: S) -> Self {
        Self {
            config,
            page_source,
        }
    }

    pub fn page_source(&self) -> &S {
        &self.page_source
    }

    /// Lists the folder and scrapes every contest that isn't skipped.
    /// Only the folder page is required to load; a contest that fails is
    /// logged and left out.
    pub async fn run(&mut self) -> anyhow::Result<ScrapeReport> {
        let folder_url = self.config.folder_url.clone();
        let folder_wait = WaitCondition::new(FOLDER_ROW_SELECTOR, self.config.folder_min_rows);
        let folder_html = self
            .page_source
            .load(&folder_url, &folder_wait)
            .await
            .context("failed to load the contest folder")?;

        let entries = collect_contest_links(&folder_html);
        info!("Folder lists {} entries", entries.len());

        let mut report = ScrapeReport {
            contests_listed: entries.len(),
            ..Default::default()
        };

        let known = if self.config.skip_known_contests {
            report.problems = load_problems(&self.config.output_path)?;
            let known = KnownContests::from_problems(&report.problems);
            info!(
                "Loaded {} problems from {} known contests",
                report.problems.len(),
                known.len()
            );
            known
        } else {
            KnownContests::default()
        };

        let contest_wait = WaitCondition::new("div", self.config.contest_min_divs);
        for entry in entries {
            let contest = match classify_contest(&entry.name) {
                Ok(contest) => contest,
                Err(err @ ClassifyError::UnknownPrefix(_)) => {
                    debug!("Skipping folder entry: {err}");
                    report.skipped_unknown += 1;
                    continue;
                }
                Err(err @ ClassifyError::InvalidId(_)) => {
                    warn!("Skipping folder entry: {err}");
                    report.skipped_invalid_id += 1;
                    continue;
                }
            };

            if known.contains(&contest) {
                debug!("Skipping {contest}, already recorded");
                report.skipped_known += 1;
                continue;
            }

            match self.scrape_contest(&entry, contest, &contest_wait).await {
                Ok(problems) => {
                    info!("{contest}: {} problems", problems.len());
                    for problem in &problems {
                        if !is_client_problem_id(&problem.problem_id) {
                            warn!(
                                "{contest}: problem id {:?} is outside A-H/Ex",
                                problem.problem_id
                            );
                            report.unusual_problem_ids += 1;
                        }
                    }
                    report.problems.extend(problems);
                    report.scraped += 1;
                }
                Err(err) => {
                    error!("Failed to scrape {contest}: {err:#}");
                    report.failed += 1;
                }
            }
        }

        info!(
            "Scraped {} contests ({} known, {} unrecognised, {} bad ids, {} failed)",
            report.scraped,
            report.skipped_known,
            report.skipped_unknown,
            report.skipped_invalid_id,
            report.failed
        );
        Ok(report)
    }

    async fn scrape_contest(
        &mut self,
        entry: &FolderEntry,
        contest: Contest,
        wait: &WaitCondition,
    ) -> anyhow::Result<Vec<Problem>> {
        let url = get_html_link_to_page(&self.config.folder_url, &entry.url)?;
        let html = self.page_source.load(&url, wait).await?;
        Ok(extract_problems(&html, contest)?)
    }

    /// Runs the scrape and overwrites the configured output file.
    pub async fn run_and_write(&mut self) -> anyhow::Result<ScrapeReport> {
        let report = self.run().await?;
        write_problems(&self.config.output_path, &report.problems)?;
        info!(
            "Wrote {} problems to {}",
            report.problems.len(),
            self.config.output_path.display()
        );
        Ok(report)
    }

    pub async fn close(self) -> anyhow::Result<()> {
        self.page_source.close().await
    }
}
