use std::{future::Future, time::Duration};

use anyhow::{anyhow, bail};
use log::{debug, warn};
use scraper::{Html, Selector};
use tokio::time::{Instant, sleep};

/// A page counts as loaded once more than `more_than` elements match
/// `selector` and its HTML stops changing between two polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitCondition {
    pub selector: String,
    pub more_than: usize,
}

impl WaitCondition {
    pub fn new(selector: impl Into<String>, more_than: usize) -> Self {
        Self {
            selector: selector.into(),
            more_than,
        }
    }

    pub fn count_matches(&self, html: &str) -> anyhow::Result<usize> {
        let selector = Selector::parse(&self.selector)
            .map_err(|err| anyhow!("invalid selector {:?}: {err}", self.selector))?;
        Ok(Html::parse_document(html).select(&selector).count())
    }

    pub fn is_satisfied(&self, html: &str) -> anyhow::Result<bool> {
        Ok(self.count_matches(html)? > self.more_than)
    }
}

/// Where rendered HTML comes from. One instance is driven serially for the
/// whole run; each `load` replaces the previously loaded page.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn load(&mut self, url: &str, wait: &WaitCondition) -> anyhow::Result<String>;

    async fn close(self) -> anyhow::Result<()>
    where
        Self: Sized;
}

/// Polls `fetch_html` until `wait` holds on two identical snapshots in a
/// row. When `timeout` passes on a page that still changes, the latest
/// snapshot meeting the count is used; only a page that never reached the
/// count is an error.
pub async fn wait_for_stable<F, Fut>(
    mut fetch_html: F,
    wait: &WaitCondition,
    timeout: Duration,
    poll_interval: Duration,
) -> anyhow::Result<String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<String>>,
{
    let deadline = Instant::now() + timeout;
    let mut previous: Option<String> = None;
    loop {
        let html = fetch_html().await?;
        let satisfied = wait.is_satisfied(&html)?;
        if satisfied && previous.as_deref() == Some(html.as_str()) {
            return Ok(html);
        }
        if Instant::now() >= deadline {
            if satisfied {
                warn!(
                    "page still changing after {:?}, using the latest snapshot",
                    timeout
                );
                return Ok(html);
            }
            bail!(
                "timed out after {:?} waiting for more than {} elements matching {:?} (last saw {})",
                timeout,
                wait.more_than,
                wait.selector,
                wait.count_matches(&html)?
            );
        }
        debug!("page not settled yet, polling again");
        previous = Some(html);
        sleep(poll_interval).await;
    }
}
