use std::time::Duration;

use anyhow::{Context, anyhow};
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::{
    config::ScrapingConfig,
    page_source::{PageSource, WaitCondition, wait_for_stable},
};

/// Drives one Chromium tab for every navigation of the run.
pub struct BrowserPageSource {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
    wait_timeout: Duration,
    poll_interval: Duration,
}

impl BrowserPageSource {
    pub async fn launch(config: &ScrapingConfig) -> anyhow::Result<Self> {
        let mut builder = BrowserConfig::builder();
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder
            .build()
            .map_err(|err| anyhow!("invalid browser config: {err}"))?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .context("failed to launch browser")?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    warn!("browser handler stopped: {err}");
                    break;
                }
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("failed to open browser page")?;
        info!(
            "Browser launched ({})",
            if config.headless { "headless" } else { "visible" }
        );

        Ok(Self {
            browser,
            page,
            handler,
            wait_timeout: config.wait_timeout,
            poll_interval: config.poll_interval,
        })
    }
}

impl PageSource for BrowserPageSource {
    async fn load(&mut self, url: &str, wait: &WaitCondition) -> anyhow::Result<String> {
        debug!("Navigating to {url}");
        self.page
            .goto(url)
            .await
            .with_context(|| format!("failed to navigate to {url}"))?;

        let page = &self.page;
        wait_for_stable(
            || async move { page.content().await.map_err(anyhow::Error::from) },
            wait,
            self.wait_timeout,
            self.poll_interval,
        )
        .await
        .with_context(|| format!("{url} never finished loading"))
    }

    async fn close(mut self) -> anyhow::Result<()> {
        self.browser.close().await.context("failed to close browser")?;
        self.browser.wait().await?;
        self.handler.await?;
        Ok(())
    }
}
