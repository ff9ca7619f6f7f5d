use anyhow::{Context, bail};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};

use crate::{
    page_source::{PageSource, WaitCondition},
    ratelimit::RateLimiter,
};

/// Fetches pages with plain GETs. No script runs, so the wait condition is
/// checked once against the body as served.
pub struct HttpPageSource {
    client: Client,
    rate_limiter: RateLimiter,
}

impl HttpPageSource {
    pub fn new() -> anyhow::Result<Self> {
        let client = ClientBuilder::new().build()?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            rate_limiter: RateLimiter::new(),
        }
    }

    pub async fn fetch_url_response(&self, url: &str) -> anyhow::Result<Response> {
        // Wait (non-blocking) until we're allowed to make a request according
        // to our self-imposed rate-limiting policy.
        self.rate_limiter.wait_until_ready().await;

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response)
    }

    pub async fn fetch_url_body(&self, url: &str) -> anyhow::Result<String> {
        let response = self.fetch_url_response(url).await?;
        let body = response.text().await?;
        Ok(body)
    }
}

impl PageSource for HttpPageSource {
    async fn load(&mut self, url: &str, wait: &WaitCondition) -> anyhow::Result<String> {
        debug!("Fetching {url}");
        let body = self
            .fetch_url_body(url)
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        if !wait.is_satisfied(&body)? {
            bail!(
                "{url} has only {} elements matching {:?}, expected more than {}",
                wait.count_matches(&body)?,
                wait.selector,
                wait.more_than
            );
        }
        Ok(body)
    }

    async fn close(self) -> anyhow::Result<()> {
        Ok(())
    }
}
