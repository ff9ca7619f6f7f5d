use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::{QuantaClock, QuantaInstant},
    middleware::NoOpMiddleware,
    state::{InMemoryState, NotKeyed},
};
use nonzero_ext::nonzero;
use std::{num::NonZeroU32, time::Duration};

// Pages are fetched one after another, so these only need to keep a slow
// scrape from looking like a burst to the file host.
const REQ_PER_SEC: NonZeroU32 = nonzero!(4u32);
const MS_BETWEEN_REQ: Duration = Duration::from_millis(250);

type SpecificGovernorRateLimiter =
    GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock, NoOpMiddleware<QuantaInstant>>;

pub struct RateLimiter {
    req_per_sec: SpecificGovernorRateLimiter,
    ms_between_req: SpecificGovernorRateLimiter,
}

impl RateLimiter {
    pub fn new() -> Self {
        let req_per_sec = GovernorRateLimiter::direct(Quota::per_second(REQ_PER_SEC));
        // MS_BETWEEN_REQ is non-zero, so the quota always exists.
        let ms_between_req = GovernorRateLimiter::direct(
            Quota::with_period(MS_BETWEEN_REQ).unwrap_or(Quota::per_second(REQ_PER_SEC)),
        );

        RateLimiter {
            req_per_sec,
            ms_between_req,
        }
    }

    pub async fn wait_until_ready(&self) {
        // Average rate first, then the minimum gap.
        self.req_per_sec.until_ready().await;
        self.ms_between_req.until_ready().await;
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
