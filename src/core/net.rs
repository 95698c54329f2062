// src/core/net.rs
//
// Single-attempt HTTP GET. No retries, no custom headers beyond the UA.

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::error::FetchError;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            // proxies would come from env vars; only the configured request goes out
            .no_proxy()
            .build()
            .map_err(FetchError::Other)?;
        Ok(Self { client })
    }

    /// GET `url` and return the body as text. Non-2xx statuses are errors.
    pub fn fetch(&self, url: &str) -> Result<String, FetchError> {
        logd!("Net: GET {url}");

        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(FetchError::classify)?;

        let status = resp.status();
        let body = resp.text().map_err(FetchError::classify)?;
        logd!("Net: {status} from {url} ({} bytes)", body.len());
        Ok(body)
    }
}
