//! HTTP GET + JSON decode.
//!
//! Uses the curl crate (libcurl) for the transfer. Non-2xx responses are not
//! treated as errors: whatever body comes back is handed to the JSON parser,
//! and any shape problems are left to the caller.

mod parse;

use serde_json::Value;
use std::time::Duration;

use crate::config::SwcastConfig;
use crate::error::FetchError;

/// Anything that can turn a URL into a decoded JSON value.
pub trait JsonFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

impl<T: JsonFetcher + ?Sized> JsonFetcher for &T {
    fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        (**self).fetch_json(url)
    }
}

/// Transfer settings for [`CurlFetcher`].
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub user_agent: String,
    /// None leaves libcurl's default in place.
    pub connect_timeout: Option<Duration>,
    /// None leaves libcurl's default in place (no overall limit).
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    pub fn from_config(cfg: &SwcastConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::from_config(&SwcastConfig::default())
    }
}

/// Blocking fetcher backed by a fresh curl Easy handle per request.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: FetchOptions,
}

impl CurlFetcher {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }
}

impl JsonFetcher for CurlFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.opts.user_agent)?;
        if let Some(d) = self.opts.connect_timeout {
            easy.connect_timeout(d)?;
        }
        if let Some(d) = self.opts.timeout {
            easy.timeout(d)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code().unwrap_or(0);
        tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, code, body.len());

        parse::parse_body(&body)
    }
}
