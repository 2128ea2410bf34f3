//! libcurl transport.
//!
//! `head` and `get_text` are blocking; [`CurlFetcher`] runs them under
//! `spawn_blocking` so a dropped request future stops the chain at the next
//! suspension point.

use curl::easy::Easy;
use url::Url;

use super::error::{check_status, FetchError};
use super::Fetcher;
use crate::config::HttpConfig;

/// Performs a HEAD request and returns the final response code if it is 2xx.
///
/// Follows redirects. Runs in the current thread.
pub fn head(url: &str, http: &HttpConfig) -> Result<u32, FetchError> {
    let mut easy = configured(url, http)?;
    easy.nobody(true)?;
    easy.perform()?;
    let code = easy.response_code()?;
    check_status(code)?;
    Ok(code)
}

/// Performs a GET request and returns the body as text.
///
/// Aborts with [`FetchError::TooLarge`] once the body passes
/// `http.max_body_bytes`. Runs in the current thread.
pub fn get_text(url: &str, http: &HttpConfig) -> Result<String, FetchError> {
    let limit = http.max_body_bytes;
    let mut body: Vec<u8> = Vec::new();
    let mut too_large = false;

    let mut easy = configured(url, http)?;
    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if body.len() + data.len() > limit {
                too_large = true;
                return Ok(0); // abort transfer
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };
    if too_large {
        return Err(FetchError::TooLarge { limit });
    }
    performed?;

    check_status(easy.response_code()?)?;
    Ok(String::from_utf8_lossy(&body).into_owned())
}

fn configured(url: &str, http: &HttpConfig) -> Result<Easy, FetchError> {
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(http.connect_timeout())?;
    easy.timeout(http.timeout())?;
    if let Some(agent) = &http.user_agent {
        easy.useragent(agent)?;
    }
    Ok(easy)
}

/// [`Fetcher`] backed by libcurl.
///
/// Targets must be absolute `http(s)` URLs; the normalizer always produces
/// one, so anything else is rejected before a transfer is attempted.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    http: HttpConfig,
}

impl CurlFetcher {
    pub fn new(http: HttpConfig) -> Self {
        Self { http }
    }

    fn absolute(&self, target: &str) -> Result<String, FetchError> {
        let invalid = |reason: String| FetchError::InvalidUrl {
            url: target.to_string(),
            reason,
        };
        let url = Url::parse(target).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url.into()),
            other => Err(invalid(format!("unsupported scheme {other}"))),
        }
    }
}

impl Fetcher for CurlFetcher {
    async fn probe(&self, url: &str) -> Result<(), FetchError> {
        let url = self.absolute(url)?;
        let http = self.http.clone();
        tokio::task::spawn_blocking(move || head(&url, &http))
            .await
            .map_err(|e| FetchError::Join(e.to_string()))?
            .map(|_| ())
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let url = self.absolute(url)?;
        let http = self.http.clone();
        tokio::task::spawn_blocking(move || get_text(&url, &http))
            .await
            .map_err(|e| FetchError::Join(e.to_string()))?
    }
}
