//! Fetch-capable interface used by the pipeline: existence checks and full
//! text fetches.
//!
//! The pipeline only depends on [`Fetcher`]; [`CurlFetcher`] is the libcurl
//! implementation used by the server and CLI.

mod curl_fetcher;
mod error;

pub use curl_fetcher::{get_text, head, CurlFetcher};
pub use error::FetchError;

use std::future::Future;

/// Minimal transport the resolution pipeline runs on.
///
/// Any `Err` is a negative signal for the stage that issued the call; the
/// pipeline never retries.
pub trait Fetcher: Send + Sync {
    /// Existence check without transferring a body (HEAD).
    fn probe(&self, url: &str) -> impl Future<Output = Result<(), FetchError>> + Send;

    /// Full fetch of `url`, body decoded as UTF-8 (lossy).
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}
