//! Transport error type.

use thiserror::Error;

/// Failure of a single probe or fetch. The pipeline treats all of these as
/// "not found" for the stage that issued the call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Target could not be turned into an absolute URL.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// libcurl reported an error (timeout, connection, etc.).
    #[error(transparent)]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
    /// Body exceeded the configured size limit.
    #[error("response body larger than {limit} bytes")]
    TooLarge { limit: usize },
    /// Blocking transfer task was cancelled or panicked.
    #[error("transfer task failed: {0}")]
    Join(String),
}

/// Maps a response code to `Ok` for 2xx and [`FetchError::Status`] otherwise.
pub(crate) fn check_status(code: u32) -> Result<(), FetchError> {
    if (200..300).contains(&code) {
        Ok(())
    } else {
        Err(FetchError::Status(code))
    }
}
