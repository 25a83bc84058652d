use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of a single page fetch.
///
/// A `FetchError` from the venue listing fetch is fatal; the same error from
/// a per-entry detail fetch is swallowed and the entry keeps its truncated
/// fields.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("status code error: {0}")]
    Status(StatusCode),

    #[error("failed to read page body as HTML: {0}")]
    Parse(#[source] reqwest::Error),
}
