//! Blocking page fetches for the venue listing and per-entry detail pages.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use scraper::Html;
use url::Url;

use crate::error::FetchError;

/// Build the single client shared by the listing fetch and all detail
/// fetches. Whatever timeouts the client and OS default to are the only
/// ones in play.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent("Mozilla/5.0 (compatible; PabatCsv/1.0)")
        .build()
        .context("Failed to build HTTP client")
}

/// Force the URL onto plain HTTP, whatever scheme it came with.
///
/// The site serves its CMS over plain HTTP only; this mirrors the scheme
/// override the original tool applies before every fetch. The override can
/// fail for exotic schemes, in which case the fetch fails on its own.
pub fn force_http(url: &mut Url) {
    let _ = url.set_scheme("http");
}

/// One GET, status check, and HTML parse. No retries.
pub fn fetch_document(client: &Client, url: &Url) -> Result<Html, FetchError> {
    let response = client.get(url.clone()).send()?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }
    let body = response.text().map_err(FetchError::Parse)?;
    Ok(Html::parse_document(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_http_overrides_https() {
        let mut url = Url::parse("https://example.com/list.php?page=2").unwrap();
        force_http(&mut url);
        assert_eq!(url.as_str(), "http://example.com/list.php?page=2");
    }

    #[test]
    fn force_http_keeps_host_and_path() {
        let mut url = Url::parse("http://example.com/event/list.php").unwrap();
        force_http(&mut url);
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.path(), "/event/list.php");
    }
}
