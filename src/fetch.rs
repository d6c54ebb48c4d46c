//! Single GET against the people service and interpretation of its response.

use gloo::console::log;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

pub const PEOPLE_URL: &str = "http://localhost:8080/api/people";

/// Every way the people request can fail. `Display` is the text shown to the user.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    Parse(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}

/// Only 2xx counts as success.
pub fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::Status(status))
    }
}

/// The body may be any JSON; shape is judged at render time.
pub fn parse_body(text: &str) -> Result<Value, FetchError> {
    Ok(serde_json::from_str(text)?)
}

/// Issues the request and returns the parsed payload.
/// The body is left unread when the status is not 2xx.
pub async fn fetch_people(url: &str) -> Result<Value, FetchError> {
    let resp = Request::get(url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json")
        .send()
        .await?;
    log!("Response status:", resp.status());
    check_status(resp.status())?;

    let text = resp.text().await?;
    parse_body(&text)
}
