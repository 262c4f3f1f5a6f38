//! HTTP collaborator used by [`crate::HolidayQuery::list`].
//!
//! [`HttpTransport`] issues exactly one blocking GET per call. It does not retry,
//! paginate or cache; failures go straight back to the caller.

use crate::error::{HolidayError, Result};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Anything that can perform a GET with query pairs and hand back a JSON body.
pub trait Transport {
    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        (**self).get_json(url, query)
    }
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl Default for HttpTransport {
    fn default() -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("gcal-holidays/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .map_err(|source| HolidayError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        log::debug!("GET {url} -> {status}");

        let body = resp.text().map_err(|source| HolidayError::Http {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(HolidayError::Status {
                url: url.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| HolidayError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
