// src/core/net.rs

// Plain HTTP GET returning the body as text. The catalog client only ever
// needs this one call, so it sits behind a trait and tests swap in a fake.

use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::error::TransportError;

pub trait Transport {
    /// GET `url` with `query` appended; `Ok` only for a 2xx status.
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, TransportError>;
}

/// Blocking reqwest client. One instance serves the whole run.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// `timeout: None` means a request may block indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(e.without_url()))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, TransportError> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| TransportError::Request(e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: s!(url),
            });
        }

        resp.text().map_err(|e| TransportError::Request(e.without_url()))
    }
}
