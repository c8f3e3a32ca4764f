//! Fetch the dataset over HTTP.
//!
//! The reference data is served as a static file from GitHub, so a single
//! blocking GET is all there is to it.

use std::time::Duration;

use reqwest::blocking::Client;

use super::DatasetSource;
use crate::{dataset::Dataset, Error};

/// Where the reference data lives.
pub const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/FreeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Fetches the dataset from a URL.
pub struct HttpSource {
    url: String,
    client: Client,
}

impl HttpSource {
    /// Create a source for the given URL.
    /// Requests that take longer than `timeout` fail.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpSource {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DatasetSource for HttpSource {
    fn load(&mut self) -> Result<Dataset, Error> {
        tracing::info!("fetching dataset from {}", self.url);
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        tracing::debug!("got {} from {}", response.status(), self.url);
        let body = response.text()?;
        Dataset::from_json(&body)
    }
}
