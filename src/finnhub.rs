use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config::TOKEN_VAR,
    error::{Error, Result},
    record::IpoRecord,
    window::DateWindow,
};

pub const DEFAULT_ENDPOINT: &str = "https://finnhub.io/api/v1/calendar/ipo";
pub const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct IpoCalendarResponse {
    #[serde(rename = "ipoCalendar", default)]
    ipo_calendar: Option<Vec<IpoRecord>>,
}

/// Client for Finnhub's IPO calendar endpoint.
#[derive(Debug, Clone)]
pub struct Finnhub {
    client: Client,
    endpoint: String,
}

impl Finnhub {
    pub fn new<S: Into<String>>(endpoint: S) -> Result<Self> {
        Self::with_timeout(endpoint, TIMEOUT)
    }

    pub fn with_timeout<S: Into<String>>(endpoint: S, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Fetches the IPOs within `window`, in the order the API lists them.
    /// A response without an `ipoCalendar` key yields no records.
    pub async fn ipo_calendar(&self, window: &DateWindow, token: &str) -> Result<Vec<IpoRecord>> {
        if token.is_empty() {
            return Err(Error::MissingCredential { var: TOKEN_VAR });
        }

        debug!("Sending HTTP request to {}", self.endpoint);
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&window.query())
            .query(&[("token", token)])
            .send()
            .await?;

        let status = resp.status();
        debug!("Got response status {status}");

        let body = resp.text().await?;
        if !status.is_success() {
            return Err(Error::Status { status, body });
        }

        let payload: IpoCalendarResponse = serde_json::from_str(&body)?;
        Ok(payload.ipo_calendar.unwrap_or_default())
    }
}
