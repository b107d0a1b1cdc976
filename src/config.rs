use std::{env, path::PathBuf};

use chrono_tz::Tz;

use crate::{
    error::{Error, Result},
    event::RecordPolicy,
    finnhub::DEFAULT_ENDPOINT,
};

pub const TOKEN_VAR: &str = "FINNHUB_TOKEN";
pub const ENDPOINT_VAR: &str = "FINNHUB_API_URL";
pub const TIMEZONE_VAR: &str = "IPO_CALENDAR_TZ";

pub const DEFAULT_OUTPUT: &str = "ipo_calendar.ics";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub endpoint: String,
    pub timezone: Tz,
    pub output: PathBuf,
    pub policy: RecordPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the configuration from any variable source. Fails before anything
    /// else happens when the credential is absent or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|token| !token.is_empty())
            .ok_or(Error::MissingCredential { var: TOKEN_VAR })?;

        let endpoint = lookup(ENDPOINT_VAR)
            .filter(|endpoint| !endpoint.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        let timezone = match lookup(TIMEZONE_VAR).filter(|name| !name.is_empty()) {
            None => DEFAULT_TIMEZONE,
            Some(name) => name.parse::<Tz>().map_err(|reason| Error::InvalidConfig {
                var: TIMEZONE_VAR,
                value: name.clone(),
                reason: reason.to_string(),
            })?,
        };

        Ok(Self {
            token,
            endpoint,
            timezone,
            output: PathBuf::from(DEFAULT_OUTPUT),
            policy: RecordPolicy::default(),
        })
    }
}
