pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod finnhub;
pub mod format;
pub mod ics;
pub mod output;
pub mod record;
pub mod window;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::info;

pub use crate::config::Config;
pub use crate::error::{Error, RecordError, Result};
pub use crate::event::{map_records, Event, RecordPolicy, SkippedRecord};
pub use crate::finnhub::Finnhub;
pub use crate::format::{fmt_num, price_range, PLACEHOLDER};
pub use crate::ics::Calendar;
pub use crate::record::IpoRecord;
pub use crate::window::DateWindow;

pub const CALENDAR_NAME: &str = "IPO Calendar";

#[derive(Debug)]
pub struct Summary {
    pub path: PathBuf,
    pub events: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Fetches the IPOs in `window`, maps them and writes the calendar to
/// `config.output`. Nothing is written unless every step before it succeeded.
pub async fn run(
    config: &Config,
    window: DateWindow,
    generated_at: DateTime<Utc>,
) -> Result<Summary> {
    let finnhub = Finnhub::new(config.endpoint.as_str())?;

    info!("Fetching IPOs from {} to {}", window.from, window.to);
    let records = finnhub.ipo_calendar(&window, &config.token).await?;
    info!("Received {} IPO records", records.len());

    let mapped = map_records(&records, config.timezone, config.policy)?;

    let mut calendar = Calendar::new(CALENDAR_NAME, config.timezone);
    for event in mapped.events {
        calendar.push(event);
    }

    let events = calendar.events.len();
    let rendered = calendar.to_ics(generated_at).to_string();
    output::write_calendar(&config.output, &rendered)?;
    info!("Wrote {events} events to {}", config.output.display());

    Ok(Summary {
        path: config.output.clone(),
        events,
        skipped: mapped.skipped,
    })
}
