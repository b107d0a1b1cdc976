use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use log::{debug, warn};

use crate::{
    error::{Error, RecordError, Result},
    format::{fmt_num, price_range},
    record::IpoRecord,
};

pub const SOURCE: &str = "Finnhub IPO Calendar";

/// All-day calendar entry for a single IPO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub symbol: String,
    pub title: String,
    pub date: NaiveDate,
    /// Zone the date is read in. The rendered event is date-only, so this only
    /// matters to callers of [`Event::starts_at`].
    pub timezone: Tz,
    pub description: String,
    pub location: String,
}

impl Event {
    pub fn from_record(record: &IpoRecord, timezone: Tz) -> Result<Self, RecordError> {
        let symbol = record.symbol();
        let exchange = record.exchange();

        let description = [
            format!("Company : {}", record.name()),
            format!("Exchange: {exchange}"),
            format!("Shares  : {}", fmt_num(record.number_of_shares())),
            format!("Price   : {}", price_range(record.price())),
            format!("Source  : {SOURCE}"),
        ]
        .join("\n");

        Ok(Self {
            title: format!("IPO: {symbol}"),
            date: record.date()?,
            timezone,
            description,
            location: exchange,
            symbol,
        })
    }

    /// Local midnight opening the event's day in its reference timezone, for
    /// callers that need a concrete instant rather than a calendar date.
    pub fn starts_at(&self) -> DateTime<Tz> {
        let midnight = self.date.and_time(NaiveTime::MIN);
        self.timezone
            .from_local_datetime(&midnight)
            .earliest()
            .unwrap_or_else(|| self.timezone.from_utc_datetime(&midnight))
    }
}

/// What to do with a record whose date cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordPolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub symbol: String,
    pub error: RecordError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapped {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedRecord>,
}

/// Maps every record in arrival order. Under [`RecordPolicy::Abort`] the first
/// bad record fails the whole batch.
pub fn map_records(records: &[IpoRecord], timezone: Tz, policy: RecordPolicy) -> Result<Mapped> {
    let mut mapped = Mapped::default();

    for (index, record) in records.iter().enumerate() {
        match Event::from_record(record, timezone) {
            Ok(event) => {
                debug!("Mapped {} starting {}", event.title, event.starts_at());
                mapped.events.push(event);
            }
            Err(source) if policy == RecordPolicy::Abort => {
                return Err(Error::Record { index, source });
            }
            Err(error) => {
                let symbol = record.symbol();
                warn!("Skipping record {index} ({symbol}): {error}");
                mapped.skipped.push(SkippedRecord {
                    index,
                    symbol,
                    error,
                });
            }
        }
    }

    Ok(mapped)
}
