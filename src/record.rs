use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::RecordError, format::PLACEHOLDER};

/// One entry of the `ipoCalendar` array, kept as the loosely typed object the
/// API sends. Every accessor decides its own fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IpoRecord(Map<String, Value>);

impl IpoRecord {
    pub fn symbol(&self) -> String {
        self.text("symbol")
    }

    pub fn name(&self) -> String {
        self.text("name")
    }

    pub fn exchange(&self) -> String {
        self.text("exchange")
    }

    pub fn number_of_shares(&self) -> Option<&Value> {
        self.0.get("numberOfShares")
    }

    pub fn price(&self) -> Option<&Value> {
        self.0.get("price")
    }

    /// Calendar date of the offering. Any time of day or offset that follows
    /// the date is discarded without conversion.
    pub fn date(&self) -> Result<NaiveDate, RecordError> {
        let raw = match self.0.get("date") {
            None | Some(Value::Null) => return Err(RecordError::MissingDate),
            Some(Value::String(raw)) => raw.trim(),
            Some(other) => {
                return Err(RecordError::InvalidDate {
                    value: other.to_string(),
                })
            }
        };

        parse_date(raw).ok_or_else(|| RecordError::InvalidDate {
            value: raw.to_string(),
        })
    }

    fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            _ => PLACEHOLDER.into(),
        }
    }
}

impl From<Map<String, Value>> for IpoRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_any_date(raw).filter(|date| (1..=9999).contains(&date.year()))
}

fn parse_any_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(datetime) = raw.parse::<NaiveDateTime>() {
        return Some(datetime.date());
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(datetime.date());
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> IpoRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_fields_fall_back_to_placeholder() {
        let full = record(json!({ "symbol": "ABC", "name": "Acme", "exchange": "NASDAQ" }));
        assert_eq!(full.symbol(), "ABC");
        assert_eq!(full.name(), "Acme");
        assert_eq!(full.exchange(), "NASDAQ");

        let sparse = record(json!({ "symbol": null, "exchange": ["NYSE"] }));
        assert_eq!(sparse.symbol(), "-");
        assert_eq!(sparse.name(), "-");
        assert_eq!(sparse.exchange(), "-");

        assert_eq!(record(json!({ "symbol": 1234 })).symbol(), "1234");
    }

    #[test]
    fn dates_keep_only_the_calendar_day() {
        let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        assert_eq!(record(json!({ "date": "2024-05-01" })).date(), Ok(ymd(2024, 5, 1)));
        assert_eq!(
            record(json!({ "date": "2024-05-01T23:30:00" })).date(),
            Ok(ymd(2024, 5, 1))
        );
        assert_eq!(
            record(json!({ "date": "2024-05-01 08:00:00" })).date(),
            Ok(ymd(2024, 5, 1))
        );
        assert_eq!(
            record(json!({ "date": "2024-05-01T22:00:00-05:00" })).date(),
            Ok(ymd(2024, 5, 1))
        );
        assert_eq!(record(json!({ "date": " 2024-11-03 " })).date(), Ok(ymd(2024, 11, 3)));
    }

    #[test]
    fn bad_dates_are_reported() {
        assert_eq!(record(json!({})).date(), Err(RecordError::MissingDate));
        assert_eq!(
            record(json!({ "date": null })).date(),
            Err(RecordError::MissingDate)
        );
        assert_eq!(
            record(json!({ "date": "2024-02-30" })).date(),
            Err(RecordError::InvalidDate {
                value: "2024-02-30".into()
            })
        );
        assert_eq!(
            record(json!({ "date": 20240501 })).date(),
            Err(RecordError::InvalidDate {
                value: "20240501".into()
            })
        );
    }

    #[test]
    fn years_outside_four_digits_are_rejected() {
        for raw in ["+262142-12-31", "+10000-01-01", "0000-01-01", "-0001-06-01"] {
            assert_eq!(
                record(json!({ "date": raw })).date(),
                Err(RecordError::InvalidDate { value: raw.into() })
            );
        }

        assert_eq!(
            record(json!({ "date": "9999-12-31" })).date(),
            Ok(NaiveDate::from_ymd_opt(9999, 12, 31).unwrap())
        );
    }
}
