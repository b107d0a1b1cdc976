use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use ics::{
    components::{Parameter, Property},
    escape_text,
    properties::{Description, DtEnd, DtStart, Location, RRule, Summary, TzName},
    Daylight, ICalendar, Standard, TimeZone,
};

use crate::event::Event;

const PRODID: &str = concat!("-//", env!("CARGO_PKG_NAME"), "//Finnhub IPO Calendar//EN");

/// Events in the order they were mapped. Nothing is sorted or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    pub name: String,
    pub timezone: Tz,
    pub events: Vec<Event>,
}

impl Calendar {
    pub fn new<S: Into<String>>(name: S, timezone: Tz) -> Self {
        Self {
            name: name.into(),
            timezone,
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Renders the document. `generated_at` becomes every event's `DTSTAMP`.
    #[must_use]
    pub fn to_ics(&self, generated_at: DateTime<Utc>) -> ICalendar<'_> {
        let mut icalendar = ICalendar::new("2.0", PRODID);
        icalendar.push(Property::new("X-WR-CALNAME", self.name.as_str()));
        icalendar.push(Property::new("X-WR-TIMEZONE", self.timezone.name()));

        if self.timezone == chrono_tz::America::New_York {
            icalendar.add_timezone(new_york());
        }

        let stamp = generated_at.format("%Y%m%dT%H%M%SZ").to_string();
        for (index, event) in self.events.iter().enumerate() {
            icalendar.add_event(event.to_ics(index, stamp.clone()));
        }

        icalendar
    }
}

impl Event {
    #[must_use]
    pub fn to_ics(&self, index: usize, stamp: String) -> ics::Event<'_> {
        let start = ics_date(self.date);
        let end = ics_date(self.date + Days::new(1));
        let id = format!(
            "{start}-{}-{index}@{}",
            self.symbol.replace(' ', "-"),
            env!("CARGO_PKG_NAME")
        );

        let mut ics_event = ics::Event::new(id, stamp);

        let mut dtstart = DtStart::new(start);
        dtstart.add(Parameter::new("VALUE", "DATE"));
        ics_event.push(dtstart);

        let mut dtend = DtEnd::new(end);
        dtend.add(Parameter::new("VALUE", "DATE"));
        ics_event.push(dtend);

        ics_event.push(Summary::new(escape_text(self.title.as_str())));
        ics_event.push(Description::new(escape_text(self.description.as_str())));
        ics_event.push(Location::new(escape_text(self.location.as_str())));
        ics_event.push(Property::new("TRANSP", "TRANSPARENT"));

        ics_event
    }
}

fn ics_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn new_york<'a>() -> TimeZone<'a> {
    let mut est_standard = Standard::new("19701101T020000", "-0400", "-0500");
    est_standard.push(TzName::new("EST"));
    est_standard.push(RRule::new("FREQ=YEARLY;BYMONTH=11;BYDAY=1SU"));

    let mut edt_daylight = Daylight::new("19700308T020000", "-0500", "-0400");
    edt_daylight.push(TzName::new("EDT"));
    edt_daylight.push(RRule::new("FREQ=YEARLY;BYMONTH=3;BYDAY=2SU"));

    let mut timezone = TimeZone::daylight("America/New_York", edt_daylight);
    timezone.add_standard(est_standard);
    timezone
}
