//! Reporting window

use jiff::{Timestamp, ToSpan, tz::TimeZone};

/// Time zone name used when a zone has no IANA identifier.
const FALLBACK_ZONE_NAME: &str = "UTC";

/// A calendar month in a given time zone.
///
/// The window starts at the first instant of the month and ends just before the first
/// instant of the following month, so the last instant of the month is included.
#[derive(Debug, Clone)]
pub struct ReportingWindow {
    start: Timestamp,
    end: Timestamp,
    time_zone: TimeZone,
}

impl ReportingWindow {
    /// The calendar month, in `time_zone`, that contains `at`.
    ///
    /// # Errors
    ///
    /// Returns an error when the month boundaries fall outside the supported datetime range.
    pub fn month_containing(at: Timestamp, time_zone: TimeZone) -> Result<Self, jiff::Error> {
        let local = at.to_zoned(time_zone.clone());

        let start = local.first_of_month()?.start_of_day()?;
        let end = start.checked_add(1.month())?.start_of_day()?;

        Ok(Self {
            start: start.timestamp(),
            end: end.timestamp(),
            time_zone,
        })
    }

    /// First instant of the month (inclusive).
    pub fn start(&self) -> Timestamp {
        self.start
    }

    /// First instant of the next month (exclusive).
    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Zone the month boundaries and day buckets are computed in.
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// IANA name of the reporting zone, for handing to the database.
    pub fn time_zone_name(&self) -> &str {
        self.time_zone.iana_name().unwrap_or(FALLBACK_ZONE_NAME)
    }

    /// Whether `at` falls inside the window.
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start <= at && at < self.end
    }
}
