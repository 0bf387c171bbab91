//! Point-in-time query parsing helpers.

use jiff::{Timestamp, tz::TimeZone};
use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use adisyon::reporting::ReportingWindow;

use crate::extensions::*;

pub(crate) trait PointInTimeExt {
    fn into_point_in_time(self) -> Result<Timestamp, StatusError>;

    /// The reporting month in `time_zone` containing the requested instant, or now.
    fn into_reporting_window(self, time_zone: &TimeZone) -> Result<ReportingWindow, StatusError>;
}

impl PointInTimeExt for QueryParam<String, false> {
    fn into_point_in_time(self) -> Result<Timestamp, StatusError> {
        self.into_inner()
            .map(|value| value.parse::<Timestamp>())
            .transpose()
            .or_400("could not parse \"at\" query parameter")
            .map(|point_in_time| point_in_time.unwrap_or_else(Timestamp::now))
    }

    fn into_reporting_window(self, time_zone: &TimeZone) -> Result<ReportingWindow, StatusError> {
        let point_in_time = self.into_point_in_time()?;

        ReportingWindow::month_containing(point_in_time, time_zone.clone())
            .or_400("\"at\" query parameter is outside the supported range")
    }
}
