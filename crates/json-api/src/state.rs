//! State

use std::sync::Arc;

use jiff::tz::TimeZone;

use adisyon_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// Zone that decides month and day boundaries for the dashboard.
    pub(crate) reporting_time_zone: TimeZone,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext, reporting_time_zone: TimeZone) -> Self {
        Self {
            app,
            reporting_time_zone,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, reporting_time_zone: TimeZone) -> Arc<Self> {
        Arc::new(Self::new(app, reporting_time_zone))
    }
}
