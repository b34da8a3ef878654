//! State

use std::sync::Arc;

use jiff::Timestamp;

use wave_app::context::AppContext;

/// Shared handler state: every application service behind its trait.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,

    /// When the process started serving.
    pub(crate) started_at: Timestamp,
}

impl State {
    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self {
            app,
            started_at: Timestamp::now(),
        })
    }

    /// Whole seconds since the process started serving.
    pub(crate) fn uptime_seconds(&self) -> i64 {
        Timestamp::now()
            .duration_since(self.started_at)
            .as_secs()
            .max(0)
    }
}
