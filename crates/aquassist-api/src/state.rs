//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use aquassist_skill::Skill;

/// Shared application state.
///
/// The skill itself is immutable once built, so handlers share it through
/// an `Arc` without locking.
#[derive(Clone)]
pub struct AppState {
    pub skill: Arc<Skill>,
    /// When set, envelopes from any other application are rejected.
    pub application_id: Option<String>,
    pub dataset_records: usize,
    pub site_count: usize,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(skill: Skill, dataset_records: usize, site_count: usize) -> Self {
        Self {
            skill: Arc::new(skill),
            application_id: None,
            dataset_records,
            site_count,
            start_time: Instant::now(),
        }
    }

    /// Restrict the endpoint to a single application id.
    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    /// Whether an envelope carrying `incoming` may be served.
    ///
    /// Unrestricted state accepts everything; a restricted one requires an
    /// exact match.
    pub fn accepts_application(&self, incoming: Option<&str>) -> bool {
        match &self.application_id {
            None => true,
            Some(expected) => incoming == Some(expected.as_str()),
        }
    }
}
