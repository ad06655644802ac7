//! Advisory request lifecycle
//!
//! One advisory request is live at a time; its lifecycle is an explicit
//! state machine rather than ad-hoc flags. An outcome is only applied when
//! the state is `InFlight`, so a superseded or stray completion never
//! overwrites shared state.

use crate::services::AdvisoryReport;

/// Lifecycle of the current advisory request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// No request has been made yet, or the last one was cleared
    #[default]
    Idle,
    /// A request is currently running
    InFlight,
    /// The last request completed with a report
    Succeeded(AdvisoryReport),
    /// The last request failed with a human-readable message
    Failed(String),
}

impl RequestState {
    /// Whether a request is currently running
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Start a new request
    ///
    /// Allowed from every state except `InFlight`; returns whether the
    /// transition was taken.
    pub fn begin(&mut self) -> bool {
        if self.is_in_flight() {
            return false;
        }
        *self = Self::InFlight;
        true
    }

    /// Complete the in-flight request with a report
    ///
    /// Returns whether the outcome was applied.
    pub fn succeed(&mut self, report: AdvisoryReport) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        *self = Self::Succeeded(report);
        true
    }

    /// Complete the in-flight request with an error message
    ///
    /// Returns whether the outcome was applied.
    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        *self = Self::Failed(message.into());
        true
    }

    /// Release the in-flight slot without an outcome
    ///
    /// Used when the request future is dropped before settling (e.g. the
    /// caller disconnected); returns whether the transition was taken.
    pub fn abandon(&mut self) -> bool {
        if !self.is_in_flight() {
            return false;
        }
        *self = Self::Idle;
        true
    }

    /// The last successful report, if any
    #[must_use]
    pub const fn last_report(&self) -> Option<&AdvisoryReport> {
        match self {
            Self::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    /// The last failure message, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Postcode, Rating, Recommendation};

    fn sample_report() -> AdvisoryReport {
        AdvisoryReport {
            postcode: Postcode::new("HP18 9HE").expect("valid postcode"),
            latitude: 51.81,
            longitude: -1.0,
            warm_days: 14,
            frost_days: 0,
            recommendation: Recommendation::Go,
            rating: Rating::Excellent,
            generated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn default_is_idle() {
        let state = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_in_flight());
    }

    #[test]
    fn begin_from_idle() {
        let mut state = RequestState::Idle;
        assert!(state.begin());
        assert!(state.is_in_flight());
    }

    #[test]
    fn begin_while_in_flight_is_rejected() {
        let mut state = RequestState::InFlight;
        assert!(!state.begin());
        assert!(state.is_in_flight());
    }

    #[test]
    fn begin_supersedes_previous_outcome() {
        let mut state = RequestState::Failed("boom".to_string());
        assert!(state.begin());
        assert!(state.is_in_flight());

        let mut state = RequestState::Succeeded(sample_report());
        assert!(state.begin());
        assert!(state.is_in_flight());
    }

    #[test]
    fn succeed_applies_only_in_flight() {
        let mut state = RequestState::InFlight;
        assert!(state.succeed(sample_report()));
        assert!(state.last_report().is_some());

        let mut state = RequestState::Idle;
        assert!(!state.succeed(sample_report()));
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn fail_applies_only_in_flight() {
        let mut state = RequestState::InFlight;
        assert!(state.fail("geocoder down"));
        assert_eq!(state.last_error(), Some("geocoder down"));

        let mut state = RequestState::Succeeded(sample_report());
        assert!(!state.fail("late failure"));
        assert!(state.last_report().is_some());
    }

    #[test]
    fn abandon_releases_only_in_flight() {
        let mut state = RequestState::InFlight;
        assert!(state.abandon());
        assert_eq!(state, RequestState::Idle);

        let mut state = RequestState::Succeeded(sample_report());
        assert!(!state.abandon());
        assert!(state.last_report().is_some());

        let mut state = RequestState::Failed("boom".to_string());
        assert!(!state.abandon());
        assert_eq!(state.last_error(), Some("boom"));
    }

    #[test]
    fn outcome_accessors_are_exclusive() {
        let state = RequestState::Succeeded(sample_report());
        assert!(state.last_report().is_some());
        assert!(state.last_error().is_none());

        let state = RequestState::Failed("boom".to_string());
        assert!(state.last_report().is_none());
        assert_eq!(state.last_error(), Some("boom"));
    }
}
