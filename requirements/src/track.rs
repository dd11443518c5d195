//! Tracking flow: validate an email, fetch that member's requirements, and
//! hold the result set for client-side filtering.
//!
//! A failed request is never fatal: the state falls back to the empty-state
//! indicator and the caller gets a [`SearchError::Endpoint`] to alert on.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use crate::endpoint::RequirementsEndpoint;
use crate::error::{EndpointError, SearchError};
use crate::results::{ResultSet, StatusFilter};
use crate::validate::validate_search_email;
use crate::view::{RequirementCard, render_cards};
use crate::wire::SearchResponse;

/// Indicator shown by the track tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    /// Results list visible.
    Results,
    /// "No requirements found" visible.
    Empty,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackState {
    pub phase: SearchPhase,
    pub results: ResultSet,
    pub filter: StatusFilter,
}

impl TrackState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// Show the loading indicator, hiding results and empty state.
    ///
    /// Returns `false` if a search is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.phase = SearchPhase::Loading;
        true
    }

    /// Apply a search reply. Returns the number of records now shown.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Endpoint`] when the request itself failed; the
    /// state is already switched to the empty-state indicator.
    pub fn apply(&mut self, reply: Result<SearchResponse, EndpointError>) -> Result<usize, SearchError> {
        match reply {
            Ok(SearchResponse { success: true, data: Some(records), .. }) if !records.is_empty() => {
                let count = records.len();
                self.results.replace(records);
                self.filter = StatusFilter::All;
                self.phase = SearchPhase::Results;
                Ok(count)
            }
            Ok(response) => {
                tracing::info!(success = response.success, message = ?response.message, "no requirements found");
                self.phase = SearchPhase::Empty;
                Ok(0)
            }
            Err(err) => {
                tracing::warn!(error = %err, "requirement search failed");
                self.phase = SearchPhase::Empty;
                Err(SearchError::Endpoint(err))
            }
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Cards for the current result set under the active filter.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<RequirementCard> {
        render_cards(&self.results, &self.filter)
    }
}

/// Validate `raw_email` and run one search against `endpoint`.
///
/// Returns the number of records shown.
///
/// # Errors
///
/// - [`SearchError::EmptyEmail`] / [`SearchError::InvalidEmail`] before any
///   request; the state is left untouched
/// - [`SearchError::InProgress`] if a search is already loading
/// - [`SearchError::Endpoint`] when the request fails
pub async fn run_search<E>(state: &mut TrackState, endpoint: &E, raw_email: &str) -> Result<usize, SearchError>
where
    E: RequirementsEndpoint + ?Sized,
{
    let email = validate_search_email(raw_email)?;
    if !state.begin() {
        return Err(SearchError::InProgress);
    }
    tracing::info!(%email, "searching requirements");
    let reply = endpoint.search(&email).await;
    state.apply(reply)
}
