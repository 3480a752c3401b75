//! Portal controller
//!
//! Orchestrates the session store, shift fetcher, and event pipeline:
//! gates fetching on session state, interprets authorization failures as a
//! pending-approval condition, and toggles between calendar and list view
//! over the same event set.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use vagtportal_domain::{CalendarEvent, PortalError, UserProfile};

use super::ports::{ShiftFetchOutcome, ShiftProvider};
use crate::events::grouping::{group_for_list, MonthGroups};
use crate::events::mapper::map_to_events;
use crate::session::store::SessionStore;

/// Presentation mode over the shared event set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Calendar,
    List,
}

/// Portal lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalState {
    /// Transient initial state, held only until the persisted session has
    /// been consulted.
    CheckingSession,
    LoggedOut,
    /// Authenticated, but shift data access has not been granted yet.
    PendingApproval,
    Ready(ViewMode),
}

/// State machine driving the volunteer portal.
///
/// The event list is owned here and handed out read-only; both views render
/// from the same set. Fetching happens exactly once per transition into a
/// logged-in state — never on re-render, never concurrently.
pub struct PortalController {
    session: Arc<SessionStore>,
    provider: Arc<dyn ShiftProvider>,
    state: PortalState,
    events: Vec<CalendarEvent>,
    last_fetch_error: Option<PortalError>,
    fetch_in_flight: bool,
}

impl PortalController {
    pub fn new(session: Arc<SessionStore>, provider: Arc<dyn ShiftProvider>) -> Self {
        Self {
            session,
            provider,
            state: PortalState::CheckingSession,
            events: Vec::new(),
            last_fetch_error: None,
            fetch_in_flight: false,
        }
    }

    /// Resolve the initial state from the persisted session. A stored
    /// session goes straight to the calendar and triggers the one fetch for
    /// this login; otherwise the portal starts logged out.
    pub async fn initialize(&mut self, now: DateTime<Utc>) {
        if self.session.is_logged_in() {
            self.state = PortalState::Ready(ViewMode::Calendar);
            self.fetch_shifts(now).await;
        } else {
            self.state = PortalState::LoggedOut;
        }
    }

    /// Handle a successful login: store the session, enter the calendar
    /// view, and trigger exactly one fetch.
    pub async fn login(&mut self, user: UserProfile, token: &str, now: DateTime<Utc>) {
        if matches!(self.state, PortalState::Ready(_) | PortalState::PendingApproval) {
            debug!("ignoring login while already in a logged-in state");
            return;
        }

        self.session.login(user, token);
        self.state = PortalState::Ready(ViewMode::Calendar);
        self.fetch_shifts(now).await;
    }

    /// Explicit logout from any logged-in state: clears the session and the
    /// event set and resets the view mode to calendar.
    pub fn logout(&mut self) {
        self.session.logout();
        self.events.clear();
        self.last_fetch_error = None;
        self.state = PortalState::LoggedOut;
    }

    /// Switch between calendar and list presentation. The underlying event
    /// set is not re-fetched.
    pub fn toggle_view(&mut self) {
        self.state = match self.state {
            PortalState::Ready(ViewMode::Calendar) => PortalState::Ready(ViewMode::List),
            PortalState::Ready(ViewMode::List) => PortalState::Ready(ViewMode::Calendar),
            other => other,
        };
    }

    /// Retry affordance after a failed fetch. Only meaningful in the ready
    /// state; the single-flight guard makes rapid repeat calls harmless.
    pub async fn refresh(&mut self, now: DateTime<Utc>) {
        if !matches!(self.state, PortalState::Ready(_)) {
            debug!(state = ?self.state, "refresh ignored outside ready state");
            return;
        }
        self.fetch_shifts(now).await;
    }

    #[must_use]
    pub fn state(&self) -> PortalState {
        self.state
    }

    /// The shared, read-only event set both views render from.
    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Month-grouped projection of the event set for the list view.
    #[must_use]
    pub fn list_view(&self, now: DateTime<Utc>) -> MonthGroups {
        group_for_list(&self.events, now)
    }

    /// The error of the most recent failed fetch, until the next successful
    /// one. Lets the shell offer a retry instead of silently showing an
    /// empty calendar.
    #[must_use]
    pub fn last_fetch_error(&self) -> Option<&PortalError> {
        self.last_fetch_error.as_ref()
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.fetch_in_flight
    }

    /// Run one complete fetch and fold its outcome into the state machine.
    ///
    /// Single-flight: rapid state transitions must not trigger overlapping
    /// walks of the collection, so a second call while one is outstanding
    /// returns immediately.
    async fn fetch_shifts(&mut self, since: DateTime<Utc>) {
        if self.fetch_in_flight {
            debug!("fetch already in flight; skipping");
            return;
        }

        let Some(token) = self.session.token() else {
            warn!("fetch requested without a session token");
            self.state = PortalState::LoggedOut;
            return;
        };

        self.fetch_in_flight = true;
        let outcome = self.provider.fetch_all_shifts(since, &token).await;
        self.fetch_in_flight = false;

        match outcome {
            ShiftFetchOutcome::Complete(shifts) => {
                self.events = map_to_events(&shifts);
                self.last_fetch_error = None;
                info!(event_count = self.events.len(), "shift fetch completed");
            }
            ShiftFetchOutcome::PendingApproval => {
                self.events.clear();
                self.last_fetch_error = None;
                self.state = PortalState::PendingApproval;
                info!("shift access pending approval");
            }
            ShiftFetchOutcome::Failed(err) => {
                // The portal stays usable with an empty event set; the
                // retained error drives the retry affordance.
                warn!(error = %err, "shift fetch failed");
                self.events.clear();
                self.last_fetch_error = Some(err);
            }
        }
    }
}
