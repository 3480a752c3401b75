//! Port interface for shift retrieval
//!
//! The boundary between the portal controller and the remote content API
//! adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use vagtportal_domain::{PortalError, RawShift};

/// Terminal result of one complete pagination walk.
///
/// `PendingApproval` is a valid terminal state, not an error: the user is
/// authenticated but an administrator has not yet granted access to shift
/// data. `Failed` discards any pages accumulated before the failure so the
/// caller never renders a silently incomplete calendar. The enum forces the
/// caller to handle all three outcomes exhaustively.
#[derive(Debug)]
pub enum ShiftFetchOutcome {
    /// Every page retrieved, concatenated in request order.
    Complete(Vec<RawShift>),
    /// The CMS answered 403: membership approval is pending.
    PendingApproval,
    /// The walk aborted on a request failure; accumulated pages discarded.
    Failed(PortalError),
}

/// Trait for paginated shift retrieval.
#[async_trait]
pub trait ShiftProvider: Send + Sync {
    /// Retrieve every shift dated at or after `since`, walking the remote
    /// collection page by page. Must only be called with a valid token.
    async fn fetch_all_shifts(&self, since: DateTime<Utc>, token: &str) -> ShiftFetchOutcome;
}
