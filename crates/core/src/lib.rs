//! # Vagtportal Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The event mapper and shift grouper
//! - The session store and portal controller state machine
//! - Port/adapter interfaces (traits) for storage and shift retrieval
//! - Form validation for the auth flows
//!
//! ## Architecture Principles
//! - Only depends on `vagtportal-domain`
//! - No HTTP, filesystem, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod events;
pub mod portal;
pub mod session;
pub mod testing;
pub mod validation;

// Re-export specific items to avoid ambiguity
pub use events::grouping::{group_by_shift, group_for_list, MonthGroups, ShiftGroups};
pub use events::mapper::map_to_events;
pub use portal::controller::{PortalController, PortalState, ViewMode};
pub use portal::ports::{ShiftFetchOutcome, ShiftProvider};
pub use session::ports::SessionStorage;
pub use session::store::SessionStore;
pub use validation::{validate_login, validate_registration, ValidationError};
