//! Headless CMS integration: auth endpoints and the shifts collection

pub mod auth;
pub mod shifts;
pub mod types;

pub use auth::AuthClient;
pub use shifts::ShiftsClient;
