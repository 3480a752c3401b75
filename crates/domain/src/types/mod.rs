//! Domain types and models

pub mod auth;
pub mod shifts;
pub mod user;

pub use auth::{LoginCredentials, LoginResponse, RegistrationRequest};
pub use shifts::{month_key_of, CalendarEvent, RawShift, RawVolunteer};
pub use user::{Session, UserProfile};
