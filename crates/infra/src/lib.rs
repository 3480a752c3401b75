//! # Vagtportal Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The CMS client (auth endpoints + paginated shift retrieval)
//! - File-backed session storage
//! - HTTP client wrapper and error conversions
//! - Configuration loading and tracing setup for the consuming shell
//!
//! ## Architecture
//! - Implements traits defined in `vagtportal-core`
//! - Depends on `vagtportal-domain` and `vagtportal-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod cms;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod storage;

// Re-export commonly used items
pub use cms::{AuthClient, ShiftsClient};
pub use errors::InfraError;
pub use http::HttpClient;
pub use observability::init_tracing;
pub use storage::FileSessionStorage;
