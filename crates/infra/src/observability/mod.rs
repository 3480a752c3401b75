//! Tracing setup for the consuming shell

pub mod logging;

pub use logging::init_tracing;
