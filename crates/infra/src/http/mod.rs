//! HTTP plumbing shared by the CMS clients

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
