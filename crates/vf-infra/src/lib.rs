//! # vf-infra
//!
//! Infrastructure adapters for Visaflow: the HTTP application store, an
//! in-memory store for tests and local demos, and configuration loading.

pub mod config;
pub mod http;
pub mod memory;

pub use config::StoreConfig;
pub use http::HttpApplicationStore;
pub use memory::InMemoryApplicationStore;
