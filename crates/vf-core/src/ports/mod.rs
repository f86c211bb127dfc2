//! Port interfaces for the application layer.
//!
//! Ports define the contract between the wizard logic in `vf-app` and the
//! infrastructure implementations in `vf-infra`, keeping the domain free of
//! transport concerns.

pub mod application_store;

pub use application_store::{ApplicationStorePort, StoreError};
