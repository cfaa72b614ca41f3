//! Watchlist Core
//!
//! Core types and state logic for the repository watch-list.
//!
//! This crate contains:
//! - Domain types: the repository entry and the transient submission state
//! - Store adapters: durable key-value storage the list is mirrored to
//! - Lookup contract: how a name is validated against a remote service
//! - Services: the list manager and the submission controller

pub mod domain;
pub mod error;
pub mod lookup;
pub mod service;
pub mod store;

pub use domain::repository::Repository;
pub use domain::submission::{SubmissionPhase, SubmissionState};
pub use error::{ListError, StoreError, SubmitError};
pub use lookup::RepositoryLookup;
pub use service::{ListManager, SharedList, SubmissionController};
