//! Service Module
//!
//! State-synchronization logic of the watch-list.
//! The list manager owns the list and its mirror; the submission
//! controller drives the add workflow on top of it.

pub mod list;
pub mod submission;

pub use list::{ListManager, REPOSITORIES_KEY, SharedList};
pub use submission::SubmissionController;
