//! Submission domain types
//!
//! Transient state of the add workflow. Nothing here is persisted.

use crate::error::SubmitError;

/// Phase of the add workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Waiting for a submit request
    Idle,

    /// Checking the input and waiting on the lookup
    Validating,

    /// Appending the looked-up entry to the list
    Committing,

    /// Last submission failed; the input is kept for correction
    IdleWithError,
}

impl std::fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionPhase::Idle => write!(f, "Idle"),
            SubmissionPhase::Validating => write!(f, "Validating"),
            SubmissionPhase::Committing => write!(f, "Committing"),
            SubmissionPhase::IdleWithError => write!(f, "IdleWithError"),
        }
    }
}

/// Snapshot of the submission state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionState {
    /// Pending input text
    pub input: String,

    /// Set while a submission is running
    pub in_flight: bool,

    /// Kind of the last failure, if any
    pub error: Option<SubmitError>,

    /// Current workflow phase
    pub phase: SubmissionPhase,
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self {
            input: String::new(),
            in_flight: false,
            error: None,
            phase: SubmissionPhase::Idle,
        }
    }
}
