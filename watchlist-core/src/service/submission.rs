//! Submission controller
//!
//! Drives the add workflow: checks the pending input, asks the remote
//! lookup for the canonical name, and commits the result to the shared
//! list. Failures are recorded as state and never propagated further.
//!
//! Phases: `Idle -> Validating -> Committing -> Idle`, with any failure
//! ending in `IdleWithError`. The in-flight flag is owned by a guard, so it
//! is cleared on every exit path, including when the submit future is
//! dropped while the lookup is pending.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::domain::repository::Repository;
use crate::domain::submission::{SubmissionPhase, SubmissionState};
use crate::error::{ListError, SubmitError};
use crate::lookup::RepositoryLookup;
use crate::service::list::{ListManager, SharedList};

/// Controller for adding repositories to the watch-list
pub struct SubmissionController {
    list: SharedList,
    lookup: Arc<dyn RepositoryLookup>,
    state: Mutex<SubmissionState>,
}

impl SubmissionController {
    /// Creates a controller committing to `list` and validating with `lookup`
    pub fn new(list: SharedList, lookup: Arc<dyn RepositoryLookup>) -> Self {
        Self {
            list,
            lookup,
            state: Mutex::new(SubmissionState::default()),
        }
    }

    /// The list this controller commits to
    pub fn list(&self) -> &SharedList {
        &self.list
    }

    /// Replace the pending input
    ///
    /// Editing the input dismisses any previous error.
    pub fn set_input(&self, text: impl Into<String>) {
        let mut state = self.lock_state();
        state.input = text.into();
        state.error = None;
        if !state.in_flight {
            state.phase = SubmissionPhase::Idle;
        }
    }

    pub fn input(&self) -> String {
        self.lock_state().input.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.lock_state().in_flight
    }

    /// Kind of the last failure, if the error indicator is set
    pub fn error(&self) -> Option<SubmitError> {
        self.lock_state().error
    }

    pub fn has_error(&self) -> bool {
        self.lock_state().error.is_some()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.lock_state().phase
    }

    /// Snapshot of the whole submission state
    pub fn state(&self) -> SubmissionState {
        self.lock_state().clone()
    }

    /// Submit the pending input
    ///
    /// On success the new entry is appended (and persisted), the input is
    /// cleared and the entry returned. On failure the error kind is
    /// recorded and the input is left untouched so it can be corrected.
    ///
    /// # Errors
    /// - `EmptyInput` if the input is blank
    /// - `DuplicateEntry` if the name is already listed, checked before the
    ///   lookup and again when committing the canonical name
    /// - `LookupFailed` if the lookup errors or returns an empty name
    /// - `InFlight` if another submission is running; nothing is changed
    pub async fn submit(&self) -> Result<Repository, SubmitError> {
        let Some(guard) = InFlightGuard::acquire(&self.state) else {
            debug!("Ignoring submit while another submission is in flight");
            return Err(SubmitError::InFlight);
        };

        let result = self.run(&guard.input).await;

        {
            let mut state = self.lock_state();
            match &result {
                Ok(_) => {
                    state.input.clear();
                    state.error = None;
                }
                Err(kind) => state.error = Some(*kind),
            }
        }

        drop(guard);
        result
    }

    async fn run(&self, input: &str) -> Result<Repository, SubmitError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        let listed = self.lock_list().contains(name);
        if listed {
            return Err(SubmitError::DuplicateEntry);
        }

        let entry = match self.lookup.lookup(name).await {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Lookup for {} failed: {:#}", name, e);
                return Err(SubmitError::LookupFailed);
            }
        };

        self.lock_state().phase = SubmissionPhase::Committing;

        let committed = self.lock_list().add(entry.clone());
        match committed {
            Ok(()) => {
                info!("Submitted {} as {}", name, entry.name);
                Ok(entry)
            }
            Err(ListError::Duplicate(_)) => Err(SubmitError::DuplicateEntry),
            Err(ListError::EmptyName) => {
                debug!("Lookup for {} returned an empty name", name);
                Err(SubmitError::LookupFailed)
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SubmissionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_list(&self) -> MutexGuard<'_, ListManager> {
        self.list.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the in-flight flag for the duration of one submission
struct InFlightGuard<'a> {
    state: &'a Mutex<SubmissionState>,
    input: String,
}

impl<'a> InFlightGuard<'a> {
    /// Set the flag and enter `Validating`, unless it is already set
    fn acquire(state: &'a Mutex<SubmissionState>) -> Option<Self> {
        let mut locked = state.lock().unwrap_or_else(PoisonError::into_inner);
        if locked.in_flight {
            return None;
        }

        locked.in_flight = true;
        locked.error = None;
        locked.phase = SubmissionPhase::Validating;
        let input = locked.input.clone();

        Some(Self { state, input })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut locked = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        locked.in_flight = false;
        locked.phase = if locked.error.is_some() {
            SubmissionPhase::IdleWithError
        } else {
            SubmissionPhase::Idle
        };
    }
}
