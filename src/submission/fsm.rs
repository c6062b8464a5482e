use crate::{Error, Result, api::PredictionResponse};
use std::fmt;
use tracing::{debug, info, warn};

// Submission states
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success(PredictionResponse),
    Failed(String),
}

// Submission events
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    Submit,
    Succeeded(PredictionResponse),
    Failed(String),
    Edit,
    Reset,
}

impl SubmissionState {
    fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Submitting",
            Self::Success(_) => "Success",
            Self::Failed(_) => "Failed",
        }
    }
}

impl SubmissionEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Submit => "Submit",
            Self::Succeeded(_) => "Succeeded",
            Self::Failed(_) => "Failed",
            Self::Edit => "Edit",
            Self::Reset => "Reset",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of one form submission: `Idle -> Submitting -> Success | Failed`,
/// back to `Idle` on edit or reset. `Submitting` doubles as the busy flag.
#[derive(Debug, Clone)]
pub struct SubmissionStateMachine {
    state: SubmissionState,
}

impl Default for SubmissionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionStateMachine {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn current_state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Success(_) | SubmissionState::Failed(_)
        )
    }

    pub fn transition(&mut self, event: SubmissionEvent) -> Result<()> {
        debug!(
            "Submission FSM processing event {} in state {}",
            event.name(),
            self.state
        );

        let new_state = match (&self.state, event) {
            (SubmissionState::Idle, SubmissionEvent::Submit) => SubmissionState::Submitting,
            (SubmissionState::Submitting, SubmissionEvent::Succeeded(response)) => {
                SubmissionState::Success(response)
            }
            (SubmissionState::Submitting, SubmissionEvent::Failed(message)) => {
                SubmissionState::Failed(message)
            }
            (
                SubmissionState::Idle | SubmissionState::Success(_) | SubmissionState::Failed(_),
                SubmissionEvent::Edit | SubmissionEvent::Reset,
            ) => SubmissionState::Idle,
            (state, event) => {
                warn!(
                    "Invalid submission transition from {} with event {}",
                    state,
                    event.name()
                );
                return Err(Error::InvalidTransition {
                    current: state.to_string(),
                    requested: event.name().to_string(),
                });
            }
        };

        if new_state.name() != self.state.name() {
            info!("Submission state transition: {} -> {}", self.state, new_state);
        }

        self.state = new_state;
        Ok(())
    }

    pub fn response(&self) -> Option<&PredictionResponse> {
        match &self.state {
            SubmissionState::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
