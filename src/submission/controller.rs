use super::fsm::{SubmissionEvent, SubmissionState, SubmissionStateMachine};
use super::notification::Notification;
use crate::{
    Error, Result,
    api::{PredictionApi, PredictionResponse},
    error::{ApiError, ValidationErrors},
    schema::{self, FormInput},
};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

/// How a single call to [`Submission::submit`] ended.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// The form was rejected before any network call.
    Invalid(ValidationErrors),
    Completed {
        response: PredictionResponse,
        notification: Notification,
    },
    Rejected {
        error: ApiError,
        notification: Notification,
    },
    /// Another submission is still in flight.
    Busy,
}

impl SubmissionOutcome {
    pub fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Completed { notification, .. } | Self::Rejected { notification, .. } => {
                Some(notification)
            }
            Self::Invalid(_) | Self::Busy => None,
        }
    }

    /// Collapses the outcome into the crate `Result`, dropping the notification.
    pub fn into_result(self) -> Result<PredictionResponse> {
        match self {
            Self::Completed { response, .. } => Ok(response),
            Self::Invalid(errors) => Err(Error::Validation(errors)),
            Self::Rejected { error, .. } => Err(Error::Api(error)),
            Self::Busy => Err(Error::InvalidTransition {
                current: SubmissionState::Submitting.to_string(),
                requested: "Submit".to_string(),
            }),
        }
    }
}

/// Drives one form through validation, the prediction call and the
/// submission state machine. Every failure ends as a [`SubmissionOutcome`];
/// nothing propagates past `submit`.
pub struct Submission<A> {
    api: A,
    fsm: SubmissionStateMachine,
}

impl<A: PredictionApi> Submission<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            fsm: SubmissionStateMachine::new(),
        }
    }

    pub fn state(&self) -> &SubmissionState {
        self.fsm.current_state()
    }

    pub fn is_busy(&self) -> bool {
        self.fsm.is_busy()
    }

    /// The user changed a field; a settled result is discarded.
    pub fn edit(&mut self) -> Result<()> {
        self.fsm.transition(SubmissionEvent::Edit)
    }

    pub fn reset(&mut self) -> Result<()> {
        self.fsm.transition(SubmissionEvent::Reset)
    }

    #[instrument(skip_all, fields(submission_id = %Uuid::new_v4()))]
    pub async fn submit(&mut self, input: &FormInput) -> SubmissionOutcome {
        if self.fsm.is_terminal() {
            self.settle(SubmissionEvent::Edit);
        }

        let request = match schema::validate(input) {
            Ok(request) => schema::apply_defaults(request),
            Err(errors) => {
                info!("Submission blocked by {} invalid field(s)", errors.len());
                return SubmissionOutcome::Invalid(errors);
            }
        };

        if self.fsm.transition(SubmissionEvent::Submit).is_err() {
            warn!("Submission ignored while another is in flight");
            return SubmissionOutcome::Busy;
        }

        let Self { api, fsm } = self;
        let mut in_flight = InFlight { fsm };

        match api.predict(&request).await {
            Ok(response) => {
                info!("Prediction received");
                in_flight.settle(SubmissionEvent::Succeeded(response.clone()));
                SubmissionOutcome::Completed {
                    response,
                    notification: Notification::success(),
                }
            }
            Err(api_error) => {
                warn!(
                    transport = api_error.is_transport(),
                    status = ?api_error.status(),
                    "Prediction failed: {}",
                    api_error
                );
                in_flight.settle(SubmissionEvent::Failed(api_error.message().to_string()));
                SubmissionOutcome::Rejected {
                    notification: Notification::from_error(&api_error),
                    error: api_error,
                }
            }
        }
    }

    fn settle(&mut self, event: SubmissionEvent) {
        settle(&mut self.fsm, event);
    }
}

pub const CANCELLED_MESSAGE: &str = "Submission cancelled before a response arrived";

/// Holds the machine while a request is in flight. If the `submit` future is
/// dropped before the call settles, the machine moves to `Failed` so the busy
/// flag is always cleared.
struct InFlight<'a> {
    fsm: &'a mut SubmissionStateMachine,
}

impl InFlight<'_> {
    fn settle(&mut self, event: SubmissionEvent) {
        settle(self.fsm, event);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.fsm.is_busy() {
            warn!("Submission dropped while in flight");
            settle(
                self.fsm,
                SubmissionEvent::Failed(CANCELLED_MESSAGE.to_string()),
            );
        }
    }
}

fn settle(fsm: &mut SubmissionStateMachine, event: SubmissionEvent) {
    if let Err(e) = fsm.transition(event) {
        error!("Submission state machine out of step: {}", e);
    }
}
