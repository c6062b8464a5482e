use crate::error::ApiError;
use serde::Serialize;

pub const UNREACHABLE_SERVICE: &str =
    "Unable to connect to the prediction service. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Dismissible message shown once a submission settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            title: "Prediction Complete".to_string(),
            description: "Stroke risk assessment has been calculated successfully.".to_string(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn from_error(error: &ApiError) -> Self {
        match error {
            ApiError::Service { message, .. } => Self {
                title: "Prediction Failed".to_string(),
                description: message.clone(),
                variant: NotificationVariant::Destructive,
            },
            ApiError::Transport { .. } => Self {
                title: "Network Error".to_string(),
                description: UNREACHABLE_SERVICE.to_string(),
                variant: NotificationVariant::Destructive,
            },
        }
    }
}
