use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Failure of a single prediction call.
///
/// Both variants surface a human-readable `message()`. A `Service` error means
/// the service answered with a non-2xx status; a `Transport` error means no
/// usable response was received at all.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Service {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            Self::Service { message, .. } | Self::Transport { message, .. } => message,
        }
    }

    /// Parsed error body of a `Service` failure, if the body was JSON.
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::Service { details, .. } => details.as_ref(),
            Self::Transport { .. } => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            Self::Transport { .. } => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

/// Field-path keyed validation messages. Never empty when returned from
/// `schema::validate`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `path`. The first message for a path wins.
    pub fn add(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(path.into())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.fields.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.fields.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn paths(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
}

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (path, message) in &self.fields {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{path}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
