pub mod api;
pub mod config;
pub mod error;
pub mod presentation;
pub mod schema;
pub mod submission;

pub use error::{ApiError, Error, Result, ValidationErrors};
