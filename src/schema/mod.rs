mod defaults;
mod types;
mod validator;

pub use defaults::{DEFAULT_THRESHOLD, apply_defaults};
pub use types::*;
pub use validator::validate;
