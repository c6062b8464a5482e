mod report;
mod tier;

pub use report::*;
pub use tier::*;
