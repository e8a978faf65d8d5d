//! Response construction and error mapping

pub mod outcome;

pub use outcome::{error_response, validation_failure_response};
