//! Error handling for the lovecraft game crate.

pub mod domain;
pub mod error_code;


pub use domain::{DomainError, ErrorCategory};
pub use error_code::ErrorCode;
