//! Foundation module - Shared domain primitives.
//!
//! Value objects and error types shared by the interview domain.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
