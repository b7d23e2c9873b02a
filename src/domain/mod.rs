//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, errors, state machine trait)
//! - `interview` - Future-self interview script, stage machine and turn post-processing

pub mod foundation;
pub mod interview;
