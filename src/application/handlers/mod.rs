//! Application handlers.
//!
//! Command handlers that orchestrate domain operations through ports.

pub mod interview;

pub use interview::{
    HandleTurnCommand, HandleTurnHandler, HandleTurnResult, TurnError, TurnErrorKind,
    TurnSettings,
};
