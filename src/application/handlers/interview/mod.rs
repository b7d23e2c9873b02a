//! Interview Command Handlers
//!
//! ## Commands
//! - `HandleTurn` - Run one model exchange and advance the conversation

mod handle_turn;

pub use handle_turn::{
    HandleTurnCommand, HandleTurnHandler, HandleTurnResult, TurnError, TurnErrorKind,
    TurnSettings,
};
