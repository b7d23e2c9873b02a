//! Conversation progress through the interview script.
//!
//! `ConversationState` is an immutable value. The caller holds it between
//! turns and the engine returns a new one from [`ConversationState::advance`]
//! after each successful exchange; nothing is mutated in place.

use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

use super::questions::PredefinedQuestions;

/// Position in the scripted interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Nothing has been said yet; the next turn opens the interview.
    Initial,
    /// The next turn asks the predefined question at `question_index`.
    Questioning { question_index: usize },
    /// Script exhausted; free-form dialogue.
    Open,
}

impl Stage {
    /// The stage without its payload.
    pub fn kind(&self) -> StageKind {
        match self {
            Stage::Initial => StageKind::Initial,
            Stage::Questioning { .. } => StageKind::Questioning,
            Stage::Open => StageKind::Open,
        }
    }
}

/// Payload-free stage tag, used for transition rules and the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Initial,
    Questioning,
    Open,
}

impl StageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Initial => "initial",
            StageKind::Questioning => "questioning",
            StageKind::Open => "open",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for StageKind {
    fn can_transition_to(&self, target: &Self) -> bool {
        use StageKind::*;
        matches!(
            (self, target),
            (Initial, Questioning) | (Questioning, Questioning) | (Questioning, Open)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use StageKind::*;
        match self {
            Initial => vec![Questioning],
            Questioning => vec![Questioning, Open],
            Open => vec![],
        }
    }
}

/// Stage plus the number of completed model turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationState {
    stage: Stage,
    exchange_count: u32,
}

impl ConversationState {
    /// State of a conversation that has not started.
    pub fn initial() -> Self {
        Self {
            stage: Stage::Initial,
            exchange_count: 0,
        }
    }

    /// Rebuilds a state from caller-held parts, rejecting an index that does
    /// not address a scripted question.
    pub fn from_parts(stage: Stage, exchange_count: u32) -> Result<Self, ValidationError> {
        if let Stage::Questioning { question_index } = stage {
            if !PredefinedQuestions::contains_index(question_index) {
                return Err(ValidationError::out_of_range(
                    "questionIndex",
                    0,
                    PredefinedQuestions::last_index() as i64,
                    question_index as i64,
                ));
            }
        }
        Ok(Self {
            stage,
            exchange_count,
        })
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn exchange_count(&self) -> u32 {
        self.exchange_count
    }

    /// Question index while questioning, `None` otherwise.
    pub fn question_index(&self) -> Option<usize> {
        match self.stage {
            Stage::Questioning { question_index } => Some(question_index),
            Stage::Initial | Stage::Open => None,
        }
    }

    /// The predefined question the next turn will ask, if any.
    ///
    /// `Initial` asks the opening question; `Open` has none.
    pub fn pending_question(&self) -> Option<&'static str> {
        match self.stage {
            Stage::Initial => Some(PredefinedQuestions::opening()),
            Stage::Questioning { question_index } => PredefinedQuestions::get(question_index),
            Stage::Open => None,
        }
    }

    /// Returns the state after one completed model exchange.
    ///
    /// The opening turn already asked question 0, so `Initial` moves to the
    /// first follow-up. The exchange count grows by one in every stage.
    pub fn advance(&self) -> Self {
        let stage = match self.stage {
            Stage::Initial => Stage::Questioning {
                question_index: PredefinedQuestions::FIRST_FOLLOW_UP_INDEX,
            },
            Stage::Questioning { question_index }
                if question_index < PredefinedQuestions::last_index() =>
            {
                Stage::Questioning {
                    question_index: question_index + 1,
                }
            }
            Stage::Questioning { .. } => Stage::Open,
            Stage::Open => Stage::Open,
        };

        debug_assert!(
            (stage == Stage::Open && self.stage == Stage::Open)
                || self.stage.kind().can_transition_to(&stage.kind())
        );

        Self {
            stage,
            exchange_count: self.exchange_count.saturating_add(1),
        }
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn questioning(index: usize, count: u32) -> ConversationState {
        ConversationState::from_parts(Stage::Questioning { question_index: index }, count).unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn initial_has_no_index_and_zero_exchanges() {
            let state = ConversationState::initial();
            assert_eq!(state.stage(), Stage::Initial);
            assert_eq!(state.question_index(), None);
            assert_eq!(state.exchange_count(), 0);
        }

        #[test]
        fn from_parts_rejects_index_past_the_script() {
            let result = ConversationState::from_parts(
                Stage::Questioning {
                    question_index: PredefinedQuestions::len(),
                },
                3,
            );
            let err = result.unwrap_err();
            assert_eq!(err.field(), "questionIndex");
        }

        #[test]
        fn from_parts_accepts_last_index() {
            let state = questioning(PredefinedQuestions::last_index(), 6);
            assert_eq!(state.question_index(), Some(6));
        }
    }

    mod advance {
        use super::*;

        #[test]
        fn initial_moves_to_first_follow_up() {
            let next = ConversationState::initial().advance();
            assert_eq!(next.stage(), Stage::Questioning { question_index: 1 });
            assert_eq!(next.exchange_count(), 1);
        }

        #[test]
        fn questioning_moves_to_next_index() {
            let next = questioning(3, 3).advance();
            assert_eq!(next.stage(), Stage::Questioning { question_index: 4 });
            assert_eq!(next.exchange_count(), 4);
        }

        #[test]
        fn last_question_moves_to_open() {
            let next = questioning(PredefinedQuestions::last_index(), 6).advance();
            assert_eq!(next.stage(), Stage::Open);
            assert_eq!(next.question_index(), None);
        }

        #[test]
        fn open_is_absorbing() {
            let mut state = ConversationState::from_parts(Stage::Open, 7).unwrap();
            for expected in 8..20 {
                state = state.advance();
                assert_eq!(state.stage(), Stage::Open);
                assert_eq!(state.exchange_count(), expected);
            }
        }

        #[test]
        fn advance_does_not_mutate_the_original() {
            let state = ConversationState::initial();
            let _ = state.advance();
            assert_eq!(state, ConversationState::initial());
        }

        #[test]
        fn full_script_reaches_open_after_all_questions() {
            let mut state = ConversationState::initial();
            let mut asked = Vec::new();
            while let Some(q) = state.pending_question() {
                asked.push(q);
                state = state.advance();
            }
            assert_eq!(asked, PredefinedQuestions::all());
            assert_eq!(state.stage(), Stage::Open);
            assert_eq!(state.exchange_count() as usize, PredefinedQuestions::len());
        }
    }

    mod pending_question {
        use super::*;

        #[test]
        fn initial_asks_opening_question() {
            assert_eq!(
                ConversationState::initial().pending_question(),
                Some(PredefinedQuestions::opening())
            );
        }

        #[test]
        fn open_asks_nothing() {
            let state = ConversationState::from_parts(Stage::Open, 9).unwrap();
            assert_eq!(state.pending_question(), None);
        }
    }

    mod stage_kind {
        use super::*;

        #[test]
        fn transitions_are_forward_only() {
            assert!(StageKind::Initial.can_transition_to(&StageKind::Questioning));
            assert!(StageKind::Questioning.can_transition_to(&StageKind::Open));
            assert!(!StageKind::Questioning.can_transition_to(&StageKind::Initial));
            assert!(!StageKind::Open.can_transition_to(&StageKind::Questioning));
            assert!(StageKind::Initial.transition_to(StageKind::Open).is_err());
        }

        #[test]
        fn open_is_terminal() {
            assert!(StageKind::Open.is_terminal());
            assert!(!StageKind::Initial.is_terminal());
        }

        #[test]
        fn displays_wire_names() {
            assert_eq!(StageKind::Questioning.to_string(), "questioning");
        }
    }

    fn stage_rank(stage: Stage) -> (u8, usize) {
        match stage {
            Stage::Initial => (0, 0),
            Stage::Questioning { question_index } => (1, question_index),
            Stage::Open => (2, 0),
        }
    }

    proptest! {
        #[test]
        fn exchange_count_equals_number_of_advances(n in 0usize..64) {
            let mut state = ConversationState::initial();
            for _ in 0..n {
                state = state.advance();
            }
            prop_assert_eq!(state.exchange_count() as usize, n);
        }

        #[test]
        fn stage_never_moves_backward(n in 1usize..32) {
            let mut state = ConversationState::initial();
            for _ in 0..n {
                let next = state.advance();
                prop_assert!(stage_rank(next.stage()) >= stage_rank(state.stage()));
                if let Some(index) = next.question_index() {
                    prop_assert!(PredefinedQuestions::contains_index(index));
                }
                state = next;
            }
        }
    }
}
