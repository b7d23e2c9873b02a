//! Mid-conversation checkpoint: when to offer an analysis, and what the
//! analysis is computed from.

use serde::Deserialize;

use crate::domain::foundation::Timestamp;

use super::message::Message;
use super::profile::UserProfile;
use super::state::ConversationState;

/// Default exchange count at which the checkpoint fires.
pub const DEFAULT_CHECKPOINT_THRESHOLD: u32 = 6;

/// Whether the checkpoint re-fires after the threshold is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointPolicy {
    /// Fires on the turn that reaches the threshold and never again.
    #[default]
    Once,
    /// Fires on that turn and on every later one.
    EveryTurnAfterThreshold,
}

/// Decides from the advanced state whether a checkpoint is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointTrigger {
    threshold: u32,
    policy: CheckpointPolicy,
}

impl Default for CheckpointTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_CHECKPOINT_THRESHOLD, CheckpointPolicy::default())
    }
}

impl CheckpointTrigger {
    pub fn new(threshold: u32, policy: CheckpointPolicy) -> Self {
        Self { threshold, policy }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// True when `state`, the state after the turn, calls for a checkpoint.
    pub fn fires(&self, state: &ConversationState) -> bool {
        let count = state.exchange_count();
        match self.policy {
            CheckpointPolicy::Once => count == self.threshold,
            CheckpointPolicy::EveryTurnAfterThreshold => count >= self.threshold,
        }
    }
}

/// Outcome of checkpoint evaluation for one turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckpointSignal {
    pub triggered: bool,
    pub analysis: Option<String>,
}

impl CheckpointSignal {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_analysis(analysis: impl Into<String>) -> Self {
        Self {
            triggered: true,
            analysis: Some(analysis.into()),
        }
    }
}

/// Everything an analysis is computed from at a checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationLog {
    pub timestamp: Timestamp,
    pub profile: UserProfile,
    /// State after the turn that fired the checkpoint.
    pub state: ConversationState,
    /// Full transcript, ending with the reply of the firing turn.
    pub messages: Vec<Message>,
    /// Question the next turn will ask, if any.
    pub next_question: Option<&'static str>,
}

impl ConversationLog {
    /// Placeholder summary used when no richer summarizer is available.
    pub fn template_summary(&self) -> String {
        format!(
            "Analysis for {}:\n\
             - Birth year: {}\n\
             - Total messages: {}\n\
             - Main concerns: [List main concerns]\n\
             - Key goals: [List key goals]\n\
             - Personality traits: [List observed traits]",
            self.profile.name,
            self.birth_year(),
            self.messages.len(),
        )
    }

    /// Birth year implied by the profile age at the log timestamp.
    pub fn birth_year(&self) -> i32 {
        self.profile.birth_year(self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::profile::fixtures::ana;

    fn after_turns(n: usize) -> ConversationState {
        (0..n).fold(ConversationState::initial(), |state, _| state.advance())
    }

    mod trigger {
        use super::*;

        #[test]
        fn once_fires_only_on_sixth_turn() {
            let trigger = CheckpointTrigger::default();
            let fired: Vec<usize> = (1..=12).filter(|&n| trigger.fires(&after_turns(n))).collect();
            assert_eq!(fired, vec![6]);
        }

        #[test]
        fn every_turn_policy_keeps_firing() {
            let trigger = CheckpointTrigger::new(6, CheckpointPolicy::EveryTurnAfterThreshold);
            assert!(!trigger.fires(&after_turns(5)));
            assert!(trigger.fires(&after_turns(6)));
            assert!(trigger.fires(&after_turns(7)));
            assert!(trigger.fires(&after_turns(20)));
        }

        #[test]
        fn custom_threshold() {
            let trigger = CheckpointTrigger::new(2, CheckpointPolicy::Once);
            assert!(!trigger.fires(&after_turns(1)));
            assert!(trigger.fires(&after_turns(2)));
        }

        #[test]
        fn initial_state_never_fires_with_positive_threshold() {
            assert!(!CheckpointTrigger::default().fires(&ConversationState::initial()));
        }

        #[test]
        fn policy_deserializes_snake_case() {
            let policy: CheckpointPolicy =
                serde_json::from_str("\"every_turn_after_threshold\"").unwrap();
            assert_eq!(policy, CheckpointPolicy::EveryTurnAfterThreshold);
        }
    }

    mod log {
        use super::*;
        use chrono::{TimeZone, Utc};

        fn log_with(messages: usize) -> ConversationLog {
            ConversationLog {
                timestamp: Timestamp::from_datetime(
                    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(),
                ),
                profile: ana(),
                state: after_turns(6),
                messages: (0..messages).map(|i| Message::user(format!("m{}", i))).collect(),
                next_question: None,
            }
        }

        #[test]
        fn template_names_profile_and_counts_messages() {
            let summary = log_with(12).template_summary();
            assert!(summary.starts_with("Analysis for Ana:\n"));
            assert!(summary.contains("- Birth year: 1996\n"));
            assert!(summary.contains("- Total messages: 12"));
            assert!(summary.contains("- Main concerns: [List main concerns]"));
            assert!(summary.contains("- Key goals: [List key goals]"));
            assert!(summary.contains("- Personality traits: [List observed traits]"));
        }

        #[test]
        fn birth_year_uses_log_timestamp() {
            assert_eq!(log_with(0).birth_year(), 1996);
        }
    }

    #[test]
    fn signal_constructors() {
        assert_eq!(
            CheckpointSignal::none(),
            CheckpointSignal {
                triggered: false,
                analysis: None
            }
        );
        let signal = CheckpointSignal::with_analysis("summary");
        assert!(signal.triggered);
        assert_eq!(signal.analysis.as_deref(), Some("summary"));
    }
}
