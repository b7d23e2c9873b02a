//! Instruction payload for the future-self persona.
//!
//! [`PromptBuilder::build`] is a pure function of the profile and the
//! conversation state: identical inputs always produce identical text. The
//! tone of the persona is chosen by server configuration only; nothing in
//! the profile or transcript can switch it.

use serde::Deserialize;

use super::profile::UserProfile;
use super::state::{ConversationState, Stage};

/// Default age at which the persona speaks.
pub const DEFAULT_TARGET_AGE: u32 = 60;

/// Server-controlled register of the persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaTone {
    /// Blunt, critical and constructive.
    #[default]
    Direct,
    /// Candid but gentler, for audiences that asked for it.
    Supportive,
}

impl PersonaTone {
    fn guidance(&self) -> &'static str {
        match self {
            PersonaTone::Direct => {
                "Be direct and critical. Say the hard truths plainly, even when they are \
                 uncomfortable, and always pair them with something constructive they can act on."
            }
            PersonaTone::Supportive => {
                "Be honest but warm. Name problems clearly without harshness and lead with \
                 what they are already doing well before what needs to change."
            }
        }
    }
}

/// Builds the system instruction for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptBuilder {
    target_age: u32,
    tone: PersonaTone,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_AGE, PersonaTone::default())
    }
}

impl PromptBuilder {
    pub fn new(target_age: u32, tone: PersonaTone) -> Self {
        Self { target_age, tone }
    }

    pub fn target_age(&self) -> u32 {
        self.target_age
    }

    /// Full instruction text for a turn taken from `state`.
    pub fn build(&self, profile: &UserProfile, state: &ConversationState) -> String {
        let mut prompt = self.profile_section(profile);
        prompt.push_str("\n\n");
        prompt.push_str(&self.persona_section(profile));
        prompt.push_str("\n\n");
        prompt.push_str(&Self::stage_section(profile, state));
        prompt
    }

    fn profile_section(&self, profile: &UserProfile) -> String {
        format!(
            "User information:\n\
             Name: {}\n\
             Current age: {}\n\
             Occupation: {}\n\
             Interests: {}\n\
             Life goals: {}\n\
             Financial literacy: {}\n\
             Has baby: {}\n\
             Expecting a baby: {}\n\
             Baby details: {}",
            profile.name,
            profile.age,
            profile.occupation,
            profile.interests_line(),
            profile.life_goals,
            profile.financial_literacy,
            profile.has_baby,
            profile.waiting_for_baby,
            profile.baby_info,
        )
    }

    fn persona_section(&self, profile: &UserProfile) -> String {
        format!(
            "You are {name} at age {age}, speaking to your younger self. You have lived through \
             the years between now and then, reached many of the goals above and learned from \
             the mistakes along the way. Speak from that lived experience.\n\n\
             Guidelines:\n\
             1. {tone}\n\
             2. Connect who they are today with who they become, so the future feels like theirs.\n\
             3. Ground every point in their occupation, interests and goals. No generic platitudes.\n\
             4. Describe past struggles as things that shaped you, and say what you would do differently.\n\
             5. Push them to weigh today's choices by their long-term effect.\n\
             6. Keep replies short. Plain sentences only: no asterisks, underscores, tildes, \
             backticks or other formatting markers.",
            name = profile.name,
            age = self.target_age,
            tone = self.tone.guidance(),
        )
    }

    fn stage_section(profile: &UserProfile, state: &ConversationState) -> String {
        match state.stage() {
            Stage::Initial => format!(
                "This is the start of the conversation. Introduce yourself as {}'s future self, \
                 then ask exactly this question: \"{}\"",
                profile.name,
                state.pending_question().unwrap_or_default(),
            ),
            Stage::Questioning { .. } => format!(
                "You are working through the interview. Briefly acknowledge their last answer, \
                 then ask exactly this question: \"{}\"",
                state.pending_question().unwrap_or_default(),
            ),
            Stage::Open => "The interview questions are done. Continue the conversation freely, \
                            drawing on everything they have told you to give advice that is \
                            specific to them. Do not ask any of the interview questions again."
                .to_string(),
        }
    }
}
