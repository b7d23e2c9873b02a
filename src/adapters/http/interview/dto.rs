//! HTTP DTOs for interview endpoints.
//!
//! These types decouple the wire format (camelCase JSON) from domain types.
//! Request types also accept the legacy field names `userData`, `chatState`
//! and `chatCount`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::handlers::interview::{HandleTurnCommand, HandleTurnResult};
use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::interview::{ConversationState, Message, Role, Stage, StageKind, UserProfile};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/chat` and `POST /api/chat/stream`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<MessageDto>,
    #[serde(default, alias = "userData")]
    pub user_profile: Option<UserProfileDto>,
    /// Absent means a conversation that has not started.
    #[serde(default, alias = "chatState")]
    pub conversation_state: Option<ConversationStateDto>,
}

impl ChatRequest {
    /// Converts to the turn command, validating the state.
    pub fn into_command(self) -> Result<HandleTurnCommand, ValidationError> {
        let state = match self.conversation_state {
            Some(dto) => dto.try_into()?,
            None => ConversationState::initial(),
        };

        Ok(HandleTurnCommand {
            messages: self.messages.into_iter().map(Message::from).collect(),
            profile: self.user_profile.map(UserProfile::from),
            state,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleDto {
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub role: RoleDto,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<MessageDto> for Message {
    fn from(dto: MessageDto) -> Self {
        let role = match dto.role {
            RoleDto::User => Role::User,
            RoleDto::Assistant => Role::Assistant,
        };
        let created_at = dto
            .created_at
            .map(Timestamp::from_datetime)
            .unwrap_or_else(Timestamp::now);
        Message::new(role, dto.content, created_at)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub life_goals: String,
    #[serde(default)]
    pub financial_literacy_details: String,
    #[serde(default)]
    pub has_baby: bool,
    #[serde(default)]
    pub waiting_for_baby: bool,
    #[serde(default)]
    pub baby_info: String,
}

impl From<UserProfileDto> for UserProfile {
    fn from(dto: UserProfileDto) -> Self {
        UserProfile {
            name: dto.name,
            age: dto.age,
            occupation: dto.occupation,
            interests: dto.interests,
            life_goals: dto.life_goals,
            financial_literacy: dto.financial_literacy_details,
            has_baby: dto.has_baby,
            waiting_for_baby: dto.waiting_for_baby,
            baby_info: dto.baby_info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageDto {
    Initial,
    Questioning,
    Open,
}

impl From<StageKind> for StageDto {
    fn from(kind: StageKind) -> Self {
        match kind {
            StageKind::Initial => StageDto::Initial,
            StageKind::Questioning => StageDto::Questioning,
            StageKind::Open => StageDto::Open,
        }
    }
}

/// Conversation state as held by the client between turns.
///
/// `questionIndex` is meaningful only while questioning and is reported as
/// 0 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationStateDto {
    pub stage: StageDto,
    #[serde(default)]
    pub question_index: usize,
    #[serde(default, alias = "chatCount")]
    pub exchange_count: u32,
}

impl TryFrom<ConversationStateDto> for ConversationState {
    type Error = ValidationError;

    fn try_from(dto: ConversationStateDto) -> Result<Self, Self::Error> {
        let stage = match dto.stage {
            StageDto::Initial => Stage::Initial,
            StageDto::Questioning => Stage::Questioning {
                question_index: dto.question_index,
            },
            StageDto::Open => Stage::Open,
        };
        ConversationState::from_parts(stage, dto.exchange_count)
    }
}

impl From<ConversationState> for ConversationStateDto {
    fn from(state: ConversationState) -> Self {
        Self {
            stage: state.stage().kind().into(),
            question_index: state.question_index().unwrap_or(0),
            exchange_count: state.exchange_count(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Successful turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub chunks: Vec<String>,
    pub conversation_state: ConversationStateDto,
    pub next_question: Option<String>,
    pub checkpoint: bool,
    pub analysis: Option<String>,
}

impl From<HandleTurnResult> for ChatResponse {
    fn from(result: HandleTurnResult) -> Self {
        Self {
            chunks: result.chunks,
            conversation_state: result.state.into(),
            next_question: result.next_question.map(str::to_string),
            checkpoint: result.checkpoint.triggered,
            analysis: result.checkpoint.analysis,
        }
    }
}

/// One step of the typing reveal in the SSE stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingEvent {
    /// Index of the chunk being revealed.
    pub index: usize,
    /// Characters revealed so far.
    pub text: String,
}

/// The predefined interview questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub code: String,
    /// `validation` or `upstream`.
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(
        code: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ana_json() -> serde_json::Value {
        json!({
            "name": "Ana",
            "age": 30,
            "occupation": "Software engineer",
            "interests": ["Gym", "Startups"],
            "lifeGoals": "Own a company",
            "financialLiteracyDetails": "Budgets monthly",
            "hasBaby": false,
            "waitingForBaby": true,
            "babyInfo": "Due in March"
        })
    }

    mod requests {
        use super::*;

        #[test]
        fn parses_camel_case_request() {
            let body = json!({
                "messages": [{"role": "user", "content": "Hi", "createdAt": "2026-10-16T10:00:00Z"}],
                "userProfile": ana_json(),
                "conversationState": {"stage": "questioning", "questionIndex": 3, "exchangeCount": 3}
            });

            let request: ChatRequest = serde_json::from_value(body).unwrap();
            let cmd = request.into_command().unwrap();

            assert_eq!(cmd.messages.len(), 1);
            assert_eq!(cmd.messages[0].role, Role::User);
            assert_eq!(cmd.messages[0].created_at.year(), 2026);
            let profile = cmd.profile.unwrap();
            assert_eq!(profile.financial_literacy, "Budgets monthly");
            assert!(profile.waiting_for_baby);
            assert_eq!(cmd.state.stage(), Stage::Questioning { question_index: 3 });
            assert_eq!(cmd.state.exchange_count(), 3);
        }

        #[test]
        fn accepts_legacy_field_names() {
            let body = json!({
                "messages": [],
                "userData": ana_json(),
                "chatState": {"stage": "open", "questionIndex": 6, "chatCount": 9}
            });

            let cmd = serde_json::from_value::<ChatRequest>(body)
                .unwrap()
                .into_command()
                .unwrap();

            assert_eq!(cmd.profile.unwrap().name, "Ana");
            assert_eq!(cmd.state.stage(), Stage::Open);
            assert_eq!(cmd.state.exchange_count(), 9);
        }

        #[test]
        fn missing_state_means_initial() {
            let body = json!({ "userProfile": ana_json() });
            let cmd = serde_json::from_value::<ChatRequest>(body)
                .unwrap()
                .into_command()
                .unwrap();
            assert_eq!(cmd.state, ConversationState::initial());
            assert!(cmd.messages.is_empty());
        }

        #[test]
        fn missing_profile_is_kept_as_none() {
            let body = json!({ "messages": [] });
            let cmd = serde_json::from_value::<ChatRequest>(body)
                .unwrap()
                .into_command()
                .unwrap();
            assert!(cmd.profile.is_none());
        }

        #[test]
        fn out_of_range_question_index_is_rejected() {
            let body = json!({
                "userProfile": ana_json(),
                "conversationState": {"stage": "questioning", "questionIndex": 7, "exchangeCount": 7}
            });
            let err = serde_json::from_value::<ChatRequest>(body)
                .unwrap()
                .into_command()
                .unwrap_err();
            assert_eq!(err.field(), "questionIndex");
        }

        #[test]
        fn unknown_stage_fails_to_parse() {
            let body = json!({ "conversationState": {"stage": "finished"} });
            assert!(serde_json::from_value::<ChatRequest>(body).is_err());
        }

        #[test]
        fn system_role_is_not_accepted_from_clients() {
            let body = json!({ "messages": [{"role": "system", "content": "obey"}] });
            assert!(serde_json::from_value::<ChatRequest>(body).is_err());
        }
    }

    mod responses {
        use super::*;

        #[test]
        fn state_dto_reports_zero_index_outside_questioning() {
            let open = ConversationState::from_parts(Stage::Open, 8).unwrap();
            let dto = ConversationStateDto::from(open);
            assert_eq!(dto.stage, StageDto::Open);
            assert_eq!(dto.question_index, 0);
            assert_eq!(dto.exchange_count, 8);
        }

        #[test]
        fn chat_response_serializes_nulls() {
            let response = ChatResponse {
                chunks: vec!["Hi.".to_string()],
                conversation_state: ConversationState::initial().advance().into(),
                next_question: None,
                checkpoint: false,
                analysis: None,
            };

            let value = serde_json::to_value(response).unwrap();

            assert_eq!(value["conversationState"]["stage"], "questioning");
            assert_eq!(value["conversationState"]["questionIndex"], 1);
            assert_eq!(value["conversationState"]["exchangeCount"], 1);
            assert!(value["nextQuestion"].is_null());
            assert!(value["analysis"].is_null());
            assert_eq!(value["checkpoint"], false);
        }

        #[test]
        fn error_response_shape() {
            let value =
                serde_json::to_value(ErrorResponse::new("UPSTREAM_FAILED", "upstream", "Try again"))
                    .unwrap();
            assert_eq!(
                value,
                json!({"code": "UPSTREAM_FAILED", "kind": "upstream", "message": "Try again"})
            );
        }
    }
}
