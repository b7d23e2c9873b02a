//! Transcript entries.

use crate::domain::foundation::Timestamp;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

/// One line of the conversation transcript.
///
/// Transcripts are append-only: entries are never reordered or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub created_at: Timestamp,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            role,
            content: content.into(),
            created_at,
        }
    }

    /// A user line stamped now.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, Timestamp::now())
    }

    /// An assistant line stamped now.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content, Timestamp::now())
    }
}
