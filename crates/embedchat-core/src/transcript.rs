//! Chat transcript bookkeeping.
//!
//! The chat view appends the user's message immediately, sends a
//! [`SearchRequest`], and appends whatever the backend answers. A
//! [`Transcript`] holds the messages and the conversation identifier that
//! groups the turns on the backend side.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::types::{ChatEnvelope, SearchRequest};

/// Messages of one conversation plus its client-generated identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    conversation_id: String,
    messages: Vec<ChatEnvelope>,
    pending: bool,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Start a conversation with a fresh identifier.
    pub fn new() -> Self {
        Self::with_conversation_id(Uuid::new_v4().to_string())
    }

    pub fn with_conversation_id(id: impl Into<String>) -> Self {
        Self {
            conversation_id: id.into(),
            messages: Vec::new(),
            pending: false,
        }
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn messages(&self) -> &[ChatEnvelope] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// True between [`submit`](Self::submit) and the matching
    /// [`receive`](Self::receive) or [`fail`](Self::fail).
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append the user's message and return the request to send.
    ///
    /// Blank input and a submit while a previous query is still in flight
    /// are rejected without touching the message list.
    pub fn submit(&mut self, user_id: &str, input: &str) -> Result<SearchRequest> {
        let query = input.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput("Message is empty".to_string()));
        }
        if self.pending {
            return Err(Error::InvalidInput(
                "Still waiting for the previous answer".to_string(),
            ));
        }

        self.messages.push(ChatEnvelope::human(query));
        self.pending = true;

        Ok(SearchRequest {
            user_id: user_id.to_string(),
            query: query.to_string(),
            conversation_id: self.conversation_id.clone(),
        })
    }

    /// Append the backend's answer.
    pub fn receive(&mut self, envelope: ChatEnvelope) {
        if let Some(session) = envelope.session_id.as_deref() {
            if session != self.conversation_id {
                tracing::warn!(
                    "Response session {} does not match conversation {}",
                    session,
                    self.conversation_id
                );
            }
        }
        self.messages.push(envelope);
        self.pending = false;
    }

    /// Close the in-flight query without appending anything.
    pub fn fail(&mut self, error: &Error) {
        tracing::error!("Chat query failed: {}", error);
        self.pending = false;
    }

    /// [`receive`](Self::receive) an answer to a query sent under
    /// `conversation_id`. Answers for a conversation that was reset in the
    /// meantime are dropped and leave the pending flag alone.
    ///
    /// Returns whether the answer was applied.
    pub fn receive_for(&mut self, conversation_id: &str, envelope: ChatEnvelope) -> bool {
        if conversation_id != self.conversation_id {
            tracing::debug!("Dropping answer for closed conversation {}", conversation_id);
            return false;
        }
        self.receive(envelope);
        true
    }

    /// [`fail`](Self::fail) counterpart of [`receive_for`](Self::receive_for).
    pub fn fail_for(&mut self, conversation_id: &str, error: &Error) -> bool {
        if conversation_id != self.conversation_id {
            tracing::debug!(
                "Ignoring failure for closed conversation {}: {}",
                conversation_id,
                error
            );
            return false;
        }
        self.fail(error);
        true
    }

    /// Drop all messages and start a new conversation.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageKind;
    use serde_json::json;

    fn ai(content: &str, session: &str) -> ChatEnvelope {
        serde_json::from_value(json!({
            "session_id": session,
            "type": "ai",
            "data": { "content": content }
        }))
        .unwrap()
    }

    #[test]
    fn test_submit_appends_one_message() {
        let mut t = Transcript::with_conversation_id("c-1");
        let req = t.submit("u-1", "  what is in my pdf?  ").unwrap();

        assert_eq!(t.messages().len(), 1);
        assert!(t.messages()[0].is_human());
        assert_eq!(t.messages()[0].content(), "what is in my pdf?");
        assert_eq!(req.query, "what is in my pdf?");
        assert_eq!(req.conversation_id, "c-1");
        assert_eq!(req.user_id, "u-1");
        assert!(t.is_pending());
    }

    #[test]
    fn test_blank_input_rejected() {
        let mut t = Transcript::new();
        assert!(t.submit("u", "   ").is_err());
        assert!(t.is_empty());
        assert!(!t.is_pending());
    }

    #[test]
    fn test_submit_while_pending_rejected() {
        let mut t = Transcript::new();
        t.submit("u", "first").unwrap();
        assert!(t.submit("u", "second").is_err());
        assert_eq!(t.messages().len(), 1);
    }

    #[test]
    fn test_fail_leaves_messages_untouched() {
        let mut t = Transcript::new();
        t.submit("u", "hello").unwrap();
        t.fail(&Error::Network("offline".to_string()));

        assert_eq!(t.messages().len(), 1);
        assert!(!t.is_pending());
        // a new submit is allowed again
        t.submit("u", "again").unwrap();
        assert_eq!(t.messages().len(), 2);
    }

    #[test]
    fn test_mismatched_session_still_appended() {
        let mut t = Transcript::with_conversation_id("c-1");
        t.submit("u", "hi").unwrap();
        t.receive(ai("hello", "other"));
        assert_eq!(t.messages().len(), 2);
        assert_eq!(t.messages()[1].kind, MessageKind::Ai);
    }

    #[test]
    fn test_reset_issues_new_id() {
        let mut t = Transcript::new();
        let old = t.conversation_id().to_string();
        t.submit("u", "hi").unwrap();
        t.reset();
        assert!(t.is_empty());
        assert!(!t.is_pending());
        assert_ne!(t.conversation_id(), old);
    }

    #[test]
    fn test_answer_after_reset_is_dropped() {
        let mut t = Transcript::new();
        let old = t.submit("u", "old question").unwrap();
        t.reset();
        let new = t.submit("u", "new question").unwrap();

        let applied = t.receive_for(&old.conversation_id, ai("old answer", &old.conversation_id));

        assert!(!applied);
        assert_eq!(t.messages().len(), 1);
        assert_eq!(t.messages()[0].content(), "new question");
        assert!(t.is_pending());
        assert!(t.submit("u", "third").is_err());

        assert!(t.receive_for(&new.conversation_id, ai("new answer", &new.conversation_id)));
        assert_eq!(t.messages().len(), 2);
        assert!(!t.is_pending());
    }

    #[test]
    fn test_failure_after_reset_is_ignored() {
        let mut t = Transcript::new();
        let old = t.submit("u", "old question").unwrap();
        t.reset();
        t.submit("u", "new question").unwrap();

        assert!(!t.fail_for(&old.conversation_id, &Error::Network("offline".to_string())));
        assert!(t.is_pending());
    }
}
