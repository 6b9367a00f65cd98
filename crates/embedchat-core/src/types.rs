//! Wire types matching the embedchat backend

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Signed-in user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    /// Decode a sign-in/sign-up response body.
    ///
    /// The backend may answer with an empty body, `null`, or an object
    /// without an `id`; all of these mean "no user".
    pub fn from_profile_body(body: &str) -> Result<Option<User>> {
        let body = body.trim();
        if body.is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(body)?;
        match value {
            Value::Object(ref map) if map.get("id").is_some_and(|id| !id.is_null()) => {
                // ids are uuids in practice but accept numbers too
                let mut map = map.clone();
                if let Some(Value::Number(n)) = map.get("id").cloned() {
                    map.insert("id".to_string(), Value::String(n.to_string()));
                }
                Ok(Some(serde_json::from_value(Value::Object(map))?))
            }
            _ => Ok(None),
        }
    }
}

/// Sign-in request
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up request
#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// File reference returned by `/get_file`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub name: String,
    #[serde(default)]
    pub url: String,
    /// MIME type or bare extension, depending on how the file was stored
    #[serde(rename = "type", default)]
    pub file_type: String,
}

/// Chat query sent to `/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub user_id: String,
    pub query: String,
    pub conversation_id: String,
}

/// Who authored a chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageKind {
    Human,
    Ai,
    /// Anything else the backend sends, kept verbatim
    Other(String),
}

impl From<String> for MessageKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "human" => MessageKind::Human,
            "ai" => MessageKind::Ai,
            _ => MessageKind::Other(s),
        }
    }
}

impl From<MessageKind> for String {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Human => "human".to_string(),
            MessageKind::Ai => "ai".to_string(),
            MessageKind::Other(s) => s,
        }
    }
}

/// Message payload; members other than `content` are carried through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageData {
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Message envelope used for both local and backend messages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatEnvelope {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub data: MessageData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ChatEnvelope {
    /// A message typed by the local user
    pub fn human(content: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("type".to_string(), Value::String("human".to_string()));
        Self {
            kind: MessageKind::Human,
            data: MessageData {
                content: content.into(),
                extra,
            },
            session_id: None,
        }
    }

    pub fn is_human(&self) -> bool {
        self.kind == MessageKind::Human
    }

    pub fn content(&self) -> &str {
        &self.data.content
    }
}

/// Per-extension file counts from `/get-data-distribution`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDistribution {
    #[serde(default)]
    pub png: u64,
    #[serde(default)]
    pub jpg: u64,
    #[serde(default)]
    pub pdf: u64,
    #[serde(default)]
    pub mov: u64,
    #[serde(default)]
    pub jpeg: u64,
    #[serde(default)]
    pub mp4: u64,
}

/// Error response from the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_body_variants() {
        assert_eq!(User::from_profile_body("").unwrap(), None);
        assert_eq!(User::from_profile_body("null").unwrap(), None);
        assert_eq!(User::from_profile_body("{}").unwrap(), None);

        let user = User::from_profile_body(r#"{"id":"u-1","name":"Ada","email":"ada@example.com"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn test_profile_numeric_id() {
        let user = User::from_profile_body(r#"{"id": 42}"#).unwrap().unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_envelope_keeps_unknown_fields() {
        let raw = json!({
            "session_id": "c-1",
            "type": "ai",
            "data": {
                "content": "Hello",
                "tool_calls": [],
                "usage_metadata": null
            }
        });
        let env: ChatEnvelope = serde_json::from_value(raw).unwrap();
        assert_eq!(env.kind, MessageKind::Ai);
        assert_eq!(env.content(), "Hello");
        assert!(env.data.extra.contains_key("tool_calls"));
        assert_eq!(env.session_id.as_deref(), Some("c-1"));
    }

    #[test]
    fn test_unknown_kind_round_trips_verbatim() {
        let env: ChatEnvelope =
            serde_json::from_value(json!({"type": "system", "data": {"content": "x"}})).unwrap();
        assert_eq!(env.kind, MessageKind::Other("system".to_string()));
        let back = serde_json::to_value(&env).unwrap();
        assert_eq!(back["type"], "system");
    }

    #[test]
    fn test_distribution_missing_keys() {
        let dist: DataDistribution = serde_json::from_value(json!({"pdf": 3})).unwrap();
        assert_eq!(dist.pdf, 3);
        assert_eq!(dist.png, 0);
    }

    #[test]
    fn test_search_request_shape() {
        let req = SearchRequest {
            user_id: "u".into(),
            query: "q".into(),
            conversation_id: "c".into(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"user_id": "u", "query": "q", "conversation_id": "c"})
        );
    }
}
