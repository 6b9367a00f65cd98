//! Profile hand-off from the third-party sign-in popup.
//!
//! The popup window runs the provider's flow and then calls
//! `window.opener.postMessage(profile, origin)`. Only messages from the
//! configured provider origin are trusted.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::User;

/// Window name used for the popup so repeated clicks reuse it.
pub const POPUP_TARGET: &str = "embedchat-auth";

/// Size of the popup window.
pub const POPUP_FEATURES: &str = "popup=yes,width=500,height=640";

/// Profile as posted by the provider page
#[derive(Debug, Clone, Deserialize)]
pub struct PopupProfile {
    pub uid: String,
    #[serde(default, alias = "displayName")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<PopupProfile> for User {
    fn from(p: PopupProfile) -> Self {
        User {
            id: p.uid,
            name: p.display_name.unwrap_or_default(),
            email: p.email.unwrap_or_default(),
        }
    }
}

/// Outcome of one `message` event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupMessage {
    /// The provider finished and sent a profile
    SignedIn(User),
    /// The provider reported a failure
    Failed(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMessage {
    Profile(PopupProfile),
    Failure { error: String },
}

impl PopupMessage {
    /// Interpret a `message` event.
    ///
    /// Returns `Ok(None)` for messages that are not ours (other origins,
    /// unrelated payloads), so the listener can keep waiting.
    pub fn parse(origin: &str, expected_origin: &str, data: &str) -> Result<Option<Self>> {
        if origin != expected_origin {
            tracing::debug!("Ignoring message from {}", origin);
            return Ok(None);
        }
        match serde_json::from_str::<RawMessage>(data) {
            Ok(RawMessage::Profile(p)) if !p.uid.is_empty() => {
                Ok(Some(PopupMessage::SignedIn(p.into())))
            }
            Ok(RawMessage::Profile(_)) => Err(Error::Auth("Provider sent an empty uid".to_string())),
            Ok(RawMessage::Failure { error }) => Ok(Some(PopupMessage::Failed(error))),
            Err(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://auth.example.com";

    #[test]
    fn test_profile_from_provider() {
        let msg = PopupMessage::parse(
            ORIGIN,
            ORIGIN,
            r#"{"uid":"g-1","displayName":"Ada","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(
            msg,
            Some(PopupMessage::SignedIn(User {
                id: "g-1".into(),
                name: "Ada".into(),
                email: "ada@example.com".into(),
            }))
        );
    }

    #[test]
    fn test_missing_name_and_email_become_empty() {
        let msg = PopupMessage::parse(ORIGIN, ORIGIN, r#"{"uid":"g-2"}"#).unwrap();
        let Some(PopupMessage::SignedIn(user)) = msg else {
            panic!("expected a profile");
        };
        assert_eq!(user.name, "");
        assert_eq!(user.email, "");
    }

    #[test]
    fn test_foreign_origin_ignored() {
        let msg = PopupMessage::parse("https://evil.example", ORIGIN, r#"{"uid":"x"}"#).unwrap();
        assert_eq!(msg, None);
    }

    #[test]
    fn test_failure_and_noise() {
        assert_eq!(
            PopupMessage::parse(ORIGIN, ORIGIN, r#"{"error":"popup closed"}"#).unwrap(),
            Some(PopupMessage::Failed("popup closed".into()))
        );
        assert_eq!(PopupMessage::parse(ORIGIN, ORIGIN, "\"ping\"").unwrap(), None);
        assert!(PopupMessage::parse(ORIGIN, ORIGIN, r#"{"uid":""}"#).is_err());
    }
}
