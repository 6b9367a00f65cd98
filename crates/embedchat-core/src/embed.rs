//! Embed snippet for hosting the chat widget on another site.

/// How long the copy button shows its confirmation.
pub const COPIED_FEEDBACK_MS: u32 = 2_000;

/// Path of the public chat widget for a user.
pub fn widget_path(user_id: &str) -> String {
    format!("/chat/{}", urlencoding::encode(user_id))
}

/// `<iframe>` tag pointing at the user's chat widget on `origin`.
pub fn embed_snippet(origin: &str, user_id: &str) -> String {
    format!(
        r#"<iframe src="{}{}" title="Chat" width="100%" height="600" style="border: none;"></iframe>"#,
        origin.trim_end_matches('/'),
        widget_path(user_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet() {
        assert_eq!(
            embed_snippet("https://app.example.com/", "u-1"),
            r#"<iframe src="https://app.example.com/chat/u-1" title="Chat" width="100%" height="600" style="border: none;"></iframe>"#
        );
    }

    #[test]
    fn test_user_id_is_escaped() {
        assert_eq!(widget_path("a/b\"c"), "/chat/a%2Fb%22c");
    }
}
