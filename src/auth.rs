//! Third-party popup sign-in
//!
//! The provider page opened in the popup posts the profile back to this
//! window; the app-wide listener installed by [`listen_for_popup`] forwards
//! it into [`AppState`]. Pages react to the user appearing in the store.

use embedchat_core::auth::{POPUP_FEATURES, POPUP_TARGET};
use embedchat_core::{Error, PopupMessage};
use leptos::ev;
use leptos::prelude::*;
use web_sys::MessageEvent;

use crate::api::report_error;
use crate::state::AppState;

/// Open the provider's sign-in popup.
pub fn sign_in_with_popup(state: AppState) {
    let url = state.config.with_value(|c| c.auth_url.clone());
    tracing::info!("Attempting popup sign-in...");

    match window().open_with_url_and_target_and_features(&url, POPUP_TARGET, POPUP_FEATURES) {
        Ok(Some(_)) => {}
        Ok(None) => report_error(
            "Sign-in failed",
            &Error::Auth("The sign-in popup was blocked by the browser".to_string()),
        ),
        Err(e) => report_error("Sign-in failed", &Error::Auth(format!("{:?}", e))),
    }
}

/// Clear the session.
pub fn sign_out(state: AppState) {
    state.clear_user();
}

/// Install the window `message` listener for popup results.
pub fn listen_for_popup(state: AppState) {
    let expected_origin = match state.config.with_value(|c| c.auth_origin()) {
        Ok(origin) => origin,
        Err(e) => {
            tracing::error!("Popup sign-in disabled: {}", e);
            return;
        }
    };

    // Lives as long as the app
    let _handle = window_event_listener(ev::message, move |event: MessageEvent| {
        let data = event.data();
        let payload = data
            .as_string()
            .or_else(|| js_sys::JSON::stringify(&data).ok().and_then(|s| s.as_string()));
        let Some(payload) = payload else {
            return;
        };

        match PopupMessage::parse(&event.origin(), &expected_origin, &payload) {
            Ok(Some(PopupMessage::SignedIn(user))) => state.set_user(Some(user)),
            Ok(Some(PopupMessage::Failed(reason))) => {
                report_error("Sign-in failed", &Error::Auth(reason))
            }
            Ok(None) => {}
            Err(e) => report_error("Sign-in failed", &e),
        }
    });
}
