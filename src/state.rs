//! Global application state

use embedchat_core::config::STORAGE_KEY_CONFIG;
use embedchat_core::{ClientConfig, Endpoints, User};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

/// Global application state
///
/// The session lives in memory only; a reload signs the user out.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Signed-in user, if any
    pub user: RwSignal<Option<User>>,
    /// Resolved client configuration
    pub config: StoredValue<ClientConfig>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
            config: StoredValue::new(Self::load_config()),
        }
    }

    fn load_config() -> ClientConfig {
        // Raw string: the override is a JSON object, not a JSON-encoded string
        let stored = LocalStorage::raw()
            .get_item(STORAGE_KEY_CONFIG)
            .ok()
            .flatten();

        match ClientConfig::resolve(
            option_env!("EMBEDCHAT_API_BASE"),
            option_env!("EMBEDCHAT_AUTH_URL"),
            stored.as_deref(),
        ) {
            Ok(config) => {
                tracing::info!("Using backend at {}", config.api_base);
                config
            }
            Err(e) => {
                tracing::error!("Invalid client configuration, falling back to defaults: {}", e);
                ClientConfig::default()
            }
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        self.config.with_value(|c| Endpoints::new(&c.api_base))
    }

    pub fn set_user(&self, user: Option<User>) {
        match &user {
            Some(u) => tracing::info!("Signed in as {}", u.id),
            None => tracing::info!("Signed out"),
        }
        self.user.set(user);
    }

    pub fn clear_user(&self) {
        self.set_user(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Id of the signed-in user (tracked).
    pub fn user_id(&self) -> Option<String> {
        self.user.with(|u| u.as_ref().map(|u| u.id.clone()))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
