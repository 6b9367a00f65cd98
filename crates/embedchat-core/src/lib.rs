//! # embedchat-core
//!
//! Everything the embedchat web client needs that does not touch the DOM:
//! the backend's wire types and REST contract, chat transcript
//! bookkeeping, file classification for the upload sidebar, the Insights
//! view models and the embed snippet.
//!
//! The crate builds for both native targets and `wasm32-unknown-unknown`,
//! so the behaviour behind the UI is tested with plain `cargo test`.
//!
//! ```rust
//! use embedchat_core::{Endpoints, Transcript};
//!
//! let endpoints = Endpoints::new("http://127.0.0.1:5000");
//! let mut transcript = Transcript::new();
//!
//! let request = transcript.submit("user-1", "What is in my PDF?").unwrap();
//! assert_eq!(endpoints.search(), "http://127.0.0.1:5000/search");
//! assert_eq!(request.conversation_id, transcript.conversation_id());
//! ```

pub mod auth;
pub mod config;
pub mod embed;
pub mod endpoints;
pub mod error;
pub mod files;
pub mod insights;
pub mod routes;
pub mod transcript;
pub mod types;

pub use auth::PopupMessage;
pub use config::ClientConfig;
pub use embed::embed_snippet;
pub use endpoints::Endpoints;
pub use error::{Error, Result};
pub use files::{FileKind, FileLibrary};
pub use insights::{TopicCarousel, TopicSettings};
pub use routes::AppRoute;
pub use transcript::Transcript;
pub use types::{ChatEnvelope, DataDistribution, MessageKind, StoredFile, User};
