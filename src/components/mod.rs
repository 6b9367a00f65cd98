//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod chat_panel;
pub mod embed_popup;
pub mod file_icon;
pub mod footer;
pub mod loading;
pub mod navbar;
pub mod pie_chart;
pub mod sidebar;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use chat_panel::ChatPanel;
pub use embed_popup::EmbedPopup;
pub use file_icon::FileIcon;
pub use footer::Footer;
pub use loading::{LoadingDots, LoadingSpinner, TypingIndicator};
pub use navbar::Navbar;
pub use pie_chart::PieChart;
pub use sidebar::Sidebar;
