//! Chat message component

use embedchat_core::ChatEnvelope;
use leptos::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Render a single chat message
#[component]
pub fn ChatMessage(message: ChatEnvelope) -> impl IntoView {
    let is_human = message.is_human();
    let content = message.data.content;

    view! {
        <div class=format!(
            "flex message-appear {}",
            if is_human { "justify-end" } else { "justify-start" }
        )>
            {if is_human {
                view! {
                    <div class="p-3 rounded-lg max-w-xs md:max-w-md text-sm whitespace-pre-wrap break-words bg-purple-100">
                        {content}
                    </div>
                }.into_any()
            } else {
                view! {
                    <div
                        class="p-3 rounded-lg max-w-xs md:max-w-md text-sm break-words bg-gray-200 markdown"
                        inner_html=render_markdown(&content)
                    ></div>
                }.into_any()
            }}
        </div>
    }
}

/// Markdown to HTML for assistant replies.
///
/// Raw HTML in the source is emitted as text so a reply can never inject markup.
fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES).map(
        |event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        },
    );
    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
