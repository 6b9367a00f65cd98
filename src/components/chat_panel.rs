//! Chat transcript with input, bound to one content owner

use embedchat_core::Transcript;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api::{report_error, search};
use crate::components::{ChatInput, ChatMessage, TypingIndicator};
use crate::state::AppState;

/// Conversation view that answers from `user_id`'s uploaded content
#[component]
pub fn ChatPanel(
    /// Owner of the content the assistant answers from
    user_id: String,
    /// Conversation state, owned by the page so toolbar actions can reset it
    transcript: RwSignal<Transcript>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let input = RwSignal::new(String::new());
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let is_pending = Signal::derive(move || transcript.with(Transcript::is_pending));

    // Auto-scroll to bottom when new messages arrive
    let scroll_to_bottom = move || {
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    let send_message = move || {
        let text = input.get_untracked();
        let Some(submitted) = transcript.try_update(|t| t.submit(&user_id, &text)) else {
            return;
        };
        let request = match submitted {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!("Not sending: {}", e);
                return;
            }
        };
        input.set(String::new());
        scroll_to_bottom();

        let endpoints = state.endpoints();
        spawn_local(async move {
            // "New Chat" may have replaced the conversation while this was in flight
            let conversation_id = request.conversation_id.clone();
            match search(&endpoints, &request).await {
                Ok(envelope) => {
                    transcript.update(|t| {
                        t.receive_for(&conversation_id, envelope);
                    });
                }
                Err(e) => {
                    let applied = transcript
                        .try_update(|t| t.fail_for(&conversation_id, &e))
                        .unwrap_or(false);
                    if applied {
                        report_error("Chat query failed", &e);
                    }
                }
            }
            scroll_to_bottom();
        });
    };

    view! {
        <div class="flex-1 flex flex-col min-h-0">
            // Messages area
            <div class="flex-1 overflow-y-auto space-y-8 py-4">
                {move || {
                    transcript.with(|t| t.is_empty()).then(|| view! {
                        <div class="h-full flex items-center justify-center text-gray-400 text-sm">
                            "Ask anything about the uploaded content."
                        </div>
                    })
                }}

                {move || {
                    transcript.with(|t| t.messages().to_vec())
                        .into_iter()
                        .map(|message| view! { <ChatMessage message=message /> })
                        .collect::<Vec<_>>()
                }}

                <Show when=move || is_pending.get()>
                    <TypingIndicator />
                </Show>

                // Scroll anchor
                <div node_ref=messages_end_ref></div>
            </div>

            <ChatInput value=input on_submit=send_message disabled=is_pending />
        </div>
    }
}
