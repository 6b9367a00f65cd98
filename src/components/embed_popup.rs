//! Embed snippet dialog

use embedchat_core::embed::{embed_snippet, COPIED_FEEDBACK_MS};
use embedchat_core::Error;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::api::report_error;

/// Modal showing the `<iframe>` snippet for a user's chat widget
#[component]
pub fn EmbedPopup(
    /// Owner of the chat widget
    user_id: String,
    /// Close the dialog
    on_close: impl Fn() + 'static,
) -> impl IntoView {
    let origin = window()
        .location()
        .origin()
        .unwrap_or_default();
    let snippet = embed_snippet(&origin, &user_id);
    let copied = RwSignal::new(false);

    let copy_snippet = {
        let snippet = snippet.clone();
        move |_| {
            let snippet = snippet.clone();
            spawn_local(async move {
                let promise = window().navigator().clipboard().write_text(&snippet);
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        copied.set(true);
                        TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                        copied.set(false);
                    }
                    Err(e) => report_error(
                        "Could not copy to clipboard",
                        &Error::InvalidInput(format!("{:?}", e)),
                    ),
                }
            });
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center p-4 backdrop-blur-sm z-50">
            <div class="bg-white rounded-xl shadow-lg w-full max-w-lg relative">
                // Header
                <div class="flex items-center justify-between p-6 border-b">
                    <h2 class="text-xl font-semibold text-gray-900">"Embed This!"</h2>
                    <button
                        on:click=move |_| on_close()
                        class="text-gray-500 hover:text-gray-700 transition-colors w-8 h-8 flex items-center justify-center rounded-lg hover:bg-gray-100"
                    >
                        <svg viewBox="0 0 24 24" class="w-5 h-5" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M18 6L6 18M6 6l12 12" stroke-linecap="round" stroke-linejoin="round" />
                        </svg>
                    </button>
                </div>

                // Content
                <div class="p-6 space-y-4">
                    <div class="bg-purple-50 rounded-lg p-4 font-mono text-sm overflow-x-auto">
                        {snippet}
                    </div>

                    <button
                        on:click=copy_snippet
                        class="w-full bg-[#837FFC] text-white py-2.5 px-4 rounded-lg hover:bg-indigo-600 transition-colors font-medium"
                    >
                        {move || if copied.get() { "Copied!" } else { "Copy Code" }}
                    </button>

                    <p class="text-sm text-gray-600">
                        "Add this code to any HTML page where you want the chat widget to appear."
                    </p>
                </div>
            </div>
        </div>
    }
}
