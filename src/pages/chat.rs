//! Public chat widget - what the embed snippet's `<iframe>` loads

use embedchat_core::Transcript;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::{ChatPanel, EmbedPopup};

/// Chat answering from the content of the user named in the route
#[component]
pub fn ChatPage() -> impl IntoView {
    let params = use_params_map();
    let owner = move || params.with(|p| p.get("id")).unwrap_or_default();

    view! {
        <Title text="Chat" />
        {move || {
            let user_id = owner();
            if user_id.is_empty() {
                view! {
                    <div class="h-screen flex items-center justify-center text-gray-500">
                        "This chat link is incomplete."
                    </div>
                }.into_any()
            } else {
                view! { <ChatWidget user_id=user_id /> }.into_any()
            }
        }}
    }
}

#[component]
fn ChatWidget(user_id: String) -> impl IntoView {
    let show_embed = RwSignal::new(false);
    // fresh conversation per widget load
    let transcript = RwSignal::new(Transcript::new());
    let embed_user = user_id.clone();

    view! {
        <div class="h-screen p-1 px-10 flex flex-col justify-between">
            <div class="flex justify-between items-center mt-2 mb-8">
                <img src="/assets/mascot.svg" alt="Mascot" class="w-14 h-14" />
                <button
                    on:click=move |_| show_embed.set(true)
                    class="flex p-3 rounded-lg bg-purple-200 space-x-4 hover:bg-purple-300 cursor-pointer"
                >
                    <span class="text-md">"Embed"</span>
                    <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
                        <path stroke-linecap="round" stroke-linejoin="round" d="M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4" />
                    </svg>
                </button>
            </div>

            <Show when=move || show_embed.get()>
                <EmbedPopup user_id=embed_user.clone() on_close=move || show_embed.set(false) />
            </Show>

            <ChatPanel user_id=user_id transcript=transcript />
        </div>
    }
}
