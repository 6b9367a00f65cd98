//! Studio page - upload content and try the assistant

use embedchat_core::{AppRoute, Transcript};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{ChatPanel, EmbedPopup, Navbar, Sidebar};
use crate::state::AppState;

/// Workspace of the signed-in user
#[component]
pub fn StudioPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Title text="Studio - Embedchat" />
        {move || match state.user.get() {
            Some(user) => view! { <Studio user_id=user.id name=user.name /> }.into_any(),
            None => view! { <SignInPrompt /> }.into_any(),
        }}
    }
}

#[component]
fn Studio(user_id: String, name: String) -> impl IntoView {
    let show_sidebar = RwSignal::new(true);
    let show_embed = RwSignal::new(false);
    let transcript = RwSignal::new(Transcript::new());

    let embed_user = user_id.clone();
    let preview_href = AppRoute::Chat(user_id.clone()).path();

    view! {
        <div class="h-screen flex">
            <Sidebar user_id=user_id.clone() show=show_sidebar />

            <div class="flex-1 flex flex-col p-1 px-10 min-w-0">
                <div class="flex justify-between items-center mt-2 mb-8">
                    <div>
                        <h1 class="text-2xl font-semibold">"Studio"</h1>
                        <p class="text-sm text-[#656D7A]">{name}</p>
                    </div>
                    <div class="flex items-center gap-3">
                        <button
                            on:click=move |_| transcript.update(Transcript::reset)
                            class="p-3 rounded-lg bg-gray-100 hover:bg-gray-200 text-md"
                        >
                            "New Chat"
                        </button>
                        <a
                            href=AppRoute::Insights.path()
                            class="p-3 rounded-lg bg-gray-100 hover:bg-gray-200 text-md"
                        >
                            "Insights"
                        </a>
                        <a
                            href=preview_href
                            target="_blank"
                            class="p-3 rounded-lg bg-gray-100 hover:bg-gray-200 text-md"
                        >
                            "Preview"
                        </a>
                        <button
                            on:click=move |_| show_embed.set(true)
                            class="p-3 rounded-lg bg-purple-200 hover:bg-purple-300 text-md"
                        >
                            "Embed"
                        </button>
                    </div>
                </div>

                <ChatPanel user_id=user_id transcript=transcript />
            </div>

            <Show when=move || show_embed.get()>
                <EmbedPopup user_id=embed_user.clone() on_close=move || show_embed.set(false) />
            </Show>
        </div>
    }
}

/// Shown on the studio route without a session
#[component]
fn SignInPrompt() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar />
            <div class="flex-1 flex flex-col items-center justify-center gap-6 text-center">
                <h1 class="text-4xl font-bold">"Your studio is waiting"</h1>
                <p class="text-[#656D7A]">"Sign in to upload content and build your chatbot."</p>
                <a
                    href=AppRoute::SignIn.path()
                    class="rounded-full px-6 py-2 bg-[#837FFC] text-white text-sm"
                >
                    "Sign In"
                </a>
            </div>
        </div>
    }
}
