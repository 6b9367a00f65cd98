//! Embedchat web client - Leptos frontend
//!
//! Upload documents and media, chat with an assistant grounded in them,
//! and copy an embed snippet that hosts the same chat on any website.
//! All real work happens on the backend; this crate only renders pages
//! and issues requests.

pub mod api;
pub mod auth;
pub mod components;
pub mod pages;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{
    chat::ChatPage, insights::InsightsPage, landing::LandingPage, studio::StudioPage,
    auth::{SignInPage, SignUpPage},
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    // Profiles posted back by the sign-in popup land in the store
    auth::listen_for_popup(app_state);

    view! {
        <Title text="Embedchat" />
        <Router>
            <main class="min-h-screen bg-white text-gray-900">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/studio") view=StudioPage />
                    <Route path=path!("/signin") view=SignInPage />
                    <Route path=path!("/signup") view=SignUpPage />
                    <Route path=path!("/chat/:id") view=ChatPage />
                    <Route path=path!("/insights") view=InsightsPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-[#FBF7FF]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-[#837FFC] mb-4">"404"</h1>
                <p class="text-xl text-[#656D7A] mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-[#837FFC] text-white rounded-full font-medium hover:opacity-90 transition-opacity"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
