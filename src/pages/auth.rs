//! Sign-in / sign-up pages

use embedchat_core::{AppRoute, Error};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::api::{report_error, sign_in, sign_up};
use crate::auth::sign_in_with_popup;
use crate::components::LoadingSpinner;
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    SignUp,
}

#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <AuthScreen mode=AuthMode::SignIn /> }
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! { <AuthScreen mode=AuthMode::SignUp /> }
}

/// Split-screen form shared by both pages
#[component]
fn AuthScreen(mode: AuthMode) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let is_sign_up = mode == AuthMode::SignUp;
    let page_title = if is_sign_up { "Sign up - Embedchat" } else { "Sign in - Embedchat" };
    let switch_href = if is_sign_up { AppRoute::SignIn.path() } else { AppRoute::SignUp.path() };

    // Form state
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    // Popup and form sign-ins both land here once the store has a user
    Effect::new(move |_| {
        if state.is_authenticated() {
            navigate(&AppRoute::Studio.path(), Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_val = name.get();
        let email_val = email.get();
        let password_val = password.get();
        let endpoints = state.endpoints();

        spawn_local(async move {
            is_loading.set(true);

            let result = if is_sign_up {
                sign_up(&endpoints, &name_val, &email_val, &password_val).await
            } else {
                sign_in(&endpoints, &email_val, &password_val).await
            };

            is_loading.set(false);

            match result {
                Ok(Some(user)) => state.set_user(Some(user)),
                Ok(None) => report_error(
                    if is_sign_up { "Error signing up" } else { "Error signing in" },
                    &Error::Auth("Invalid credentials".to_string()),
                ),
                Err(e) => report_error(
                    if is_sign_up { "Error signing up" } else { "Error signing in" },
                    &e,
                ),
            }
        });
    };

    view! {
        <Title text=page_title />
        <div class="flex h-screen">
            <div class="w-5/12 bg-[#FBF7FF] flex flex-col justify-center items-center text-center">
                <h1 class="text-7xl font-bold -mt-2 leading-tight">
                    <span>"Your Ideas,"</span>
                    <br />
                    <span>"Amplified"</span>
                </h1>
                <p class="text-2xl font-semibold mb-12 mt-6 text-[#656D7A]">
                    "Content-first AI that gives you peace of mind"
                </p>

                <button
                    type="button"
                    on:click=move |_| sign_in_with_popup(state)
                    class="w-2/3 p-2 bg-[#837FFC] text-white rounded-lg border border-transparent flex items-center justify-center"
                >
                    {if is_sign_up { "Sign Up with Google" } else { "Sign In with Google" }}
                </button>

                <form on:submit=on_submit class="w-2/3 flex flex-col items-center mt-8">
                    {is_sign_up.then(|| view! {
                        <div class="w-full mb-4">
                            <p class="mb-1 text-left text-xs font-sans font-semibold">"Name"</p>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                placeholder="Your name"
                                required=true
                                class="w-full p-2 mb-4 border border-gray-300 rounded-lg"
                            />
                        </div>
                    })}

                    <div class="w-full mb-4">
                        <p class="mb-1 text-left text-xs font-sans font-semibold">"Email"</p>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            placeholder="you@example.com"
                            required=true
                            class="w-full p-2 mb-4 border border-gray-300 rounded-lg"
                        />
                    </div>

                    <div class="w-full mb-4">
                        <p class="mb-1 text-left text-xs font-sans font-semibold">"Password"</p>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            placeholder="••••••••"
                            required=true
                            class="w-full p-2 mb-4 border border-gray-300 rounded-lg"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="w-full p-2 bg-[#837FFC] text-white rounded-lg border border-transparent hover:border-black flex items-center justify-center gap-2 disabled:opacity-60"
                    >
                        <Show when=move || is_loading.get()>
                            <LoadingSpinner size="w-4 h-4" />
                        </Show>
                        {if is_sign_up { "Sign Up" } else { "Sign In" }}
                    </button>
                </form>

                <p class="mt-6 text-sm text-[#656D7A]">
                    {if is_sign_up { "Already have an account? " } else { "Don't have an account? " }}
                    <a
                        href=switch_href
                        class="text-[#837FFC] font-semibold"
                    >
                        {if is_sign_up { "Sign in" } else { "Sign up" }}
                    </a>
                </p>
            </div>

            <div class="w-7/12 bg-white flex items-center justify-center">
                <div class="w-3/4 h-3/4 bg-gray-300 flex items-center justify-center border-2 border-dashed border-gray-500 rounded-lg">
                    <p class="text-gray-600 text-lg">"Video Placeholder"</p>
                </div>
            </div>
        </div>
    }
}
