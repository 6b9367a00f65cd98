//! Top navigation bar

use embedchat_core::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::sign_out;
use crate::state::AppState;

/// Site navigation
#[component]
pub fn Navbar(
    /// Drop the bottom margin (pages that start with their own header)
    #[prop(optional)]
    no_margin: bool,
    /// Use the tinted background of the landing page
    #[prop(optional)]
    purple: bool,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let is_auth = Signal::derive(move || state.is_authenticated());

    view! {
        <nav class=nav_class(purple, no_margin)>
            <a href=AppRoute::Landing.path() class="flex items-center">
                <img src="/assets/mascot.svg" alt="Mascot" class="h-12 w-auto" />
            </a>

            <div class="text-xl font-semibold space-x-6">
                <button class="text-sm antialiased bg-[#F1F0FF] px-2 py-2 rounded-lg">"Product"</button>
                <button class="text-sm antialiased">"Pricing"</button>
                <button class="text-sm antialiased">"Contact"</button>

                {move || {
                    let navigate = navigate.clone();
                    if is_auth.get() {
                        view! {
                            <a href=AppRoute::Studio.path() class="text-sm antialiased">"Studio"</a>
                            <a href=AppRoute::Insights.path() class="text-sm antialiased">"Insights"</a>
                            <button
                                on:click=move |_| {
                                    sign_out(state);
                                    navigate(&AppRoute::Landing.path(), Default::default());
                                }
                                class="rounded-full px-5 py-2 bg-white text-sm text-[#837FFC] border border-[#837FFC] hover:text-white hover:bg-[#837FFC] antialiased"
                            >
                                "Sign Out"
                            </button>
                        }.into_any()
                    } else {
                        let navigate_signup = navigate.clone();
                        view! {
                            <button
                                on:click=move |_| navigate(&AppRoute::SignIn.path(), Default::default())
                                class="rounded-full px-5 py-2 bg-white text-sm text-[#837FFC] border border-[#837FFC] hover:text-white hover:bg-[#837FFC] antialiased"
                            >
                                "Sign In"
                            </button>
                            <button
                                on:click=move |_| navigate_signup(&AppRoute::SignUp.path(), Default::default())
                                class="rounded-full px-5 py-2 bg-[#837FFC] text-sm text-white border border-transparent hover:text-[#837FFC] hover:bg-white hover:border-[#837FFC] antialiased"
                            >
                                "Try it for Free"
                            </button>
                        }.into_any()
                    }
                }}
            </div>
        </nav>
    }
}

fn nav_class(purple: bool, no_margin: bool) -> String {
    format!(
        "w-full h-24 {} flex items-center justify-between px-6 py-6 {} border-b",
        if purple { "bg-[#FBF7FF]" } else { "bg-white" },
        if no_margin { "" } else { "mb-16" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_tint() {
        let class = nav_class(true, false);
        assert!(class.contains("bg-[#FBF7FF]"));
        assert!(!class.contains("bg-white"));
        assert!(class.contains("mb-16"));
    }

    #[test]
    fn test_plain_without_margin() {
        let class = nav_class(false, true);
        assert!(class.contains("bg-white"));
        assert!(!class.contains("mb-16"));
    }
}
