//! Insights page - what the uploaded content is made of and talks about

use embedchat_core::insights::MAX_TOPIC_SETTING;
use embedchat_core::{AppRoute, DataDistribution, TopicCarousel, TopicSettings};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::api::{data_distribution, key_topics, report_error};
use crate::components::{Footer, LoadingSpinner, Navbar, PieChart};
use crate::state::AppState;

#[component]
pub fn InsightsPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <Title text="Insights - Embedchat" />
        <div class="flex flex-col min-h-screen">
            <Navbar no_margin=true />

            <header class="text-center text-5xl font-bold my-6">"Insights"</header>

            {move || match state.user_id() {
                Some(user_id) => view! { <InsightsBody user_id=user_id /> }.into_any(),
                None => view! {
                    <div class="flex-1 flex items-center justify-center text-[#656D7A]">
                        <a href=AppRoute::SignIn.path() class="text-[#837FFC] font-semibold mr-1">"Sign in"</a>
                        " to see insights about your content."
                    </div>
                }.into_any(),
            }}

            <Footer />
        </div>
    }
}

#[component]
fn InsightsBody(user_id: String) -> impl IntoView {
    let state = expect_context::<AppState>();
    let settings = RwSignal::new(TopicSettings::default());
    let carousel = RwSignal::new(TopicCarousel::default());
    let distribution = RwSignal::new(Option::<DataDistribution>::None);

    // Key topics follow the selectors
    let topics_user = user_id.clone();
    Effect::new(move |_| {
        let requested = settings.get();
        let endpoints = state.endpoints();
        let user_id = topics_user.clone();
        spawn_local(async move {
            match key_topics(&endpoints, &user_id, requested).await {
                // drop answers for settings the user already moved away from
                Ok(topics) if settings.get_untracked() == requested => {
                    carousel.update(|c| c.set_slides(topics))
                }
                Ok(_) => tracing::debug!("Discarding stale key topics"),
                Err(e) => report_error("Error loading key topics", &e),
            }
        });
    });

    // Distribution is loaded once per page visit
    let endpoints = state.endpoints();
    spawn_local(async move {
        match data_distribution(&endpoints, &user_id).await {
            Ok(dist) => distribution.set(Some(dist)),
            Err(e) => report_error("Error loading data distribution", &e),
        }
    });

    view! {
        <div class="flex flex-1 min-h-[600px]">
            <div class="w-1/2 bg-gray-100 p-8 flex items-center justify-center">
                {move || match distribution.get() {
                    Some(dist) => view! { <PieChart distribution=dist /> }.into_any(),
                    None => view! {
                        <div class="flex items-center gap-2 text-gray-500">
                            <LoadingSpinner />
                            "Loading Pie Chart..."
                        </div>
                    }.into_any(),
                }}
            </div>

            <div class="w-1/2 flex flex-col items-center justify-center p-10 bg-gray-200">
                <h2 class="text-3xl text-purple-500 mb-4">"Key Topics"</h2>

                <div class="flex items-center mb-4 space-x-4">
                    <label class="text-lg">"Topics:"</label>
                    <SettingSelect
                        value=Signal::derive(move || settings.get().num_topics())
                        on_change=move |n| settings.update(|s| *s = s.with_topics(n))
                    />
                    <label class="text-lg">"Subtopics:"</label>
                    <SettingSelect
                        value=Signal::derive(move || settings.get().num_words())
                        on_change=move |n| settings.update(|s| *s = s.with_words(n))
                    />
                </div>

                <div class="flex items-center justify-center h-96 w-96 text-center text-xl bg-white shadow-lg rounded-md p-8">
                    {move || carousel.with(TopicCarousel::current)}
                </div>

                <div class="flex space-x-2 mt-4">
                    {move || {
                        let current = carousel.with(TopicCarousel::current_index);
                        (0..carousel.with(|c| c.slides().len())).map(|index| view! {
                            <button
                                on:click=move |_| carousel.update(|c| c.select(index))
                                class=format!(
                                    "h-2 w-2 rounded-full {}",
                                    if index == current { "bg-blue-500" } else { "bg-gray-400" }
                                )
                            ></button>
                        }).collect::<Vec<_>>()
                    }}
                </div>

                <p class="w-1/2 mt-8">
                    "Using natural language processing we determine the most frequently queried topics."
                </p>
            </div>
        </div>
    }
}

/// `1..=5` selector
#[component]
fn SettingSelect(
    value: Signal<u8>,
    on_change: impl Fn(u8) + 'static,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || value.get().to_string()
            on:change=move |ev| {
                if let Ok(n) = event_target_value(&ev).parse::<u8>() {
                    on_change(n);
                }
            }
            class="p-2 border rounded-md"
        >
            {(1..=MAX_TOPIC_SETTING).map(|n| view! {
                <option value=n.to_string()>{n}</option>
            }).collect::<Vec<_>>()}
        </select>
    }
}
