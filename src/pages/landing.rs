//! Home/landing page

use embedchat_core::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{Footer, Navbar};

const FEATURES: [(&str, &str); 3] = [
    ("Natural Conversations", "Engaging responses that feel human-like"),
    ("Lightning Fast", "Instant responses to keep your users engaged"),
    ("Custom Knowledge Base", "Enhance responses with your own documents and data"),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Upload Your Content",
        "Simply upload your documents, FAQs, or knowledge base. We'll process and index your content automatically.",
    ),
    (
        "Train Your Bot",
        "Our platform uses advanced AI technology to create a chatbot that understands your content and can answer questions.",
    ),
    (
        "Embed Anywhere",
        "Get a simple embed code to add your chatbot to any website, just like embedding a YouTube video.",
    ),
];

/// Marketing page with calls to action leading to sign-up
#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let start_today = move |_: leptos::ev::MouseEvent| navigate(&AppRoute::SignUp.path(), Default::default());

    view! {
        <div class="min-h-screen flex flex-col bg-[#FBF7FF]">
            <Navbar purple=true />

            // Hero
            <section class="flex items-center justify-center px-10">
                <div class="flex w-full max-w-6xl space-x-10">
                    <div class="flex-1 flex flex-col items-start space-y-4">
                        <h1 class="text-5xl font-bold leading-snug">
                            "Add AI Chat to Your"
                            <br />
                            "Website in Minutes"
                        </h1>
                        <p class="text-sm text-[#656D7A]">"Create custom AI chatbots trained on your content."</p>
                        <p class="text-sm text-[#656D7A]">"Embed them anywhere. No coding required."</p>
                        <div class="flex space-x-4 mt-6">
                            <button
                                on:click=start_today.clone()
                                class="w-48 px-6 py-3 bg-white text-[#837FFC] text-sm rounded-full border border-[#837FFC] hover:border-black"
                            >
                                "Get Started For Free"
                            </button>
                            <button class="w-48 px-6 py-3 bg-[#837FFC] text-white text-sm rounded-full border border-transparent hover:border-black">
                                "View Demo"
                            </button>
                        </div>
                    </div>
                    <div class="flex-1 flex items-center justify-center bg-gray-200 h-72 border-2 border-dashed border-gray-400 rounded-lg">
                        <p class="text-gray-500 text-lg">"Demo Video Placeholder"</p>
                    </div>
                </div>
            </section>

            <section class="flex flex-col items-center px-10 text-center my-24">
                <h2 class="text-5xl font-bold">"See It In Action"</h2>
                <p class="mt-6 text-sm text-[#656D7A]">
                    "Our chatbots provide natural, engaging responses based on your content."
                </p>
            </section>

            <section class="flex items-center justify-center px-10 mb-24">
                <div class="flex w-full max-w-6xl space-x-10">
                    <div class="flex-1 bg-gray-200 flex items-center justify-center border-2 border-dashed border-gray-400 rounded-lg">
                        <p class="text-gray-500 text-lg">"Demo Functionality Placeholder"</p>
                    </div>
                    <div class="flex-1 space-y-16">
                        {FEATURES.iter().map(|(title, blurb)| view! {
                            <div class="flex flex-col">
                                <span class="text-md font-semibold">{*title}</span>
                                <span class="text-md text-gray-500">{*blurb}</span>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section class="flex flex-col items-center px-10 text-center mt-16">
                <h2 class="text-5xl">"How It Works"</h2>
                <p class="mt-4 text-md text-[#656D7A]">"Here's the heavy lifting we'll take care of for you"</p>
            </section>

            <section class="flex items-center justify-center mt-16">
                <div class="flex space-x-12 max-w-6xl w-full px-6">
                    {STEPS.iter().map(|(title, blurb)| view! {
                        <div class="flex-1 bg-[#E3E2FF] flex flex-col items-center justify-center rounded-lg p-6 min-h-[180px]">
                            <p class="font-bold text-xl text-[#837FFC]">{*title}</p>
                            <p class="text-center text-sm mt-3 text-[#837FFC]">{*blurb}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </section>

            <section class="flex flex-col items-center p-8 mt-36 mb-16">
                <h2 class="text-5xl font-bold my-8">"Ready to Get Started?"</h2>
                <p class="text-[#656D7A] mb-8 text-md text-center">
                    "Join thousands of websites already using our chatbots to engage their visitors and provide better support."
                </p>
                <button
                    on:click=start_today
                    class="w-60 px-6 py-2 bg-[#837FFC] text-white text-sm rounded-full border border-transparent hover:border-black"
                >
                    "Create Your Chatbot Now"
                </button>
            </section>

            <Footer />
        </div>
    }
}
