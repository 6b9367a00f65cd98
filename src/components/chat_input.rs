//! Chat input component

use leptos::prelude::*;

/// Single-line message box with a send button; Enter submits
#[component]
pub fn ChatInput(
    /// Current input value
    value: RwSignal<String>,
    /// Called when user submits
    on_submit: impl Fn() + 'static + Clone,
    /// Whether input is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Type your message here...")]
    placeholder: &'static str,
) -> impl IntoView {
    // Handle key press
    let on_keydown = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                if !disabled.get() && !value.get().trim().is_empty() {
                    on_submit();
                }
            }
        }
    };

    // Handle button click
    let on_button_click = move |_| {
        if !value.get().trim().is_empty() {
            on_submit();
        }
    };

    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <div class="flex items-center mt-4 border-t border-gray-200 pt-4 pb-4">
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=on_keydown
                placeholder=placeholder
                class="w-full p-2 border border-gray-300 bg-[#E0E0E0] rounded-md focus:outline-none text-sm"
            />
            <button
                on:click=on_button_click
                disabled=move || disabled.get() || is_empty.get()
                class="ml-2 p-2 text-purple-500 hover:text-purple-700 disabled:text-gray-400 disabled:cursor-not-allowed"
                title="Send"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="w-5 h-5"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </div>
    }
}
