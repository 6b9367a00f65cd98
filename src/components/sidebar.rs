//! Sidebar component

use embedchat_core::files::ACCEPTED_EXTENSIONS;
use embedchat_core::{FileKind, FileLibrary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api::{load_files, report_error, upload_file};
use crate::components::{FileIcon, LoadingSpinner};
use crate::state::AppState;

/// Upload control and grid of the user's files
#[component]
pub fn Sidebar(
    /// Owner of the files
    user_id: String,
    /// Whether the sidebar is expanded
    show: RwSignal<bool>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let library = RwSignal::new(FileLibrary::default());
    let search = RwSignal::new(String::new());
    let uploading = RwSignal::new(0usize);

    load_files(state.endpoints(), user_id.clone(), library);

    let accept = ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(files) = input.files() else {
            return;
        };

        for i in 0..files.length() {
            let Some(file) = files.get(i) else { continue };
            let endpoints = state.endpoints();
            let user_id = user_id.clone();
            uploading.update(|n| *n += 1);

            spawn_local(async move {
                match upload_file(&endpoints, &user_id, &file).await {
                    Ok(()) => {
                        library.update(|l| l.record_upload(file.name(), file.type_()));
                        // pick up the stored URL and canonical type
                        load_files(endpoints, user_id, library);
                    }
                    Err(e) => report_error(&format!("Upload of {} failed", file.name()), &e),
                }
                uploading.update(|n| *n = n.saturating_sub(1));
            });
        }
        // allow selecting the same file again
        input.set_value("");
    };

    let toggle = move |_: web_sys::MouseEvent| show.update(|v| *v = !*v);

    view! {
        <Show
            when=move || show.get()
            fallback=move || view! {
                <div class="w-[6%] bg-[#FBF7FF] p-4 flex flex-col min-h-0">
                    <div class="flex justify-between items-center mb-4 p-2">
                        <SidebarToggle on_click=toggle />
                    </div>
                </div>
            }
        >
            <div class="w-[30%] bg-[#FBF7FF] p-4 flex flex-col min-h-0">
                <div class="flex justify-between items-center mb-4 p-2">
                    <SidebarToggle on_click=toggle />
                    <span class="text-sm text-gray-500">
                        {move || format!("{} files", library.with(FileLibrary::len))}
                    </span>
                </div>

                <div class="mb-4">
                    <input
                        type="text"
                        placeholder="Search Content..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                        class="w-full p-2 text-md border rounded-lg focus:outline-none text-gray-700 placeholder-gray-500 bg-[#E0E0E0]"
                    />
                </div>

                <div class="flex-grow overflow-y-auto p-4">
                    <div class="grid grid-cols-1 xl:grid-cols-2 2xl:grid-cols-3 gap-4">
                        {move || {
                            library.with(|l| l.filter(&search.get()))
                                .into_iter()
                                .map(|file| {
                                    let kind = FileKind::from_type_field(&file.file_type);
                                    let href = (!file.url.is_empty()).then(|| file.url.clone());
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            class="flex flex-col items-center space-y-2"
                                        >
                                            <FileIcon kind=kind />
                                            <span class="text-sm text-center break-all">{file.name}</span>
                                        </a>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </div>

                <label class="flex justify-center">
                    <input
                        type="file"
                        multiple=true
                        accept=accept.clone()
                        class="hidden"
                        on:change=on_change.clone()
                    />
                    <div class="flex justify-center items-center mt-4 w-3/4 p-3 rounded-lg cursor-pointer text-lg text-gray-600 bg-[#E0E0E0] hover:bg-gray-300 space-x-2 transition-colors duration-200">
                        <Show
                            when=move || { uploading.get() > 0 }
                            fallback=|| view! {
                                <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2">
                                    <path stroke-linecap="round" stroke-linejoin="round" d="M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-8l-4-4m0 0L8 8m4-4v12" />
                                </svg>
                            }
                        >
                            <LoadingSpinner size="w-6 h-6" />
                        </Show>
                        <span class="hidden lg:inline">"Upload Content"</span>
                    </div>
                </label>
            </div>
        </Show>
    }
}

/// Collapse/expand button
#[component]
fn SidebarToggle(on_click: impl Fn(web_sys::MouseEvent) + 'static) -> impl IntoView {
    view! {
        <button on:click=on_click class="cursor-pointer" title="Toggle sidebar">
            <svg xmlns="http://www.w3.org/2000/svg" class="w-8 h-8" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
                <rect x="3" y="4" width="18" height="16" rx="2" />
                <line x1="9" y1="4" x2="9" y2="20" />
            </svg>
        </button>
    }
}
