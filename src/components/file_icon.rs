//! Icon for a file reference

use embedchat_core::FileKind;
use leptos::prelude::*;

/// Outline icon chosen by [`FileKind`]
#[component]
pub fn FileIcon(kind: FileKind) -> impl IntoView {
    let path = match kind {
        FileKind::Image => "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z",
        FileKind::Video => "M15 10l4.553-2.276A1 1 0 0121 8.618v6.764a1 1 0 01-1.447.894L15 14M5 18h8a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v8a2 2 0 002 2z",
        FileKind::Pdf => "M7 21h10a2 2 0 002-2V9.414a1 1 0 00-.293-.707l-5.414-5.414A1 1 0 0012.586 3H7a2 2 0 00-2 2v14a2 2 0 002 2zM9 13h6M9 17h4",
        FileKind::Other => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
    };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="w-12 h-12 text-gray-700"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="1.5"
            aria-label=kind.label()
        >
            <path stroke-linecap="round" stroke-linejoin="round" d=path />
        </svg>
    }
}
