//! Inline player for the locally selected video.

use leptos::*;

/// Renders nothing until an object URL is available.
#[component]
pub fn VideoPreviewPlayer(src: Signal<Option<String>>) -> impl IntoView {
    move || {
        src.get().map(|src| {
            view! { <video class="video-preview" controls=true src=src></video> }
        })
    }
}
