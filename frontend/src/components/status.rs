//! Status line component

use leptos::*;
use crate::StatusMessage;

#[component]
pub fn StatusLine(status: Signal<Option<StatusMessage>>) -> impl IntoView {
    move || {
        status.get().map(|message| {
            view! { <p class=message.css_class()>{message.to_string()}</p> }
        })
    }
}
