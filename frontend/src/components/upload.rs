//! Interview upload form.
//!
//! Binds an [`InterviewForm`] to the DOM: every keystroke and file pick goes
//! straight into the view-model, and submission runs in `spawn_local` so the
//! page stays responsive while the video is sent.

use leptos::html::Input;
use leptos::*;
use web_sys::{Event, HtmlInputElement, SubmitEvent};

use crate::services::{send_interview, BrowserObjectUrls, BrowserUploadClient};
use crate::{ApiConfig, InterviewForm, StatusLine, TextField, VideoPreviewPlayer, VIDEO_INPUT_ID};

type BrowserForm = InterviewForm<BrowserObjectUrls>;

#[component]
pub fn UploadSection(config: ApiConfig) -> impl IntoView {
    let form = create_rw_signal(BrowserForm::new(BrowserObjectUrls));
    let video_input = create_node_ref::<Input>();

    // Revoke the preview URL when the form is unmounted
    on_cleanup(move || {
        form.try_update(BrowserForm::teardown);
    });

    let on_video_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        form.update(|f| f.select_video(file));
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // Validation and size errors are already on the status line
        let Some(Ok(payload)) = form.try_update(BrowserForm::begin_submit) else {
            return;
        };

        let config = config.clone();
        spawn_local(async move {
            log::info!("📤 Uploading interview...");
            let outcome = send_interview(&BrowserUploadClient, &config, payload).await;

            let uploaded = form
                .try_update(|f| f.finish_submit(outcome).is_ok())
                .unwrap_or(false);

            if uploaded {
                if let Some(input) = video_input.get_untracked() {
                    input.set_value("");
                }
            }
        });
    };

    let can_submit = move || form.with(BrowserForm::can_submit);

    view! {
        <div class="upload-page">
            <div class="upload-card">
                <h1>"Subir nueva entrevista"</h1>

                <StatusLine status=Signal::derive(move || form.with(|f| f.status().cloned()))/>

                <form class="upload-form" on:submit=on_submit>
                    <FieldInput form=form field=TextField::TitleEs input_type="text"/>
                    <FieldInput form=form field=TextField::TitleEn input_type="text"/>
                    <FieldTextarea form=form field=TextField::DescriptionEs/>
                    <FieldTextarea form=form field=TextField::DescriptionEn/>
                    <FieldInput form=form field=TextField::Date input_type="date"/>

                    <input
                        type="file"
                        id=VIDEO_INPUT_ID
                        accept="video/*"
                        class="field"
                        required=true
                        node_ref=video_input
                        on:change=on_video_change
                    />

                    <VideoPreviewPlayer
                        src=Signal::derive(move || form.with(|f| f.preview_url().map(str::to_owned)))
                    />

                    <button
                        type="submit"
                        class="submit-button"
                        class:disabled=move || !can_submit()
                        disabled=move || !can_submit()
                    >
                        {move || {
                            if form.with(BrowserForm::is_submitting) {
                                "Subiendo..."
                            } else {
                                "Subir entrevista"
                            }
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Single-line input bound to one text field.
#[component]
fn FieldInput(form: RwSignal<BrowserForm>, field: TextField, input_type: &'static str) -> impl IntoView {
    view! {
        <input
            type=input_type
            class="field"
            placeholder=field.placeholder()
            prop:value=move || form.with(|f| f.text(field).to_string())
            on:input=move |ev| form.update(|f| f.set_text(field, event_target_value(&ev)))
        />
    }
}

/// Multi-line input bound to one text field.
#[component]
fn FieldTextarea(form: RwSignal<BrowserForm>, field: TextField) -> impl IntoView {
    view! {
        <textarea
            class="field"
            placeholder=field.placeholder()
            prop:value=move || form.with(|f| f.text(field).to_string())
            on:input=move |ev| form.update(|f| f.set_text(field, event_target_value(&ev)))
        ></textarea>
    }
}
