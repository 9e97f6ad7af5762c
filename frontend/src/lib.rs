//! Entrevistas - interview upload panel (Rust/Leptos)
//!
//! A WebAssembly frontend for submitting bilingual interviews (titles,
//! descriptions, date and a video) to the interviews API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (document metadata, font, light/dark theme)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadSection                                              │
//! │  ├── StatusLine                                             │
//! │  ├── text fields, date picker, video picker                 │
//! │  ├── VideoPreviewPlayer                                     │
//! │  └── submit button                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Draft, text fields, status messages
//! - [`form`] - View-model owning all form state and the submit workflow
//! - [`components`] - UI components
//! - [`services`] - Browser I/O (multipart upload, object URLs)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod types;
pub mod form;
pub mod components;
pub mod services;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Errors
pub use error::{PreviewError, SubmitError, SubmitResult};

// Types
pub use types::{DraftInterview, StatusMessage, TextField, VideoFile, VIDEO_PART};

// View-model
pub use form::InterviewForm;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Shell
// =============================================================================

const MERRIWEATHER_URL: &str =
    "https://fonts.googleapis.com/css2?family=Merriweather:wght@400&display=swap";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="es"/>
        <Title text="User Entrevistas"/>
        <Meta name="description" content="Panel privado para subir entrevistas"/>
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
        <Link rel="stylesheet" href=MERRIWEATHER_URL/>
        <Body class="app-body"/>

        <Router>
            <main>
                <Routes>
                    <Route path="/" view=InterviewPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn InterviewPage() -> impl IntoView {
    view! { <UploadSection config=ApiConfig::from_build_env()/> }
}
