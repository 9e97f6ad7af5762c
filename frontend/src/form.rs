//! View-model behind the upload form.
//!
//! [`InterviewForm`] owns the draft, the video preview, the status line and
//! the submitting flag. It knows nothing about the DOM: browser access goes
//! through [`ObjectUrls`] and [`UploadClient`], so the whole workflow runs
//! natively in tests.
//!
//! ```text
//! Idle ──begin_submit──▶ Submitting ──finish_submit──▶ Idle (+ status)
//!   │                                     ▲
//!   └─ validation / size error ───────────┘ (no request, stays Idle)
//! ```

use std::rc::Rc;

use crate::config::{ApiConfig, MAX_VIDEO_SIZE_BYTES, MAX_VIDEO_SIZE_MB};
use crate::error::{SubmitError, SubmitResult};
use crate::services::{send_interview, MultipartPayload, ObjectUrls, UploadClient, VideoPreview};
use crate::types::{DraftInterview, StatusMessage, TextField, VideoFile};

pub struct InterviewForm<U: ObjectUrls> {
    urls: Rc<U>,
    draft: DraftInterview<U::File>,
    preview: Option<VideoPreview<U>>,
    status: Option<StatusMessage>,
    submitting: bool,
}

impl<U: ObjectUrls> InterviewForm<U> {
    pub fn new(urls: U) -> Self {
        Self {
            urls: Rc::new(urls),
            draft: DraftInterview::default(),
            preview: None,
            status: None,
            submitting: false,
        }
    }

    pub fn draft(&self) -> &DraftInterview<U::File> {
        &self.draft
    }

    pub fn text(&self, field: TextField) -> &str {
        self.draft.text(field)
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.preview.as_ref().map(VideoPreview::url)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// All six fields are filled in. Only drives the submit button.
    pub fn is_submittable(&self) -> bool {
        self.draft.is_complete()
    }

    pub fn can_submit(&self) -> bool {
        self.is_submittable() && !self.submitting
    }

    /// Replace one text field. No validation happens here.
    pub fn set_text(&mut self, field: TextField, value: String) {
        self.draft.set_text(field, value);
    }

    /// Replace the selected video and its preview.
    pub fn select_video(&mut self, file: Option<U::File>) {
        // Revoke the old URL before creating the next one
        self.preview = None;

        if let Some(file) = &file {
            log::debug!("🎬 Video selected: {} ({} bytes)", file.file_name(), file.byte_size());
            match VideoPreview::acquire(&self.urls, file) {
                Ok(preview) => self.preview = Some(preview),
                Err(e) => log::warn!("{}", e),
            }
        }

        self.draft.video = file;
    }

    /// Release the preview when the view goes away.
    pub fn teardown(&mut self) {
        self.preview = None;
    }

    /// Validate the draft and enter the submitting state.
    ///
    /// On error the status line is updated and nothing should be sent.
    pub fn begin_submit(&mut self) -> SubmitResult<MultipartPayload<U::File>> {
        if let Err(e) = self.check_draft() {
            log::warn!("{}", e);
            self.status = Some(e.status_message());
            return Err(e);
        }

        let payload =
            MultipartPayload::from_draft(&self.draft).ok_or(SubmitError::Validation { field: "video" })?;

        self.submitting = true;
        self.status = None;

        Ok(payload)
    }

    /// Apply the outcome of a request started with [`Self::begin_submit`].
    pub fn finish_submit(&mut self, outcome: SubmitResult<()>) -> SubmitResult<()> {
        match &outcome {
            Ok(()) => {
                log::info!("✅ Interview uploaded");
                self.status = Some(StatusMessage::Uploaded);
                self.draft = DraftInterview::default();
                self.preview = None;
            }
            Err(e) => {
                log::error!("❌ Upload failed: {}", e);
                self.status = Some(e.status_message());
            }
        }

        self.submitting = false;
        outcome
    }

    /// Validate, send and apply the result in one go.
    pub async fn submit<C>(&mut self, client: &C, config: &ApiConfig) -> SubmitResult<()>
    where
        C: UploadClient<File = U::File>,
    {
        let payload = self.begin_submit()?;
        log::info!("📤 Uploading interview...");
        let outcome = send_interview(client, config, payload).await;
        self.finish_submit(outcome)
    }

    fn check_draft(&self) -> SubmitResult<()> {
        if let Some(field) = self.draft.missing_field() {
            return Err(SubmitError::Validation { field });
        }

        if let Some(video) = &self.draft.video {
            let size = video.byte_size();
            if size > MAX_VIDEO_SIZE_BYTES {
                return Err(SubmitError::SizeLimit {
                    size,
                    limit_mb: MAX_VIDEO_SIZE_MB,
                });
            }
        }

        Ok(())
    }
}
