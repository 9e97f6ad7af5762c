//! Application configuration.
//!
//! Centralized configuration for the interview upload panel. The upload
//! endpoint is baked in at build time from the `API_URL` environment
//! variable (e.g. `API_URL=https://api.example.com/entrevistas trunk build`).

use crate::error::{SubmitError, SubmitResult};

/// Maximum video size, in megabytes.
pub const MAX_VIDEO_SIZE_MB: u64 = 500;

/// Maximum video size, in bytes (500 MiB).
pub const MAX_VIDEO_SIZE_BYTES: u64 = MAX_VIDEO_SIZE_MB * 1024 * 1024;

/// DOM id of the native file input, cleared after a successful upload.
pub const VIDEO_INPUT_ID: &str = "videoInput";

/// Where interviews are sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    api_url: Option<String>,
}

impl ApiConfig {
    pub fn new(api_url: Option<impl Into<String>>) -> Self {
        Self {
            api_url: api_url.map(Into::into),
        }
    }

    /// Reads the endpoint captured from `API_URL` when the crate was built.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("API_URL"))
    }

    /// Resolve the upload endpoint.
    ///
    /// An unset or empty URL is a configuration error. It only surfaces when
    /// a submission is attempted; the form itself renders without it.
    pub fn endpoint(&self) -> SubmitResult<&str> {
        match self.api_url.as_deref() {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(SubmitError::Configuration),
        }
    }
}
