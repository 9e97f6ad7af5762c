//! UI Components for the interview upload panel.
//!
//! - [`UploadSection`] - the interview form, its preview and submit button
//! - [`StatusLine`] - success / error message above the form
//! - [`VideoPreviewPlayer`] - inline player for the selected video

mod upload;
mod status;
mod preview;

pub use upload::*;
pub use status::*;
pub use preview::*;
