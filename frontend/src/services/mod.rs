//! Browser services used by the upload form.
//!
//! # Services
//!
//! - [`upload`] - multipart POST of an interview to the backend
//! - [`preview`] - object URLs for playing the selected video locally
//!
//! Both sit behind a trait ([`UploadClient`], [`ObjectUrls`]) so the form
//! logic can be exercised without a browser.

pub mod upload;
pub mod preview;

pub use upload::*;
pub use preview::*;
