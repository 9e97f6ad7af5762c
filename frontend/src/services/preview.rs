//! Playable references to a locally selected video.
//!
//! A [`VideoPreview`] owns one object URL and revokes it when dropped, so
//! replacing or clearing the preview can never leak the previous URL.

use std::rc::Rc;

use web_sys::Url;

use crate::error::PreviewError;
use crate::types::VideoFile;

/// Creates and revokes temporary URLs for local files.
pub trait ObjectUrls {
    type File: VideoFile;

    fn create_object_url(&self, file: &Self::File) -> Result<String, PreviewError>;

    fn revoke_object_url(&self, url: &str);
}

/// A live object URL for the selected video.
pub struct VideoPreview<U: ObjectUrls> {
    urls: Rc<U>,
    url: String,
}

impl<U: ObjectUrls> VideoPreview<U> {
    pub fn acquire(urls: &Rc<U>, file: &U::File) -> Result<Self, PreviewError> {
        let url = urls.create_object_url(file)?;
        Ok(Self {
            urls: Rc::clone(urls),
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<U: ObjectUrls> Drop for VideoPreview<U> {
    fn drop(&mut self) {
        self.urls.revoke_object_url(&self.url);
    }
}

/// `URL.createObjectURL` / `URL.revokeObjectURL`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrls for BrowserObjectUrls {
    type File = web_sys::File;

    fn create_object_url(&self, file: &web_sys::File) -> Result<String, PreviewError> {
        Url::create_object_url_with_blob(file).map_err(|e| PreviewError(format!("{:?}", e)))
    }

    fn revoke_object_url(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Could not revoke preview URL {}: {:?}", url, e);
        }
    }
}
