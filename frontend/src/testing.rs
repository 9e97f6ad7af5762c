//! In-memory stand-ins for the browser services, used by unit tests.

use std::cell::{Cell, RefCell};

use crate::error::PreviewError;
use crate::services::{FormPart, MultipartPayload, ObjectUrls, UploadClient};
use crate::types::VideoFile;

#[derive(Clone, Debug, PartialEq)]
pub struct FakeVideo {
    pub name: String,
    pub size: u64,
}

impl FakeVideo {
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }
}

impl VideoFile for FakeVideo {
    fn byte_size(&self) -> u64 {
        self.size
    }

    fn file_name(&self) -> String {
        self.name.clone()
    }
}

/// Hands out `blob:fake/N` URLs and tracks which ones are still live.
#[derive(Debug, Default)]
pub struct FakeObjectUrls {
    fail: bool,
    next_id: Cell<usize>,
    live: RefCell<Vec<String>>,
    revoked: Cell<usize>,
}

impl FakeObjectUrls {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn live(&self) -> Vec<String> {
        self.live.borrow().clone()
    }

    pub fn revoked_count(&self) -> usize {
        self.revoked.get()
    }
}

impl ObjectUrls for FakeObjectUrls {
    type File = FakeVideo;

    fn create_object_url(&self, file: &FakeVideo) -> Result<String, PreviewError> {
        if self.fail {
            return Err(PreviewError(format!("cannot preview {}", file.name)));
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let url = format!("blob:fake/{}", id);
        self.live.borrow_mut().push(url.clone());
        Ok(url)
    }

    fn revoke_object_url(&self, url: &str) {
        self.live.borrow_mut().retain(|live| live != url);
        self.revoked.set(self.revoked.get() + 1);
    }
}

/// A request captured by [`FakeClient`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub parts: Vec<FormPart<FakeVideo>>,
}

/// Records every POST and answers with a scripted status or transport error.
#[derive(Debug)]
pub struct FakeClient {
    response: Result<u16, String>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl FakeClient {
    pub fn responding(status: u16) -> Self {
        Self {
            response: Ok(status),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            response: Err("connection refused".to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }
}

impl UploadClient for FakeClient {
    type File = FakeVideo;

    async fn post_multipart(
        &self,
        url: &str,
        payload: MultipartPayload<FakeVideo>,
    ) -> Result<u16, String> {
        self.requests.borrow_mut().push(RecordedRequest {
            url: url.to_string(),
            parts: payload.into_parts(),
        });
        self.response.clone()
    }
}
