//! HTTP service for sending interviews to the backend.

use gloo_net::http::Request;
use web_sys::FormData;

use crate::config::ApiConfig;
use crate::error::{SubmitError, SubmitResult};
use crate::types::{DraftInterview, TextField, VideoFile, VIDEO_PART};

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart<F> {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: F },
}

impl<F> FormPart<F> {
    pub fn name(&self) -> &'static str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Snapshot of a complete draft, ready to be encoded as `multipart/form-data`.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipartPayload<F> {
    parts: Vec<FormPart<F>>,
}

impl<F: VideoFile> MultipartPayload<F> {
    /// Five text parts followed by the video. `None` if no video is selected.
    pub fn from_draft(draft: &DraftInterview<F>) -> Option<Self> {
        let video = draft.video.clone()?;
        let mut parts: Vec<FormPart<F>> = TextField::ALL
            .iter()
            .map(|field| FormPart::Text {
                name: field.part_name(),
                value: draft.text(*field).to_string(),
            })
            .collect();
        parts.push(FormPart::File {
            name: VIDEO_PART,
            file: video,
        });
        Some(Self { parts })
    }
}

impl<F> MultipartPayload<F> {
    pub fn parts(&self) -> &[FormPart<F>] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart<F>> {
        self.parts
    }
}

/// Sends a multipart body and reports the HTTP status.
#[allow(async_fn_in_trait)]
pub trait UploadClient {
    type File: VideoFile;

    /// POST `payload` to `url`. `Err` means the request never got a response.
    async fn post_multipart(
        &self,
        url: &str,
        payload: MultipartPayload<Self::File>,
    ) -> Result<u16, String>;
}

/// Resolve the endpoint, send the interview and check the response status.
pub async fn send_interview<C: UploadClient>(
    client: &C,
    config: &ApiConfig,
    payload: MultipartPayload<C::File>,
) -> SubmitResult<()> {
    let url = config.endpoint()?;

    let status = client
        .post_multipart(url, payload)
        .await
        .map_err(SubmitError::Network)?;

    if !(200..300).contains(&status) {
        return Err(SubmitError::Upload { status });
    }

    Ok(())
}

/// `FormData` + `fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserUploadClient;

impl UploadClient for BrowserUploadClient {
    type File = web_sys::File;

    async fn post_multipart(
        &self,
        url: &str,
        payload: MultipartPayload<web_sys::File>,
    ) -> Result<u16, String> {
        let form_data = FormData::new().map_err(|e| format!("Failed to create FormData: {:?}", e))?;

        for part in payload.into_parts() {
            match part {
                FormPart::Text { name, value } => form_data
                    .append_with_str(name, &value)
                    .map_err(|e| format!("Failed to append {}: {:?}", name, e))?,
                FormPart::File { name, file } => form_data
                    .append_with_blob_and_filename(name, &file, &file.file_name())
                    .map_err(|e| format!("Failed to append {}: {:?}", name, e))?,
            }
        }

        // No explicit Content-Type: the browser adds the multipart boundary
        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| format!("Failed to build request: {}", e))?;

        let response = request
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeClient, FakeVideo};
    use futures::executor::block_on;

    fn complete_draft() -> DraftInterview<FakeVideo> {
        DraftInterview {
            title_es: "Hola".into(),
            title_en: "Hello".into(),
            description_es: "Desc ES".into(),
            description_en: "Desc EN".into(),
            date: "2024-05-01".into(),
            video: Some(FakeVideo::new("entrevista.mp4", 1024)),
        }
    }

    #[test]
    fn test_payload_parts() {
        let payload = MultipartPayload::from_draft(&complete_draft()).unwrap();
        let names: Vec<_> = payload.parts().iter().map(FormPart::name).collect();
        assert_eq!(
            names,
            ["tituloES", "tituloEN", "descripcionES", "descripcionEN", "fechaISO", "video"]
        );
        assert_eq!(
            payload.parts()[4],
            FormPart::Text {
                name: "fechaISO",
                value: "2024-05-01".into()
            }
        );
        assert_eq!(
            payload.parts()[5],
            FormPart::File {
                name: "video",
                file: FakeVideo::new("entrevista.mp4", 1024)
            }
        );
    }

    #[test]
    fn test_payload_requires_video() {
        let mut draft = complete_draft();
        draft.video = None;
        assert!(MultipartPayload::from_draft(&draft).is_none());
    }

    #[test]
    fn test_send_checks_status() {
        let config = ApiConfig::new(Some("https://api.test/entrevistas"));
        let payload = MultipartPayload::from_draft(&complete_draft()).unwrap();

        let client = FakeClient::responding(201);
        assert!(block_on(send_interview(&client, &config, payload.clone())).is_ok());

        let client = FakeClient::responding(500);
        let result = block_on(send_interview(&client, &config, payload.clone()));
        assert!(matches!(result, Err(SubmitError::Upload { status: 500 })));

        let client = FakeClient::unreachable();
        let result = block_on(send_interview(&client, &config, payload));
        assert!(matches!(result, Err(SubmitError::Network(_))));
    }

    #[test]
    fn test_missing_endpoint_sends_nothing() {
        let client = FakeClient::responding(200);
        let payload = MultipartPayload::from_draft(&complete_draft()).unwrap();
        let result = block_on(send_interview(&client, &ApiConfig::default(), payload));

        assert!(matches!(result, Err(SubmitError::Configuration)));
        assert!(client.requests().is_empty());
    }
}
