//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Draft Types** - the interview being composed
//! - **File Types** - the selected video
//! - **Status Types** - the status line shown above the form

use std::fmt;

use crate::config::MAX_VIDEO_SIZE_MB;

// =============================================================================
// Draft Types
// =============================================================================

/// The five free-text fields of an interview.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    TitleEs,
    TitleEn,
    DescriptionEs,
    DescriptionEn,
    /// ISO-8601 date (`YYYY-MM-DD`) as produced by the date picker.
    Date,
}

impl TextField {
    /// Every text field, in multipart order.
    pub const ALL: [TextField; 5] = [
        TextField::TitleEs,
        TextField::TitleEn,
        TextField::DescriptionEs,
        TextField::DescriptionEn,
        TextField::Date,
    ];

    /// Name of the multipart part carrying this field.
    pub fn part_name(&self) -> &'static str {
        match self {
            TextField::TitleEs => "tituloES",
            TextField::TitleEn => "tituloEN",
            TextField::DescriptionEs => "descripcionES",
            TextField::DescriptionEn => "descripcionEN",
            TextField::Date => "fechaISO",
        }
    }

    /// Input placeholder. The date picker has none.
    pub fn placeholder(&self) -> &'static str {
        match self {
            TextField::TitleEs => "Título ES",
            TextField::TitleEn => "Título EN",
            TextField::DescriptionEs => "Descripción ES",
            TextField::DescriptionEn => "Descripción EN",
            TextField::Date => "",
        }
    }
}

/// Multipart part name of the video file.
pub const VIDEO_PART: &str = "video";

/// An interview being composed, before submission.
///
/// Lives only in memory; reset to empty after a successful upload.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftInterview<F> {
    pub title_es: String,
    pub title_en: String,
    pub description_es: String,
    pub description_en: String,
    pub date: String,
    pub video: Option<F>,
}

impl<F> Default for DraftInterview<F> {
    fn default() -> Self {
        Self {
            title_es: String::new(),
            title_en: String::new(),
            description_es: String::new(),
            description_en: String::new(),
            date: String::new(),
            video: None,
        }
    }
}

impl<F> DraftInterview<F> {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::TitleEs => &self.title_es,
            TextField::TitleEn => &self.title_en,
            TextField::DescriptionEs => &self.description_es,
            TextField::DescriptionEn => &self.description_en,
            TextField::Date => &self.date,
        }
    }

    pub fn set_text(&mut self, field: TextField, value: String) {
        let slot = match field {
            TextField::TitleEs => &mut self.title_es,
            TextField::TitleEn => &mut self.title_en,
            TextField::DescriptionEs => &mut self.description_es,
            TextField::DescriptionEn => &mut self.description_en,
            TextField::Date => &mut self.date,
        };
        *slot = value;
    }

    /// Part name of the first empty field, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        TextField::ALL
            .iter()
            .find(|field| self.text(**field).is_empty())
            .map(TextField::part_name)
            .or_else(|| self.video.is_none().then_some(VIDEO_PART))
    }

    /// True when all six fields are filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

// =============================================================================
// File Types
// =============================================================================

/// A file handle picked by the user.
pub trait VideoFile: Clone {
    /// Size in bytes.
    fn byte_size(&self) -> u64;

    /// Original file name, forwarded in the multipart part.
    fn file_name(&self) -> String;
}

impl VideoFile for web_sys::File {
    fn byte_size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }

    fn file_name(&self) -> String {
        web_sys::File::name(self)
    }
}

// =============================================================================
// Status Types
// =============================================================================

/// Message shown in the status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMessage {
    /// The interview was accepted by the server.
    Uploaded,
    /// Configuration, network or server failure.
    UploadFailed,
    /// At least one field is empty.
    MissingFields,
    /// The video is over the size ceiling.
    VideoTooLarge { limit_mb: u64 },
}

impl StatusMessage {
    pub fn too_large() -> Self {
        StatusMessage::VideoTooLarge {
            limit_mb: MAX_VIDEO_SIZE_MB,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, StatusMessage::Uploaded)
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        if self.is_success() {
            "status status-success"
        } else {
            "status status-error"
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Uploaded => write!(f, "✅ Entrevista subida correctamente"),
            StatusMessage::UploadFailed => write!(f, "❌ Error al subir la entrevista"),
            StatusMessage::MissingFields => {
                write!(f, "Todos los campos son obligatorios, incluido el video")
            }
            StatusMessage::VideoTooLarge { limit_mb } => {
                write!(f, "El video supera el tamaño máximo de {}MB", limit_mb)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeVideo;

    #[test]
    fn test_missing_field_order() {
        let mut draft = DraftInterview::<FakeVideo>::default();
        assert_eq!(draft.missing_field(), Some("tituloES"));

        for field in TextField::ALL {
            draft.set_text(field, "x".into());
        }
        assert_eq!(draft.missing_field(), Some("video"));
        assert!(!draft.is_complete());

        draft.video = Some(FakeVideo::new("a.mp4", 1));
        assert!(draft.is_complete());

        draft.set_text(TextField::DescriptionEn, String::new());
        assert_eq!(draft.missing_field(), Some("descripcionEN"));
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut draft = DraftInterview::<FakeVideo>::default();
        for field in TextField::ALL {
            draft.set_text(field, " ".into());
        }
        draft.video = Some(FakeVideo::new("a.mp4", 1));
        assert!(draft.is_complete());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            StatusMessage::too_large().to_string(),
            "El video supera el tamaño máximo de 500MB"
        );
        assert!(StatusMessage::Uploaded.to_string().starts_with('✅'));
        assert!(StatusMessage::UploadFailed.to_string().starts_with('❌'));
        assert_eq!(StatusMessage::Uploaded.css_class(), "status status-success");
        assert_eq!(StatusMessage::MissingFields.css_class(), "status status-error");
    }
}
