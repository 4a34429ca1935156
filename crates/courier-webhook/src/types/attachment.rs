/*
[INPUT]:  File names and binary content (in memory or on disk)
[OUTPUT]: Attachment objects plus their multipart metadata
[POS]:    Data layer - file uploads
[UPDATE]: When attachment metadata fields or spoiler rules change
*/

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::http::{Result, WebhookError};
use crate::validation::{Validate, ValidationError, check_not_empty, check_optional_length};

/// Filenames starting with this prefix are rendered blurred.
pub const SPOILER_PREFIX: &str = "SPOILER_";
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// A file uploaded alongside the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub spoiler: bool,
    pub description: Option<String>,
}

/// Entry of the payload's `attachments` array, matched to `files[id]` by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentMetadata {
    pub id: usize,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let filename = filename.into();
        let spoiler = filename.starts_with(SPOILER_PREFIX);
        Self {
            filename,
            content: content.into(),
            spoiler,
            description: None,
        }
    }

    /// Read a file from disk, naming the attachment after the file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| WebhookError::Config(format!("{} has no file name", path.display())))?;
        let mut attachment = Self::new(filename, Vec::new());
        attachment.set_content_from_path(path)?;
        Ok(attachment)
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) -> &mut Self {
        self.filename = filename.into();
        if self.spoiler && !self.filename.starts_with(SPOILER_PREFIX) {
            self.filename.insert_str(0, SPOILER_PREFIX);
        }
        self
    }

    pub fn set_content(&mut self, content: impl Into<Vec<u8>>) -> &mut Self {
        self.content = content.into();
        self
    }

    pub fn set_content_from_path(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        self.content = fs::read(path).map_err(|source| WebhookError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self)
    }

    /// Toggle the spoiler blur, keeping the filename prefix in sync.
    pub fn set_spoiler(&mut self, spoiler: bool) -> &mut Self {
        self.spoiler = spoiler;
        if spoiler && !self.filename.starts_with(SPOILER_PREFIX) {
            self.filename.insert_str(0, SPOILER_PREFIX);
        } else if !spoiler {
            if let Some(stripped) = self.filename.strip_prefix(SPOILER_PREFIX) {
                self.filename = stripped.to_string();
            }
        }
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// MIME type guessed from the filename extension.
    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }

    /// `attachment://` reference usable from embeds and media components.
    pub fn reference(&self) -> String {
        format!("attachment://{}", self.filename)
    }

    pub(crate) fn metadata(&self, id: usize) -> AttachmentMetadata {
        AttachmentMetadata {
            id,
            filename: self.filename.clone(),
            description: self.description.clone(),
        }
    }
}

impl Validate for Attachment {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        check_not_empty("attachment.filename", &self.filename)?;
        check_optional_length(
            "attachment.description",
            self.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn spoiler_toggles_filename_prefix() {
        let mut attachment = Attachment::new("image.png", b"png".to_vec());
        assert!(!attachment.spoiler);

        attachment.set_spoiler(true);
        assert_eq!(attachment.filename, "SPOILER_image.png");

        attachment.set_spoiler(true);
        assert_eq!(attachment.filename, "SPOILER_image.png");

        attachment.set_spoiler(false);
        assert_eq!(attachment.filename, "image.png");
    }

    #[test]
    fn prefixed_name_starts_as_spoiler() {
        let attachment = Attachment::new("SPOILER_a.bin", vec![0u8; 4]);
        assert!(attachment.spoiler);
    }

    #[test]
    fn renaming_a_spoiler_keeps_it_blurred() {
        let mut attachment = Attachment::new("a.bin", vec![1]);
        attachment.set_spoiler(true).set_filename("new_file.bin");
        assert_eq!(attachment.filename, "SPOILER_new_file.bin");
    }

    #[test]
    fn content_type_is_guessed_from_extension() {
        assert_eq!(Attachment::new("a.png", vec![]).content_type(), "image/png");
        assert_eq!(Attachment::new("notes.txt", vec![]).content_type(), "text/plain");
        assert_eq!(
            Attachment::new("blob", vec![]).content_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("tempfile");
        file.write_all(b"hello").expect("write");

        let attachment = Attachment::from_path(file.path()).expect("read attachment");
        assert_eq!(attachment.content, b"hello");
        assert!(attachment.filename.ends_with(".txt"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Attachment::from_path("/definitely/not/here.bin").unwrap_err();
        assert!(matches!(err, WebhookError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.bin"));
    }

    #[test]
    fn validation_limits() {
        let mut attachment = Attachment::new("", vec![]);
        assert!(attachment.validate().is_err());

        attachment.set_filename("ok.txt").set_description("d".repeat(1025));
        assert!(matches!(
            attachment.validate(),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn metadata_serializes_without_empty_description() {
        let attachment = Attachment::new("a.txt", b"a".to_vec());
        assert_eq!(
            serde_json::to_value(attachment.metadata(3)).expect("serialize"),
            serde_json::json!({ "id": 3, "filename": "a.txt" })
        );
    }
}
