/*
[INPUT]:  Media URLs (remote or attachment:// references)
[OUTPUT]: Thumbnail, media gallery and file components
[POS]:    Data layer - message components
[UPDATE]: When media component fields or limits change
*/

use serde::Serialize;

use super::ComponentType;
use crate::validation::{
    ATTACHMENT_SCHEMES, MEDIA_SCHEMES, Validate, ValidationError, check_count,
    check_optional_length, validate_url_scheme,
};

pub const MAX_MEDIA_DESCRIPTION_LENGTH: usize = 1024;
pub const MAX_GALLERY_ITEMS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnfurledMediaItem {
    pub url: String,
}

impl UnfurledMediaItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Filename of an `attachment://` reference.
    pub(crate) fn attachment_name(&self) -> Option<&str> {
        self.url.strip_prefix("attachment://")
    }
}

/// Small image, usable alone or as a section accessory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thumbnail {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub media: UnfurledMediaItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub spoiler: bool,
}

impl Thumbnail {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: ComponentType::Thumbnail,
            media: UnfurledMediaItem::new(url),
            description: None,
            spoiler: false,
        }
    }

    pub fn set_media(&mut self, url: impl Into<String>) -> &mut Self {
        self.media = UnfurledMediaItem::new(url);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_spoiler(&mut self, spoiler: bool) -> &mut Self {
        self.spoiler = spoiler;
        self
    }

    pub(crate) fn attachment_name(&self) -> Option<&str> {
        self.media.attachment_name()
    }
}

impl Validate for Thumbnail {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_url_scheme("thumbnail.media.url", &self.media.url, MEDIA_SCHEMES)?;
        check_optional_length(
            "thumbnail.description",
            self.description.as_deref(),
            MAX_MEDIA_DESCRIPTION_LENGTH,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaGalleryItem {
    pub media: UnfurledMediaItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub spoiler: bool,
}

impl MediaGalleryItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            media: UnfurledMediaItem::new(url),
            description: None,
            spoiler: false,
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_spoiler(&mut self, spoiler: bool) -> &mut Self {
        self.spoiler = spoiler;
        self
    }
}

impl Validate for MediaGalleryItem {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_url_scheme("media_gallery.item.media.url", &self.media.url, MEDIA_SCHEMES)?;
        check_optional_length(
            "media_gallery.item.description",
            self.description.as_deref(),
            MAX_MEDIA_DESCRIPTION_LENGTH,
        )
    }
}

/// Grid of one to ten images or videos.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaGallery {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub items: Vec<MediaGalleryItem>,
}

impl Default for MediaGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaGallery {
    pub fn new() -> Self {
        Self {
            kind: ComponentType::MediaGallery,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: MediaGalleryItem) -> &mut Self {
        self.items.push(item);
        self
    }

    pub(crate) fn attachment_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| item.media.attachment_name())
    }
}

impl Validate for MediaGallery {
    fn validate(&self) -> Result<(), ValidationError> {
        check_count("media_gallery.items", self.items.len(), 1, MAX_GALLERY_ITEMS)?;
        self.items.validate()
    }
}

/// Displays an uploaded attachment; only `attachment://` references are accepted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct File {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub file: UnfurledMediaItem,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub spoiler: bool,
}

impl File {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: ComponentType::File,
            file: UnfurledMediaItem::new(url),
            spoiler: false,
        }
    }

    /// Reference an attachment of the same message by filename.
    pub fn attachment(filename: &str) -> Self {
        Self::new(format!("attachment://{filename}"))
    }

    pub fn set_spoiler(&mut self, spoiler: bool) -> &mut Self {
        self.spoiler = spoiler;
        self
    }

    pub(crate) fn attachment_name(&self) -> Option<&str> {
        self.file.attachment_name()
    }
}

impl Validate for File {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_url_scheme("file.file.url", &self.file.url, ATTACHMENT_SCHEMES)
    }
}
