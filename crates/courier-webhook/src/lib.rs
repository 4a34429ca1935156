/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public courier-webhook crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod components;
pub mod format;
pub mod http;
pub mod types;
pub mod validation;

// Re-export commonly used types from http
pub use http::{ClientConfig, Result, WebhookClient, WebhookError};

// Re-export all types
pub use types::*;

pub use components::{
    ActionRow, Component, ComponentType, Container, File, LinkButton, MediaGallery,
    MediaGalleryItem, PartialEmoji, Section, SectionAccessory, Separator, SeparatorSpacing,
    TextDisplay, Thumbnail,
};
pub use format::{Markdown, Timestamp, TimestampStyle};
pub use validation::{Color, TimestampValue, Validate, ValidationError};
