/*
[INPUT]:  Execute-webhook schema definitions and serde requirements
[OUTPUT]: Typed Rust structs with serialization and validation
[POS]:    Data layer - message model
[UPDATE]: When the schema changes or new types are added
*/

pub mod attachment;
pub mod embed;
pub mod flags;
pub mod mentions;
pub mod responses;
pub mod webhook;

pub use attachment::{Attachment, AttachmentMetadata, SPOILER_PREFIX};
pub use embed::{Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedThumbnail};
pub use flags::MessageFlags;
pub use mentions::{AllowedMentionType, AllowedMentions};
pub use responses::{ApiErrorBody, MessageAttachment, RateLimitBody, WebhookMessage};
pub use webhook::{Webhook, WebhookPayload};
