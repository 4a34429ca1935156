/*
[INPUT]:  Webhook URL and message parts (content, embeds, components, attachments)
[OUTPUT]: Validated message with its JSON payload and query options
[POS]:    Data layer - the message sent by one webhook execution
[UPDATE]: When execute-webhook parameters or message-level rules change
*/

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;
use url::Url;

use crate::components::Component;
use crate::http::{Result, WebhookClient};
use crate::validation::{
    HTTP_SCHEMES, Validate, ValidationError, check_count, check_length, check_not_empty,
    check_optional_length, validate_optional_url, validate_url_scheme,
};

use super::attachment::{Attachment, AttachmentMetadata};
use super::embed::{self, Embed};
use super::flags::MessageFlags;
use super::mentions::AllowedMentions;
use super::responses::WebhookMessage;

pub const MAX_CONTENT_LENGTH: usize = 2000;
pub const MAX_USERNAME_LENGTH: usize = 80;
pub const MAX_EMBEDS: usize = 10;
pub const MAX_ATTACHMENTS: usize = 10;
pub const MAX_THREAD_NAME_LENGTH: usize = 100;
pub const MAX_APPLIED_TAGS: usize = 5;
pub const MAX_LEGACY_ROWS: usize = 5;
pub const MAX_TOP_LEVEL_COMPONENTS: usize = 10;
pub const MAX_TOTAL_COMPONENTS: usize = 40;
pub const MAX_COMPONENT_TEXT_LENGTH: usize = 4000;
/// Name of the attachment created when over-long content falls back to a file.
pub const FALLBACK_FILENAME: &str = "message.txt";

/// Substrings the endpoint refuses in webhook usernames.
const RESERVED_USERNAME_WORDS: &[&str] = &["clyde", "discord"];

/// One execute-webhook call: the destination plus the message to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Webhook {
    url: Url,
    pub content: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub tts: bool,
    pub embeds: Vec<Embed>,
    pub allowed_mentions: Option<AllowedMentions>,
    pub components: Vec<Component>,
    pub attachments: Vec<Attachment>,
    pub flags: MessageFlags,
    pub thread_name: Option<String>,
    pub applied_tags: Vec<String>,
    /// Ask the endpoint to return the created message.
    pub wait: bool,
    /// Post into an existing thread of the webhook's channel.
    pub thread_id: Option<String>,
}

/// JSON body (or `payload_json` part) of an execution.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    tts: bool,
    #[serde(skip_serializing_if = "is_empty_slice")]
    embeds: &'a [Embed],
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_mentions: Option<&'a AllowedMentions>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    components: &'a [Component],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<AttachmentMetadata>,
    #[serde(skip_serializing_if = "MessageFlags::is_empty")]
    flags: MessageFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_name: Option<&'a str>,
    #[serde(skip_serializing_if = "is_empty_slice")]
    applied_tags: &'a [String],
}

fn is_empty_slice<T>(value: &&[T]) -> bool {
    value.is_empty()
}

impl Webhook {
    /// Create an empty message for the given webhook URL (http or https).
    pub fn new(url: &str) -> Result<Self> {
        validate_url_scheme("url", url, HTTP_SCHEMES)?;
        Ok(Self {
            url: Url::parse(url)?,
            content: None,
            username: None,
            avatar_url: None,
            tts: false,
            embeds: Vec::new(),
            allowed_mentions: None,
            components: Vec::new(),
            attachments: Vec::new(),
            flags: MessageFlags::empty(),
            thread_name: None,
            applied_tags: Vec::new(),
            wait: false,
            thread_id: None,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = Some(content.into());
        self
    }

    /// Like [`Webhook::set_content`], but content over the length limit is sent as a
    /// `message.txt` attachment instead of failing validation.
    pub fn set_content_with_fallback(&mut self, content: impl Into<String>) -> &mut Self {
        let content = content.into();
        if content.chars().count() <= MAX_CONTENT_LENGTH {
            return self.set_content(content);
        }

        tracing::debug!(
            length = content.chars().count(),
            "content over limit, sending as attachment"
        );
        self.content = None;
        self.add_attachment(Attachment::new(FALLBACK_FILENAME, content.into_bytes()))
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = Some(username.into());
        self
    }

    pub fn set_avatar_url(&mut self, avatar_url: impl Into<String>) -> &mut Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn set_tts(&mut self, tts: bool) -> &mut Self {
        self.tts = tts;
        self
    }

    pub fn add_embed(&mut self, embed: Embed) -> &mut Self {
        self.embeds.push(embed);
        self
    }

    pub fn remove_embed(&mut self, index: usize) -> Option<Embed> {
        (index < self.embeds.len()).then(|| self.embeds.remove(index))
    }

    pub fn set_allowed_mentions(&mut self, allowed_mentions: AllowedMentions) -> &mut Self {
        self.allowed_mentions = Some(allowed_mentions);
        self
    }

    /// Append a top-level component; layout components switch the message to
    /// `IS_COMPONENTS_V2`.
    pub fn add_component(&mut self, component: impl Into<Component>) -> &mut Self {
        let component = component.into();
        if component.is_layout_v2() {
            self.flags.insert(MessageFlags::IS_COMPONENTS_V2);
        }
        self.components.push(component);
        self
    }

    pub fn add_attachment(&mut self, attachment: Attachment) -> &mut Self {
        self.attachments.push(attachment);
        self
    }

    /// Attach in-memory bytes under `filename`.
    pub fn add_file(
        &mut self,
        filename: impl Into<String>,
        content: impl Into<Vec<u8>>,
        spoiler: bool,
    ) -> &mut Self {
        let mut attachment = Attachment::new(filename, content);
        attachment.set_spoiler(spoiler);
        self.add_attachment(attachment)
    }

    /// Attach a file read from disk.
    pub fn add_attachment_from_path(
        &mut self,
        path: impl AsRef<Path>,
        spoiler: bool,
    ) -> Result<&mut Self> {
        let mut attachment = Attachment::from_path(path)?;
        attachment.set_spoiler(spoiler);
        Ok(self.add_attachment(attachment))
    }

    pub fn attachments_mut(&mut self) -> &mut [Attachment] {
        &mut self.attachments
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<Attachment> {
        (index < self.attachments.len()).then(|| self.attachments.remove(index))
    }

    pub fn set_flag(&mut self, flag: MessageFlags, enabled: bool) -> &mut Self {
        self.flags.set(flag, enabled);
        self
    }

    pub fn get_flag(&self, flag: MessageFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Name of the thread to create (forum and media channels only).
    pub fn set_thread_name(&mut self, thread_name: impl Into<String>) -> &mut Self {
        self.thread_name = Some(thread_name.into());
        self
    }

    pub fn add_applied_tag(&mut self, tag_id: impl Into<String>) -> &mut Self {
        let tag_id = tag_id.into();
        if !self.applied_tags.contains(&tag_id) {
            self.applied_tags.push(tag_id);
        }
        self
    }

    pub fn set_wait(&mut self, wait: bool) -> &mut Self {
        self.wait = wait;
        self
    }

    pub fn set_thread_id(&mut self, thread_id: impl Into<String>) -> &mut Self {
        self.thread_id = Some(thread_id.into());
        self
    }

    /// Borrowed view of the JSON payload.
    pub fn payload(&self) -> WebhookPayload<'_> {
        WebhookPayload {
            content: self.content.as_deref(),
            username: self.username.as_deref(),
            avatar_url: self.avatar_url.as_deref(),
            tts: self.tts,
            embeds: &self.embeds,
            allowed_mentions: self.allowed_mentions.as_ref(),
            components: &self.components,
            attachments: self
                .attachments
                .iter()
                .enumerate()
                .map(|(id, attachment)| attachment.metadata(id))
                .collect(),
            flags: self.flags,
            thread_name: self.thread_name.as_deref(),
            applied_tags: &self.applied_tags,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.payload())?)
    }

    /// Query parameters of the execute call.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if self.wait {
            query.push(("wait", "true".to_string()));
        }
        if let Some(thread_id) = &self.thread_id {
            query.push(("thread_id", thread_id.clone()));
        }
        // Required for non-application webhooks to send components.
        if !self.components.is_empty() {
            query.push(("with_components", "true".to_string()));
        }
        query
    }

    fn has_content(&self) -> bool {
        self.content
            .as_deref()
            .is_some_and(|content| !content.trim().is_empty())
    }

    fn validate_username(&self) -> std::result::Result<(), ValidationError> {
        let Some(username) = self.username.as_deref() else {
            return Ok(());
        };
        check_not_empty("username", username)?;
        check_length("username", username, MAX_USERNAME_LENGTH)?;

        let lowered = username.to_lowercase();
        if let Some(word) = RESERVED_USERNAME_WORDS
            .iter()
            .find(|word| lowered.contains(*word))
        {
            return Err(ValidationError::Invalid {
                field: "username",
                reason: format!("must not contain {word:?}"),
            });
        }
        Ok(())
    }

    fn validate_components(&self) -> std::result::Result<(), ValidationError> {
        if self.get_flag(MessageFlags::IS_COMPONENTS_V2) {
            // Blank content is still sent, so any value conflicts.
            if self.content.is_some() {
                return Err(ValidationError::Conflict {
                    first: "IS_COMPONENTS_V2",
                    second: "content",
                });
            }
            if !self.embeds.is_empty() {
                return Err(ValidationError::Conflict {
                    first: "IS_COMPONENTS_V2",
                    second: "embeds",
                });
            }
            check_count("components", self.components.len(), 0, MAX_TOP_LEVEL_COMPONENTS)?;

            let total: usize = self.components.iter().map(Component::count).sum();
            if total > MAX_TOTAL_COMPONENTS {
                return Err(ValidationError::TooMany {
                    field: "components (nested)",
                    max: MAX_TOTAL_COMPONENTS,
                    actual: total,
                });
            }

            let text: usize = self.components.iter().map(Component::text_len).sum();
            if text > MAX_COMPONENT_TEXT_LENGTH {
                return Err(ValidationError::TooLong {
                    field: "components text",
                    max: MAX_COMPONENT_TEXT_LENGTH,
                    actual: text,
                });
            }
        } else {
            if let Some(component) = self.components.iter().find(|c| c.is_layout_v2()) {
                return Err(ValidationError::Invalid {
                    field: "components",
                    reason: format!("{:?} requires the IS_COMPONENTS_V2 flag", component.kind()),
                });
            }
            check_count("components", self.components.len(), 0, MAX_LEGACY_ROWS)?;
        }

        self.components.validate()?;

        let filenames: HashSet<&str> = self
            .attachments
            .iter()
            .map(|attachment| attachment.filename.as_str())
            .collect();
        for reference in self.components.iter().flat_map(Component::attachment_refs) {
            if !filenames.contains(reference) {
                return Err(ValidationError::Invalid {
                    field: "components.media.url",
                    reason: format!("no attachment named {reference:?}"),
                });
            }
        }
        Ok(())
    }
}

impl Validate for Webhook {
    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if !self.has_content()
            && self.embeds.is_empty()
            && self.components.is_empty()
            && self.attachments.is_empty()
        {
            return Err(ValidationError::Empty { field: "message" });
        }

        check_optional_length("content", self.content.as_deref(), MAX_CONTENT_LENGTH)?;
        self.validate_username()?;
        validate_optional_url("avatar_url", self.avatar_url.as_deref(), HTTP_SCHEMES)?;

        check_count("embeds", self.embeds.len(), 0, MAX_EMBEDS)?;
        self.embeds.validate()?;
        let embed_chars: usize = self.embeds.iter().map(Embed::total_characters).sum();
        if embed_chars > embed::MAX_TOTAL_CHARACTERS {
            return Err(ValidationError::TooLong {
                field: "embeds",
                max: embed::MAX_TOTAL_CHARACTERS,
                actual: embed_chars,
            });
        }

        self.allowed_mentions.validate()?;

        check_count("attachments", self.attachments.len(), 0, MAX_ATTACHMENTS)?;
        self.attachments.validate()?;

        if self.flags.unknown_bits() != 0 {
            return Err(ValidationError::Invalid {
                field: "flags",
                reason: format!("bits {:#x} cannot be set by a webhook", self.flags.unknown_bits()),
            });
        }

        self.validate_components()?;

        check_optional_length("thread_name", self.thread_name.as_deref(), MAX_THREAD_NAME_LENGTH)?;
        if self.thread_name.is_some() && self.thread_id.is_some() {
            return Err(ValidationError::Conflict {
                first: "thread_name",
                second: "thread_id",
            });
        }
        check_count("applied_tags", self.applied_tags.len(), 0, MAX_APPLIED_TAGS)?;
        Ok(())
    }
}

impl Webhook {
    /// Validate and send with a default [`WebhookClient`].
    pub async fn execute(&self) -> Result<Option<WebhookMessage>> {
        WebhookClient::new()?.execute(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{
        ActionRow, Container, File, LinkButton, MediaGallery, MediaGalleryItem, Section,
        Separator, TextDisplay, Thumbnail,
    };
    use crate::types::AllowedMentionType;
    use serde_json::json;

    const URL: &str = "https://discord.com/api/webhooks/1/token";

    fn webhook() -> Webhook {
        Webhook::new(URL).expect("valid url")
    }

    #[test]
    fn rejects_non_http_url() {
        assert!(Webhook::new("ftp://example.com/hook").is_err());
        assert!(Webhook::new("").is_err());
    }

    #[test]
    fn empty_message_is_rejected() {
        let mut hook = webhook();
        assert_eq!(hook.validate(), Err(ValidationError::Empty { field: "message" }));

        hook.set_content("");
        assert_eq!(hook.validate(), Err(ValidationError::Empty { field: "message" }));
    }

    #[test]
    fn minimal_payload() {
        let mut hook = webhook();
        hook.set_content("hello");
        assert!(hook.validate().is_ok());
        assert_eq!(
            serde_json::to_value(hook.payload()).expect("serialize"),
            json!({ "content": "hello" })
        );
        assert!(hook.query().is_empty());
    }

    #[test]
    fn content_limit_and_fallback() {
        let long = "x".repeat(MAX_CONTENT_LENGTH + 1);

        let mut hook = webhook();
        hook.set_content(long.clone());
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooLong { field: "content", .. })
        ));

        let mut hook = webhook();
        hook.set_content_with_fallback(long.clone());
        assert!(hook.content.is_none());
        assert_eq!(hook.attachments.len(), 1);
        assert_eq!(hook.attachments[0].filename, FALLBACK_FILENAME);
        assert_eq!(hook.attachments[0].content, long.into_bytes());
        assert!(hook.validate().is_ok());

        let mut hook = webhook();
        hook.set_content_with_fallback("short");
        assert_eq!(hook.content.as_deref(), Some("short"));
        assert!(hook.attachments.is_empty());
    }

    #[test]
    fn username_rules() {
        let mut hook = webhook();
        hook.set_content("hi").set_username("Deploy Bot");
        assert!(hook.validate().is_ok());

        hook.set_username("My Discord Bot");
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::Invalid { field: "username", .. })
        ));

        hook.set_username("u".repeat(MAX_USERNAME_LENGTH + 1));
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooLong { field: "username", .. })
        ));
    }

    #[test]
    fn attachment_limit() {
        let mut hook = webhook();
        for i in 0..=MAX_ATTACHMENTS {
            hook.add_file(format!("{i}.txt"), i.to_string().into_bytes(), false);
        }
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooMany { field: "attachments", .. })
        ));
    }

    #[test]
    fn attachment_metadata_in_payload() {
        let mut hook = webhook();
        hook.add_file("a.png", vec![1, 2, 3], false)
            .add_file("b.png", vec![4], true);
        hook.attachments_mut()[0].set_description("first");

        assert_eq!(
            serde_json::to_value(hook.payload()).expect("serialize"),
            json!({
                "attachments": [
                    { "id": 0, "filename": "a.png", "description": "first" },
                    { "id": 1, "filename": "SPOILER_b.png" }
                ]
            })
        );
    }

    #[test]
    fn flags_round_trip() {
        let mut hook = webhook();
        hook.set_content("quiet")
            .set_flag(MessageFlags::SUPPRESS_NOTIFICATIONS, true)
            .set_flag(MessageFlags::SUPPRESS_EMBEDS, true)
            .set_flag(MessageFlags::IS_COMPONENTS_V2, false);

        assert!(hook.get_flag(MessageFlags::SUPPRESS_EMBEDS));
        assert!(!hook.get_flag(MessageFlags::IS_COMPONENTS_V2));
        assert_eq!(
            serde_json::to_value(hook.payload()).expect("serialize")["flags"],
            json!(4100)
        );

        hook.set_flag(MessageFlags::SUPPRESS_EMBEDS, false);
        assert!(!hook.get_flag(MessageFlags::SUPPRESS_EMBEDS));
    }

    #[test]
    fn foreign_flag_bits_are_rejected() {
        let mut hook = webhook();
        hook.set_content("x");
        hook.flags = MessageFlags::from_bits_retain(1 << 6);
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::Invalid { field: "flags", .. })
        ));
    }

    #[test]
    fn layout_components_set_v2_and_exclude_content() {
        let mut hook = webhook();
        hook.add_component(TextDisplay::new("hello"));
        assert!(hook.get_flag(MessageFlags::IS_COMPONENTS_V2));
        assert!(hook.validate().is_ok());
        assert_eq!(hook.query(), vec![("with_components", "true".to_string())]);

        hook.set_content("not allowed");
        assert_eq!(
            hook.validate(),
            Err(ValidationError::Conflict {
                first: "IS_COMPONENTS_V2",
                second: "content"
            })
        );
    }

    #[test]
    fn legacy_message_only_takes_action_rows() {
        let mut button = LinkButton::new("https://example.com");
        button.set_label("Open");
        let mut row = ActionRow::new();
        row.add_button(button);

        let mut hook = webhook();
        hook.set_content("with a button").add_component(row);
        assert!(!hook.get_flag(MessageFlags::IS_COMPONENTS_V2));
        assert!(hook.validate().is_ok());

        hook.components.push(TextDisplay::new("sneaky").into());
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::Invalid { field: "components", .. })
        ));
    }

    #[test]
    fn component_text_budget() {
        let mut hook = webhook();
        hook.add_component(TextDisplay::new("a".repeat(2500)))
            .add_component(TextDisplay::new("b".repeat(2500)));
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooLong { field: "components text", .. })
        ));
    }

    #[test]
    fn file_component_must_reference_attachment() {
        let mut container = Container::new();
        container.add_component(File::attachment("report.txt"));

        let mut hook = webhook();
        hook.add_component(container);
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::Invalid { field: "components.media.url", .. })
        ));

        hook.add_file("report.txt", b"ok".to_vec(), false);
        assert!(hook.validate().is_ok());
    }

    #[test]
    fn thread_name_and_id_are_exclusive() {
        let mut hook = webhook();
        hook.set_content("x").set_thread_name("Incident 42");
        assert!(hook.validate().is_ok());

        hook.set_thread_id("123");
        assert!(matches!(hook.validate(), Err(ValidationError::Conflict { .. })));
    }

    #[test]
    fn query_options() {
        let mut hook = webhook();
        hook.set_content("x").set_wait(true).set_thread_id("555");
        assert_eq!(
            hook.query(),
            vec![
                ("wait", "true".to_string()),
                ("thread_id", "555".to_string())
            ]
        );
    }

    #[test]
    fn mentions_in_payload() {
        let mut mentions = AllowedMentions::new();
        mentions.add_parse(AllowedMentionType::Everyone);

        let mut hook = webhook();
        hook.set_content("@everyone deploy started")
            .set_allowed_mentions(mentions);
        assert_eq!(
            serde_json::to_value(hook.payload()).expect("serialize")["allowed_mentions"],
            json!({ "parse": ["everyone"] })
        );
    }

    #[test]
    fn embed_budget_is_shared_across_embeds() {
        let mut hook = webhook();
        for _ in 0..2 {
            let mut embed = Embed::new();
            embed.set_description("d".repeat(3500));
            hook.add_embed(embed);
        }
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooLong { field: "embeds", .. })
        ));
        assert!(hook.remove_embed(1).is_some());
        assert!(hook.validate().is_ok());
    }

    fn link_row() -> ActionRow {
        let mut button = LinkButton::new("https://example.com");
        button.set_label("Open");
        let mut row = ActionRow::new();
        row.add_button(button);
        row
    }

    #[test]
    fn blank_content_conflicts_with_layout_components() {
        let mut hook = webhook();
        hook.add_component(TextDisplay::new("hi"));

        for blank in ["   ", ""] {
            hook.set_content(blank);
            assert_eq!(
                hook.validate(),
                Err(ValidationError::Conflict {
                    first: "IS_COMPONENTS_V2",
                    second: "content"
                })
            );
        }

        hook.content = None;
        assert!(hook.validate().is_ok());
    }

    #[test]
    fn layout_components_exclude_embeds() {
        let mut embed = Embed::new();
        embed.set_title("status");

        let mut hook = webhook();
        hook.add_component(TextDisplay::new("hi")).add_embed(embed);
        assert_eq!(
            hook.validate(),
            Err(ValidationError::Conflict {
                first: "IS_COMPONENTS_V2",
                second: "embeds"
            })
        );
    }

    #[test]
    fn top_level_component_limit() {
        let mut hook = webhook();
        for _ in 0..MAX_TOP_LEVEL_COMPONENTS {
            hook.add_component(Separator::new());
        }
        assert!(hook.validate().is_ok());

        hook.add_component(Separator::new());
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooMany { field: "components", max: 10, actual: 11 })
        ));
    }

    #[test]
    fn nested_component_limit() {
        let mut hook = webhook();
        // Four containers holding nine texts each: 4 * (1 + 9) = 40.
        for _ in 0..4 {
            let mut container = Container::new();
            for i in 0..9 {
                container.add_component(TextDisplay::new(format!("line {i}")));
            }
            hook.add_component(container);
        }
        assert!(hook.validate().is_ok());

        hook.add_component(Separator::new());
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooMany {
                field: "components (nested)",
                max: 40,
                actual: 41
            })
        ));
    }

    #[test]
    fn legacy_action_row_limit() {
        let mut hook = webhook();
        hook.set_content("pick one");
        for _ in 0..MAX_LEGACY_ROWS {
            hook.add_component(link_row());
        }
        assert!(hook.validate().is_ok());

        hook.add_component(link_row());
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooMany { field: "components", max: 5, actual: 6 })
        ));
    }

    #[test]
    fn applied_tag_limit() {
        let mut hook = webhook();
        hook.set_content("x");
        for tag in 0..MAX_APPLIED_TAGS {
            hook.add_applied_tag(tag.to_string());
        }
        assert!(hook.validate().is_ok());

        hook.add_applied_tag("overflow");
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooMany { field: "applied_tags", .. })
        ));
    }

    #[test]
    fn thread_name_limit() {
        let mut hook = webhook();
        hook.set_content("x").set_thread_name("t".repeat(MAX_THREAD_NAME_LENGTH));
        assert!(hook.validate().is_ok());

        hook.set_thread_name("t".repeat(MAX_THREAD_NAME_LENGTH + 1));
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::TooLong { field: "thread_name", .. })
        ));
    }

    #[test]
    fn avatar_url_must_be_http() {
        let mut hook = webhook();
        hook.set_content("x").set_avatar_url("https://example.com/avatar.png");
        assert!(hook.validate().is_ok());

        hook.set_avatar_url("attachment://avatar.png");
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::InvalidUrlScheme { field: "avatar_url", .. })
        ));
    }

    #[test]
    fn media_references_must_match_attachments() {
        let mut gallery = MediaGallery::new();
        gallery.add_item(MediaGalleryItem::new("attachment://chart.png"));

        let mut hook = webhook();
        hook.add_component(Section::with_thumbnail(
            vec![TextDisplay::new("status")],
            Thumbnail::new("attachment://icon.png"),
        ))
        .add_component(gallery);
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::Invalid { field: "components.media.url", .. })
        ));

        hook.add_file("icon.png", b"png".to_vec(), false);
        assert!(matches!(
            hook.validate(),
            Err(ValidationError::Invalid { field: "components.media.url", .. })
        ));

        hook.add_file("chart.png", b"png".to_vec(), false);
        assert!(hook.validate().is_ok());
    }
}
