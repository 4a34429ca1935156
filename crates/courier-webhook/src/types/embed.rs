/*
[INPUT]:  Rich embed content (title, fields, media, author, footer)
[OUTPUT]: Embed objects with serialization and limit checks
[POS]:    Data layer - legacy rich embeds
[UPDATE]: When embed limits or sub-objects change
*/

use serde::{Deserialize, Serialize};

use crate::validation::{
    Color, HTTP_SCHEMES, MEDIA_SCHEMES, TimestampValue, Validate, ValidationError, check_count,
    check_length, check_not_empty, check_optional_length, validate_optional_url,
    validate_url_scheme,
};

pub const MAX_TITLE_LENGTH: usize = 256;
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;
pub const MAX_FIELDS: usize = 25;
pub const MAX_FIELD_NAME_LENGTH: usize = 256;
pub const MAX_FIELD_VALUE_LENGTH: usize = 1024;
pub const MAX_FOOTER_TEXT_LENGTH: usize = 2048;
pub const MAX_AUTHOR_NAME_LENGTH: usize = 256;
/// Shared by every embed on one message.
pub const MAX_TOTAL_CHARACTERS: usize = 6000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Webhook embeds are always "rich".
    #[serde(rename = "type", default = "rich")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

fn rich() -> String {
    "rich".to_string()
}

impl Default for Embed {
    fn default() -> Self {
        Self {
            title: None,
            kind: rich(),
            description: None,
            url: None,
            timestamp: None,
            color: None,
            footer: None,
            image: None,
            thumbnail: None,
            author: None,
            fields: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedThumbnail {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inline: bool,
}

impl Embed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Accepts unix seconds, ISO-8601 strings or `chrono` date-times.
    pub fn set_timestamp(
        &mut self,
        timestamp: impl Into<TimestampValue>,
    ) -> Result<&mut Self, ValidationError> {
        self.timestamp = Some(timestamp.into().to_iso8601()?);
        Ok(self)
    }

    pub fn set_color(&mut self, color: Color) -> &mut Self {
        self.color = Some(color);
        self
    }

    /// Parse and set a `#RRGGBB` color.
    pub fn set_color_hex(&mut self, color: &str) -> Result<&mut Self, ValidationError> {
        self.color = Some(Color::from_hex(color)?);
        Ok(self)
    }

    pub fn set_footer(&mut self, text: impl Into<String>, icon_url: Option<String>) -> &mut Self {
        self.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url,
        });
        self
    }

    pub fn set_image(&mut self, url: impl Into<String>) -> &mut Self {
        self.image = Some(EmbedImage { url: url.into() });
        self
    }

    pub fn set_thumbnail(&mut self, url: impl Into<String>) -> &mut Self {
        self.thumbnail = Some(EmbedThumbnail { url: url.into() });
        self
    }

    pub fn set_author(
        &mut self,
        name: impl Into<String>,
        url: Option<String>,
        icon_url: Option<String>,
    ) -> &mut Self {
        self.author = Some(EmbedAuthor {
            name: name.into(),
            url,
            icon_url,
        });
        self
    }

    pub fn add_field(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> &mut Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn remove_field(&mut self, index: usize) -> Option<EmbedField> {
        (index < self.fields.len()).then(|| self.fields.remove(index))
    }

    /// Characters that count against the per-message embed budget.
    pub fn total_characters(&self) -> usize {
        let count = |value: &str| value.chars().count();
        self.title.as_deref().map_or(0, count)
            + self.description.as_deref().map_or(0, count)
            + self
                .fields
                .iter()
                .map(|field| count(&field.name) + count(&field.value))
                .sum::<usize>()
            + self.footer.as_ref().map_or(0, |footer| count(&footer.text))
            + self.author.as_ref().map_or(0, |author| count(&author.name))
    }

    pub fn is_empty(&self) -> bool {
        self.total_characters() == 0
            && self.url.is_none()
            && self.image.is_none()
            && self.thumbnail.is_none()
    }
}

impl Validate for Embed {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::Empty { field: "embed" });
        }
        check_optional_length("embed.title", self.title.as_deref(), MAX_TITLE_LENGTH)?;
        check_optional_length(
            "embed.description",
            self.description.as_deref(),
            MAX_DESCRIPTION_LENGTH,
        )?;
        validate_optional_url("embed.url", self.url.as_deref(), HTTP_SCHEMES)?;
        check_count("embed.fields", self.fields.len(), 0, MAX_FIELDS)?;
        self.fields.validate()?;
        self.footer.validate()?;
        self.image.validate()?;
        self.thumbnail.validate()?;
        self.author.validate()?;
        if self.total_characters() > MAX_TOTAL_CHARACTERS {
            return Err(ValidationError::TooLong {
                field: "embed",
                max: MAX_TOTAL_CHARACTERS,
                actual: self.total_characters(),
            });
        }
        Ok(())
    }
}

impl Validate for EmbedFooter {
    fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("embed.footer.text", &self.text)?;
        check_length("embed.footer.text", &self.text, MAX_FOOTER_TEXT_LENGTH)?;
        validate_optional_url("embed.footer.icon_url", self.icon_url.as_deref(), MEDIA_SCHEMES)
    }
}

impl Validate for EmbedImage {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_url_scheme("embed.image.url", &self.url, MEDIA_SCHEMES)
    }
}

impl Validate for EmbedThumbnail {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_url_scheme("embed.thumbnail.url", &self.url, MEDIA_SCHEMES)
    }
}

impl Validate for EmbedAuthor {
    fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("embed.author.name", &self.name)?;
        check_length("embed.author.name", &self.name, MAX_AUTHOR_NAME_LENGTH)?;
        validate_optional_url("embed.author.url", self.url.as_deref(), HTTP_SCHEMES)?;
        validate_optional_url("embed.author.icon_url", self.icon_url.as_deref(), MEDIA_SCHEMES)
    }
}

impl Validate for EmbedField {
    fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("embed.field.name", &self.name)?;
        check_length("embed.field.name", &self.name, MAX_FIELD_NAME_LENGTH)?;
        check_not_empty("embed.field.value", &self.value)?;
        check_length("embed.field.value", &self.value, MAX_FIELD_VALUE_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn embed_serializes_only_set_fields() {
        let mut embed = Embed::new();
        embed
            .set_title("Deploy finished")
            .set_color(Color::new(0x57F287).expect("color"))
            .add_field("Service", "api", true)
            .add_field("Duration", "42s", false);
        embed.set_timestamp(0i64).expect("timestamp");

        assert_eq!(
            serde_json::to_value(&embed).expect("serialize"),
            json!({
                "title": "Deploy finished",
                "type": "rich",
                "timestamp": "1970-01-01T00:00:00Z",
                "color": 0x57F287,
                "fields": [
                    { "name": "Service", "value": "api", "inline": true },
                    { "name": "Duration", "value": "42s" }
                ]
            })
        );
        assert!(embed.validate().is_ok());
    }

    #[test]
    fn empty_embed_is_rejected() {
        assert_eq!(
            Embed::new().validate(),
            Err(ValidationError::Empty { field: "embed" })
        );
    }

    #[test]
    fn field_limits_are_enforced() {
        let mut embed = Embed::new();
        for i in 0..=MAX_FIELDS {
            embed.add_field(format!("f{i}"), "v", false);
        }
        assert!(matches!(
            embed.validate(),
            Err(ValidationError::TooMany { field: "embed.fields", .. })
        ));

        let mut embed = Embed::new();
        embed.add_field("name", "v".repeat(MAX_FIELD_VALUE_LENGTH + 1), false);
        assert!(matches!(
            embed.validate(),
            Err(ValidationError::TooLong { field: "embed.field.value", .. })
        ));
    }

    #[test]
    fn total_character_budget() {
        let mut embed = Embed::new();
        embed.set_description("d".repeat(MAX_DESCRIPTION_LENGTH));
        for _ in 0..2 {
            embed.add_field("n", "v".repeat(MAX_FIELD_VALUE_LENGTH), false);
        }
        assert!(embed.total_characters() > MAX_TOTAL_CHARACTERS);
        assert!(matches!(
            embed.validate(),
            Err(ValidationError::TooLong { field: "embed", .. })
        ));
    }

    #[test]
    fn media_urls_accept_attachment_references() {
        let mut embed = Embed::new();
        embed
            .set_image("attachment://chart.png")
            .set_thumbnail("https://example.com/t.png")
            .set_author("bot", None, Some("attachment://icon.png".to_string()));
        assert!(embed.validate().is_ok());

        embed.set_url("attachment://chart.png");
        assert!(matches!(
            embed.validate(),
            Err(ValidationError::InvalidUrlScheme { field: "embed.url", .. })
        ));
    }

    #[test]
    fn remove_field_out_of_range() {
        let mut embed = Embed::new();
        embed.add_field("a", "b", false);
        assert!(embed.remove_field(3).is_none());
        assert_eq!(embed.remove_field(0).map(|field| field.name), Some("a".to_string()));
    }
}
