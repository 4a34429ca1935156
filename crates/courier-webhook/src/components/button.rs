/*
[INPUT]:  Link targets, labels and emoji
[OUTPUT]: Link buttons and the action rows holding them
[POS]:    Data layer - message components
[UPDATE]: When webhooks gain access to other button styles
*/

use serde::{Deserialize, Serialize};

use super::ComponentType;
use crate::validation::{
    LINK_SCHEMES, Validate, ValidationError, check_count, check_optional_length,
    validate_url_scheme,
};

pub const MAX_LABEL_LENGTH: usize = 80;
pub const MAX_ROW_BUTTONS: usize = 5;
/// Link style; the only style a non-application webhook can send.
const LINK_STYLE: u8 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialEmoji {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub animated: bool,
}

impl PartialEmoji {
    /// A standard unicode emoji.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A custom guild emoji.
    pub fn custom(id: impl Into<String>, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            animated,
        }
    }
}

/// Button that opens a URL; needs a label, an emoji, or both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkButton {
    #[serde(rename = "type")]
    kind: ComponentType,
    style: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    pub url: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl LinkButton {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: ComponentType::Button,
            style: LINK_STYLE,
            label: None,
            emoji: None,
            url: url.into(),
            disabled: false,
        }
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    pub fn set_emoji(&mut self, emoji: PartialEmoji) -> &mut Self {
        self.emoji = Some(emoji);
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) -> &mut Self {
        self.disabled = disabled;
        self
    }
}

impl Validate for LinkButton {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.label.is_none() && self.emoji.is_none() {
            return Err(ValidationError::Empty {
                field: "button.label",
            });
        }
        check_optional_length("button.label", self.label.as_deref(), MAX_LABEL_LENGTH)?;
        validate_url_scheme("button.url", &self.url, LINK_SCHEMES)
    }
}

/// Horizontal row of up to five buttons.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub components: Vec<LinkButton>,
}

impl Default for ActionRow {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRow {
    pub fn new() -> Self {
        Self {
            kind: ComponentType::ActionRow,
            components: Vec::new(),
        }
    }

    pub fn add_button(&mut self, button: LinkButton) -> &mut Self {
        self.components.push(button);
        self
    }

    pub(crate) fn count(&self) -> usize {
        1 + self.components.len()
    }
}

impl Validate for ActionRow {
    fn validate(&self) -> Result<(), ValidationError> {
        check_count("action_row.components", self.components.len(), 1, MAX_ROW_BUTTONS)?;
        self.components.validate()
    }
}
