/*
[INPUT]:  Markdown text
[OUTPUT]: Text display component
[POS]:    Data layer - message components
[UPDATE]: When the text display object changes
*/

use serde::Serialize;

use super::ComponentType;
use crate::validation::{Validate, ValidationError, check_not_empty};

/// Markdown text laid out like message content; a message may carry several.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextDisplay {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub content: String,
}

impl TextDisplay {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            kind: ComponentType::TextDisplay,
            content: content.into(),
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> &mut Self {
        self.content = content.into();
        self
    }

    pub(crate) fn text_len(&self) -> usize {
        self.content.chars().count()
    }
}

impl Validate for TextDisplay {
    fn validate(&self) -> Result<(), ValidationError> {
        check_not_empty("text_display.content", &self.content)
    }
}
