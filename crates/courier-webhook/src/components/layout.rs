/*
[INPUT]:  Child components and layout options
[OUTPUT]: Section, separator and container components
[POS]:    Data layer - message components
[UPDATE]: When layout nesting rules change
*/

use serde::{Serialize, Serializer};

use super::{ActionRow, ComponentType, File, LinkButton, MediaGallery, TextDisplay, Thumbnail};
use crate::validation::{Color, Validate, ValidationError, check_count};

pub const MAX_SECTION_TEXTS: usize = 3;

/// Text next to a thumbnail or a link button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionAccessory {
    Thumbnail(Thumbnail),
    Button(LinkButton),
}

impl Validate for SectionAccessory {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            SectionAccessory::Thumbnail(thumbnail) => thumbnail.validate(),
            SectionAccessory::Button(button) => button.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub components: Vec<TextDisplay>,
    pub accessory: SectionAccessory,
}

impl Section {
    pub fn new(components: Vec<TextDisplay>, accessory: SectionAccessory) -> Self {
        Self {
            kind: ComponentType::Section,
            components,
            accessory,
        }
    }

    pub fn with_thumbnail(components: Vec<TextDisplay>, thumbnail: Thumbnail) -> Self {
        Self::new(components, SectionAccessory::Thumbnail(thumbnail))
    }

    pub fn with_button(components: Vec<TextDisplay>, button: LinkButton) -> Self {
        Self::new(components, SectionAccessory::Button(button))
    }

    pub fn add_text(&mut self, text: TextDisplay) -> &mut Self {
        self.components.push(text);
        self
    }

    pub fn set_accessory(&mut self, accessory: SectionAccessory) -> &mut Self {
        self.accessory = accessory;
        self
    }

    pub(crate) fn count(&self) -> usize {
        2 + self.components.len()
    }

    pub(crate) fn text_len(&self) -> usize {
        self.components.iter().map(TextDisplay::text_len).sum()
    }

    pub(crate) fn attachment_name(&self) -> Option<&str> {
        match &self.accessory {
            SectionAccessory::Thumbnail(thumbnail) => thumbnail.attachment_name(),
            SectionAccessory::Button(_) => None,
        }
    }
}

impl Validate for Section {
    fn validate(&self) -> Result<(), ValidationError> {
        check_count("section.components", self.components.len(), 1, MAX_SECTION_TEXTS)?;
        self.components.validate()?;
        self.accessory.validate()
    }
}

/// Vertical padding of a separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SeparatorSpacing {
    Small = 1,
    Large = 2,
}

impl Serialize for SeparatorSpacing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Separator {
    #[serde(rename = "type")]
    kind: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SeparatorSpacing>,
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}

impl Separator {
    pub fn new() -> Self {
        Self {
            kind: ComponentType::Separator,
            divider: None,
            spacing: None,
        }
    }

    pub fn set_divider(&mut self, divider: bool) -> &mut Self {
        self.divider = Some(divider);
        self
    }

    pub fn set_spacing(&mut self, spacing: SeparatorSpacing) -> &mut Self {
        self.spacing = Some(spacing);
        self
    }
}

impl Validate for Separator {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Components allowed inside a container.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContainerComponent {
    ActionRow(ActionRow),
    TextDisplay(TextDisplay),
    Section(Section),
    MediaGallery(MediaGallery),
    Separator(Separator),
    File(File),
}

impl ContainerComponent {
    fn count(&self) -> usize {
        match self {
            ContainerComponent::ActionRow(row) => row.count(),
            ContainerComponent::Section(section) => section.count(),
            _ => 1,
        }
    }

    fn text_len(&self) -> usize {
        match self {
            ContainerComponent::TextDisplay(text) => text.text_len(),
            ContainerComponent::Section(section) => section.text_len(),
            _ => 0,
        }
    }

    /// Filenames referenced through `attachment://` media.
    pub(crate) fn attachment_refs(&self) -> Vec<&str> {
        match self {
            ContainerComponent::File(file) => file.attachment_name().into_iter().collect(),
            ContainerComponent::Section(section) => section.attachment_name().into_iter().collect(),
            ContainerComponent::MediaGallery(gallery) => gallery.attachment_names().collect(),
            _ => Vec::new(),
        }
    }
}

impl Validate for ContainerComponent {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            ContainerComponent::ActionRow(inner) => inner.validate(),
            ContainerComponent::TextDisplay(inner) => inner.validate(),
            ContainerComponent::Section(inner) => inner.validate(),
            ContainerComponent::MediaGallery(inner) => inner.validate(),
            ContainerComponent::Separator(inner) => inner.validate(),
            ContainerComponent::File(inner) => inner.validate(),
        }
    }
}

macro_rules! impl_into_container_component {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for ContainerComponent {
                fn from(value: $variant) -> Self {
                    ContainerComponent::$variant(value)
                }
            }
        )*
    };
}

impl_into_container_component!(ActionRow, TextDisplay, Section, MediaGallery, Separator, File);

/// Boxed group of components with an optional accent bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub components: Vec<ContainerComponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Color>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub spoiler: bool,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        Self {
            kind: ComponentType::Container,
            components: Vec::new(),
            accent_color: None,
            spoiler: false,
        }
    }

    pub fn add_component(&mut self, component: impl Into<ContainerComponent>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    pub fn set_accent_color(&mut self, color: Color) -> &mut Self {
        self.accent_color = Some(color);
        self
    }

    pub fn set_spoiler(&mut self, spoiler: bool) -> &mut Self {
        self.spoiler = spoiler;
        self
    }

    pub(crate) fn count(&self) -> usize {
        1 + self
            .components
            .iter()
            .map(ContainerComponent::count)
            .sum::<usize>()
    }

    pub(crate) fn text_len(&self) -> usize {
        self.components.iter().map(ContainerComponent::text_len).sum()
    }
}

impl Validate for Container {
    fn validate(&self) -> Result<(), ValidationError> {
        check_count("container.components", self.components.len(), 1, usize::MAX)?;
        self.components.validate()
    }
}
