/*
[INPUT]:  Layout component definitions usable by non-application webhooks
[OUTPUT]: Serializable component tree with nesting and limit checks
[POS]:    Data layer - message components
[UPDATE]: When new component types become available to webhooks
*/

pub mod button;
pub mod layout;
pub mod media;
pub mod text_display;

pub use button::{ActionRow, LinkButton, PartialEmoji};
pub use layout::{Container, ContainerComponent, Section, SectionAccessory, Separator, SeparatorSpacing};
pub use media::{File, MediaGallery, MediaGalleryItem, Thumbnail, UnfurledMediaItem};
pub use text_display::TextDisplay;

use serde::{Serialize, Serializer};

use crate::validation::{Validate, ValidationError};

/// Integer `type` discriminator sent with every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    Section = 9,
    TextDisplay = 10,
    Thumbnail = 11,
    MediaGallery = 12,
    File = 13,
    Separator = 14,
    Container = 17,
}

impl Serialize for ComponentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A component placed at the top level of a message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Component {
    ActionRow(ActionRow),
    Section(Section),
    TextDisplay(TextDisplay),
    Thumbnail(Thumbnail),
    MediaGallery(MediaGallery),
    File(File),
    Separator(Separator),
    Container(Container),
}

impl Component {
    pub fn kind(&self) -> ComponentType {
        match self {
            Component::ActionRow(_) => ComponentType::ActionRow,
            Component::Section(_) => ComponentType::Section,
            Component::TextDisplay(_) => ComponentType::TextDisplay,
            Component::Thumbnail(_) => ComponentType::Thumbnail,
            Component::MediaGallery(_) => ComponentType::MediaGallery,
            Component::File(_) => ComponentType::File,
            Component::Separator(_) => ComponentType::Separator,
            Component::Container(_) => ComponentType::Container,
        }
    }

    /// Everything except action rows requires `IS_COMPONENTS_V2`.
    pub fn is_layout_v2(&self) -> bool {
        !matches!(self, Component::ActionRow(_))
    }

    /// Number of components in this subtree, the component itself included.
    pub fn count(&self) -> usize {
        match self {
            Component::ActionRow(row) => row.count(),
            Component::Section(section) => section.count(),
            Component::Container(container) => container.count(),
            _ => 1,
        }
    }

    /// Characters of text display content in this subtree.
    pub fn text_len(&self) -> usize {
        match self {
            Component::TextDisplay(text) => text.text_len(),
            Component::Section(section) => section.text_len(),
            Component::Container(container) => container.text_len(),
            _ => 0,
        }
    }

    /// Filenames referenced through `attachment://` media in this subtree.
    pub(crate) fn attachment_refs(&self) -> Vec<&str> {
        match self {
            Component::File(file) => file.attachment_name().into_iter().collect(),
            Component::Thumbnail(thumbnail) => thumbnail.attachment_name().into_iter().collect(),
            Component::Section(section) => section.attachment_name().into_iter().collect(),
            Component::MediaGallery(gallery) => gallery.attachment_names().collect(),
            Component::Container(container) => container
                .components
                .iter()
                .flat_map(ContainerComponent::attachment_refs)
                .collect(),
            Component::ActionRow(_) | Component::TextDisplay(_) | Component::Separator(_) => {
                Vec::new()
            }
        }
    }
}

impl Validate for Component {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Component::ActionRow(inner) => inner.validate(),
            Component::Section(inner) => inner.validate(),
            Component::TextDisplay(inner) => inner.validate(),
            Component::Thumbnail(inner) => inner.validate(),
            Component::MediaGallery(inner) => inner.validate(),
            Component::File(inner) => inner.validate(),
            Component::Separator(inner) => inner.validate(),
            Component::Container(inner) => inner.validate(),
        }
    }
}

macro_rules! impl_into_component {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Component {
                fn from(value: $variant) -> Self {
                    Component::$variant(value)
                }
            }
        )*
    };
}

impl_into_component!(
    ActionRow,
    Section,
    TextDisplay,
    Thumbnail,
    MediaGallery,
    File,
    Separator,
    Container,
);
