/*
[INPUT]:  Message flag bits documented for webhook execution
[OUTPUT]: Typed bit set serialized as an integer
[POS]:    Data layer - message flags
[UPDATE]: When the endpoint allows webhooks to set another flag
*/

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Message flags a webhook is allowed to set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MessageFlags: u32 {
        /// Do not include any embeds when serializing this message
        const SUPPRESS_EMBEDS        = 1 << 2;
        /// Do not trigger push and desktop notifications
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        /// Use the layout component system; disables content and embeds
        const IS_COMPONENTS_V2       = 1 << 15;
    }
}

impl MessageFlags {
    /// Bits set that a webhook may not send.
    pub fn unknown_bits(self) -> u32 {
        self.bits() & !Self::all().bits()
    }
}

// The endpoint speaks integers; bitflags' own serde format is a name list.
impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_bits_retain)
    }
}
