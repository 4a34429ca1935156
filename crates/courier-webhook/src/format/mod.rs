/*
[INPUT]:  Text and time values
[OUTPUT]: Markdown and timestamp tag strings
[POS]:    Formatting helpers - content builders
[UPDATE]: When adding formatting helpers
*/

pub mod markdown;
pub mod timestamp;

pub use markdown::Markdown;
pub use timestamp::{Timestamp, TimestampStyle, UnixSeconds};
