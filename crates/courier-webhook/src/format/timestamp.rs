/*
[INPUT]:  Unix seconds or chrono date-times
[OUTPUT]: <t:unix:style> tags rendered in each reader's locale
[POS]:    Formatting helpers - message content
[UPDATE]: When timestamp styles change
*/

use chrono::{DateTime, TimeZone};

/// Render style letter of a timestamp tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    /// 16:20
    ShortTime,
    /// 16:20:30
    LongTime,
    /// 20/04/2021
    ShortDate,
    /// 20 April 2021
    LongDate,
    /// 20 April 2021 16:20
    ShortDateTime,
    /// Tuesday, 20 April 2021 16:20
    LongDateTime,
    /// 2 months ago
    Relative,
}

impl TimestampStyle {
    pub fn as_char(self) -> char {
        match self {
            TimestampStyle::ShortTime => 't',
            TimestampStyle::LongTime => 'T',
            TimestampStyle::ShortDate => 'd',
            TimestampStyle::LongDate => 'D',
            TimestampStyle::ShortDateTime => 'f',
            TimestampStyle::LongDateTime => 'F',
            TimestampStyle::Relative => 'R',
        }
    }
}

/// Anything that can be reduced to unix seconds.
pub trait UnixSeconds {
    fn unix_seconds(&self) -> i64;
}

impl UnixSeconds for i64 {
    fn unix_seconds(&self) -> i64 {
        *self
    }
}

impl UnixSeconds for u32 {
    fn unix_seconds(&self) -> i64 {
        i64::from(*self)
    }
}

impl<Tz: TimeZone> UnixSeconds for DateTime<Tz> {
    fn unix_seconds(&self) -> i64 {
        self.timestamp()
    }
}

/// Builders for timestamp tags.
pub struct Timestamp;

impl Timestamp {
    pub fn format(value: &impl UnixSeconds, style: TimestampStyle) -> String {
        format!("<t:{}:{}>", value.unix_seconds(), style.as_char())
    }

    pub fn short_time(value: impl UnixSeconds) -> String {
        Self::format(&value, TimestampStyle::ShortTime)
    }

    pub fn long_time(value: impl UnixSeconds) -> String {
        Self::format(&value, TimestampStyle::LongTime)
    }

    pub fn short_date(value: impl UnixSeconds) -> String {
        Self::format(&value, TimestampStyle::ShortDate)
    }

    pub fn long_date(value: impl UnixSeconds) -> String {
        Self::format(&value, TimestampStyle::LongDate)
    }

    pub fn short_date_time(value: impl UnixSeconds) -> String {
        Self::format(&value, TimestampStyle::ShortDateTime)
    }

    pub fn long_date_time(value: impl UnixSeconds) -> String {
        Self::format(&value, TimestampStyle::LongDateTime)
    }

    pub fn relative_time(value: impl UnixSeconds) -> String {
        Self::format(&value, TimestampStyle::Relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const UNIX: i64 = 1_618_953_630;

    #[test]
    fn styles() {
        assert_eq!(Timestamp::short_time(UNIX), "<t:1618953630:t>");
        assert_eq!(Timestamp::long_time(UNIX), "<t:1618953630:T>");
        assert_eq!(Timestamp::short_date(UNIX), "<t:1618953630:d>");
        assert_eq!(Timestamp::long_date(UNIX), "<t:1618953630:D>");
        assert_eq!(Timestamp::short_date_time(UNIX), "<t:1618953630:f>");
        assert_eq!(Timestamp::long_date_time(UNIX), "<t:1618953630:F>");
        assert_eq!(Timestamp::relative_time(UNIX), "<t:1618953630:R>");
    }

    #[test]
    fn accepts_datetimes() {
        let moment = Utc.timestamp_opt(UNIX, 0).single().expect("valid timestamp");
        assert_eq!(Timestamp::relative_time(moment), "<t:1618953630:R>");
    }
}
