/*
[INPUT]:  Raw field values (strings, counts, URLs, colors, timestamps)
[OUTPUT]: Schema violations and normalized wire values
[POS]:    Validation layer - reusable checks shared by every message object
[UPDATE]: When the remote schema changes a limit or adds a constrained field
*/

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Schemes accepted for plain web links (avatars, embed URLs).
pub const HTTP_SCHEMES: &[&str] = &["http", "https"];
/// Schemes accepted for media that may reference an uploaded file.
pub const MEDIA_SCHEMES: &[&str] = &["http", "https", "attachment"];
/// Schemes accepted for link buttons.
pub const LINK_SCHEMES: &[&str] = &["http", "https", "discord"];
/// Schemes accepted for file components.
pub const ATTACHMENT_SCHEMES: &[&str] = &["attachment"];

/// A single schema violation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} is too long ({actual} > {max} characters)")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} has too many entries ({actual} > {max})")]
    TooMany {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{field} has too few entries ({actual} < {min})")]
    TooFew {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} is not a valid URL: {url}")]
    InvalidUrl { field: &'static str, url: String },

    #[error("{field} uses scheme {scheme:?}, expected one of {allowed}")]
    InvalidUrlScheme {
        field: &'static str,
        scheme: String,
        allowed: String,
    },

    #[error("{first} cannot be combined with {second}")]
    Conflict {
        first: &'static str,
        second: &'static str,
    },

    #[error("{field} is invalid: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Implemented by every object that mirrors a constrained part of the schema.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for [T] {
    fn validate(&self) -> Result<(), ValidationError> {
        self.iter().try_for_each(Validate::validate)
    }
}

/// Limits are counted in characters, not bytes.
pub fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}

pub fn check_optional_length(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => check_length(field, value, max),
        None => Ok(()),
    }
}

pub fn check_not_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

pub fn check_count(
    field: &'static str,
    actual: usize,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    if actual < min {
        return Err(ValidationError::TooFew { field, min, actual });
    }
    if actual > max {
        return Err(ValidationError::TooMany { field, max, actual });
    }
    Ok(())
}

/// Validate that a URL is present, parses, and uses one of `schemes`.
pub fn validate_url_scheme(
    field: &'static str,
    value: &str,
    schemes: &[&str],
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let parsed = Url::parse(value).map_err(|_| ValidationError::InvalidUrl {
        field,
        url: value.to_string(),
    })?;

    if !schemes.contains(&parsed.scheme()) {
        return Err(ValidationError::InvalidUrlScheme {
            field,
            scheme: parsed.scheme().to_string(),
            allowed: schemes.join(", "),
        });
    }
    Ok(())
}

pub fn validate_optional_url(
    field: &'static str,
    value: Option<&str>,
    schemes: &[&str],
) -> Result<(), ValidationError> {
    match value {
        Some(value) => validate_url_scheme(field, value, schemes),
        None => Ok(()),
    }
}

/// 24-bit RGB color, sent as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(u32);

impl Color {
    pub const MAX: u32 = 0x00FF_FFFF;

    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::Invalid {
                field: "color",
                reason: format!("{value:#x} exceeds {:#x}", Self::MAX),
            });
        }
        Ok(Self(value))
    }

    /// Parse a hex color code, with or without the leading `#`.
    pub fn from_hex(value: &str) -> Result<Self, ValidationError> {
        let digits = value.trim().trim_start_matches('#');
        let parsed = u32::from_str_radix(digits, 16).map_err(|err| ValidationError::Invalid {
            field: "color",
            reason: format!("{value:?} is not a hex color: {err}"),
        })?;
        Self::new(parsed)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<u32> for Color {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Any of the timestamp shapes accepted by embeds.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampValue {
    Unix(i64),
    UnixFloat(f64),
    Iso(String),
    DateTime(DateTime<Utc>),
}

impl TimestampValue {
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, ValidationError> {
        let invalid = |reason: String| ValidationError::Invalid {
            field: "timestamp",
            reason,
        };

        match self {
            Self::Unix(secs) => Utc
                .timestamp_opt(*secs, 0)
                .single()
                .ok_or_else(|| invalid(format!("{secs} is out of range"))),
            Self::UnixFloat(secs) => {
                if !secs.is_finite() {
                    return Err(invalid(format!("{secs} is not a finite number")));
                }
                let whole = secs.floor();
                let nanos = ((secs - whole) * 1_000_000_000.0).round() as u32;
                Utc.timestamp_opt(whole as i64, nanos.min(999_999_999))
                    .single()
                    .ok_or_else(|| invalid(format!("{secs} is out of range")))
            }
            Self::Iso(raw) => parse_iso(raw).ok_or_else(|| invalid(format!("{raw:?} is not ISO-8601"))),
            Self::DateTime(value) => Ok(*value),
        }
    }

    /// RFC 3339 in UTC, the format the endpoint expects.
    pub fn to_iso8601(&self) -> Result<String, ValidationError> {
        Ok(self
            .to_datetime()?
            .to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

fn parse_iso(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc));
    }
    // Naive timestamps are taken as UTC.
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

impl From<i64> for TimestampValue {
    fn from(value: i64) -> Self {
        Self::Unix(value)
    }
}

impl From<f64> for TimestampValue {
    fn from(value: f64) -> Self {
        Self::UnixFloat(value)
    }
}

impl From<&str> for TimestampValue {
    fn from(value: &str) -> Self {
        Self::Iso(value.to_string())
    }
}

impl From<String> for TimestampValue {
    fn from(value: String) -> Self {
        Self::Iso(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimestampValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.with_timezone(&Utc))
    }
}
