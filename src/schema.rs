//! Link record schema.
//!
//! Every file under the content directory describes exactly one outbound
//! link. This module defines the accepted shape of that record and turns an
//! arbitrary YAML document into a [`LinkRecord`] with all defaults applied.
//!
//! ## Record Format
//!
//! ```yaml
//! title: Portfolio            # required, non-empty
//! url: https://example.com    # required, absolute URL (mailto: is fine)
//! order: 10                   # required, positive integer
//! section: Education          # optional, defaults to "main"
//! thumbnail: /thumbnails/p.png  # optional
//! thumbnailSize: large        # none | small | large (default none)
//! animation: glow             # none | glow | scale | bounce | shake (default none)
//! ```
//!
//! Unknown keys are ignored. Invalid values are rejected, never coerced:
//! validation runs every rule and reports all [`Violation`]s at once so an
//! author can fix a file in one pass.

use serde::Serialize;
use serde_yaml::Value;
use std::fmt;
use thiserror::Error;
use url::Url;

/// Section key for links that don't declare one. Rendered without a header.
pub const DEFAULT_SECTION: &str = "main";

/// A single schema rule failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("record must be a mapping of fields")]
    NotAMapping,
    #[error("title is required and must be non-empty")]
    MissingTitle,
    #[error("url must be a valid absolute URL")]
    InvalidUrl,
    #[error("order must be a positive integer")]
    InvalidOrder,
    #[error("section must be a string")]
    InvalidSection,
    #[error("thumbnail must be a string")]
    InvalidThumbnail,
    #[error("thumbnailSize must be one of none, small, large (got {0})")]
    InvalidThumbnailSize(String),
    #[error("animation must be one of none, glow, scale, bounce, shake (got {0})")]
    InvalidAnimation(String),
}

/// All rule violations found in one record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_violations(.violations))]
pub struct SchemaError {
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Thumbnail presentation requested by the author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbnailSize {
    #[default]
    None,
    Small,
    Large,
}

impl ThumbnailSize {
    pub const ALL: [ThumbnailSize; 3] = [Self::None, Self::Small, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

/// Hover animation requested by the author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    #[default]
    None,
    Glow,
    Scale,
    Bounce,
    Shake,
}

impl Animation {
    pub const ALL: [Animation; 5] = [
        Self::None,
        Self::Glow,
        Self::Scale,
        Self::Bounce,
        Self::Shake,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Glow => "glow",
            Self::Scale => "scale",
            Self::Bounce => "bounce",
            Self::Shake => "shake",
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated link with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub title: String,
    pub url: String,
    /// Never empty; absent or blank input resolves to [`DEFAULT_SECTION`].
    pub section: String,
    /// Always > 0.
    pub order: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub thumbnail_size: ThumbnailSize,
    pub animation: Animation,
    /// File name the record was loaded from. Empty until the loader attaches it.
    pub source_id: String,
}

impl LinkRecord {
    pub fn with_source_id(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }
}

/// Validate one parsed YAML document.
///
/// An empty document (`null`) is treated as an empty mapping so the author
/// sees which required fields are missing.
pub fn validate(doc: &Value) -> Result<LinkRecord, SchemaError> {
    let empty = Value::Mapping(Default::default());
    let doc = match doc {
        Value::Null => &empty,
        Value::Mapping(_) => doc,
        _ => {
            return Err(SchemaError {
                violations: vec![Violation::NotAMapping],
            });
        }
    };

    let title = validate_title(doc.get("title"));
    let url = validate_url(doc.get("url"));
    let order = validate_order(doc.get("order"));
    let section = validate_section(doc.get("section"));
    let thumbnail = validate_thumbnail(doc.get("thumbnail"));
    let thumbnail_size = validate_thumbnail_size(doc.get("thumbnailSize"));
    let animation = validate_animation(doc.get("animation"));

    match (title, url, order, section, thumbnail, thumbnail_size, animation) {
        (
            Ok(title),
            Ok(url),
            Ok(order),
            Ok(section),
            Ok(thumbnail),
            Ok(thumbnail_size),
            Ok(animation),
        ) => Ok(LinkRecord {
            title,
            url,
            section,
            order,
            thumbnail,
            thumbnail_size,
            animation,
            source_id: String::new(),
        }),
        (title, url, order, section, thumbnail, thumbnail_size, animation) => {
            let violations = [
                title.err(),
                url.err(),
                order.err(),
                section.err(),
                thumbnail.err(),
                thumbnail_size.err(),
                animation.err(),
            ]
            .into_iter()
            .flatten()
            .collect();
            Err(SchemaError { violations })
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

pub fn validate_title(value: Option<&Value>) -> Result<String, Violation> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(Violation::MissingTitle),
    }
}

pub fn validate_url(value: Option<&Value>) -> Result<String, Violation> {
    match value {
        Some(Value::String(s)) if Url::parse(s.trim()).is_ok() => Ok(s.trim().to_string()),
        _ => Err(Violation::InvalidUrl),
    }
}

/// Integral floats (`2.0`) are accepted; quoted numbers are not.
pub fn validate_order(value: Option<&Value>) -> Result<u64, Violation> {
    let Some(Value::Number(n)) = value else {
        return Err(Violation::InvalidOrder);
    };
    if let Some(u) = n.as_u64() {
        return if u > 0 { Ok(u) } else { Err(Violation::InvalidOrder) };
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= 1.0 && f <= u64::MAX as f64 => Ok(f as u64),
        _ => Err(Violation::InvalidOrder),
    }
}

pub fn validate_section(value: Option<&Value>) -> Result<String, Violation> {
    match value {
        None | Some(Value::Null) => Ok(DEFAULT_SECTION.to_string()),
        Some(Value::String(s)) => Ok(resolve_section(s).to_string()),
        Some(_) => Err(Violation::InvalidSection),
    }
}

/// Blank section keys collapse to [`DEFAULT_SECTION`].
pub fn resolve_section(section: &str) -> &str {
    let trimmed = section.trim();
    if trimmed.is_empty() {
        DEFAULT_SECTION
    } else {
        trimmed
    }
}

pub fn validate_thumbnail(value: Option<&Value>) -> Result<Option<String>, Violation> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.trim().to_string())),
        Some(_) => Err(Violation::InvalidThumbnail),
    }
}

pub fn validate_thumbnail_size(value: Option<&Value>) -> Result<ThumbnailSize, Violation> {
    match value {
        None | Some(Value::Null) => Ok(ThumbnailSize::default()),
        Some(Value::String(s)) => ThumbnailSize::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Violation::InvalidThumbnailSize(s.clone())),
        Some(other) => Err(Violation::InvalidThumbnailSize(describe(other))),
    }
}

pub fn validate_animation(value: Option<&Value>) -> Result<Animation, Violation> {
    match value {
        None | Some(Value::Null) => Ok(Animation::default()),
        Some(Value::String(s)) => Animation::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Violation::InvalidAnimation(s.clone())),
        Some(other) => Err(Violation::InvalidAnimation(describe(other))),
    }
}

/// Short rendering of a non-string value for error messages.
fn describe(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "<unprintable>".to_string())
}
