//! Site configuration module.
//!
//! The site identity (title, avatar, hero, socials, section order, footer)
//! is a single immutable [`SiteConfig`] value. The compiled-in stock
//! definition is used as-is unless the site root contains a `site.toml`, in
//! which case its keys override the stock values table by table.
//!
//! ## Config File Location
//!
//! ```text
//! my-site/
//! ├── site.toml              # Optional, overrides stock values
//! ├── content/
//! │   └── links/             # One YAML file per link
//! │       ├── portfolio.yml
//! │       └── newsletter.yaml
//! └── public/                # Copied verbatim into the output root
//!     ├── icons/
//!     └── thumbnails/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Yambo Studio"
//! description = "We create bespoke visuals for brands."
//! avatar = "/icons/studio-logo.png"
//! sections = ["main", "Education", "Initiatives"]  # display order
//! footer_message = "Built with linkpage."           # optional
//! content_dir = "content/links"
//! assets_dir = "public"
//! show_undeclared_sections = true
//!
//! [hero]
//! src = "/thumbnails/hero.png"   # empty = no hero
//! type = "image"                 # image | video
//! link = "https://example.com/"  # optional
//!
//! [[socials]]
//! name = "LinkedIn"
//! url = "https://www.linkedin.com/in/someone"
//!
//! [colors]
//! background = "#121212"
//! surface = "#1e1e1e"
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Sections
//!
//! `sections` fixes the display order. Links in `"main"` render without a
//! section header; every other section gets a labeled header.

use crate::schema::DEFAULT_SECTION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional override file in the site root.
pub const CONFIG_FILE: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration.
///
/// All fields have stock values. `site.toml` need only specify the values it
/// wants to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title, shown in the header and the document `<title>`.
    pub title: String,
    /// Short tagline under the title.
    pub description: String,
    /// Avatar image reference.
    pub avatar: String,
    /// Optional hero media shown between header and links.
    pub hero: HeroConfig,
    /// Footer social links, in display order.
    pub socials: Vec<SocialLink>,
    /// Section keys in display order.
    pub sections: Vec<String>,
    /// Static message rendered below the social links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_message: Option<String>,
    /// Directory of link files, relative to the site root.
    pub content_dir: String,
    /// Static assets directory, relative to the site root.
    pub assets_dir: String,
    /// Render sections that appear in content but not in `sections`.
    pub show_undeclared_sections: bool,
    /// Page palette.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Yambo Studio".to_string(),
            description:
                "We create bespoke visuals for brands looking to distinguish themselves."
                    .to_string(),
            avatar: "/icons/studio-logo.png".to_string(),
            hero: HeroConfig {
                src: "/thumbnails/yambo-studio-hero.png".to_string(),
                media_type: HeroType::Image,
                link: None,
            },
            socials: vec![
                SocialLink::new(
                    "LinkedIn",
                    "https://www.linkedin.com/in/yam-ben-adiva-a931a632/",
                ),
                SocialLink::new("X", "https://x.com/yamb0x"),
                SocialLink::new("Behance", "https://www.behance.net/yambo"),
            ],
            sections: vec![
                DEFAULT_SECTION.to_string(),
                "Education".to_string(),
                "Initiatives".to_string(),
            ],
            footer_message: None,
            content_dir: "content/links".to_string(),
            assets_dir: "public".to_string(),
            show_undeclared_sections: true,
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if self.sections.is_empty() {
            return Err(ConfigError::Validation(
                "sections must list at least one section".into(),
            ));
        }
        if self.sections.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "sections must not contain blank names".into(),
            ));
        }
        for social in &self.socials {
            if social.name.trim().is_empty() || social.url.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "socials entries need both name and url".into(),
                ));
            }
        }
        if self.content_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "content_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Hero media descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    /// Media reference. Empty means no hero.
    pub src: String,
    #[serde(rename = "type")]
    pub media_type: HeroType,
    /// Outbound link wrapping the media.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl HeroConfig {
    pub fn is_configured(&self) -> bool {
        !self.src.trim().is_empty()
    }

    /// The hero link, if one is set. `link = ""` counts as unset.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroType {
    #[default]
    Image,
    Video,
}

/// A footer social link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Page palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Page background.
    pub background: String,
    /// Link card background.
    pub surface: String,
    /// Link card background on hover.
    pub surface_hover: String,
    /// Titles and link text.
    pub text_primary: String,
    /// Description, section headers, footer.
    pub text_muted: String,
    pub border: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#121212".to_string(),
            surface: "#1e1e1e".to_string(),
            surface_hover: "#2a2a2a".to_string(),
            text_primary: "#ffffff".to_string(),
            text_muted: "#a0a0a0".to_string(),
            border: "#333333".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the site config for a site root.
///
/// Stock values, overridden by `site.toml` when present, then validated.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    tracing::debug!(
        root = %root.display(),
        sections = config.sections.len(),
        "Loaded site config"
    );
    Ok(config)
}

/// Returns a fully-commented stock `site.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# linkpage configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the stock values compiled into the binary.
# Unknown keys will cause an error.

# Header
title = "Yambo Studio"
description = "We create bespoke visuals for brands looking to distinguish themselves."
avatar = "/icons/studio-logo.png"

# Section display order.
# Links in "main" appear first, without a header.
# Other sections appear in this order, each under its own header.
sections = ["main", "Education", "Initiatives"]

# Optional message shown below the social links.
# footer_message = "There's no reason to pay for link pages nowadays ;)"

# Directory of link files (*.yml / *.yaml), relative to this file.
content_dir = "content/links"

# Static assets copied into the output root (avatar, thumbnails, icons).
assets_dir = "public"

# Links whose section is not listed in `sections` are shown after the listed
# sections. Set to false to hide them.
show_undeclared_sections = true

# ---------------------------------------------------------------------------
# Hero banner (set src = "" to disable)
# ---------------------------------------------------------------------------
[hero]
src = "/thumbnails/yambo-studio-hero.png"
type = "image"    # image | video
# link = "https://yambo-studio.com/"   # optional, wraps the media in a link

# ---------------------------------------------------------------------------
# Footer social links, in display order
# ---------------------------------------------------------------------------
[[socials]]
name = "LinkedIn"
url = "https://www.linkedin.com/in/yam-ben-adiva-a931a632/"

[[socials]]
name = "X"
url = "https://x.com/yamb0x"

[[socials]]
name = "Behance"
url = "https://www.behance.net/yambo"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#121212"
surface = "#1e1e1e"
surface_hover = "#2a2a2a"
text_primary = "#ffffff"
text_muted = "#a0a0a0"   # Description, section headers, footer
border = "#333333"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-surface-hover: {surface_hover};
    --color-text: {text_primary};
    --color-text-muted: {text_muted};
    --color-border: {border};
}}"#,
        background = colors.background,
        surface = colors.surface,
        surface_hover = colors.surface_hover,
        text_primary = colors.text_primary,
        text_muted = colors.text_muted,
        border = colors.border,
    )
}
