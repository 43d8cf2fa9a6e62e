//! HTML site generation.
//!
//! Composes the single page from the site config and the grouped links, and
//! writes it with the static assets into the output directory.
//!
//! ## Page Structure
//!
//! ```text
//! header       avatar, title, description (always)
//! hero         image or video, optionally linked (only if hero.src is set)
//! sections     configured order; "main" has no header; empty sections skipped
//! footer       social links, then footer message (each only if configured)
//! ```
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html     # The page, CSS inlined
//! ├── icons/         # Everything under assets_dir, copied as-is
//! └── thumbnails/
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! All interpolated content is escaped. Card layout comes from
//! [`variant::select`]; CSS class names only appear here.

use crate::config::{self, HeroConfig, HeroType, SiteConfig, SocialLink};
use crate::group::{Bucket, GroupedLinks};
use crate::loader::{self, LoadError};
use crate::schema::{DEFAULT_SECTION, LinkRecord};
use crate::variant::{self, CardVariant, HoverEffect, ImageFit};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a build wrote.
#[derive(Debug)]
pub struct GenerateSummary {
    /// Path of the written page.
    pub page: PathBuf,
    /// Rendered sections and their link counts, in page order.
    pub sections: Vec<(String, usize)>,
    /// Files copied from the assets directory.
    pub assets_copied: usize,
    /// Content files that were skipped.
    pub failures: Vec<LoadError>,
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Load, group and render the site at `root` into `output_dir`.
///
/// Content errors never fail the build; they are returned in the summary.
pub fn generate(
    root: &Path,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<GenerateSummary, GenerateError> {
    let (grouped, failures) = loader::load_grouped(root, config);

    fs::create_dir_all(output_dir)?;

    let assets_dir = root.join(&config.assets_dir);
    let assets_copied = if assets_dir.is_dir() {
        copy_dir_recursive(&assets_dir, output_dir)?
    } else {
        tracing::debug!(dir = %assets_dir.display(), "No assets directory");
        0
    };

    let page = output_dir.join("index.html");
    fs::write(&page, render_page(config, &grouped).into_string())?;

    let sections = rendered_buckets(config, &grouped)
        .map(|b| (b.section.clone(), b.links.len()))
        .collect();

    tracing::info!(page = %page.display(), assets = assets_copied, "Generated site");

    Ok(GenerateSummary {
        page,
        sections,
        assets_copied,
        failures,
    })
}

/// Copy a directory tree, returning the number of files copied.
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copied += copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Non-empty buckets in page order: configured sections first, then the
/// undeclared ones when the config allows it.
pub fn rendered_buckets<'a>(
    config: &'a SiteConfig,
    grouped: &'a GroupedLinks,
) -> impl Iterator<Item = &'a Bucket> {
    grouped
        .declared()
        .chain(
            grouped
                .undeclared()
                .filter(move |_| config.show_undeclared_sections),
        )
        .filter(|b| !b.links.is_empty())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, description: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            div.avatar {
                img src=(config.avatar) alt=(config.title) width="80" height="80";
            }
            h1.site-title { (config.title) }
            p.site-description { (config.description) }
        }
    }
}

/// Hero media, linked if the config has a hero link. Empty when no hero.
fn hero_banner(hero: &HeroConfig, site_title: &str) -> Markup {
    if !hero.is_configured() {
        return html! {};
    }

    let media = match hero.media_type {
        HeroType::Video => html! {
            video.hero-media src=(hero.src) autoplay loop muted playsinline {}
        },
        HeroType::Image => html! {
            img.hero-media src=(hero.src) alt={ (site_title) " hero" };
        },
    };

    html! {
        @if let Some(link) = hero.link() {
            a.hero.hero-linked href=(link) target="_blank" rel="noopener noreferrer" {
                (media)
            }
        } @else {
            div.hero {
                (media)
            }
        }
    }
}

fn section_header(title: &str) -> Markup {
    html! {
        div.section-header {
            h2 { (title) }
        }
    }
}

fn hover_class(effect: HoverEffect) -> &'static str {
    match effect {
        HoverEffect::Glow => "link-card-glow",
        HoverEffect::Scale => "link-card-scale",
        HoverEffect::Bounce => "link-card-bounce",
        HoverEffect::Shake => "link-card-shake",
    }
}

/// Class list for a card: layout class plus the optional hover effect.
fn card_class(layout: &str, hover: Option<HoverEffect>) -> String {
    match hover {
        Some(effect) => format!("link-card {} {}", layout, hover_class(effect)),
        None => format!("link-card {}", layout),
    }
}

/// Renders one link as the card chosen by [`variant::select`].
pub fn link_card(link: &LinkRecord) -> Markup {
    let style = variant::select(link);

    match style.variant {
        CardVariant::FullImage { thumbnail } => html! {
            a class=(card_class("link-card-full", style.hover)) href=(link.url) target="_blank" rel="noopener noreferrer" {
                div.card-image {
                    img src=(thumbnail) alt=(link.title) loading="lazy";
                }
                div.card-title {
                    span { (link.title) }
                }
            }
        },
        CardVariant::InlineIcon { thumbnail, fit } => {
            let (box_class, fit_class) = match fit {
                ImageFit::Contain => ("card-icon card-icon-vector", "fit-contain"),
                ImageFit::Cover => ("card-icon card-icon-photo", "fit-cover"),
            };
            html! {
                a class=(card_class("link-card-inline", style.hover)) href=(link.url) target="_blank" rel="noopener noreferrer" {
                    div class=(box_class) {
                        img class=(fit_class) src=(thumbnail) alt=(link.title) loading="lazy";
                    }
                    span.card-title { (link.title) }
                }
            }
        }
        CardVariant::TextOnly => html! {
            a class=(card_class("link-card-text", style.hover)) href=(link.url) target="_blank" rel="noopener noreferrer" {
                span.card-title { (link.title) }
            }
        },
    }
}

fn social_links(socials: &[SocialLink]) -> Markup {
    html! {
        @if !socials.is_empty() {
            nav.socials {
                @for social in socials {
                    a href=(social.url) target="_blank" rel="noopener noreferrer" { (social.name) }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        @if !config.socials.is_empty() || config.footer_message.is_some() {
            footer.site-footer {
                (social_links(&config.socials))
                @if let Some(message) = &config.footer_message {
                    p.footer-message { (message) }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the whole page.
pub fn render_page(config: &SiteConfig, grouped: &GroupedLinks) -> Markup {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    let content = html! {
        main.page {
            (site_header(config))
            (hero_banner(&config.hero, &config.title))
            div.link-list {
                @for bucket in rendered_buckets(config, grouped) {
                    section.link-section data-section=(bucket.section) {
                        @if bucket.section != DEFAULT_SECTION {
                            (section_header(&bucket.section))
                        }
                        div.link-stack {
                            @for link in &bucket.links {
                                (link_card(link))
                            }
                        }
                    }
                }
            }
            (site_footer(config))
        }
    };

    base_document(&config.title, &config.description, &css, content)
}

// ============================================================================
// Tests
// ============================================================================
