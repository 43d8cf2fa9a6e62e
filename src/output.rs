//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output leads with what a visitor will see (section, position, title) and
//! shows the content file behind each link as an indented `Source:` line, so
//! the listing reads as a content inventory that can still be traced back to
//! files.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Sections
//! main (2 links)
//!     001 Portfolio
//!         Source: portfolio.yml
//!         Card: full image, glow
//!     002 Newsletter
//!         Source: newsletter.yml
//!         Card: inline icon (contain)
//! Education (empty)
//! Press (1 link, not in config)
//!     001 Interview
//!         Source: interview.yml
//!         Card: text
//!
//! Skipped
//!     zero.yml: order must be a positive integer
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html
//!     main: 2 links
//!     Press: 1 link
//! Copied 4 assets
//! ```
//!
//! # Architecture
//!
//! Each listing has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::config::SiteConfig;
use crate::generate::GenerateSummary;
use crate::group::{Bucket, GroupedLinks};
use crate::loader::LoadError;
use crate::variant::{self, CardStyle, CardVariant, ImageFit};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural_links(n: usize) -> String {
    match n {
        1 => "1 link".to_string(),
        n => format!("{} links", n),
    }
}

fn bucket_header(bucket: &Bucket, config: &SiteConfig) -> String {
    let mut details = Vec::new();
    if bucket.links.is_empty() {
        details.push("empty".to_string());
    } else {
        details.push(plural_links(bucket.links.len()));
    }
    if !bucket.declared {
        details.push("not in config".to_string());
        if !config.show_undeclared_sections {
            details.push("hidden".to_string());
        }
    }
    format!("{} ({})", bucket.section, details.join(", "))
}

/// Short description of the card a link renders as.
fn describe_card(style: &CardStyle<'_>) -> String {
    let layout = match style.variant {
        CardVariant::FullImage { .. } => "full image",
        CardVariant::InlineIcon {
            fit: ImageFit::Contain,
            ..
        } => "inline icon (contain)",
        CardVariant::InlineIcon {
            fit: ImageFit::Cover,
            ..
        } => "inline icon (cover)",
        CardVariant::TextOnly => "text",
    };
    match style.hover {
        Some(effect) => format!("{}, {}", layout, effect.as_str()),
        None => layout.to_string(),
    }
}

/// Format the grouped content inventory.
pub fn format_inventory(grouped: &GroupedLinks, config: &SiteConfig) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];
    for bucket in grouped.buckets() {
        lines.push(bucket_header(bucket, config));
        for (i, link) in bucket.links.iter().enumerate() {
            lines.push(format!("    {} {}", format_index(i + 1), link.title));
            lines.push(format!("        Source: {}", link.source_id));
            lines.push(format!(
                "        Card: {}",
                describe_card(&variant::select(link))
            ));
        }
    }
    lines
}

/// Format skipped content files. Empty when nothing was skipped.
pub fn format_failures(failures: &[LoadError]) -> Vec<String> {
    if failures.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![String::new(), "Skipped".to_string()];
    for failure in failures {
        let line = match failure {
            LoadError::ContentDirectoryMissing(_) => failure.to_string(),
            LoadError::Read { source_id, error } => format!("{}: {}", source_id, error),
            LoadError::Parse { source_id, error } => format!("{}: {}", source_id, error),
            LoadError::Validation { source_id, error } => format!("{}: {}", source_id, error),
        };
        lines.push(format!("    {}", line));
    }
    lines
}

/// Format the build result.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let page_name = summary
        .page
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| summary.page.display().to_string());

    let mut lines = vec![page_name];
    if summary.sections.is_empty() {
        lines.push("    (no links)".to_string());
    }
    for (section, count) in &summary.sections {
        lines.push(format!("    {}: {}", section, plural_links(*count)));
    }
    lines.push(match summary.assets_copied {
        1 => "Copied 1 asset".to_string(),
        n => format!("Copied {} assets", n),
    });
    lines
}

/// Print the inventory and any skipped files to stdout.
pub fn print_check_output(grouped: &GroupedLinks, config: &SiteConfig, failures: &[LoadError]) {
    for line in format_inventory(grouped, config)
        .into_iter()
        .chain(format_failures(failures))
    {
        println!("{}", line);
    }
}

/// Print the build result to stdout.
pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}
