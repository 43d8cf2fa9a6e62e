//! Shared test utilities for the linkpage test suite.
//!
//! Provides fixture setup, record builders, and lookup helpers that work
//! with loader and grouping data structures (`LinkRecord`, `GroupedLinks`).
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let config = load_config(tmp.path()).unwrap();
//! let (grouped, _) = load_grouped(tmp.path(), &config);
//!
//! assert_eq!(section_titles(&grouped, "main"), vec!["Portfolio", "Newsletter", "Email"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::group::{Bucket, GroupedLinks};
use crate::schema::{Animation, LinkRecord, ThumbnailSize};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/site/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write a link file into `dir`.
pub fn write_link(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).unwrap();
}

// =========================================================================
// Record builders
// =========================================================================

/// A validated-looking record with the given identity and stock presentation.
///
/// Bypasses the schema, so tests can build records the loader would never
/// produce (e.g. a blank section).
pub fn link(title: &str, section: &str, order: u64, source_id: &str) -> LinkRecord {
    LinkRecord {
        title: title.to_string(),
        url: format!("https://example.com/{}", source_id.trim_end_matches(".yml")),
        section: section.to_string(),
        order,
        thumbnail: None,
        thumbnail_size: ThumbnailSize::None,
        animation: Animation::None,
        source_id: source_id.to_string(),
    }
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// Find a bucket by section key. Panics if not found.
pub fn find_bucket<'a>(grouped: &'a GroupedLinks, section: &str) -> &'a Bucket {
    grouped.get(section).unwrap_or_else(|| {
        let keys: Vec<&str> = grouped.buckets().iter().map(|b| b.section.as_str()).collect();
        panic!("section '{section}' not found. Available: {keys:?}")
    })
}

/// Link titles of one section, in bucket order. Panics if the section is missing.
pub fn section_titles<'a>(grouped: &'a GroupedLinks, section: &str) -> Vec<&'a str> {
    link_titles(&find_bucket(grouped, section).links)
}

/// Titles of a list of links, in order.
pub fn link_titles(links: &[LinkRecord]) -> Vec<&str> {
    links.iter().map(|l| l.title.as_str()).collect()
}
