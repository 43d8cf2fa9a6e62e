//! Content loading.
//!
//! Reads every link file in the content directory, parses it as YAML and
//! validates it against the [`schema`](crate::schema). A bad file never
//! aborts the batch: it is recorded in [`LoadReport::failures`], logged, and
//! skipped. A missing content directory is an empty site, not an error.
//!
//! Files are discovered directly inside the directory (no recursion), hidden
//! files are ignored, and only `.yml` / `.yaml` extensions are considered.
//! Discovery order is file-name order, which makes the tie-break between
//! links with equal `order` reproducible across machines.
//!
//! Nothing is cached: every call re-reads the directory.

use crate::config::SiteConfig;
use crate::group::{self, GroupedLinks};
use crate::schema::{self, LinkRecord, SchemaError};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

const LINK_EXTENSIONS: &[&str] = &["yml", "yaml"];

/// Why a content file (or the whole directory) contributed no links.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("content directory not found: {0}")]
    ContentDirectoryMissing(PathBuf),
    #[error("could not read {source_id}: {error}")]
    Read {
        source_id: String,
        error: std::io::Error,
    },
    #[error("could not parse {source_id}: {error}")]
    Parse {
        source_id: String,
        error: serde_yaml::Error,
    },
    #[error("invalid {source_id}: {error}")]
    Validation {
        source_id: String,
        error: SchemaError,
    },
}

impl LoadError {
    /// The file this failure belongs to, if any.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Self::ContentDirectoryMissing(_) => None,
            Self::Read { source_id, .. }
            | Self::Parse { source_id, .. }
            | Self::Validation { source_id, .. } => Some(source_id),
        }
    }
}

/// Result of loading a content directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Valid links, in discovery order.
    pub links: Vec<LinkRecord>,
    /// Files (or the directory) that contributed nothing.
    pub failures: Vec<LoadError>,
}

/// Load every link file in `dir`.
pub fn load_links(dir: &Path) -> LoadReport {
    if !dir.is_dir() {
        let failure = LoadError::ContentDirectoryMissing(dir.to_path_buf());
        tracing::warn!(dir = %dir.display(), "Content directory not found, no links loaded");
        return LoadReport {
            links: Vec::new(),
            failures: vec![failure],
        };
    }

    let files = discover(dir);
    tracing::debug!(dir = %dir.display(), files = files.len(), "Discovered link files");

    let results: Vec<Result<LinkRecord, LoadError>> =
        files.par_iter().map(|path| load_file(path)).collect();

    let mut report = LoadReport::default();
    for result in results {
        match result {
            Ok(link) => report.links.push(link),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping link file");
                report.failures.push(e);
            }
        }
    }

    tracing::info!(
        loaded = report.links.len(),
        skipped = report.failures.len(),
        "Loaded links"
    );
    report
}

/// Load links from the site's content directory and group them by section.
///
/// Returns the groups along with the failures of the load.
pub fn load_grouped(root: &Path, config: &SiteConfig) -> (GroupedLinks, Vec<LoadError>) {
    let report = load_links(&root.join(&config.content_dir));
    let grouped = group::group_by_section(report.links, &config.sections);
    for bucket in grouped.undeclared() {
        tracing::warn!(
            section = %bucket.section,
            links = bucket.links.len(),
            "Section is not listed in site config"
        );
    }
    (grouped, report.failures)
}

fn discover(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_link_file(p))
        .collect()
}

fn is_link_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(true);
    if hidden {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    LINK_EXTENSIONS.contains(&ext.as_str())
}

fn load_file(path: &Path) -> Result<LinkRecord, LoadError> {
    let source_id = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    let content = fs::read_to_string(path).map_err(|error| LoadError::Read {
        source_id: source_id.clone(),
        error,
    })?;

    let doc: serde_yaml::Value = serde_yaml::from_str(&content).map_err(|error| LoadError::Parse {
        source_id: source_id.clone(),
        error,
    })?;

    let link = schema::validate(&doc).map_err(|error| LoadError::Validation {
        source_id: source_id.clone(),
        error,
    })?;

    tracing::debug!(source_id = %source_id, section = %link.section, order = link.order, "Loaded link");
    Ok(link.with_source_id(source_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Violation;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_empty_with_diagnostic() {
        let tmp = TempDir::new().unwrap();
        let report = load_links(&tmp.path().join("nope"));
        assert!(report.links.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0],
            LoadError::ContentDirectoryMissing(_)
        ));
        assert_eq!(report.failures[0].source_id(), None);
    }

    #[test]
    fn empty_directory_loads_nothing() {
        let tmp = TempDir::new().unwrap();
        let report = load_links(tmp.path());
        assert!(report.links.is_empty());
        assert!(report.failures.is_empty());
    }

    #[test]
    fn loads_valid_files_and_attaches_source_id() {
        let tmp = TempDir::new().unwrap();
        write_link(tmp.path(), "a.yml", "title: A\nurl: https://a.com\norder: 2");
        write_link(tmp.path(), "b.yaml", "title: B\nurl: https://b.com\norder: 1");

        let report = load_links(tmp.path());
        assert!(report.failures.is_empty());
        assert_eq!(link_titles(&report.links), vec!["A", "B"]);
        assert_eq!(report.links[0].source_id, "a.yml");
        assert_eq!(report.links[1].source_id, "b.yaml");
    }

    #[test]
    fn discovery_is_in_file_name_order() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.yml", "a.yml", "b.yml"] {
            write_link(
                tmp.path(),
                name,
                &format!("title: {name}\nurl: https://x.com\norder: 1"),
            );
        }
        let report = load_links(tmp.path());
        assert_eq!(link_titles(&report.links), vec!["a.yml", "b.yml", "c.yml"]);
    }

    #[test]
    fn ignores_other_extensions_hidden_files_and_subdirectories() {
        let tmp = TempDir::new().unwrap();
        write_link(tmp.path(), "a.yml", "title: A\nurl: https://a.com\norder: 1");
        write_link(tmp.path(), "B.YML", "title: B\nurl: https://b.com\norder: 1");
        write_link(tmp.path(), "notes.md", "title: Notes\nurl: https://n.com\norder: 1");
        write_link(tmp.path(), ".hidden.yml", "title: H\nurl: https://h.com\norder: 1");
        fs::create_dir(tmp.path().join("nested.yml")).unwrap();
        write_link(
            &tmp.path().join("nested.yml"),
            "deep.yml",
            "title: Deep\nurl: https://d.com\norder: 1",
        );

        let report = load_links(tmp.path());
        assert!(report.failures.is_empty());
        assert_eq!(link_titles(&report.links), vec!["B", "A"]);
    }

    #[test]
    fn invalid_order_is_skipped_with_diagnostic() {
        let tmp = TempDir::new().unwrap();
        write_link(tmp.path(), "good.yml", "title: Good\nurl: https://g.com\norder: 1");
        write_link(tmp.path(), "zero.yml", "title: Zero\nurl: https://z.com\norder: 0");

        let report = load_links(tmp.path());
        assert_eq!(link_titles(&report.links), vec!["Good"]);
        assert_eq!(report.failures.len(), 1);
        match &report.failures[0] {
            LoadError::Validation { source_id, error } => {
                assert_eq!(source_id, "zero.yml");
                assert_eq!(error.violations, vec![Violation::InvalidOrder]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn malformed_yaml_is_a_parse_failure() {
        let tmp = TempDir::new().unwrap();
        write_link(tmp.path(), "broken.yml", "title: [unclosed\nurl: https://b.com");
        write_link(tmp.path(), "ok.yml", "title: Ok\nurl: https://o.com\norder: 3");

        let report = load_links(tmp.path());
        assert_eq!(link_titles(&report.links), vec!["Ok"]);
        assert!(matches!(
            &report.failures[0],
            LoadError::Parse { source_id, .. } if source_id == "broken.yml"
        ));
    }

    #[test]
    fn unreadable_file_is_a_read_failure() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("binary.yml"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let report = load_links(tmp.path());
        assert!(report.links.is_empty());
        assert!(matches!(
            &report.failures[0],
            LoadError::Read { source_id, .. } if source_id == "binary.yml"
        ));
    }

    #[test]
    fn failure_message_names_file_and_rule() {
        let tmp = TempDir::new().unwrap();
        write_link(tmp.path(), "bad.yml", "url: https://b.com\norder: 1");
        let report = load_links(tmp.path());
        let message = report.failures[0].to_string();
        assert!(message.contains("bad.yml"));
        assert!(message.contains("title is required"));
    }

    #[test]
    fn loading_twice_is_identical() {
        let tmp = setup_fixtures();
        let config = crate::config::load_config(tmp.path()).unwrap();
        let (first, _) = load_grouped(tmp.path(), &config);
        let (second, _) = load_grouped(tmp.path(), &config);
        assert_eq!(first, second);
    }

    #[test]
    fn load_grouped_uses_configured_content_dir() {
        let tmp = setup_fixtures();
        let config = crate::config::load_config(tmp.path()).unwrap();
        let (grouped, _) = load_grouped(tmp.path(), &config);

        assert_eq!(
            section_titles(&grouped, "main"),
            vec!["Portfolio", "Newsletter", "Email"]
        );
        assert_eq!(section_titles(&grouped, "Education"), vec!["Course"]);
        assert!(find_bucket(&grouped, "Initiatives").links.is_empty());
    }

    #[test]
    fn load_grouped_reports_fixture_failures() {
        let tmp = setup_fixtures();
        let config = crate::config::load_config(tmp.path()).unwrap();
        let (_, failures) = load_grouped(tmp.path(), &config);

        let mut failed: Vec<&str> = failures.iter().filter_map(|f| f.source_id()).collect();
        failed.sort();
        assert_eq!(failed, vec!["bad-order.yml", "broken.yaml"]);
    }
}
