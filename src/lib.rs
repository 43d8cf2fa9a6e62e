//! # linkpage
//!
//! A minimal static site generator for "link-in-bio" pages: a header, an
//! optional hero, outbound links grouped into sections, and a footer of
//! social links.
//!
//! # Content Model
//!
//! ```text
//! my-site/
//! ├── site.toml              # Site identity (optional, overrides stock config)
//! ├── content/links/         # One YAML file per link
//! │   ├── portfolio.yml
//! │   └── course.yaml
//! └── public/                # Copied into the output root
//! ```
//!
//! Each link file carries its own title, URL, section, sort order and
//! presentation (thumbnail size, hover animation). Adding a link is adding a
//! file; nothing else needs to change.
//!
//! # Pipeline
//!
//! ```text
//! 1. Load      content/links/*.yml  →  Vec<LinkRecord>   (parse + validate, per-file failures skipped)
//! 2. Group     Vec<LinkRecord>      →  GroupedLinks      (sections in config order, stable sort by order)
//! 3. Generate  GroupedLinks         →  dist/index.html   (card variant chosen per link)
//! ```
//!
//! Everything is recomputed from source on every run. A broken link file
//! never breaks the page; it is reported and left out.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`schema`] | Link record shape and validation rules |
//! | [`loader`] | Discovers, parses and validates link files, tolerating per-file failure |
//! | [`group`] | Buckets links by section and orders each bucket |
//! | [`variant`] | Chooses the card layout and hover effect for a link |
//! | [`generate`] | Renders the page with Maud and writes the output directory |
//! | [`config`] | `site.toml` loading over compiled-in stock values, validation, CSS variables |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Config Is a Value, Not a Global
//!
//! [`config::SiteConfig`] is built once in `main` and passed by reference to
//! the loader, the grouping engine and the renderer. Every stage is a plain
//! function of its inputs, so tests construct configs inline.
//!
//! ## Validation Without a Validation Library
//!
//! [`schema::validate`] is a handful of rule functions over a
//! `serde_yaml::Value`. Each rule is tested on its own and all violations in
//! a file are reported together.
//!
//! ## Undeclared Sections Are Shown
//!
//! A link whose section is not listed in `sections` still renders, after the
//! listed ones and under its own header. Setting `show_undeclared_sections =
//! false` hides such links instead.

pub mod config;
pub mod generate;
pub mod group;
pub mod loader;
pub mod output;
pub mod schema;
pub mod variant;

#[cfg(test)]
pub(crate) mod test_helpers;
