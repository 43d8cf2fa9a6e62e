//! Section grouping.
//!
//! Buckets validated links by section and orders each bucket. The result
//! keeps the configured section order; sections seen in content but not
//! configured are appended after them in first-seen order and flagged as
//! undeclared so the renderer can decide whether to show them.

use crate::schema::{self, LinkRecord};
use serde::Serialize;

/// Links belonging to one section, sorted by `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub section: String,
    /// Listed in the site config's `sections`.
    pub declared: bool,
    pub links: Vec<LinkRecord>,
}

/// Section key → ordered links, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedLinks {
    buckets: Vec<Bucket>,
}

impl GroupedLinks {
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn get(&self, section: &str) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.section == section)
    }

    pub fn declared(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(|b| b.declared)
    }

    pub fn undeclared(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter().filter(|b| !b.declared)
    }

    /// Total number of links across all buckets.
    pub fn link_count(&self) -> usize {
        self.buckets.iter().map(|b| b.links.len()).sum()
    }

    fn bucket_mut(&mut self, section: &str) -> Option<&mut Bucket> {
        self.buckets.iter_mut().find(|b| b.section == section)
    }
}

/// Group links by section.
///
/// Every configured section gets a bucket, even when empty. Within a bucket
/// links are sorted ascending by `order`; the sort is stable, so equal
/// orders keep their input order.
pub fn group_by_section(links: Vec<LinkRecord>, sections: &[String]) -> GroupedLinks {
    let mut grouped = GroupedLinks::default();
    for section in sections {
        if grouped.get(section).is_none() {
            grouped.buckets.push(Bucket {
                section: section.clone(),
                declared: true,
                links: Vec::new(),
            });
        }
    }

    for link in links {
        let section = schema::resolve_section(&link.section).to_string();
        match grouped.bucket_mut(&section) {
            Some(bucket) => bucket.links.push(link),
            None => grouped.buckets.push(Bucket {
                section,
                declared: false,
                links: vec![link],
            }),
        }
    }

    for bucket in &mut grouped.buckets {
        bucket.links.sort_by_key(|l| l.order);
    }

    grouped
}
