//! Read-only course catalog.
//!
//! # Responsibility
//! - Load every `(program, semester)` key once from a `CatalogSource`.
//! - Resolve fetch failures to the builtin sample table per key.
//! - Answer course lists and case-insensitive code lookups.
//!
//! # Invariants
//! - Loading never fails as a whole; each key independently falls back.
//! - The catalog is immutable after `load`.
//! - Missing keys resolve to an empty course list.

use crate::catalog::sample::sample_courses;
use crate::catalog::source::{CatalogSource, LoadError, ResourceKey};
use crate::model::course::{normalize_code, CourseRecord};
use crate::model::program::{Program, Semester};
use log::{debug, info, warn};
use std::collections::BTreeMap;

/// Where a key's course list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// Parsed from the source resource.
    Fetched,
    /// Source failed; builtin sample table used.
    Fallback,
}

impl CatalogOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fetched => "fetched",
            Self::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    courses: Vec<CourseRecord>,
    origin: CatalogOrigin,
}

/// Load outcome counts for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogSummary {
    pub fetched: usize,
    pub fallback: usize,
    pub courses: usize,
}

/// Immutable course table keyed by program and semester.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: BTreeMap<ResourceKey, CatalogEntry>,
}

impl Catalog {
    /// Loads all 32 keys from `source`, falling back per key.
    pub fn load(source: &dyn CatalogSource) -> Self {
        let mut entries = BTreeMap::new();
        for key in ResourceKey::all() {
            let (courses, origin) = resolve_key(source, key);
            entries.insert(key, CatalogEntry { courses, origin });
        }
        let catalog = Self { entries };
        let summary = catalog.summary();
        info!(
            "event=catalog_load module=catalog status=ok fetched={} fallback={} courses={}",
            summary.fetched, summary.fallback, summary.courses
        );
        catalog
    }

    /// Catalog made only of the builtin sample table.
    pub fn builtin() -> Self {
        Self::load(&crate::catalog::source::BuiltinCatalogSource)
    }

    /// Ordered courses for a key; empty when none exist.
    pub fn courses(&self, program: Program, semester: Semester) -> &[CourseRecord] {
        self.entries
            .get(&ResourceKey::new(program, semester))
            .map(|entry| entry.courses.as_slice())
            .unwrap_or(&[])
    }

    /// Origin of a key's course list.
    pub fn origin(&self, program: Program, semester: Semester) -> CatalogOrigin {
        self.entries
            .get(&ResourceKey::new(program, semester))
            .map(|entry| entry.origin)
            .unwrap_or(CatalogOrigin::Fallback)
    }

    /// Finds the first course whose code matches, ignoring case and outer
    /// whitespace.
    pub fn lookup(&self, program: Program, semester: Semester, code: &str) -> Option<&CourseRecord> {
        let wanted = normalize_code(code);
        if wanted.is_empty() {
            return None;
        }
        self.courses(program, semester)
            .iter()
            .find(|record| normalize_code(&record.code) == wanted)
    }

    pub fn summary(&self) -> CatalogSummary {
        self.entries
            .values()
            .fold(CatalogSummary::default(), |mut summary, entry| {
                match entry.origin {
                    CatalogOrigin::Fetched => summary.fetched += 1,
                    CatalogOrigin::Fallback => summary.fallback += 1,
                }
                summary.courses += entry.courses.len();
                summary
            })
    }
}

/// Fetches one key and resolves any failure to the builtin table.
pub fn resolve_key(source: &dyn CatalogSource, key: ResourceKey) -> (Vec<CourseRecord>, CatalogOrigin) {
    match source.fetch(key) {
        Ok(courses) => {
            debug!(
                "event=catalog_key module=catalog status=fetched key={} courses={}",
                key,
                courses.len()
            );
            (courses, CatalogOrigin::Fetched)
        }
        Err(err) => {
            log_fallback(key, &err);
            (
                sample_courses(key.program, key.semester),
                CatalogOrigin::Fallback,
            )
        }
    }
}

fn log_fallback(key: ResourceKey, err: &LoadError) {
    match err {
        LoadError::Missing(_) => debug!(
            "event=catalog_key module=catalog status=fallback key={} reason={}",
            key,
            err.kind()
        ),
        _ => warn!(
            "event=catalog_key module=catalog status=fallback key={} reason={} error={}",
            key,
            err.kind(),
            err
        ),
    }
}
