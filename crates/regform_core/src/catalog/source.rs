//! Catalog resource sources.
//!
//! # Responsibility
//! - Define the fetch contract for one `(program, semester)` resource.
//! - Provide directory-backed, in-memory and builtin-only implementations.
//! - Parse `<program>_semester_<n>` resource names.
//!
//! # Invariants
//! - A source never substitutes fallback data itself; it reports `LoadError`
//!   and the store decides.
//! - Resource bodies are JSON arrays of `{code, title, credits}`.

use crate::model::course::CourseRecord;
use crate::model::program::{Program, Semester};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default directory holding catalog resources.
pub const DEFAULT_CATALOG_DIR: &str = "./data/courses";
const RESOURCE_EXTENSION: &str = "json";

static RESOURCE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(cse|eee|bba|english)_semester_([1-8])(?:\.json)?$")
        .expect("valid resource name regex")
});

/// Catalog key identifying one fetchable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey {
    pub program: Program,
    pub semester: Semester,
}

impl ResourceKey {
    pub fn new(program: Program, semester: Semester) -> Self {
        Self { program, semester }
    }

    /// Resource name without extension, e.g. `cse_semester_1`.
    pub fn resource_name(&self) -> String {
        format!(
            "{}_semester_{}",
            self.program.resource_stem(),
            self.semester.number()
        )
    }

    /// File name inside a catalog directory, e.g. `cse_semester_1.json`.
    pub fn file_name(&self) -> String {
        format!("{}.{RESOURCE_EXTENSION}", self.resource_name())
    }

    /// Parses a resource or file name back into its key.
    ///
    /// Returns `None` for names outside the `<program>_semester_<1..8>` shape.
    pub fn parse(name: &str) -> Option<Self> {
        let caps = RESOURCE_NAME_RE.captures(name.trim())?;
        let program = caps.get(1)?.as_str().parse::<Program>().ok()?;
        let semester = caps.get(2)?.as_str().parse::<Semester>().ok()?;
        Some(Self::new(program, semester))
    }

    /// Every supported key in load order (program-major).
    pub fn all() -> impl Iterator<Item = ResourceKey> {
        Program::ALL
            .into_iter()
            .flat_map(|program| Semester::all().map(move |semester| Self::new(program, semester)))
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resource_name())
    }
}

/// Failure to fetch or parse one catalog resource.
#[derive(Debug)]
pub enum LoadError {
    /// Resource does not exist at the source.
    Missing(String),
    /// Transport failure while reading the resource.
    Io {
        resource: String,
        source: std::io::Error,
    },
    /// Resource body is not a valid course list.
    Malformed {
        resource: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Short metadata tag for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing(_) => "missing",
            Self::Io { .. } => "io",
            Self::Malformed { .. } => "malformed",
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(resource) => write!(f, "catalog resource not found: {resource}"),
            Self::Io { resource, source } => {
                write!(f, "failed to read catalog resource `{resource}`: {source}")
            }
            Self::Malformed { resource, source } => {
                write!(f, "catalog resource `{resource}` is malformed: {source}")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Missing(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

/// Fetch contract for per-key catalog resources.
pub trait CatalogSource {
    fn fetch(&self, key: ResourceKey) -> Result<Vec<CourseRecord>, LoadError>;
}

/// Parses one resource body as an ordered course list.
pub fn parse_course_list(resource: &str, body: &str) -> Result<Vec<CourseRecord>, LoadError> {
    serde_json::from_str(body).map_err(|source| LoadError::Malformed {
        resource: resource.to_string(),
        source,
    })
}

/// Reads `<root>/<program>_semester_<n>.json` files.
#[derive(Debug, Clone)]
pub struct DirCatalogSource {
    root: PathBuf,
}

impl DirCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists recognized catalog resources present under the root, sorted by
    /// key. Unrecognized file names are ignored.
    pub fn scan(&self) -> std::io::Result<Vec<ResourceKey>> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.to_ascii_lowercase().ends_with(".json") {
                continue;
            }
            if let Some(key) = ResourceKey::parse(name) {
                keys.push(key);
            }
        }
        keys.sort();
        keys.dedup();
        Ok(keys)
    }
}

impl Default for DirCatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_CATALOG_DIR)
    }
}

impl CatalogSource for DirCatalogSource {
    fn fetch(&self, key: ResourceKey) -> Result<Vec<CourseRecord>, LoadError> {
        let file_name = key.file_name();
        let path = self.root.join(&file_name);
        let body = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                LoadError::Missing(file_name.clone())
            } else {
                LoadError::Io {
                    resource: file_name.clone(),
                    source,
                }
            }
        })?;
        parse_course_list(&file_name, &body)
    }
}

/// In-memory resource map keyed by resource name (`cse_semester_1`).
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    bodies: BTreeMap<String, String>,
}

impl MemoryCatalogSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a raw body for a key, replacing any previous one.
    pub fn insert(&mut self, key: ResourceKey, body: impl Into<String>) -> &mut Self {
        self.bodies.insert(key.resource_name(), body.into());
        self
    }

    /// Builder-style variant of [`MemoryCatalogSource::insert`].
    pub fn with(mut self, key: ResourceKey, body: impl Into<String>) -> Self {
        self.insert(key, body);
        self
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn fetch(&self, key: ResourceKey) -> Result<Vec<CourseRecord>, LoadError> {
        let name = key.resource_name();
        match self.bodies.get(&name) {
            Some(body) => parse_course_list(&name, body),
            None => Err(LoadError::Missing(name)),
        }
    }
}

/// Source with no resources; every key resolves to the builtin table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl CatalogSource for BuiltinCatalogSource {
    fn fetch(&self, key: ResourceKey) -> Result<Vec<CourseRecord>, LoadError> {
        Err(LoadError::Missing(key.resource_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_course_list, LoadError, ResourceKey};
    use crate::model::program::{Program, Semester};

    #[test]
    fn resource_names_round_trip_through_parse() {
        let key = ResourceKey::new(Program::English, Semester::new(3).unwrap());
        assert_eq!(key.file_name(), "english_semester_3.json");
        assert_eq!(ResourceKey::parse("english_semester_3.json"), Some(key));
        assert_eq!(ResourceKey::parse("ENGLISH_semester_3"), Some(key));
    }

    #[test]
    fn parse_rejects_unknown_shapes() {
        assert_eq!(ResourceKey::parse("cse_semester_9.json"), None);
        assert_eq!(ResourceKey::parse("mba_semester_1.json"), None);
        assert_eq!(ResourceKey::parse("cse_semester_1.csv"), None);
        assert_eq!(ResourceKey::parse("notes.json"), None);
    }

    #[test]
    fn all_keys_cover_every_program_and_semester() {
        assert_eq!(ResourceKey::all().count(), 32);
    }

    #[test]
    fn negative_credits_are_malformed() {
        let err = parse_course_list(
            "cse_semester_1",
            r#"[{"code":"X 1","title":"Bad","credits":-1}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
        assert_eq!(err.kind(), "malformed");
    }
}
