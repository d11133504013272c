//! JSON export and draft import.
//!
//! # Responsibility
//! - Serialize the session as `{studentInfo, courses, totalCredits, timestamp}`.
//! - Name export files after the student ID.
//! - Rebuild a session from a previously exported document.
//!
//! # Invariants
//! - Wire keys are camelCase; the timestamp is RFC 3339 UTC.
//! - `totalCredits` on export is derived from rows, never copied from input.

use crate::catalog::store::Catalog;
use crate::model::course::{deserialize_credits, CourseRow};
use crate::model::identity::StudentIdentity;
use crate::model::program::{Program, Semester};
use crate::service::session_service::RegistrationSession;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const JSON_FILE_SUFFIX: &str = "_data.json";
const JSON_FALLBACK_STEM: &str = "registration";
const PDF_FALLBACK_STEM: &str = "student";

/// Identity block of the export document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentInfo {
    /// Program display name, blank when unset.
    pub program: String,
    /// Semester number as text, blank when unset.
    pub semester: String,
    pub student_name: String,
    pub student_id: String,
    pub semester_section: String,
    pub advisor_name: String,
    pub guardian_phone: String,
    pub student_phone: String,
    pub blood_group: String,
}

/// One exported course row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportedCourse {
    pub code: String,
    pub title: String,
    pub selected: bool,
    #[serde(deserialize_with = "deserialize_credits")]
    pub credits: u32,
    pub section: String,
}

/// Full JSON export document.
///
/// Hand-written drafts may omit every top-level key; a missing timestamp is
/// stamped with the import time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationExport {
    #[serde(default)]
    pub student_info: StudentInfo,
    #[serde(default)]
    pub courses: Vec<ExportedCourse>,
    #[serde(default)]
    pub total_credits: u32,
    #[serde(default = "import_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Serialized export ready to be handed to a download collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub contents: String,
}

impl RegistrationExport {
    /// Snapshots the session at `timestamp`.
    pub fn from_session(session: &RegistrationSession<'_>, timestamp: DateTime<Utc>) -> Self {
        let identity = session.identity();
        Self {
            student_info: StudentInfo {
                program: session
                    .program()
                    .map(|program| program.to_string())
                    .unwrap_or_default(),
                semester: session
                    .semester()
                    .map(|semester| semester.to_string())
                    .unwrap_or_default(),
                student_name: identity.student_name.clone(),
                student_id: identity.student_id.clone(),
                semester_section: identity.semester_section.clone(),
                advisor_name: identity.advisor_name.clone(),
                guardian_phone: identity.guardian_phone.clone(),
                student_phone: identity.student_phone.clone(),
                blood_group: identity.blood_group.clone(),
            },
            courses: session
                .rows()
                .iter()
                .map(|row| ExportedCourse {
                    code: row.code.clone(),
                    title: row.title.clone(),
                    selected: row.selected,
                    credits: row.credits,
                    section: row.section.clone(),
                })
                .collect(),
            total_credits: session.total_credits(),
            timestamp,
        }
    }

    /// Parses an export document.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// File name `<studentId>_data.json`.
    pub fn file_name(&self) -> String {
        json_file_name(&self.student_info.student_id)
    }

    /// Serializes into a named file payload.
    pub fn to_file(&self) -> Result<ExportedFile, serde_json::Error> {
        Ok(ExportedFile {
            file_name: self.file_name(),
            contents: self.to_json_pretty()?,
        })
    }

    /// Rebuilds a session over `catalog` from this export.
    ///
    /// Rows are restored exactly as exported (no catalog re-seeding).
    /// Unknown program or semester values are left unset and logged.
    pub fn restore<'catalog>(&self, catalog: &'catalog Catalog) -> RegistrationSession<'catalog> {
        let info = &self.student_info;
        let program = parse_optional::<Program>("program", &info.program);
        let semester = parse_optional::<Semester>("semester", &info.semester);
        let identity = StudentIdentity {
            student_name: info.student_name.clone(),
            student_id: info.student_id.clone(),
            semester_section: info.semester_section.clone(),
            advisor_name: info.advisor_name.clone(),
            guardian_phone: info.guardian_phone.clone(),
            student_phone: info.student_phone.clone(),
            blood_group: info.blood_group.clone(),
        };
        let rows = self
            .courses
            .iter()
            .enumerate()
            .map(|(pos, course)| {
                let mut row = CourseRow::new(pos + 1, None, course.section.clone());
                row.code = course.code.clone();
                row.title = course.title.clone();
                row.selected = course.selected;
                row.credits = course.credits;
                row
            })
            .collect::<Vec<_>>();

        debug!(
            "event=draft_restore module=export status=ok rows={}",
            rows.len()
        );
        let mut session = RegistrationSession::new(catalog);
        session.replace_state(program, semester, identity, rows);
        session
    }
}

/// `<studentId>_data.json`, or `registration_data.json` for a blank ID.
pub fn json_file_name(student_id: &str) -> String {
    format!("{}{JSON_FILE_SUFFIX}", file_stem(student_id, JSON_FALLBACK_STEM))
}

/// `<studentId>_CourseRegistration_<YYYY-MM-DD>.pdf`.
pub fn pdf_file_name(student_id: &str, date: NaiveDate) -> String {
    format!(
        "{}_CourseRegistration_{}.pdf",
        file_stem(student_id, PDF_FALLBACK_STEM),
        date.format("%Y-%m-%d")
    )
}

fn import_timestamp() -> DateTime<Utc> {
    Utc::now()
}

fn file_stem<'a>(student_id: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = student_id.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

fn parse_optional<T: std::str::FromStr>(field: &str, value: &str) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    if value.trim().is_empty() {
        return None;
    }
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!(
                "event=draft_restore module=export status=degraded field={} error={}",
                field, err
            );
            None
        }
    }
}
