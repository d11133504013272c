//! Read-only two-copy document projection.
//!
//! # Responsibility
//! - Mirror session identity and rows into a printable document model.
//! - Render the plain-text print layout used by print collaborators.
//!
//! # Invariants
//! - Office and student copies carry identical content.
//! - Building a preview never mutates the session.

use crate::service::session_service::RegistrationSession;
use std::fmt::{Display, Formatter};

pub const SELECTED_MARK: char = '✓';
pub const UNSELECTED_MARK: char = '✗';
const DOCUMENT_TITLE: &str = "Course Registration Form";

/// Which physical copy of the form is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    Office,
    Student,
}

impl CopyKind {
    pub const BOTH: [CopyKind; 2] = [CopyKind::Office, CopyKind::Student];

    pub fn label(self) -> &'static str {
        match self {
            Self::Office => "Office Copy",
            Self::Student => "Student Copy",
        }
    }
}

/// One course line on the printed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub index: usize,
    pub code: String,
    pub title: String,
    pub selected: bool,
    pub credits: u32,
    pub section: String,
}

impl PreviewRow {
    pub fn mark(&self) -> char {
        if self.selected {
            SELECTED_MARK
        } else {
            UNSELECTED_MARK
        }
    }
}

/// Snapshot of everything printed on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewDocument {
    pub term_label: String,
    pub program: String,
    /// Ordinal label (`1st`), blank when no semester is chosen.
    pub semester: String,
    pub student_name: String,
    pub student_id: String,
    pub semester_section: String,
    pub advisor_name: String,
    pub guardian_phone: String,
    pub student_phone: String,
    pub blood_group: String,
    pub rows: Vec<PreviewRow>,
    pub total_credits: u32,
}

impl PreviewDocument {
    /// Projects the current session state.
    pub fn from_session(session: &RegistrationSession<'_>) -> Self {
        let identity = session.identity();
        Self {
            term_label: session.config().term_label.clone(),
            program: session
                .program()
                .map(|program| program.to_string())
                .unwrap_or_default(),
            semester: session
                .semester()
                .map(|semester| semester.ordinal())
                .unwrap_or_default(),
            student_name: identity.student_name.clone(),
            student_id: identity.student_id.clone(),
            semester_section: identity.semester_section.clone(),
            advisor_name: identity.advisor_name.clone(),
            guardian_phone: identity.guardian_phone.clone(),
            student_phone: identity.student_phone.clone(),
            blood_group: identity.blood_group.clone(),
            rows: session
                .rows()
                .iter()
                .map(|row| PreviewRow {
                    index: row.index,
                    code: row.code.clone(),
                    title: row.title.clone(),
                    selected: row.selected,
                    credits: row.credits,
                    section: row.section.clone(),
                })
                .collect(),
            total_credits: session.total_credits(),
        }
    }

    /// Renders both copies as plain text, separated by a form feed.
    pub fn render_text(&self) -> String {
        CopyKind::BOTH
            .iter()
            .map(|kind| self.render_copy(*kind))
            .collect::<Vec<_>>()
            .join("\u{c}\n")
    }

    /// Renders one copy as plain text.
    pub fn render_copy(&self, kind: CopyKind) -> String {
        CopyText {
            document: self,
            kind,
        }
        .to_string()
    }
}

/// Plain-text layout of one copy.
struct CopyText<'a> {
    document: &'a PreviewDocument,
    kind: CopyKind,
}

impl Display for CopyText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let doc = self.document;
        writeln!(f, "{:>78}", self.kind.label())?;
        writeln!(f, "{DOCUMENT_TITLE}")?;
        writeln!(f, "{}", doc.term_label)?;
        writeln!(f)?;

        let left = [
            ("Program", doc.program.as_str()),
            ("Semester", doc.semester.as_str()),
            ("Student Name", doc.student_name.as_str()),
            ("Student ID", doc.student_id.as_str()),
            ("Section", doc.semester_section.as_str()),
        ];
        let right = [
            ("Advisor", doc.advisor_name.as_str()),
            ("Guardian Contact", doc.guardian_phone.as_str()),
            ("Student Contact", doc.student_phone.as_str()),
            ("Blood Group", doc.blood_group.as_str()),
            ("", ""),
        ];
        for ((l_label, l_value), (r_label, r_value)) in left.iter().zip(right.iter()) {
            let left_cell = format!("{l_label:<14}: {l_value}");
            if r_label.is_empty() {
                writeln!(f, "{left_cell}")?;
            } else {
                writeln!(f, "{left_cell:<40}{r_label:<17}: {r_value}")?;
            }
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:>3}  {:<10}  {:<36}  {:^3}  {:>7}  {:<7}",
            "SL", "Code", "Course Title", "Sel", "Credits", "Section"
        )?;
        for row in &doc.rows {
            writeln!(
                f,
                "{:>3}  {:<10}  {:<36}  {:^3}  {:>7}  {:<7}",
                row.index,
                row.code,
                row.title,
                row.mark(),
                row.credits,
                row.section
            )?;
        }
        writeln!(f, "{:>62}  {:>7}", "Total Credits", doc.total_credits)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<26}{:^26}{:>26}",
            "Student Signature", "Advisor Signature", "Registrar"
        )
    }
}
