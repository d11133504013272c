//! Student identity fields on the registration form.
//!
//! # Invariants
//! - `IdentityField::ORDER` is the fixed submission validation order.
//! - Program and semester are typed on the session; the remaining fields are
//!   free text stored here.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Required identity field, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IdentityField {
    Program,
    Semester,
    StudentName,
    StudentId,
    SemesterSection,
    AdvisorName,
    GuardianPhone,
    StudentPhone,
    BloodGroup,
}

impl IdentityField {
    pub const ORDER: [IdentityField; 9] = [
        IdentityField::Program,
        IdentityField::Semester,
        IdentityField::StudentName,
        IdentityField::StudentId,
        IdentityField::SemesterSection,
        IdentityField::AdvisorName,
        IdentityField::GuardianPhone,
        IdentityField::StudentPhone,
        IdentityField::BloodGroup,
    ];

    /// Wire/form key, e.g. `studentName`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Program => "program",
            Self::Semester => "semester",
            Self::StudentName => "studentName",
            Self::StudentId => "studentId",
            Self::SemesterSection => "semesterSection",
            Self::AdvisorName => "advisorName",
            Self::GuardianPhone => "guardianPhone",
            Self::StudentPhone => "studentPhone",
            Self::BloodGroup => "bloodGroup",
        }
    }

    /// Human label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::Semester => "Semester",
            Self::StudentName => "Student Name",
            Self::StudentId => "Student ID",
            Self::SemesterSection => "Semester Section",
            Self::AdvisorName => "Advisor Name",
            Self::GuardianPhone => "Guardian Contact",
            Self::StudentPhone => "Student Contact",
            Self::BloodGroup => "Blood Group",
        }
    }

    /// Whether the field is free text held in `StudentIdentity`.
    pub fn is_text(self) -> bool {
        !matches!(self, Self::Program | Self::Semester)
    }
}

impl Display for IdentityField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IdentityField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ORDER
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| value.to_string())
    }
}

/// Free-text identity values typed by the student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentIdentity {
    pub student_name: String,
    pub student_id: String,
    pub semester_section: String,
    pub advisor_name: String,
    pub guardian_phone: String,
    pub student_phone: String,
    pub blood_group: String,
}

impl StudentIdentity {
    /// Returns the stored value for a text field; `None` for typed fields.
    pub fn get(&self, field: IdentityField) -> Option<&str> {
        let value = match field {
            IdentityField::StudentName => &self.student_name,
            IdentityField::StudentId => &self.student_id,
            IdentityField::SemesterSection => &self.semester_section,
            IdentityField::AdvisorName => &self.advisor_name,
            IdentityField::GuardianPhone => &self.guardian_phone,
            IdentityField::StudentPhone => &self.student_phone,
            IdentityField::BloodGroup => &self.blood_group,
            IdentityField::Program | IdentityField::Semester => return None,
        };
        Some(value.as_str())
    }

    /// Mutable slot for a text field; `None` for typed fields.
    pub fn slot_mut(&mut self, field: IdentityField) -> Option<&mut String> {
        match field {
            IdentityField::StudentName => Some(&mut self.student_name),
            IdentityField::StudentId => Some(&mut self.student_id),
            IdentityField::SemesterSection => Some(&mut self.semester_section),
            IdentityField::AdvisorName => Some(&mut self.advisor_name),
            IdentityField::GuardianPhone => Some(&mut self.guardian_phone),
            IdentityField::StudentPhone => Some(&mut self.student_phone),
            IdentityField::BloodGroup => Some(&mut self.blood_group),
            IdentityField::Program | IdentityField::Semester => None,
        }
    }
}
