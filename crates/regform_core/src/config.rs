//! Session configuration defaults.
//!
//! # Invariants
//! - `default_section` is the row section used when the semester section
//!   field is blank; it is independent from the semester-section autofill.

/// Row section used when the session has no semester section.
pub const DEFAULT_SECTION: &str = "B";
/// Suffix appended to the semester number when autofilling semester section.
pub const SEMESTER_SECTION_SUFFIX: &str = "B";
/// Total credits above which the form shows a heavy-load warning.
pub const CREDIT_WARNING_THRESHOLD: u32 = 22;
/// Academic term printed on the document.
pub const DEFAULT_TERM_LABEL: &str = "Spring 2025";

/// Tunables for one registration session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub default_section: String,
    pub semester_section_suffix: String,
    pub credit_warning_threshold: u32,
    pub term_label: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION.to_string(),
            semester_section_suffix: SEMESTER_SECTION_SUFFIX.to_string(),
            credit_warning_threshold: CREDIT_WARNING_THRESHOLD,
            term_label: DEFAULT_TERM_LABEL.to_string(),
        }
    }
}

impl SessionConfig {
    pub fn with_default_section(mut self, section: impl Into<String>) -> Self {
        self.default_section = section.into();
        self
    }

    pub fn with_credit_warning_threshold(mut self, threshold: u32) -> Self {
        self.credit_warning_threshold = threshold;
        self
    }

    pub fn with_term_label(mut self, label: impl Into<String>) -> Self {
        self.term_label = label.into();
        self
    }
}
