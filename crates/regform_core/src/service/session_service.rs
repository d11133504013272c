//! Registration session use-case service.
//!
//! # Responsibility
//! - Own the editable course table and student identity for one session.
//! - Seed rows from the catalog and autofill title/credits from typed codes.
//! - Derive total credits and check submission requirements.
//!
//! # Invariants
//! - Row indices are always `1..=N` in current row order.
//! - Total credits are recomputed from rows on every query.
//! - A failed operation leaves the session unchanged.
//! - Identity values are never written to logs.

use crate::catalog::store::Catalog;
use crate::config::SessionConfig;
use crate::model::course::{CourseRecord, CourseRow, RowEdit, RowField};
use crate::model::identity::{IdentityField, StudentIdentity};
use crate::model::program::{Program, Semester};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from row and identity commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Row index outside `1..=N`.
    RowNotFound(usize),
    /// Field name is not editable through this command.
    InvalidField(String),
    /// Value is not acceptable for the field.
    InvalidValue { field: RowField, value: String },
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowNotFound(index) => write!(f, "course row not found: {index}"),
            Self::InvalidField(field) => write!(f, "field is not editable: `{field}`"),
            Self::InvalidValue { field, value } => {
                write!(f, "invalid value for {field}: `{value}`")
            }
        }
    }
}

impl Error for SessionError {}

/// Blocking submission failure, reported one at a time in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Required identity field is blank after trim.
    MissingField(IdentityField),
    /// No row is selected.
    NoCourseSelected,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Please fill in the {} field.", field.label()),
            Self::NoCourseSelected => write!(f, "Please select at least one course."),
        }
    }
}

impl Error for ValidationError {}

/// In-memory registration form state bound to a loaded catalog.
#[derive(Debug, Clone)]
pub struct RegistrationSession<'catalog> {
    catalog: &'catalog Catalog,
    config: SessionConfig,
    program: Option<Program>,
    semester: Option<Semester>,
    identity: StudentIdentity,
    rows: Vec<CourseRow>,
}

impl<'catalog> RegistrationSession<'catalog> {
    /// Creates an empty session with default configuration.
    pub fn new(catalog: &'catalog Catalog) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    pub fn with_config(catalog: &'catalog Catalog, config: SessionConfig) -> Self {
        Self {
            catalog,
            config,
            program: None,
            semester: None,
            identity: StudentIdentity::default(),
            rows: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &'catalog Catalog {
        self.catalog
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn program(&self) -> Option<Program> {
        self.program
    }

    pub fn semester(&self) -> Option<Semester> {
        self.semester
    }

    pub fn identity(&self) -> &StudentIdentity {
        &self.identity
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[CourseRow] {
        &self.rows
    }

    /// Row at 1-based display index.
    pub fn row(&self, index: usize) -> Option<&CourseRow> {
        index.checked_sub(1).and_then(|pos| self.rows.get(pos))
    }

    pub fn selected_rows(&self) -> impl Iterator<Item = &CourseRow> {
        self.rows.iter().filter(|row| row.selected)
    }

    /// Replaces the course table with the catalog list for a key.
    ///
    /// # Contract
    /// - One unselected row per record, in catalog order.
    /// - Row sections use the current semester section, or the configured
    ///   default when blank.
    /// - Afterwards a blank semester section is autofilled as `<n><suffix>`.
    ///
    /// Returns the number of rows created.
    pub fn set_program_semester(&mut self, program: Program, semester: Semester) -> usize {
        self.program = Some(program);
        self.semester = Some(semester);

        let section = self.row_section_default();
        self.rows = self
            .catalog
            .courses(program, semester)
            .iter()
            .enumerate()
            .map(|(pos, record)| CourseRow::new(pos + 1, Some(record), section.clone()))
            .collect();

        if self.identity.semester_section.trim().is_empty() {
            self.identity.semester_section =
                format!("{}{}", semester.number(), self.config.semester_section_suffix);
        }

        debug!(
            "event=program_semester_set module=session status=ok program={} semester={} rows={}",
            program,
            semester,
            self.rows.len()
        );
        self.rows.len()
    }

    /// Appends a row, optionally seeded from a catalog record.
    ///
    /// Returns the new row's display index.
    pub fn add_row(&mut self, seed: Option<&CourseRecord>) -> usize {
        let index = self.rows.len() + 1;
        let section = self.row_section_default();
        self.rows.push(CourseRow::new(index, seed, section));
        debug!(
            "event=row_add module=session status=ok index={} seeded={}",
            index,
            seed.is_some()
        );
        index
    }

    /// Removes a row and renumbers the rows after it.
    pub fn delete_row(&mut self, index: usize) -> SessionResult<CourseRow> {
        let pos = self.position(index)?;
        let removed = self.rows.remove(pos);
        self.renumber();
        debug!(
            "event=row_delete module=session status=ok index={} rows={}",
            index,
            self.rows.len()
        );
        Ok(removed)
    }

    /// Applies a raw form edit to one row.
    ///
    /// # Errors
    /// - `RowNotFound` when `index` is outside `1..=N`.
    /// - `InvalidField` when `field` is not an editable column.
    /// - `InvalidValue` for negative/overflowing credits or unrecognized
    ///   booleans. Non-numeric credits clamp to `0` instead.
    pub fn edit_row(&mut self, index: usize, field: &str, value: &str) -> SessionResult<()> {
        self.position(index)?;
        let field: RowField = field.parse().map_err(SessionError::InvalidField)?;
        let edit = RowEdit::parse(field, value).ok_or_else(|| SessionError::InvalidValue {
            field,
            value: value.to_string(),
        })?;
        self.apply_edit(index, edit)
    }

    /// Applies a typed edit to one row.
    ///
    /// Editing the code looks it up in the catalog for the current program and
    /// semester; a match overwrites title and credits, a miss changes nothing
    /// else.
    pub fn apply_edit(&mut self, index: usize, edit: RowEdit) -> SessionResult<()> {
        let pos = self.position(index)?;
        let field = edit.field();
        let autofill = match &edit {
            RowEdit::Code(code) => self.lookup(code).cloned(),
            _ => None,
        };

        let row = &mut self.rows[pos];
        match edit {
            RowEdit::Code(code) => row.code = code,
            RowEdit::Title(title) => row.title = title,
            RowEdit::Selected(selected) => row.selected = selected,
            RowEdit::Credits(credits) => row.credits = credits,
            RowEdit::Section(section) => row.section = section,
        }
        if let Some(record) = &autofill {
            row.title = record.title.clone();
            row.credits = record.credits;
        }

        debug!(
            "event=row_edit module=session status=ok index={} field={} autofilled={}",
            index,
            field,
            autofill.is_some()
        );
        Ok(())
    }

    /// Sets one free-text identity field.
    ///
    /// Program and semester are typed; use `set_program_semester`.
    pub fn set_identity(&mut self, field: IdentityField, value: impl Into<String>) -> SessionResult<()> {
        let slot = self
            .identity
            .slot_mut(field)
            .ok_or_else(|| SessionError::InvalidField(field.key().to_string()))?;
        *slot = value.into();
        Ok(())
    }

    /// Sum of credits over selected rows.
    pub fn total_credits(&self) -> u32 {
        self.rows.iter().map(CourseRow::counted_credits).sum()
    }

    /// Whether the selected load is above the configured warning threshold.
    pub fn exceeds_credit_warning(&self) -> bool {
        self.total_credits() > self.config.credit_warning_threshold
    }

    /// Looks a code up in the catalog for the current program/semester.
    pub fn lookup(&self, code: &str) -> Option<&'catalog CourseRecord> {
        let program = self.program?;
        let semester = self.semester?;
        self.catalog.lookup(program, semester, code)
    }

    /// Checks submission requirements, reporting the first failure.
    pub fn validate_for_submission(&self) -> Result<(), ValidationError> {
        match self.missing_requirements().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every unmet requirement, in form order with course selection last.
    pub fn missing_requirements(&self) -> Vec<ValidationError> {
        let mut missing: Vec<ValidationError> = IdentityField::ORDER
            .into_iter()
            .filter(|field| !self.is_field_filled(*field))
            .map(ValidationError::MissingField)
            .collect();
        if self.selected_rows().next().is_none() {
            missing.push(ValidationError::NoCourseSelected);
        }
        missing
    }

    /// Resets identity, program/semester and the course table.
    pub fn clear(&mut self) {
        self.program = None;
        self.semester = None;
        self.identity = StudentIdentity::default();
        self.rows.clear();
        debug!("event=session_clear module=session status=ok");
    }

    /// Replaces the whole session state; rows are renumbered in given order.
    pub(crate) fn replace_state(
        &mut self,
        program: Option<Program>,
        semester: Option<Semester>,
        identity: StudentIdentity,
        rows: Vec<CourseRow>,
    ) {
        self.program = program;
        self.semester = semester;
        self.identity = identity;
        self.rows = rows;
        self.renumber();
    }

    fn is_field_filled(&self, field: IdentityField) -> bool {
        match field {
            IdentityField::Program => self.program.is_some(),
            IdentityField::Semester => self.semester.is_some(),
            text => self
                .identity
                .get(text)
                .is_some_and(|value| !value.trim().is_empty()),
        }
    }

    fn row_section_default(&self) -> String {
        let section = &self.identity.semester_section;
        if section.trim().is_empty() {
            self.config.default_section.clone()
        } else {
            section.clone()
        }
    }

    fn position(&self, index: usize) -> SessionResult<usize> {
        if index == 0 || index > self.rows.len() {
            return Err(SessionError::RowNotFound(index));
        }
        Ok(index - 1)
    }

    fn renumber(&mut self) {
        for (pos, row) in self.rows.iter_mut().enumerate() {
            row.index = pos + 1;
        }
    }
}
