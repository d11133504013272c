//! PDF, print and JSON export entry points.
//!
//! # Responsibility
//! - Gate PDF generation on submission validation.
//! - Hand preview snapshots to rendering/print collaborators.
//! - Map collaborator failures to a retryable, generic export error.
//!
//! # Invariants
//! - Export paths borrow the session immutably; failures never alter it.
//! - A validation failure stops before any collaborator is called.

use crate::export::json::{pdf_file_name, ExportedFile, RegistrationExport};
use crate::export::preview::PreviewDocument;
use crate::service::session_service::{RegistrationSession, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Boxed failure reported by an external collaborator.
pub type CollaboratorError = Box<dyn Error + Send + Sync + 'static>;

/// Rasterizes a preview into a named PDF file.
pub trait PdfRenderer {
    fn render_pdf(
        &mut self,
        file_name: &str,
        document: &PreviewDocument,
    ) -> Result<(), CollaboratorError>;
}

/// Sends a formatted copy of the preview to a native print target.
pub trait DocumentPrinter {
    fn print(&mut self, document: &PreviewDocument) -> Result<(), CollaboratorError>;
}

/// Collaborator-backed export operation, for messages and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Pdf,
    Print,
}

impl ExportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Print => "print",
        }
    }
}

/// Export failure; the session remains intact and the call may be retried.
#[derive(Debug)]
pub enum ExportError {
    /// Submission requirements not met.
    Validation(ValidationError),
    /// JSON serialization failed.
    Serialize(serde_json::Error),
    /// Rendering or print collaborator failed.
    Collaborator {
        kind: ExportKind,
        source: CollaboratorError,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Serialize(_) => write!(f, "Error exporting data. Please try again."),
            Self::Collaborator { kind, .. } => match kind {
                ExportKind::Pdf => write!(f, "Error generating PDF. Please try again."),
                ExportKind::Print => write!(f, "Error printing form. Please try again."),
            },
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Collaborator { source, .. } => Some(&**source),
        }
    }
}

impl From<ValidationError> for ExportError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Validates, projects and renders the session as a PDF.
///
/// Returns the file name handed to the renderer.
pub fn generate_pdf(
    session: &RegistrationSession<'_>,
    renderer: &mut dyn PdfRenderer,
    date: NaiveDate,
) -> Result<String, ExportError> {
    session.validate_for_submission()?;
    let document = PreviewDocument::from_session(session);
    let file_name = pdf_file_name(&session.identity().student_id, date);
    renderer
        .render_pdf(&file_name, &document)
        .map_err(|source| collaborator_failure(ExportKind::Pdf, source))?;
    info!(
        "event=export module=export status=ok kind=pdf rows={}",
        document.rows.len()
    );
    Ok(file_name)
}

/// Sends the current preview to a printer without validation.
pub fn print_document(
    session: &RegistrationSession<'_>,
    printer: &mut dyn DocumentPrinter,
) -> Result<(), ExportError> {
    let document = PreviewDocument::from_session(session);
    printer
        .print(&document)
        .map_err(|source| collaborator_failure(ExportKind::Print, source))?;
    info!(
        "event=export module=export status=ok kind=print rows={}",
        document.rows.len()
    );
    Ok(())
}

/// Serializes the session as a named JSON file payload.
pub fn export_json(
    session: &RegistrationSession<'_>,
    timestamp: DateTime<Utc>,
) -> Result<ExportedFile, ExportError> {
    let file = RegistrationExport::from_session(session, timestamp).to_file()?;
    info!(
        "event=export module=export status=ok kind=json bytes={}",
        file.contents.len()
    );
    Ok(file)
}

fn collaborator_failure(kind: ExportKind, source: CollaboratorError) -> ExportError {
    error!(
        "event=export module=export status=error kind={} error={}",
        kind.as_str(),
        source
    );
    ExportError::Collaborator { kind, source }
}
