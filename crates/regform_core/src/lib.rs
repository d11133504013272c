//! Core domain logic for the course registration form.
//! This crate is the single source of truth for catalog and session invariants.

pub mod catalog;
pub mod config;
pub mod export;
pub mod logging;
pub mod model;
pub mod service;

pub use catalog::source::{
    BuiltinCatalogSource, CatalogSource, DirCatalogSource, LoadError, MemoryCatalogSource,
    ResourceKey, DEFAULT_CATALOG_DIR,
};
pub use catalog::store::{Catalog, CatalogOrigin, CatalogSummary};
pub use config::SessionConfig;
pub use export::document::{
    export_json, generate_pdf, print_document, CollaboratorError, DocumentPrinter, ExportError,
    ExportKind, PdfRenderer,
};
pub use export::json::{
    json_file_name, pdf_file_name, ExportedCourse, ExportedFile, RegistrationExport, StudentInfo,
};
pub use export::preview::{CopyKind, PreviewDocument, PreviewRow};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget};
pub use model::course::{CourseRecord, CourseRow, RowEdit, RowField, RowId};
pub use model::identity::{IdentityField, StudentIdentity};
pub use model::program::{ParseError, Program, Semester};
pub use service::session_service::{
    RegistrationSession, SessionError, SessionResult, ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
