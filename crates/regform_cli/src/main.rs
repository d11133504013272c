//! CLI entry point for the registration form core.
//!
//! # Responsibility
//! - Translate subcommands into explicit core session commands.
//! - Act as the print/download collaborator for core exports.

mod args;

use anyhow::{bail, Context};
use args::{Cli, Command, NewDraft};
use clap::Parser;
use log::info;
use regform_core::{
    export_json, init_logging, init_stderr_logging, print_document, Catalog, CollaboratorError,
    DirCatalogSource, DocumentPrinter, IdentityField, PreviewDocument, RegistrationExport,
    RegistrationSession,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Print collaborator writing the plain-text layout to stdout.
struct StdoutPrinter;

impl DocumentPrinter for StdoutPrinter {
    fn print(&mut self, document: &PreviewDocument) -> Result<(), CollaboratorError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(document.render_text().as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.log_dir.as_deref() {
        Some(dir) => init_logging(&cli.log_level, dir),
        None => init_stderr_logging(&cli.log_level),
    }
    .map_err(anyhow::Error::msg)
    .context("failed to initialize logging")?;

    let source = DirCatalogSource::new(&cli.data_dir);
    let catalog = Catalog::load(&source);
    run(&source, &catalog, cli.command)
}

fn run(source: &DirCatalogSource, catalog: &Catalog, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Scan => scan(source),
        Command::New(draft) => {
            let session = build_draft(catalog, &draft)?;
            if session.exceeds_credit_warning() {
                eprintln!(
                    "warning: {} credits exceeds the recommended maximum of {}",
                    session.total_credits(),
                    session.config().credit_warning_threshold
                );
            }
            let path = write_export(&session, &draft.out_dir)?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Catalog { program, semester } => {
            let courses = catalog.courses(program, semester);
            println!(
                "{program} {} semester ({}, {} courses)",
                semester.ordinal(),
                catalog.origin(program, semester).as_str(),
                courses.len()
            );
            for course in courses {
                println!("{:<10}  {:<40}  {}", course.code, course.title, course.credits);
            }
            Ok(())
        }
        Command::Lookup {
            program,
            semester,
            code,
        } => match catalog.lookup(program, semester, &code) {
            Some(course) => {
                println!("{}\t{}\t{}", course.code, course.title, course.credits);
                Ok(())
            }
            None => bail!("course `{code}` not found in {program} semester {semester}"),
        },
        Command::Validate { draft } => {
            let session = load_draft(catalog, &draft)?;
            let missing = session.missing_requirements();
            if missing.is_empty() {
                println!(
                    "ok: {} course(s) selected, {} credits",
                    session.selected_rows().count(),
                    session.total_credits()
                );
                return Ok(());
            }
            for requirement in &missing {
                println!("missing: {requirement}");
            }
            bail!(missing[0].to_string())
        }
        Command::Preview { draft } => {
            let session = load_draft(catalog, &draft)?;
            print_document(&session, &mut StdoutPrinter)?;
            if session.exceeds_credit_warning() {
                eprintln!(
                    "warning: {} credits exceeds the recommended maximum of {}",
                    session.total_credits(),
                    session.config().credit_warning_threshold
                );
            }
            Ok(())
        }
        Command::Export { draft, out_dir } => {
            let session = load_draft(catalog, &draft)?;
            let path = write_export(&session, &out_dir)?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn scan(source: &DirCatalogSource) -> anyhow::Result<()> {
    let keys = source
        .scan()
        .with_context(|| format!("failed to read `{}`", source.root().display()))?;
    if keys.is_empty() {
        println!("no catalog files in {}", source.root().display());
    }
    for key in keys {
        println!("{}\t{}\t{}", key.file_name(), key.program, key.semester);
    }
    Ok(())
}

/// Seeds a session from the catalog and applies identity, add and select
/// options in that order.
fn build_draft<'catalog>(
    catalog: &'catalog Catalog,
    draft: &NewDraft,
) -> anyhow::Result<RegistrationSession<'catalog>> {
    let mut session = RegistrationSession::new(catalog);
    session.set_program_semester(draft.program, draft.semester);

    for pair in &draft.set {
        let Some((field, value)) = pair.split_once('=') else {
            bail!("expected FIELD=VALUE, got `{pair}`");
        };
        let field = field
            .parse::<IdentityField>()
            .map_err(|name| anyhow::anyhow!("unknown identity field `{name}`"))?;
        session.set_identity(field, value)?;
    }

    for code in &draft.add {
        let index = session.add_row(None);
        session.edit_row(index, "code", code)?;
    }

    for code in &draft.select {
        let Some(index) = session
            .rows()
            .iter()
            .find(|row| row.code.trim().eq_ignore_ascii_case(code.trim()))
            .map(|row| row.index)
        else {
            bail!("course `{code}` is not in the draft");
        };
        session.edit_row(index, "selected", "true")?;
    }

    Ok(session)
}

fn write_export(session: &RegistrationSession<'_>, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let file = export_json(session, chrono::Utc::now())?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create `{}`", out_dir.display()))?;
    let path = out_dir.join(&file.file_name);
    fs::write(&path, file.contents)
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    info!("event=export_written module=cli status=ok kind=json");
    Ok(path)
}

fn load_draft<'catalog>(
    catalog: &'catalog Catalog,
    path: &Path,
) -> anyhow::Result<RegistrationSession<'catalog>> {
    let body = fs::read_to_string(path)
        .with_context(|| format!("failed to read draft `{}`", path.display()))?;
    let export = RegistrationExport::from_json(&body)
        .with_context(|| format!("draft `{}` is not a registration export", path.display()))?;
    Ok(export.restore(catalog))
}

#[cfg(test)]
mod tests {
    use super::build_draft;
    use crate::args::NewDraft;
    use regform_core::{Catalog, Program, Semester};
    use std::path::PathBuf;

    fn draft(set: &[&str], add: &[&str], select: &[&str]) -> NewDraft {
        let owned = |items: &[&str]| items.iter().map(|item| item.to_string()).collect();
        NewDraft {
            program: Program::Cse,
            semester: Semester::new(1).unwrap(),
            set: owned(set),
            add: owned(add),
            select: owned(select),
            out_dir: PathBuf::from("."),
        }
    }

    #[test]
    fn new_draft_seeds_rows_and_applies_options() {
        let catalog = Catalog::builtin();
        let session = build_draft(
            &catalog,
            &draft(
                &["studentId=2021-1-60-001", "bloodGroup=O+"],
                &["cse 4105", "GEN 1000"],
                &["CSE 4101", "gen 1000"],
            ),
        )
        .unwrap();

        assert_eq!(session.rows().len(), 9);
        let autofilled = session.row(8).unwrap();
        assert_eq!(autofilled.title, "Physics I");
        assert_eq!(autofilled.credits, 3);
        assert!(!autofilled.selected);
        let unknown = session.row(9).unwrap();
        assert!(unknown.title.is_empty());
        assert!(unknown.selected);
        assert!(session.row(1).unwrap().selected);
        assert_eq!(session.total_credits(), 3);
        assert_eq!(session.identity().student_id, "2021-1-60-001");
        assert_eq!(session.identity().blood_group, "O+");
        assert_eq!(session.identity().semester_section, "1B");
    }

    #[test]
    fn new_draft_rejects_unknown_field_and_missing_course() {
        let catalog = Catalog::builtin();
        assert!(build_draft(&catalog, &draft(&["shoeSize=9"], &[], &[])).is_err());
        assert!(build_draft(&catalog, &draft(&["studentId"], &[], &[])).is_err());
        assert!(build_draft(&catalog, &draft(&[], &[], &["CSE 9999"])).is_err());
    }
}
