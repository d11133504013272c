//! Command-line arguments for the `regform` binary.

use clap::{Args, Parser, Subcommand};
use regform_core::{Program, Semester, DEFAULT_CATALOG_DIR};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "regform")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Assemble, check and export course registration forms")]
pub struct Cli {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Absolute directory for rolling log files (stderr when omitted)
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    /// Directory holding `<program>_semester_<n>.json` catalog files
    #[arg(long, global = true, default_value = DEFAULT_CATALOG_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the courses offered for a program and semester
    Catalog {
        #[arg(long)]
        program: Program,
        #[arg(long)]
        semester: Semester,
    },
    /// Look up one course code (case-insensitive)
    Lookup {
        #[arg(long)]
        program: Program,
        #[arg(long)]
        semester: Semester,
        #[arg(long)]
        code: String,
    },
    /// List catalog files recognized in the data directory
    Scan,
    /// Start a draft seeded from the catalog and write it as JSON
    New(NewDraft),
    /// Check a saved draft against submission requirements
    Validate {
        /// Draft previously written by `export`
        #[arg(long)]
        draft: PathBuf,
    },
    /// Print both copies of the form for a saved draft
    Preview {
        #[arg(long)]
        draft: PathBuf,
    },
    /// Write `<studentId>_data.json` for a saved draft
    Export {
        #[arg(long)]
        draft: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct NewDraft {
    #[arg(long)]
    pub program: Program,
    #[arg(long)]
    pub semester: Semester,
    /// Identity value, e.g. `studentId=2021-1-60-001` (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,
    /// Append a row for a course code, filled from the catalog (repeatable)
    #[arg(long = "add", value_name = "CODE")]
    pub add: Vec<String>,
    /// Mark the row with this course code as selected (repeatable)
    #[arg(long = "select", value_name = "CODE")]
    pub select: Vec<String>,
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}
