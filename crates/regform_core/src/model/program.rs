//! Program and semester keys.
//!
//! # Responsibility
//! - Define the closed set of academic programs the catalog is keyed by.
//! - Keep semester numbers inside the supported `1..=8` window.
//!
//! # Invariants
//! - A `Semester` value is always within `MIN_SEMESTER..=MAX_SEMESTER`.
//! - `Program::resource_stem` is the lowercase name used in catalog resources.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const MIN_SEMESTER: u8 = 1;
pub const MAX_SEMESTER: u8 = 8;

/// Academic track offered on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Program {
    #[serde(rename = "CSE")]
    Cse,
    #[serde(rename = "EEE")]
    Eee,
    #[serde(rename = "BBA")]
    Bba,
    English,
}

impl Program {
    /// All programs in catalog load order.
    pub const ALL: [Program; 4] = [Program::Cse, Program::Eee, Program::Bba, Program::English];

    /// Display name as shown on the form and in exports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cse => "CSE",
            Self::Eee => "EEE",
            Self::Bba => "BBA",
            Self::English => "English",
        }
    }

    /// Lowercase stem used in `<stem>_semester_<n>` resource names.
    pub fn resource_stem(self) -> &'static str {
        match self {
            Self::Cse => "cse",
            Self::Eee => "eee",
            Self::Bba => "bba",
            Self::English => "english",
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Program {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cse" => Ok(Self::Cse),
            "eee" => Ok(Self::Eee),
            "bba" => Ok(Self::Bba),
            "english" => Ok(Self::English),
            _ => Err(ParseError::UnknownProgram(value.to_string())),
        }
    }
}

/// Semester number within a program, `1..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester(u8);

impl Semester {
    /// Creates a semester after range validation.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        if (MIN_SEMESTER..=MAX_SEMESTER).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParseError::SemesterOutOfRange(u32::from(value)))
        }
    }

    /// Iterates all supported semesters in ascending order.
    pub fn all() -> impl Iterator<Item = Semester> {
        (MIN_SEMESTER..=MAX_SEMESTER).map(Semester)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// English ordinal label, e.g. `1st`, `2nd`, `8th`.
    pub fn ordinal(self) -> String {
        let suffix = match self.0 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        };
        format!("{}{suffix}", self.0)
    }
}

impl Display for Semester {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Semester {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let parsed: u32 = trimmed
            .parse()
            .map_err(|_| ParseError::InvalidSemester(value.to_string()))?;
        u8::try_from(parsed)
            .ok()
            .and_then(|n| Semester::new(n).ok())
            .ok_or(ParseError::SemesterOutOfRange(parsed))
    }
}

impl Serialize for Semester {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Semester {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Semester::new(value).map_err(serde::de::Error::custom)
    }
}

/// Errors raised when parsing program/semester keys from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownProgram(String),
    InvalidSemester(String),
    SemesterOutOfRange(u32),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownProgram(value) => {
                write!(f, "unknown program `{value}`; expected CSE|EEE|BBA|English")
            }
            Self::InvalidSemester(value) => write!(f, "semester is not a number: `{value}`"),
            Self::SemesterOutOfRange(value) => write!(
                f,
                "semester {value} is out of range {MIN_SEMESTER}..={MAX_SEMESTER}"
            ),
        }
    }
}

impl Error for ParseError {}
