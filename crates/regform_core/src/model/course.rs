//! Catalog records and editable course rows.
//!
//! # Responsibility
//! - Define the immutable `CourseRecord` loaded from catalogs.
//! - Define the mutable `CourseRow` edited inside a registration session.
//! - Parse free-text field edits into typed `RowEdit` values.
//!
//! # Invariants
//! - `CourseRow::index` is a 1-based display position owned by the session.
//! - `CourseRow::id` is stable for the row lifetime and never reused.
//! - Credits are non-negative; non-numeric input clamps to `0`.

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable row identity that survives renumbering.
pub type RowId = Uuid;

/// One course offered in a program/semester catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub title: String,
    #[serde(deserialize_with = "deserialize_credits")]
    pub credits: u32,
}

impl CourseRecord {
    pub fn new(code: impl Into<String>, title: impl Into<String>, credits: u32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits,
        }
    }

    /// Returns whether `code` names this course, ignoring case and outer
    /// whitespace.
    pub fn matches_code(&self, code: &str) -> bool {
        normalize_code(&self.code) == normalize_code(code)
    }
}

/// Canonical comparison form for course codes.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// One editable entry in the session course table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub id: RowId,
    /// 1-based display position.
    pub index: usize,
    pub code: String,
    pub title: String,
    /// Counted toward total credits and included in submission.
    pub selected: bool,
    pub credits: u32,
    pub section: String,
}

impl CourseRow {
    /// Creates an unselected row, optionally seeded from a catalog record.
    pub fn new(index: usize, seed: Option<&CourseRecord>, section: impl Into<String>) -> Self {
        let (code, title, credits) = match seed {
            Some(record) => (record.code.clone(), record.title.clone(), record.credits),
            None => (String::new(), String::new(), 0),
        };
        Self {
            id: Uuid::new_v4(),
            index,
            code,
            title,
            selected: false,
            credits,
            section: section.into(),
        }
    }

    /// Credits this row contributes to the session total.
    pub fn counted_credits(&self) -> u32 {
        if self.selected {
            self.credits
        } else {
            0
        }
    }
}

/// Editable row columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Code,
    Title,
    Selected,
    Credits,
    Section,
}

impl RowField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Title => "title",
            Self::Selected => "selected",
            Self::Credits => "credits",
            Self::Section => "section",
        }
    }
}

impl Display for RowField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(Self::Code),
            "title" => Ok(Self::Title),
            "selected" => Ok(Self::Selected),
            "credits" => Ok(Self::Credits),
            "section" => Ok(Self::Section),
            _ => Err(value.to_string()),
        }
    }
}

/// Typed single-field edit applied to a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEdit {
    Code(String),
    Title(String),
    Selected(bool),
    Credits(u32),
    Section(String),
}

impl RowEdit {
    pub fn field(&self) -> RowField {
        match self {
            Self::Code(_) => RowField::Code,
            Self::Title(_) => RowField::Title,
            Self::Selected(_) => RowField::Selected,
            Self::Credits(_) => RowField::Credits,
            Self::Section(_) => RowField::Section,
        }
    }

    /// Parses a raw form value for `field`.
    ///
    /// Returns `None` when the value is unacceptable for the field (negative
    /// or overflowing credits, unrecognized booleans).
    pub fn parse(field: RowField, value: &str) -> Option<Self> {
        match field {
            RowField::Code => Some(Self::Code(value.to_string())),
            RowField::Title => Some(Self::Title(value.to_string())),
            RowField::Section => Some(Self::Section(value.to_string())),
            RowField::Selected => parse_selected(value).map(Self::Selected),
            RowField::Credits => parse_credits(value).map(Self::Credits),
        }
    }
}

/// Parses a credit value using integer-prefix semantics.
///
/// - Leading digits are taken: `"3"` -> 3, `"3.5"` -> 3, `" 4 "` -> 4.
/// - No leading digits (blank, `"abc"`) clamps to `Some(0)`.
/// - Negative values and overflow yield `None`.
pub fn parse_credits(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Some(0);
    }
    let parsed: u32 = digits.parse().ok()?;
    if negative && parsed != 0 {
        return None;
    }
    Some(parsed)
}

/// Reads a credit count from JSON.
///
/// Accepts whole non-negative numbers in integer (`3`), float (`3.0`) or
/// string (`"3"`) form. Negative, fractional and out-of-range values fail.
pub(crate) fn deserialize_credits<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CreditsVisitor)
}

struct CreditsVisitor;

impl<'de> Visitor<'de> for CreditsVisitor {
    type Value = u32;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a non-negative whole number of credits")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u32, E> {
        u32::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<u32, E> {
        whole_credits(value).ok_or_else(|| E::invalid_value(Unexpected::Float(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<u32, E> {
        let trimmed = value.trim();
        trimmed
            .parse::<u32>()
            .ok()
            .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_credits))
            .ok_or_else(|| E::invalid_value(Unexpected::Str(value), &self))
    }
}

fn whole_credits(value: f64) -> Option<u32> {
    // -0.0 compares equal to 0.0 and is accepted as 0.
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

fn parse_selected(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "checked" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_credits, CourseRecord, CourseRow, RowEdit, RowField};

    #[test]
    fn credits_follow_integer_prefix_rules() {
        assert_eq!(parse_credits("3"), Some(3));
        assert_eq!(parse_credits(" 4 "), Some(4));
        assert_eq!(parse_credits("3.5"), Some(3));
        assert_eq!(parse_credits("abc"), Some(0));
        assert_eq!(parse_credits(""), Some(0));
        assert_eq!(parse_credits("-0"), Some(0));
        assert_eq!(parse_credits("-2"), None);
        assert_eq!(parse_credits("99999999999"), None);
    }

    #[test]
    fn record_credits_accept_whole_numbers_in_any_json_form() {
        for body in [
            r#"{"code":"A 1","title":"A","credits":3}"#,
            r#"{"code":"A 1","title":"A","credits":3.0}"#,
            r#"{"code":"A 1","title":"A","credits":" 3 "}"#,
        ] {
            let record: CourseRecord = serde_json::from_str(body).unwrap();
            assert_eq!(record.credits, 3, "{body}");
        }
    }

    #[test]
    fn record_credits_reject_negative_and_fractional_values() {
        for credits in ["-1", "2.5", "-1.0", "\"abc\"", "\"2.5\"", "4294967296", "null"] {
            let body = format!(r#"{{"code":"A 1","title":"A","credits":{credits}}}"#);
            assert!(
                serde_json::from_str::<CourseRecord>(&body).is_err(),
                "{credits} should be rejected"
            );
        }
    }

    #[test]
    fn selected_accepts_checkbox_spellings() {
        assert_eq!(
            RowEdit::parse(RowField::Selected, "on"),
            Some(RowEdit::Selected(true))
        );
        assert_eq!(
            RowEdit::parse(RowField::Selected, "FALSE"),
            Some(RowEdit::Selected(false))
        );
        assert_eq!(RowEdit::parse(RowField::Selected, "maybe"), None);
    }

    #[test]
    fn record_code_match_ignores_case_and_padding() {
        let record = CourseRecord::new("CSE 4101", "Data Structure", 3);
        assert!(record.matches_code(" cse 4101 "));
        assert!(!record.matches_code("CSE4101"));
    }

    #[test]
    fn unseeded_row_is_blank_except_section() {
        let row = CourseRow::new(1, None, "B");
        assert!(row.code.is_empty());
        assert!(row.title.is_empty());
        assert_eq!(row.credits, 0);
        assert!(!row.selected);
        assert_eq!(row.section, "B");
        assert_eq!(row.counted_credits(), 0);
    }
}
