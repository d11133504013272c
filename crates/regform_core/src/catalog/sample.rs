//! Built-in fallback course table.
//!
//! Used for any (program, semester) whose resource cannot be fetched. Keys not
//! listed here fall back to an empty course list.

use crate::model::course::CourseRecord;
use crate::model::program::{Program, Semester};

type SampleRow = (&'static str, &'static str, u32);

const CSE_1: &[SampleRow] = &[
    ("CSE 4101", "Data Structure", 3),
    ("CSE 4102", "Computer Programming", 3),
    ("CSE 4103", "Discrete Mathematics", 3),
    ("CSE 4104", "Digital Logic Design", 3),
    ("CSE 4105", "Physics I", 3),
    ("CSE 4106", "Engineering Mathematics I", 3),
    ("CSE 4107", "English", 3),
];

const CSE_2: &[SampleRow] = &[
    ("CSE 4201", "Algorithms", 3),
    ("CSE 4202", "Object Oriented Programming", 3),
    ("CSE 4203", "Computer Organization", 3),
    ("CSE 4204", "Database Management Systems", 3),
    ("CSE 4205", "Statistics and Probability", 3),
    ("CSE 4206", "Engineering Mathematics II", 3),
    ("CSE 4207", "Physics II", 3),
];

const CSE_7: &[SampleRow] = &[
    ("CSE 4701", "Software Engineering", 3),
    ("CSE 4702", "Computer Networks", 3),
    ("CSE 4703", "Artificial Intelligence", 3),
    ("CSE 4704", "Machine Learning", 3),
    ("CSE 4705", "Cyber Security", 3),
    ("CSE 4706", "Web Technologies", 3),
    ("CSE 4707", "Mobile App Development", 3),
    ("CSE 4708", "Computer Graphics", 3),
];

const EEE_1: &[SampleRow] = &[
    ("EEE 4101", "Circuit Analysis I", 3),
    ("EEE 4102", "Basic Electronics", 3),
    ("EEE 4103", "Engineering Mathematics I", 3),
    ("EEE 4104", "Physics I", 3),
    ("EEE 4105", "Programming Fundamentals", 3),
    ("EEE 4106", "Engineering Drawing", 2),
    ("EEE 4107", "English", 3),
];

const EEE_2: &[SampleRow] = &[
    ("EEE 4201", "Circuit Analysis II", 3),
    ("EEE 4202", "Electronic Devices", 3),
    ("EEE 4203", "Engineering Mathematics II", 3),
    ("EEE 4204", "Physics II", 3),
    ("EEE 4205", "Digital Systems", 3),
];

const BBA_1: &[SampleRow] = &[
    ("BBA 4101", "Principles of Management", 3),
    ("BBA 4102", "Business Mathematics", 3),
    ("BBA 4103", "Principles of Economics", 3),
    ("BBA 4104", "Business Communication", 3),
    ("BBA 4105", "Introduction to Business", 3),
    ("BBA 4106", "Computer Applications", 3),
    ("BBA 4107", "English", 3),
];

const ENGLISH_1: &[SampleRow] = &[
    ("ENG 4101", "Introduction to Literature", 3),
    ("ENG 4102", "English Grammar and Composition", 3),
    ("ENG 4103", "Phonetics and Phonology", 3),
    ("ENG 4104", "History of English Literature", 3),
    ("ENG 4105", "Reading Skills", 3),
    ("ENG 4106", "Writing Skills", 3),
    ("ENG 4107", "Computer Applications", 3),
];

fn sample_rows(program: Program, semester: Semester) -> &'static [SampleRow] {
    match (program, semester.number()) {
        (Program::Cse, 1) => CSE_1,
        (Program::Cse, 2) => CSE_2,
        (Program::Cse, 7) => CSE_7,
        (Program::Eee, 1) => EEE_1,
        (Program::Eee, 2) => EEE_2,
        (Program::Bba, 1) => BBA_1,
        (Program::English, 1) => ENGLISH_1,
        _ => &[],
    }
}

/// Returns the built-in courses for a key, in catalog order.
pub fn sample_courses(program: Program, semester: Semester) -> Vec<CourseRecord> {
    sample_rows(program, semester)
        .iter()
        .map(|(code, title, credits)| CourseRecord::new(*code, *title, *credits))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sample_courses;
    use crate::model::program::{Program, Semester};

    fn sem(n: u8) -> Semester {
        Semester::new(n).unwrap()
    }

    #[test]
    fn sample_covers_known_keys_only() {
        assert_eq!(sample_courses(Program::Cse, sem(1)).len(), 7);
        assert_eq!(sample_courses(Program::Cse, sem(7)).len(), 8);
        assert_eq!(sample_courses(Program::Eee, sem(2)).len(), 5);
        assert!(sample_courses(Program::Cse, sem(3)).is_empty());
        assert!(sample_courses(Program::English, sem(8)).is_empty());
    }

    #[test]
    fn engineering_drawing_is_two_credits() {
        let eee = sample_courses(Program::Eee, sem(1));
        let drawing = eee.iter().find(|c| c.code == "EEE 4106").unwrap();
        assert_eq!(drawing.credits, 2);
    }
}
