use regform_core::{Catalog, IdentityField, Program, RegistrationSession, Semester, ValidationError};

fn filled_session(catalog: &Catalog) -> RegistrationSession<'_> {
    let mut session = RegistrationSession::new(catalog);
    session.set_program_semester(Program::Cse, Semester::new(1).unwrap());
    for (field, value) in [
        (IdentityField::StudentName, "Tanvir Hasan"),
        (IdentityField::StudentId, "2023-1-60-118"),
        (IdentityField::AdvisorName, "Dr. Farhana Akter"),
        (IdentityField::GuardianPhone, "01711000000"),
        (IdentityField::StudentPhone, "01811000000"),
        (IdentityField::BloodGroup, "O+"),
    ] {
        session.set_identity(field, value).unwrap();
    }
    session
}

#[test]
fn complete_form_with_selection_passes() {
    let catalog = Catalog::builtin();
    let mut session = filled_session(&catalog);
    session.edit_row(1, "selected", "true").unwrap();

    assert_eq!(session.validate_for_submission(), Ok(()));
    assert!(session.missing_requirements().is_empty());
}

#[test]
fn no_selection_reports_course_selection_not_a_field() {
    let catalog = Catalog::builtin();
    let session = filled_session(&catalog);

    assert_eq!(
        session.validate_for_submission(),
        Err(ValidationError::NoCourseSelected)
    );
    assert_eq!(
        ValidationError::NoCourseSelected.to_string(),
        "Please select at least one course."
    );
}

#[test]
fn whitespace_only_field_counts_as_missing() {
    let catalog = Catalog::builtin();
    let mut session = filled_session(&catalog);
    session.edit_row(1, "selected", "true").unwrap();
    session
        .set_identity(IdentityField::AdvisorName, "   ")
        .unwrap();

    let err = session.validate_for_submission().unwrap_err();
    assert_eq!(err, ValidationError::MissingField(IdentityField::AdvisorName));
    assert_eq!(err.to_string(), "Please fill in the Advisor Name field.");
}

#[test]
fn first_failure_follows_fixed_field_order() {
    let catalog = Catalog::builtin();
    let mut session = filled_session(&catalog);
    session.set_identity(IdentityField::BloodGroup, "").unwrap();
    session.set_identity(IdentityField::StudentId, "").unwrap();
    session
        .set_identity(IdentityField::GuardianPhone, "")
        .unwrap();

    assert_eq!(
        session.validate_for_submission(),
        Err(ValidationError::MissingField(IdentityField::StudentId))
    );
    assert_eq!(
        session.missing_requirements(),
        vec![
            ValidationError::MissingField(IdentityField::StudentId),
            ValidationError::MissingField(IdentityField::GuardianPhone),
            ValidationError::MissingField(IdentityField::BloodGroup),
            ValidationError::NoCourseSelected,
        ]
    );
}

#[test]
fn semester_section_cleared_after_autofill_is_reported() {
    let catalog = Catalog::builtin();
    let mut session = filled_session(&catalog);
    session.edit_row(1, "selected", "true").unwrap();
    assert_eq!(session.identity().semester_section, "1B");

    session
        .set_identity(IdentityField::SemesterSection, "")
        .unwrap();

    assert_eq!(
        session.validate_for_submission(),
        Err(ValidationError::MissingField(IdentityField::SemesterSection))
    );
}

#[test]
fn missing_program_is_reported_before_student_fields() {
    let catalog = Catalog::builtin();
    let mut session = RegistrationSession::new(&catalog);
    session
        .set_identity(IdentityField::StudentName, "Tanvir Hasan")
        .unwrap();

    let missing = session.missing_requirements();
    assert_eq!(
        missing.first(),
        Some(&ValidationError::MissingField(IdentityField::Program))
    );
    assert_eq!(
        missing.get(1),
        Some(&ValidationError::MissingField(IdentityField::Semester))
    );
    assert!(!missing.contains(&ValidationError::MissingField(IdentityField::StudentName)));
}
