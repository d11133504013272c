use proptest::prelude::*;
use regform_core::{Catalog, CourseRecord, Program, RegistrationSession, Semester};

#[derive(Debug, Clone)]
enum Op {
    Add(Option<u32>),
    Delete(usize),
    Select(usize, bool),
    Credits(usize, String),
    Code(usize, String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        proptest::option::of(0u32..6).prop_map(Op::Add),
        (0usize..12).prop_map(Op::Delete),
        (0usize..12, any::<bool>()).prop_map(|(index, selected)| Op::Select(index, selected)),
        (0usize..12, "[0-9a-z ]{0,3}").prop_map(|(index, value)| Op::Credits(index, value)),
        (
            0usize..12,
            prop_oneof![
                Just("CSE 4101".to_string()),
                Just("cse 4105".to_string()),
                "[A-Z]{3} [0-9]{4}"
            ]
        )
            .prop_map(|(index, code)| Op::Code(index, code)),
    ]
}

fn apply(session: &mut RegistrationSession<'_>, op: &Op) {
    // Out-of-range indices are expected to fail without side effects.
    match op {
        Op::Add(seed) => {
            let record = seed.map(|credits| CourseRecord::new("GEN 1000", "Elective", credits));
            session.add_row(record.as_ref());
        }
        Op::Delete(index) => {
            let _ = session.delete_row(*index);
        }
        Op::Select(index, selected) => {
            let value = if *selected { "true" } else { "false" };
            let _ = session.edit_row(*index, "selected", value);
        }
        Op::Credits(index, value) => {
            let _ = session.edit_row(*index, "credits", value);
        }
        Op::Code(index, code) => {
            let _ = session.edit_row(*index, "code", code);
        }
    }
}

proptest! {
    #[test]
    fn indices_stay_contiguous_after_every_operation(
        seed_catalog in any::<bool>(),
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let catalog = Catalog::builtin();
        let mut session = RegistrationSession::new(&catalog);
        if seed_catalog {
            session.set_program_semester(Program::Cse, Semester::new(1).unwrap());
        }

        for op in &ops {
            apply(&mut session, op);
            let indices: Vec<usize> = session.rows().iter().map(|row| row.index).collect();
            let expected: Vec<usize> = (1..=session.rows().len()).collect();
            prop_assert_eq!(indices, expected);
        }
    }

    #[test]
    fn total_matches_selected_credit_sum_after_every_operation(
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let catalog = Catalog::builtin();
        let mut session = RegistrationSession::new(&catalog);
        session.set_program_semester(Program::Cse, Semester::new(1).unwrap());

        for op in &ops {
            apply(&mut session, op);
            let expected: u32 = session
                .rows()
                .iter()
                .filter(|row| row.selected)
                .map(|row| row.credits)
                .sum();
            prop_assert_eq!(session.total_credits(), expected);
        }
    }
}
