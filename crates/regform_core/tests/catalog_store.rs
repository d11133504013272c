use regform_core::{
    BuiltinCatalogSource, Catalog, CatalogOrigin, CatalogSource, DirCatalogSource, LoadError,
    MemoryCatalogSource, Program, ResourceKey, Semester,
};
use std::fs;

fn sem(n: u8) -> Semester {
    Semester::new(n).unwrap()
}

fn key(program: Program, n: u8) -> ResourceKey {
    ResourceKey::new(program, sem(n))
}

#[test]
fn directory_resource_overrides_sample_for_that_key_only() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("cse_semester_1.json"),
        r#"[
            {"code": "CSE 9001", "title": "Compilers", "credits": 4},
            {"code": "CSE 9002", "title": "Operating Systems", "credits": 3}
        ]"#,
    )
    .unwrap();

    let catalog = Catalog::load(&DirCatalogSource::new(dir.path()));

    let cse1 = catalog.courses(Program::Cse, sem(1));
    assert_eq!(cse1.len(), 2);
    assert_eq!(cse1[0].code, "CSE 9001");
    assert_eq!(cse1[0].credits, 4);
    assert_eq!(catalog.origin(Program::Cse, sem(1)), CatalogOrigin::Fetched);

    assert_eq!(catalog.courses(Program::Cse, sem(2)).len(), 7);
    assert_eq!(catalog.origin(Program::Cse, sem(2)), CatalogOrigin::Fallback);

    let summary = catalog.summary();
    assert_eq!(summary.fetched, 1);
    assert_eq!(summary.fallback, 31);
}

#[test]
fn malformed_resource_falls_back_to_sample() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("eee_semester_1.json"), "{ not json").unwrap();

    let source = DirCatalogSource::new(dir.path());
    let err = source.fetch(key(Program::Eee, 1)).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));

    let catalog = Catalog::load(&source);
    let eee1 = catalog.courses(Program::Eee, sem(1));
    assert_eq!(eee1.len(), 7);
    assert_eq!(eee1[0].title, "Circuit Analysis I");
    assert_eq!(catalog.origin(Program::Eee, sem(1)), CatalogOrigin::Fallback);
}

#[test]
fn missing_directory_behaves_like_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let source = DirCatalogSource::new(dir.path().join("does-not-exist"));
    let err = source.fetch(key(Program::Bba, 1)).unwrap_err();
    assert!(matches!(err, LoadError::Missing(name) if name == "bba_semester_1.json"));

    let from_dir = Catalog::load(&source);
    let builtin = Catalog::load(&BuiltinCatalogSource);
    for resource in ResourceKey::all() {
        assert_eq!(
            from_dir.courses(resource.program, resource.semester),
            builtin.courses(resource.program, resource.semester)
        );
    }
}

#[test]
fn fetched_empty_list_is_kept_instead_of_sample() {
    let source = MemoryCatalogSource::new().with(key(Program::English, 1), "[]");
    let catalog = Catalog::load(&source);
    assert!(catalog.courses(Program::English, sem(1)).is_empty());
    assert_eq!(
        catalog.origin(Program::English, sem(1)),
        CatalogOrigin::Fetched
    );
}

#[test]
fn whole_float_credits_are_fetched_not_replaced_by_sample() {
    let source = MemoryCatalogSource::new().with(
        key(Program::Cse, 3),
        r#"[
            {"code": "CSE 4301", "title": "Operating Systems", "credits": 3.0},
            {"code": "CSE 4302", "title": "Operating Systems Lab", "credits": "1"}
        ]"#,
    );
    let catalog = Catalog::load(&source);

    assert_eq!(catalog.origin(Program::Cse, sem(3)), CatalogOrigin::Fetched);
    let courses = catalog.courses(Program::Cse, sem(3));
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].credits, 3);
    assert_eq!(courses[1].credits, 1);
}

#[test]
fn fractional_credits_mark_the_resource_malformed() {
    let source = MemoryCatalogSource::new().with(
        key(Program::Cse, 1),
        r#"[{"code": "CSE 9001", "title": "Compilers", "credits": 3.5}]"#,
    );
    let err = source.fetch(key(Program::Cse, 1)).unwrap_err();
    assert!(matches!(err, LoadError::Malformed { .. }));

    let catalog = Catalog::load(&source);
    assert_eq!(catalog.origin(Program::Cse, sem(1)), CatalogOrigin::Fallback);
    assert_eq!(catalog.courses(Program::Cse, sem(1)).len(), 7);
}

#[test]
fn lookup_is_case_insensitive_and_first_match_wins() {
    let source = MemoryCatalogSource::new().with(
        key(Program::Cse, 3),
        r#"[
            {"code": "CSE 4301", "title": "Theory of Computation", "credits": 3},
            {"code": "cse 4301", "title": "Duplicate Entry", "credits": 1}
        ]"#,
    );
    let catalog = Catalog::load(&source);

    let lower = catalog.lookup(Program::Cse, sem(3), "cse 4301").unwrap();
    let upper = catalog.lookup(Program::Cse, sem(3), "CSE 4301").unwrap();
    assert_eq!(lower, upper);
    assert_eq!(lower.title, "Theory of Computation");

    let builtin = Catalog::builtin();
    assert_eq!(
        builtin.lookup(Program::Cse, sem(1), "cse 4101"),
        builtin.lookup(Program::Cse, sem(1), "CSE 4101")
    );
    assert!(builtin.lookup(Program::Cse, sem(1), "CSE 4201").is_none());
}

#[test]
fn scan_lists_only_recognized_resources() {
    let dir = tempfile::tempdir().unwrap();
    for name in [
        "cse_semester_2.json",
        "English_semester_8.json",
        "cse_semester_9.json",
        "readme.txt",
        "bba_semester_1.csv",
    ] {
        fs::write(dir.path().join(name), "[]").unwrap();
    }
    fs::create_dir(dir.path().join("eee_semester_1.json")).unwrap();

    let keys = DirCatalogSource::new(dir.path()).scan().unwrap();
    assert_eq!(keys, vec![key(Program::Cse, 2), key(Program::English, 8)]);
}
