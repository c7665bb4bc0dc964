use context_assert::domain::error::{AssertResult, FailureKind, IdViolation};
use context_assert::engine::check::ContextAssert;
use serde_json::{Value, json};

fn schema_defs() -> Value {
    json!([
        {"fieldId": "participantId", "default": ""},
        {"fieldId": "lastName", "colLabel": "Last Name", "default": ""},
        {"fieldId": "firstName", "colLabel": "Fast Name", "default": ""},
        {"fieldId": "lastName", "colLabel": "Middle Name", "default": ""}
    ])
}

fn check_schema_defs(checker: &mut ContextAssert, defs: &Value) -> AssertResult {
    checker.set_detail("checking schema defs");
    checker.array_with_record_property(defs, "default")?;
    checker.array_with_optional_record_label(defs, "colLabel")?;
    checker.array_with_record_id(defs, "fieldId")
}

#[test]
fn repeated_field_id_is_attributed_to_context_and_detail() {
    let mut checker = ContextAssert::new();
    checker.set_context("Illustrative Example");

    let failure = check_schema_defs(&mut checker, &schema_defs()).expect_err("repeated id");
    assert_eq!(failure.kind, FailureKind::InvalidId(IdViolation::Repeated));
    assert_eq!(failure.index, Some(1));
    assert_eq!(
        failure.to_string(),
        "ASSERT_ARRAY_WITH_RECORD_ID_FAIL: expected array of objects with unique string identifier -- assertion context is 'Illustrative Example' (checking schema defs) -- fieldId: 'lastName' is repeated"
    );
}

#[test]
fn fixed_defs_pass_every_check() {
    let mut defs = schema_defs();
    defs[3]["fieldId"] = json!("middleName");

    let mut checker = ContextAssert::new();
    checker.set_context("Illustrative Example");
    assert_eq!(check_schema_defs(&mut checker, &defs), Ok(()));
}

#[test]
fn missing_default_is_caught_before_labels_and_ids() {
    let defs = json!([
        {"fieldId": "a b", "colLabel": " x"},
        {"fieldId": "b"}
    ]);
    let mut checker = ContextAssert::new();
    let failure = check_schema_defs(&mut checker, &defs).expect_err("missing default");
    assert_eq!(failure.kind, FailureKind::MissingProperty);
    assert!(
        failure
            .message
            .ends_with("(checking schema defs) -- property 'default' is missing from index 0")
    );
}
