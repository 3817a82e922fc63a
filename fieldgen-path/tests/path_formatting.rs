//! Tests for index substitution and arity checking.

use fieldgen_path::{FormatterMismatch, IndexFormatter, is_listed};

#[test]
fn test_single_index() {
    fieldgen_testhelpers::setup();

    let formatter = IndexFormatter::new("users.#.name");
    insta::assert_snapshot!(formatter.format(&[0]).unwrap(), @"users.0.name");
}

#[test]
fn test_multiple_indices() {
    fieldgen_testhelpers::setup();

    let formatter = IndexFormatter::new("users.#.id.#.name");
    insta::assert_snapshot!(formatter.format(&[0, 1]).unwrap(), @"users.0.id.1.name");
}

#[test]
fn test_too_many_indices() {
    fieldgen_testhelpers::setup();

    let formatter = IndexFormatter::new("users.#.name");
    let err = formatter.format(&[0, 1]).unwrap_err();
    assert_eq!(
        err,
        FormatterMismatch {
            required: 1,
            received: 2
        }
    );
    insta::assert_snapshot!(err, @"Formatter Mismatch: Template requires 1 arguments, but received 2.");
}

#[test]
fn test_too_few_indices() {
    fieldgen_testhelpers::setup();

    let formatter = IndexFormatter::new("data.#.rows.#.cells.#.content");
    let err = formatter.format(&[0, 1]).unwrap_err();
    assert_eq!(err.required, 3);
    assert_eq!(err.received, 2);
}

#[test]
fn test_indices_on_plain_template() {
    fieldgen_testhelpers::setup();

    let formatter = IndexFormatter::new("user.tags");
    insta::assert_snapshot!(
        formatter.format(&[0]).unwrap_err(),
        @"Formatter Mismatch: Template requires 0 arguments, but received 1."
    );
}

#[test]
fn test_arity_matches_markers_for_any_count() {
    fieldgen_testhelpers::setup();

    for markers in 0..6 {
        let template = (0..markers).fold(String::from("root"), |acc, i| {
            format!("{acc}.list{i}.#")
        });
        let formatter = IndexFormatter::new(template.as_str());
        assert_eq!(formatter.arity(), markers);
        assert_eq!(is_listed(formatter.template()), markers > 0);

        for supplied in 0..6 {
            let indices: Vec<usize> = (0..supplied).collect();
            let result = formatter.format(&indices);
            if supplied == markers {
                let expected = (0..markers).fold(String::from("root"), |acc, i| {
                    format!("{acc}.list{i}.{i}")
                });
                assert_eq!(result.unwrap(), expected);
            } else {
                assert_eq!(
                    result.unwrap_err(),
                    FormatterMismatch {
                        required: markers,
                        received: supplied
                    }
                );
            }
        }
    }
}

#[test]
fn test_display_shows_template() {
    fieldgen_testhelpers::setup();

    let formatter = IndexFormatter::from("orders.#.items");
    insta::assert_snapshot!(formatter, @"orders.#.items");
}
