//! Snapshot tests for rendered descriptors.

use fieldgen::{Schema, generate_fields};
use serde_json::json;

#[test]
fn test_render_objects_and_lists() {
    fieldgen_testhelpers::setup();

    let schema = Schema::try_from(json!({
        "name": "name",
        "address": { "street": "street", "zip": "zip" },
        "routes": [{
            "name": "name",
            "innerRoutes": [{ "name": "name" }],
        }],
    }))
    .unwrap();

    insta::assert_snapshot!(generate_fields(&schema), @r###"
    NAME = "name"
    NAME_FIELD -> "name"
    $ADDRESS {
      STREET = "street"
      STREET_FIELD -> "address.street"
      ZIP = "zip"
      ZIP_FIELD -> "address.zip"
      KEY = "address"
    }
    $ROUTES {
      NAME = "name"
      NAME_FIELD -> fn(1) "routes.#.name"
      $INNER_ROUTES {
        NAME = "name"
        NAME_FIELD -> fn(2) "routes.#.innerRoutes.#.name"
        KEY = "innerRoutes"
        PATH -> fn(1) "routes.#.innerRoutes"
      }
      INNER_ROUTES_FIELD -> fn(1) "routes.#.innerRoutes"
      KEY = "routes"
    }
    ROUTES_FIELD -> fn(0) ".routes"
    "###);
}

#[test]
fn test_render_top_level_list() {
    fieldgen_testhelpers::setup();

    let schema = Schema::try_from(json!([{ "id": "id", "tags": [{ "label": "label" }] }])).unwrap();

    insta::assert_snapshot!(generate_fields(&schema), @r###"
    ID = "id"
    ID_FIELD -> fn(0) ".id"
    $TAGS {
      LABEL = "label"
      LABEL_FIELD -> fn(1) "tags.#.label"
      KEY = "tags"
    }
    TAGS_FIELD -> fn(0) ".tags"
    "###);
}

#[test]
fn test_render_group_without_fields() {
    fieldgen_testhelpers::setup();

    let schema = Schema::try_from(json!({ "meta": {} })).unwrap();

    insta::assert_snapshot!(generate_fields(&schema), @r###"
    $META {
      KEY = "meta"
    }
    "###);
}

#[test]
fn test_serialize_descriptor() {
    fieldgen_testhelpers::setup();

    let schema = Schema::try_from(json!({
        "user": { "name": "name", "tags": [{ "value": "value" }] },
    }))
    .unwrap();

    assert_eq!(
        serde_json::to_value(generate_fields(&schema)).unwrap(),
        json!({
            "$USER": {
                "NAME": "name",
                "NAME_FIELD": "user.name",
                "$TAGS": {
                    "VALUE": "value",
                    "VALUE_FIELD": { "template": "user.tags.#.value", "arity": 1 },
                    "KEY": "tags",
                    "PATH": { "template": "user.tags", "arity": 0 },
                },
                "TAGS_FIELD": { "template": "user.tags", "arity": 0 },
                "KEY": "user",
            },
        })
    );
}
