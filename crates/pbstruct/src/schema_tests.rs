use indoc::indoc;

use crate::definition::Label;
use crate::error::{DefinitionError, SchemaError};
use crate::schema::{load_schema, parse_schema};
use crate::value_type::ValueType;

const SCHEMA: &str = indoc! {r#"
    {
      "Person": {
        "fields": [
          { "name": "id", "number": 1, "type": "int32", "label": "required" },
          { "name": "name", "number": 2, "type": "string", "label": "required" },
          { "name": "email", "number": 3, "type": "string" },
          { "name": "scores", "number": 4, "type": "int32", "label": "repeated" },
          { "name": "ratio", "number": 5, "type": "double" },
          { "name": "active", "number": 6, "type": "bool", "label": "optional" }
        ]
      },
      "Empty": { "fields": [] }
    }
"#};

#[test]
fn parses_messages_in_file_order() {
    let schema = parse_schema(SCHEMA).unwrap();
    let names: Vec<&str> = schema.message_names().collect();
    assert_eq!(names, ["Person", "Empty"]);

    let email = &schema.messages["Person"].fields[2];
    assert_eq!(email.name, "email");
    assert_eq!(email.value_type, ValueType::String);
    assert_eq!(email.label, Label::Optional);
}

#[test]
fn definition_matches_builder_layout() {
    let schema = parse_schema(SCHEMA).unwrap();
    let def = schema.definition("Person").unwrap();
    let expected = crate::test_utils::person();

    assert_eq!(def.size(), expected.size());
    assert_eq!(def.fields(), expected.fields());
    assert_eq!(def.num_required_fields(), 2);
}

#[test]
fn definitions_cover_every_message() {
    let schema = parse_schema(SCHEMA).unwrap();
    let defs = schema.definitions().unwrap();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[1].name(), "Empty");
    assert_eq!(defs[1].size(), 0);
}

#[test]
fn unknown_message() {
    let schema = parse_schema(SCHEMA).unwrap();
    let err = schema.definition("Nope").unwrap_err();
    assert!(matches!(err, SchemaError::UnknownMessage(ref name) if name == "Nope"));
}

#[test]
fn rejects_repeated_message_name() {
    let json = indoc! {r#"
        {
          "A": { "fields": [ { "name": "x", "number": 1, "type": "int32" } ] },
          "B": { "fields": [] },
          "A": { "fields": [] }
        }
    "#};
    let err = parse_schema(json).unwrap_err();
    assert!(matches!(err, SchemaError::DuplicateMessage(ref name) if name == "A"));
    assert_eq!(err.to_string(), "message `A` is declared more than once");
}

#[test]
fn top_level_must_be_an_object() {
    assert!(matches!(parse_schema("[]"), Err(SchemaError::Json(_))));
}

#[test]
fn rejects_unknown_type_and_keys() {
    let bad_type = r#"{ "M": { "fields": [ { "name": "a", "number": 1, "type": "int8" } ] } }"#;
    assert!(matches!(parse_schema(bad_type), Err(SchemaError::Json(_))));

    let bad_key = r#"{ "M": { "fields": [], "options": {} } }"#;
    assert!(matches!(parse_schema(bad_key), Err(SchemaError::Json(_))));
}

#[test]
fn layout_errors_name_the_message() {
    let json = indoc! {r#"
        { "Dup": { "fields": [
            { "name": "a", "number": 1, "type": "int32" },
            { "name": "a", "number": 2, "type": "int32" }
        ] } }
    "#};
    let err = parse_schema(json).unwrap().definitions().unwrap_err();
    assert_eq!(err.to_string(), "message `Dup`: field name `a` is declared more than once");
    assert!(matches!(
        err,
        SchemaError::Definition {
            source: DefinitionError::DuplicateName(_),
            ..
        }
    ));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_schema("/nonexistent/schema.json").unwrap_err();
    assert!(matches!(err, SchemaError::Io(_)));
}
