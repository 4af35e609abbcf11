#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use crate::builder::FormBuilder;
    use crate::config::consts::EMPTY_CANVAS_TEXT;
    use crate::config::{BuilderOptions, FieldTypeRegistry};
    use crate::model::{FormDocument, Property};

    fn builder() -> FormBuilder {
        FormBuilder::new(
            Arc::new(FieldTypeRegistry::with_standard_types()),
            BuilderOptions::default(),
        )
    }

    fn builder_with(types: &[&str]) -> FormBuilder {
        let mut b = builder();
        for t in types {
            b.add_field(t);
        }
        b
    }

    fn ids(b: &FormBuilder) -> Vec<String> {
        b.fields().iter().map(|f| f.id.clone()).collect()
    }

    fn canvas_ids(b: &FormBuilder) -> Vec<String> {
        b.canvas().items().iter().map(|i| i.field_id.clone()).collect()
    }

    #[test]
    fn test_n_additions_preserve_call_order() {
        let types = ["text", "email", "number", "textarea", "select", "checkbox", "radio", "date", "file", "header", "paragraph", "scanner"];
        let b = builder_with(&types);

        assert_eq!(b.len(), types.len());
        let placed: Vec<&str> = b.fields().iter().map(|f| f.field_type.as_str()).collect();
        assert_eq!(placed, types);
        assert_eq!(ids(&b), canvas_ids(&b));
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut source = builder_with(&["text", "select", "header", "checkbox"]);
        let mut session = source.edit_field("field-2").unwrap();
        session.set_text(Property::Name, "role").unwrap();
        session.set_required(true).unwrap();
        session.set_options_text("Admin\nEditor").unwrap();
        source.save_edit(session).unwrap();

        let json = source.export_json().unwrap();
        let mut target = builder();
        target.import(json.as_str()).unwrap();

        assert_eq!(target.export(), source.export());
        assert_eq!(ids(&target), vec!["field-1", "field-2", "field-3", "field-4"]);
        assert_eq!(canvas_ids(&target), ids(&target));

        let role = target.field("field-2").unwrap();
        assert_eq!(role.name, "role");
        assert!(role.required);
        assert_eq!(role.options(), &["Admin", "Editor"]);
        assert_eq!(target.field("field-3").unwrap().subtype.as_deref(), Some("h2"));

        assert_eq!(target.add_field("text").as_deref(), Some("field-5"));
    }

    #[test]
    fn test_export_is_a_bare_json_array() {
        let b = builder_with(&["text"]);
        let value: serde_json::Value = serde_json::from_str(&b.export_json().unwrap()).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["id"], "field-1");
        assert_eq!(value[0]["type"], "text");
    }

    #[test]
    fn test_document_round_trip() {
        let source = builder_with(&["email", "radio"]);
        let document = source.export_document();
        assert_eq!(document.schema_version, 1);

        let text = serde_json::to_string(&document).unwrap();
        let mut target = builder();
        target.import(text).unwrap();
        assert_eq!(target.export(), source.export());

        let parsed: FormDocument = serde_json::from_str(&serde_json::to_string(&document).unwrap()).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn test_reorder_fixtures() {
        struct TestCase {
            name: &'static str,
            count: usize,
            dragged: &'static str,
            target: &'static str,
            expected: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "first onto last",
                count: 3,
                dragged: "field-1",
                target: "field-3",
                expected: vec!["field-2", "field-3", "field-1"],
            },
            TestCase {
                name: "last onto first",
                count: 3,
                dragged: "field-3",
                target: "field-1",
                expected: vec!["field-3", "field-1", "field-2"],
            },
            TestCase {
                name: "forward past two",
                count: 4,
                dragged: "field-2",
                target: "field-4",
                expected: vec!["field-1", "field-3", "field-4", "field-2"],
            },
            TestCase {
                name: "backward by two",
                count: 4,
                dragged: "field-4",
                target: "field-2",
                expected: vec!["field-1", "field-4", "field-2", "field-3"],
            },
            TestCase {
                name: "adjacent forward",
                count: 4,
                dragged: "field-2",
                target: "field-3",
                expected: vec!["field-1", "field-3", "field-2", "field-4"],
            },
            TestCase {
                name: "unknown target",
                count: 3,
                dragged: "field-1",
                target: "field-9",
                expected: vec!["field-1", "field-2", "field-3"],
            },
            TestCase {
                name: "same field",
                count: 3,
                dragged: "field-2",
                target: "field-2",
                expected: vec!["field-1", "field-2", "field-3"],
            },
        ];

        for tc in test_cases {
            let mut b = builder_with(&vec!["text"; tc.count]);
            b.reorder_fields(tc.dragged, tc.target);
            assert_eq!(ids(&b), tc.expected, "Test case '{}' failed", tc.name);
            assert_eq!(canvas_ids(&b), tc.expected, "Test case '{}' canvas", tc.name);
        }
    }

    #[test]
    fn test_delete_keeps_relative_order_and_restores_placeholder() {
        let mut b = builder_with(&["text", "email", "number"]);

        assert!(b.delete_field("field-2"));
        assert_eq!(ids(&b), vec!["field-1", "field-3"]);
        assert_eq!(canvas_ids(&b), vec!["field-1", "field-3"]);
        assert!(!b.render().contains(EMPTY_CANVAS_TEXT));

        b.delete_field("field-1");
        b.delete_field("field-3");
        assert!(b.is_empty());
        assert!(b.canvas().shows_placeholder());
        assert!(b.render().contains(EMPTY_CANVAS_TEXT));
    }

    #[test]
    fn test_import_resynchronizes_id_counter() {
        let mut b = builder();
        b.import(r#"[{"id":"field-2","type":"text"},{"id":"field-9","type":"email"},{"id":"custom","type":"date"}]"#)
            .unwrap();
        assert_eq!(b.add_field("text").as_deref(), Some("field-10"));

        let mut busy = builder_with(&vec!["text"; 12]);
        busy.import(r#"[{"id":"field-3","type":"text"}]"#).unwrap();
        assert_eq!(busy.add_field("text").as_deref(), Some("field-13"));
        assert_eq!(ids(&busy), vec!["field-3", "field-13"]);
    }

    #[test]
    fn test_import_at_top_of_id_space() {
        struct TestCase {
            name: &'static str,
            imported_id: String,
            added: Vec<Option<&'static str>>,
        }

        let test_cases = vec![
            TestCase {
                name: "highest possible suffix leaves no id to hand out",
                imported_id: format!("field-{}", u64::MAX),
                added: vec![None, None],
            },
            TestCase {
                name: "one id left is handed out once",
                imported_id: format!("field-{}", u64::MAX - 1),
                added: vec![Some("field-18446744073709551615"), None],
            },
        ];

        for tc in test_cases {
            let mut b = builder();
            let json = format!(r#"[{{"id":"{}","type":"text"}}]"#, tc.imported_id);
            b.import(json).unwrap();
            assert_eq!(ids(&b), vec![tc.imported_id.clone()], "Test case '{}' failed", tc.name);

            for expected in tc.added {
                assert_eq!(b.next_field_id().as_deref(), expected, "Test case '{}' next id", tc.name);
                let before = b.len();
                assert_eq!(b.add_field("text").as_deref(), expected, "Test case '{}' failed", tc.name);
                let grown = if expected.is_some() { 1 } else { 0 };
                assert_eq!(b.len(), before + grown, "Test case '{}' length", tc.name);
            }
            assert_eq!(canvas_ids(&b), ids(&b), "Test case '{}' canvas", tc.name);
        }
    }

    #[test]
    fn test_failed_import_changes_nothing() {
        let mut b = builder_with(&["text", "email"]);
        let before = b.export();

        assert!(b.import(r#"{"not":"an array"}"#).is_err());
        assert!(b.import(r#"[{"id":"field-1","type":"text"},{"id":"field-1","type":"text"}]"#).is_err());
        assert_eq!(b.export(), before);
        assert_eq!(b.add_field("text").as_deref(), Some("field-3"));
    }

    #[test]
    fn test_unknown_imported_type_degrades_to_placeholder() {
        let mut b = builder();
        b.import(r#"[{"id":"field-1","type":"rating","label":"Stars","max":5}]"#).unwrap();

        assert_eq!(b.canvas().items()[0].preview, "Preview not available");
        assert!(b.edit_field("field-1").is_none());

        let json = b.export_json().unwrap();
        assert!(json.contains("\"max\": 5"));
    }

    #[test]
    fn test_clear_all_then_add_continues_numbering() {
        let mut b = builder_with(&["text", "text"]);
        assert!(b.clear_all());
        assert!(b.is_empty());
        assert!(b.render().contains(EMPTY_CANVAS_TEXT));
        assert_eq!(b.add_field("text").as_deref(), Some("field-3"));
    }
}
