#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use crate::builder::FormBuilder;
    use crate::config::{load_config, ControlPosition, FieldTypeRegistry, FormsConfig};
    use crate::errors::ConfigError;
    use crate::renderer::FormRenderer;

    fn registry() -> Arc<FieldTypeRegistry> {
        Arc::new(FieldTypeRegistry::with_standard_types())
    }

    /// Test that each shipped options file loads with its format's parser
    #[test]
    fn test_sample_configs_load() {
        struct TestCase {
            path: &'static str,
            position: ControlPosition,
            show_action_buttons: bool,
            disabled: Vec<&'static str>,
            show_submit: bool,
            submit_text: &'static str,
        }

        let test_cases = vec![
            TestCase {
                path: "configs/builder-right.yaml",
                position: ControlPosition::Right,
                show_action_buttons: true,
                disabled: vec!["file", "scanner"],
                show_submit: true,
                submit_text: "Send",
            },
            TestCase {
                path: "configs/renderer-no-submit.toml",
                position: ControlPosition::Left,
                show_action_buttons: true,
                disabled: vec![],
                show_submit: false,
                submit_text: "Unused",
            },
            TestCase {
                path: "configs/legacy-options.json",
                position: ControlPosition::Left,
                show_action_buttons: false,
                disabled: vec!["paragraph"],
                show_submit: true,
                submit_text: "Register",
            },
        ];

        for tc in test_cases {
            let config = load_config(tc.path).unwrap();
            assert_eq!(config.builder.control_position, tc.position, "{}", tc.path);
            assert_eq!(config.builder.show_action_buttons, tc.show_action_buttons, "{}", tc.path);
            assert_eq!(config.builder.disabled_fields, tc.disabled, "{}", tc.path);
            assert_eq!(config.renderer.show_submit, tc.show_submit, "{}", tc.path);
            assert_eq!(config.renderer.submit_text, tc.submit_text, "{}", tc.path);
        }
    }

    /// Test that loaded builder options shape the palette and layout
    #[test]
    fn test_builder_from_yaml_options() {
        let config = load_config("configs/builder-right.yaml").unwrap();
        let builder = FormBuilder::new(registry(), config.builder);

        let entries = builder.palette();
        let palette: Vec<&str> = entries.iter().map(|d| d.type_id()).collect();
        assert_eq!(palette.len(), 10);
        assert!(!palette.contains(&"file"));
        assert!(!palette.contains(&"scanner"));

        let html = builder.render();
        let canvas = html.find("df-canvas").unwrap();
        let palette_panel = html.find("Form Fields").unwrap();
        assert!(canvas < palette_panel, "palette should follow the canvas");
        assert!(html.contains("Clear All"));
    }

    /// Test that a builder with legacy camelCase options hides the action bar
    #[test]
    fn test_builder_from_legacy_json_options() {
        let config = load_config("configs/legacy-options.json").unwrap();
        let mut builder = FormBuilder::new(registry(), config.builder);

        assert!(!builder.render().contains("Clear All"));
        assert!(builder.palette().iter().all(|d| d.type_id() != "paragraph"));

        builder
            .import(std::fs::read_to_string("configs/contact-form.json").unwrap())
            .unwrap();
        assert_eq!(builder.len(), 5);
        assert_eq!(builder.next_field_id().as_deref(), Some("field-8"));
    }

    /// Test that renderer options from TOML suppress the submit button
    #[test]
    fn test_renderer_from_toml_options() {
        let config = load_config("configs/renderer-no-submit.toml").unwrap();
        let form = std::fs::read_to_string("configs/contact-form.json").unwrap();
        let renderer = FormRenderer::new(registry(), form, config.renderer).unwrap();

        let html = renderer.render();
        assert!(!html.contains("type=\"submit\""));
        assert!(!html.contains("Unused"));
    }

    /// Test failure modes of the loader
    #[test]
    fn test_loader_failures() {
        assert!(matches!(load_config("configs/does-not-exist.yaml"), Err(ConfigError::Io(_))));
        assert!(matches!(
            load_config("configs/contact-form.json"),
            Err(ConfigError::Json(_))
        ));

        let defaults = FormsConfig::default();
        assert!(defaults.builder.show_action_buttons);
        assert!(defaults.renderer.show_submit);
    }
}
