// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::sync::Arc;

use dynamic_forms::builder::FormBuilder;
use dynamic_forms::capture::StubMediaDevices;
use dynamic_forms::config::{load_config, FieldTypeRegistry, FormsConfig};
use dynamic_forms::model::Property;
use dynamic_forms::observability::init_tracing;
use dynamic_forms::renderer::FormRenderer;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn print_usage(program: &str) {
    eprintln!("Usage: {} render <form.json> [options.yaml|json|toml]", program);
    eprintln!("       {} builder <form.json> [options.yaml|json|toml]", program);
    eprintln!("       {} --demo-mode", program);
    eprintln!("Example: {} render configs/contact-form.json configs/builder-right.yaml", program);
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("dynamic-forms");

    let outcome = match args.get(1).map(String::as_str) {
        Some("--demo-mode") => run_demo().await,
        Some(command @ ("render" | "builder")) if args.len() >= 3 => {
            run_command(command, &args[2], args.get(3).map(String::as_str))
        }
        _ => {
            print_usage(program);
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn load_options(path: Option<&str>) -> CliResult<FormsConfig> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => Ok(FormsConfig::default()),
    }
}

/// Prints the markup of a form file as the renderer or the builder shows it.
fn run_command(command: &str, form_path: &str, options_path: Option<&str>) -> CliResult<()> {
    let form = fs::read_to_string(form_path)?;
    let config = load_options(options_path)?;
    let registry = Arc::new(FieldTypeRegistry::with_standard_types());

    let markup = if command == "render" {
        FormRenderer::new(registry, form, config.renderer)?.render()
    } else {
        let mut builder = FormBuilder::new(registry, config.builder);
        builder.import(form)?;
        builder.render()
    };
    println!("{}", markup);
    Ok(())
}

/// Designs a small form, hands it to a renderer, fills it in, takes a
/// picture with a stub camera and submits.
async fn run_demo() -> CliResult<()> {
    println!("🧩 Dynamic Forms Demo");
    println!("═════════════════════");

    let registry = Arc::new(FieldTypeRegistry::with_standard_types());
    let mut builder = FormBuilder::new(registry.clone(), Default::default());

    for type_id in ["header", "text", "select", "checkbox", "scanner"] {
        builder.add_field(type_id);
    }
    let names = [
        ("field-2", "fullName", None),
        ("field-3", "role", Some("Admin\nEditor\nViewer")),
        ("field-4", "colors", Some("red\ngreen\nblue")),
        ("field-5", "badge", None),
    ];
    for (field_id, name, options) in names {
        let Some(mut session) = builder.edit_field(field_id) else {
            continue;
        };
        session.set_text(Property::Name, name)?;
        if let Some(options) = options {
            session.set_options_text(options)?;
        }
        builder.save_edit(session)?;
    }

    let exported = builder.export_json()?;
    println!("\n📐 Designed {} fields:", builder.len());
    println!("{}", exported);

    let devices = StubMediaDevices::default();
    let mut renderer = FormRenderer::new(registry, exported, Default::default())?
        .with_media_devices(Arc::new(devices.clone()))
        .on_submit(|values| println!("\n📨 Callback received {} keys", values.len()));

    renderer.set_value("field-2", "Ada")?;
    renderer.set_value("field-3", "Admin")?;
    renderer.set_checked("field-4", "red", true)?;
    renderer.set_checked("field-4", "blue", true)?;

    renderer.open_camera("field-5").await?;
    let data_url = renderer.capture_image("field-5")?;
    println!(
        "\n📷 Captured {} bytes of image data, {} streams still open",
        data_url.len(),
        devices.open_streams()
    );

    let values = renderer.submit()?;
    println!("\n✅ Submitted values:");
    println!("{}", serde_json::to_string_pretty(&values)?);
    Ok(())
}
