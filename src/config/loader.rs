// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_SUBMIT_TEXT;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Construction options for a builder and a renderer, loaded together.
///
/// Both sections are optional; anything left out takes its default.
///
/// # Example
/// ```yaml
/// builder:
///   control_position: right
///   show_action_buttons: true
///   disabled_fields: [file, scanner]
/// renderer:
///   show_submit: true
///   submit_text: "Send"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default)]
    pub builder: BuilderOptions,
    #[serde(default)]
    pub renderer: RendererOptions,
}

/// Which side of the canvas the palette sits on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlPosition {
    #[default]
    Left,
    Right,
}

/// Builder construction options.
///
/// # Fields
/// * `control_position` - Palette placement relative to the canvas (default left)
/// * `show_action_buttons` - Render the "Clear All" action bar (default true)
/// * `disabled_fields` - Type ids hidden from the palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderOptions {
    #[serde(default, alias = "controlPosition")]
    pub control_position: ControlPosition,
    #[serde(default = "default_true", alias = "showActionButtons")]
    pub show_action_buttons: bool,
    #[serde(default, alias = "disabledFields")]
    pub disabled_fields: Vec<String>,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            control_position: ControlPosition::Left,
            show_action_buttons: true,
            disabled_fields: Vec::new(),
        }
    }
}

/// Renderer construction options. The submit callback is set in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererOptions {
    #[serde(default = "default_true", alias = "showSubmit")]
    pub show_submit: bool,
    #[serde(default = "default_submit_text", alias = "submitText")]
    pub submit_text: String,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            show_submit: true,
            submit_text: DEFAULT_SUBMIT_TEXT.to_string(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_submit_text() -> String {
    DEFAULT_SUBMIT_TEXT.to_string()
}

/// Loads options from a YAML, JSON or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FormsConfig, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let content = fs::read_to_string(path)?;
    let cfg = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)?,
        "json" => serde_json::from_str(&content)?,
        "toml" => toml::from_str(&content)?,
        _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    };
    Ok(cfg)
}
