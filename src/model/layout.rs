// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};

/// How fields are arranged on screen. Cosmetic only; never touches the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    SingleColumn,
    /// Fixed two-column grid
    Grid,
}

impl Layout {
    pub fn toggled(self) -> Self {
        match self {
            Layout::SingleColumn => Layout::Grid,
            Layout::Grid => Layout::SingleColumn,
        }
    }

    /// Inline style for the container holding the fields.
    pub fn container_style(self) -> &'static str {
        match self {
            Layout::SingleColumn => "display:block",
            Layout::Grid => "display:grid;grid-template-columns:repeat(2, 1fr);gap:15px",
        }
    }
}
