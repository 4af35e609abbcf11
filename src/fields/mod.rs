// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod choice;
pub mod display;
pub mod factory;
pub mod input;
pub mod markup;
pub mod scanner;
pub mod textarea;

pub use choice::*;
pub use display::*;
pub use factory::StandardFieldTypes;
pub use input::*;
pub use scanner::*;
pub use textarea::*;
