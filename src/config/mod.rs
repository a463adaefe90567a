// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for clint.
//!
//! This module handles discovering, parsing and resolving the rule
//! configuration, falling back to the built-in project configuration.

pub mod default;
mod loader;
mod schema;

pub use default::{example_config, project_config};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config, CONFIG_FILES};
pub use schema::*;
