//! Compile-time embedded event templates.
//!
//! The stock header and implementation templates live under `templates/event/`
//! in this crate and are loaded with [`include_str!`]. Paths are relative to this
//! source file (`crates/evgen-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move the template files without updating the paths here.

pub const EVENT_HEADER: &str = include_str!("../../templates/event/template.hpp");
pub const EVENT_SOURCE: &str = include_str!("../../templates/event/template.cpp");
