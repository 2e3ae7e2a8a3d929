//! Shared domain types for the chart workbench and the view editor.
//!
//! Everything here is plain data plus pure functions, so it builds for both
//! the wasm frontend and native test runs.

pub mod domain;
pub mod shared;
