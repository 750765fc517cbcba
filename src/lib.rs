//! Synaudit core library.
//!
//! This crate exposes programmatic APIs for auditing a directory tree
//! against the naming and size restrictions of a cloud file-sync backend.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `rules`: The rule evaluation engine and its check components.
//! - `walker`: Tree traversal producing per-file descriptors.
//! - `scan`: The sequential scan pass over walker output.
//! - `report`: CSV report sink.
//! - `models`: Finding, summary, and result structs.
//! - `output`: Human/JSON printers for scan results.
//! - `error`: Error types for traversal and report I/O.
//! - `utils`: Supporting helpers.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod report;
pub mod rules;
pub mod scan;
pub mod utils;
pub mod walker;
