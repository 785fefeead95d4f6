//! Library crate for school-registry.
//!
//! This crate exposes the building blocks of the console program:
//! - Application state and menu loop (`app`)
//! - Command line options (`cli`)
//! - Error and result types (`error`)
//! - Record model (`model`)
//! - Case-insensitive name matching (`search`)
//! - In-memory collections and identifier sequence (`store`)
//! - Console prompts, menus and forms (`ui`)
//!
//! It is used by the `school-registry` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod app;
pub mod cli;
pub mod error;
pub mod model;
pub mod search;
pub mod store;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{RegistryError, Result};
