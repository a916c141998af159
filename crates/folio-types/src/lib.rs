//! Foundation types for the folio terminal.
//!
//! This crate contains the host-agnostic core types shared by the folio
//! crates: key events, terminal configuration, and error types.

pub mod config;
pub mod error;
pub mod input;
