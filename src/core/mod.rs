//! Core types: errors, configuration, submission payloads.

pub mod config;
pub mod errors;
pub mod payload;
