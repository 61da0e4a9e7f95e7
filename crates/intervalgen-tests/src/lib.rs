//! Intervalgen End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the plugin-resolution flows:
//!
//! - Discovery: plugin tree -> enumerated triples -> loaded documents
//! - Error taxonomy: every failure mode driven from a real tree on disk
//! - Formatting: default formatters and per-language overrides
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p intervalgen-tests
//! ```

pub mod fixtures;

pub use fixtures::PluginTreeFixture;
