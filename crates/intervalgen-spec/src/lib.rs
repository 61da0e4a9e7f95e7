//! Intervalgen Specification Resolution
//!
//! This crate is the specification-resolution layer of the intervalgen
//! cross-language test generator. It treats a directory tree as a registry
//! of language / test-library / arithmetic-library plugins, loads their
//! YAML configuration documents, enumerates the valid combinations, and
//! resolves per-language value-formatter overrides used when literals are
//! rendered into generated test code.
//!
//! # Overview
//!
//! A plugin tree follows a fixed layout under a configured root:
//!
//! ```text
//! <root>/<lang>/lang.yaml                  required per language
//! <root>/<lang>/test/<testLib>/test.yaml   required per test library
//! <root>/<lang>/arith/<arithLib>/arith.yaml required per arithmetic library
//! <root>/<lang>/callbacks.<ext>            optional formatter overrides
//! ```
//!
//! The generation driver enumerates triples with [`SpecificationComposer`],
//! loads each triple's documents with [`SpecificationLoader`], and resolves
//! formatters with [`resolve_callbacks`] and the [`ValueFormatter`] trait.
//! Parsing test sources and emitting code are external collaborators.
//!
//! # Example
//!
//! ```no_run
//! use intervalgen_spec::{PluginTree, SpecificationComposer, SpecificationLoader};
//!
//! # fn main() -> Result<(), intervalgen_spec::DiscoveryError> {
//! let tree = PluginTree::new("plugins");
//! let composer = SpecificationComposer::new(tree.clone());
//! let loader = SpecificationLoader::new(tree);
//!
//! for triple in composer.list_all()? {
//!     let spec = loader.load_specification(
//!         &triple.language,
//!         &triple.test_library,
//!         &triple.arith_library,
//!     )?;
//!     println!("{}: {} language keys", triple, spec.language.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`tree`]: the read-only view over the plugin root
//! - [`registry`]: plugin enumeration inside one directory
//! - [`loader`]: configuration-document loading
//! - [`composer`]: enumeration of valid triples
//! - [`callbacks`]: formatter-override resolution and dispatch
//! - [`formatters`]: the default formatter set
//! - [`error`]: the discovery error taxonomy

pub mod callbacks;
pub mod composer;
pub mod error;
pub mod formatters;
pub mod loader;
pub mod registry;
pub mod tree;

pub use callbacks::{resolve_callbacks, CallbackReference, DefaultFormatters, ValueFormatter};
pub use composer::{SpecificationComposer, SpecificationTriple};
pub use error::{Axis, DiscoveryError};
pub use formatters::{FormatError, FormatterToken};
pub use loader::{SpecDocument, Specification, SpecificationLoader};
pub use registry::list_plugins;
pub use tree::{PluginTree, ARITH_SPEC_FILE, LANG_SPEC_FILE, TEST_SPEC_FILE};
