//! Loading of plugin configuration documents.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Axis, DiscoveryError};
use crate::tree::PluginTree;

/// An opaque configuration document: the top-level key-value mapping of a
/// plugin's YAML file, returned exactly as written. Schema beyond "parses as
/// a mapping" belongs to the code generator, not to this crate.
pub type SpecDocument = serde_yaml::Mapping;

/// The three configuration documents of one fully resolved generation target.
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    /// Contents of the language's `lang.yaml`.
    pub language: SpecDocument,
    /// Contents of the test library's `test.yaml`.
    pub test_library: SpecDocument,
    /// Contents of the arithmetic library's `arith.yaml`.
    pub arith_library: SpecDocument,
}

/// Locates and loads plugin configuration documents from a [`PluginTree`].
#[derive(Debug, Clone)]
pub struct SpecificationLoader {
    tree: PluginTree,
}

impl SpecificationLoader {
    /// Creates a loader over the given tree.
    pub fn new(tree: PluginTree) -> Self {
        Self { tree }
    }

    /// Returns the tree the loader reads from.
    pub fn tree(&self) -> &PluginTree {
        &self.tree
    }

    /// Loads the configuration document of a language plugin.
    pub fn load_language_spec(&self, lang: &str) -> Result<SpecDocument, DiscoveryError> {
        self.load_document(
            Axis::Language,
            lang,
            &self.tree.language_dir(lang),
            &self.tree.language_spec_file(lang),
        )
    }

    /// Loads the configuration document of a test-library plugin.
    pub fn load_test_lib_spec(
        &self,
        lang: &str,
        test_lib: &str,
    ) -> Result<SpecDocument, DiscoveryError> {
        self.load_document(
            Axis::TestLibrary,
            test_lib,
            &self.tree.test_lib_dir(lang, test_lib),
            &self.tree.test_lib_spec_file(lang, test_lib),
        )
    }

    /// Loads the configuration document of an arithmetic-library plugin.
    pub fn load_arith_lib_spec(
        &self,
        lang: &str,
        arith_lib: &str,
    ) -> Result<SpecDocument, DiscoveryError> {
        self.load_document(
            Axis::ArithLibrary,
            arith_lib,
            &self.tree.arith_lib_dir(lang, arith_lib),
            &self.tree.arith_lib_spec_file(lang, arith_lib),
        )
    }

    /// Loads the complete specification of one generation target.
    ///
    /// Loads language, then test library, then arithmetic library,
    /// short-circuiting on the first component that fails to resolve. There
    /// is no partial success.
    pub fn load_specification(
        &self,
        lang: &str,
        test_lib: &str,
        arith_lib: &str,
    ) -> Result<Specification, DiscoveryError> {
        let language = self.load_language_spec(lang)?;
        let test_library = self.load_test_lib_spec(lang, test_lib)?;
        let arith_library = self.load_arith_lib_spec(lang, arith_lib)?;
        Ok(Specification {
            language,
            test_library,
            arith_library,
        })
    }

    fn load_document(
        &self,
        axis: Axis,
        plugin: &str,
        dir: &Path,
        file: &Path,
    ) -> Result<SpecDocument, DiscoveryError> {
        if !dir.is_dir() {
            return Err(DiscoveryError::PluginDirectoryMissing {
                axis,
                plugin: plugin.to_owned(),
                path: dir.to_path_buf(),
            });
        }
        if !file.is_file() {
            return Err(DiscoveryError::SpecificationFileMissing {
                axis,
                plugin: plugin.to_owned(),
                path: file.to_path_buf(),
            });
        }

        debug!(%axis, plugin, path = %file.display(), "loading specification document");
        let contents = fs::read_to_string(file).map_err(|source| DiscoveryError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| DiscoveryError::MalformedSpecification {
            path: file.to_path_buf(),
            source,
        })
    }
}
