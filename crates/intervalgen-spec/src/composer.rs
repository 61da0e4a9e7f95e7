//! Enumeration of valid (language, test-library, arithmetic-library) triples.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Axis, DiscoveryError};
use crate::registry;
use crate::tree::PluginTree;

/// The identifiers of one fully resolved generation target.
///
/// Triples are created transiently during enumeration and never persisted;
/// the identifiers name plugins, not their contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpecificationTriple {
    /// The target language.
    pub language: String,
    /// The unit-test library.
    pub test_library: String,
    /// The interval-arithmetic library.
    pub arith_library: String,
}

impl SpecificationTriple {
    /// Creates a triple from its three identifiers.
    pub fn new(
        language: impl Into<String>,
        test_library: impl Into<String>,
        arith_library: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            test_library: test_library.into(),
            arith_library: arith_library.into(),
        }
    }
}

impl std::fmt::Display for SpecificationTriple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.language, self.test_library, self.arith_library
        )
    }
}

/// Enumerates the legal plugin combinations of a [`PluginTree`].
///
/// Plugin availability is language-scoped: the test × arith product is
/// always computed per language, never across languages.
#[derive(Debug, Clone)]
pub struct SpecificationComposer {
    tree: PluginTree,
}

impl SpecificationComposer {
    /// Creates a composer over the given tree.
    pub fn new(tree: PluginTree) -> Self {
        Self { tree }
    }

    /// Returns the tree the composer reads from.
    pub fn tree(&self) -> &PluginTree {
        &self.tree
    }

    /// Lists every valid triple in the tree.
    ///
    /// A discovered language whose `test/` or `arith/` axis root is absent
    /// fails the whole enumeration with
    /// [`DiscoveryError::PluginDirectoryMissing`] rather than being skipped;
    /// an axis root that exists but holds zero plugins contributes an empty
    /// product.
    pub fn list_all(&self) -> Result<Vec<SpecificationTriple>, DiscoveryError> {
        let languages = registry::list_plugins(self.tree.root())?;
        let mut triples = Vec::new();
        for lang in &languages {
            triples.extend(self.language_product(lang)?);
        }
        debug!(
            languages = languages.len(),
            triples = triples.len(),
            "enumerated specification triples"
        );
        Ok(triples)
    }

    /// Lists the triples of one language: its full test × arith product.
    pub fn list_by_language(
        &self,
        lang: &str,
    ) -> Result<Vec<SpecificationTriple>, DiscoveryError> {
        self.language_product(lang)
    }

    /// Lists the triples with the language and test library fixed, varying
    /// the arithmetic library.
    ///
    /// The fixed test-library identifier is taken on faith; a nonexistent
    /// one surfaces later, at load time.
    pub fn list_by_language_and_test_library(
        &self,
        lang: &str,
        test_lib: &str,
    ) -> Result<Vec<SpecificationTriple>, DiscoveryError> {
        let ariths = self.axis_plugins(lang, Axis::ArithLibrary, self.tree.arith_root(lang))?;
        Ok(ariths
            .into_iter()
            .map(|arith| SpecificationTriple::new(lang, test_lib, arith))
            .collect())
    }

    /// Lists the triples with the language and arithmetic library fixed,
    /// varying the test library.
    ///
    /// The fixed arithmetic-library identifier is taken on faith; a
    /// nonexistent one surfaces later, at load time.
    pub fn list_by_language_and_arith_library(
        &self,
        lang: &str,
        arith_lib: &str,
    ) -> Result<Vec<SpecificationTriple>, DiscoveryError> {
        let tests = self.axis_plugins(lang, Axis::TestLibrary, self.tree.test_root(lang))?;
        Ok(tests
            .into_iter()
            .map(|test| SpecificationTriple::new(lang, test, arith_lib))
            .collect())
    }

    fn language_product(
        &self,
        lang: &str,
    ) -> Result<Vec<SpecificationTriple>, DiscoveryError> {
        let ariths = self.axis_plugins(lang, Axis::ArithLibrary, self.tree.arith_root(lang))?;
        let tests = self.axis_plugins(lang, Axis::TestLibrary, self.tree.test_root(lang))?;

        let mut triples = Vec::with_capacity(tests.len() * ariths.len());
        for test in &tests {
            for arith in &ariths {
                triples.push(SpecificationTriple::new(lang, test, arith));
            }
        }
        Ok(triples)
    }

    fn axis_plugins(
        &self,
        lang: &str,
        axis: Axis,
        root: PathBuf,
    ) -> Result<Vec<String>, DiscoveryError> {
        if !root.is_dir() {
            return Err(DiscoveryError::PluginDirectoryMissing {
                axis,
                plugin: lang.to_owned(),
                path: root,
            });
        }
        registry::list_plugins(&root)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn add_lang(root: &Path, lang: &str, tests: &[&str], ariths: &[&str]) {
        fs::create_dir_all(root.join(lang).join("test")).unwrap();
        fs::create_dir_all(root.join(lang).join("arith")).unwrap();
        for t in tests {
            fs::create_dir_all(root.join(lang).join("test").join(t)).unwrap();
        }
        for a in ariths {
            fs::create_dir_all(root.join(lang).join("arith").join(a)).unwrap();
        }
    }

    fn composer(dir: &TempDir) -> SpecificationComposer {
        SpecificationComposer::new(PluginTree::new(dir.path()))
    }

    #[test]
    fn product_is_computed_per_language() {
        let dir = TempDir::new().unwrap();
        add_lang(dir.path(), "cpp", &["BOOST", "CATCH"], &["filib", "mpfi"]);
        add_lang(dir.path(), "julia", &["Test"], &["IntervalArithmetic"]);

        let triples = composer(&dir).list_all().unwrap();
        assert_eq!(triples.len(), 2 * 2 + 1);

        // No cross-language combination may appear.
        assert!(triples
            .iter()
            .all(|t| t.language != "julia" || t.test_library == "Test"));

        let unique: HashSet<_> = triples.iter().collect();
        assert_eq!(unique.len(), triples.len());
    }

    #[test]
    fn by_language_matches_the_full_product() {
        let dir = TempDir::new().unwrap();
        add_lang(dir.path(), "cpp", &["BOOST", "CATCH"], &["filib", "mpfi", "gaol"]);

        let triples = composer(&dir).list_by_language("cpp").unwrap();
        assert_eq!(triples.len(), 2 * 3);
        assert!(triples.contains(&SpecificationTriple::new("cpp", "CATCH", "gaol")));
    }

    #[test]
    fn fixed_test_library_varies_arith() {
        let dir = TempDir::new().unwrap();
        add_lang(dir.path(), "cpp", &["BOOST"], &["filib", "mpfi"]);

        let triples = composer(&dir)
            .list_by_language_and_test_library("cpp", "BOOST")
            .unwrap();
        assert_eq!(
            triples,
            vec![
                SpecificationTriple::new("cpp", "BOOST", "filib"),
                SpecificationTriple::new("cpp", "BOOST", "mpfi"),
            ]
        );
    }

    #[test]
    fn fixed_arith_library_varies_test() {
        let dir = TempDir::new().unwrap();
        add_lang(dir.path(), "cpp", &["BOOST", "CATCH"], &["filib"]);

        let triples = composer(&dir)
            .list_by_language_and_arith_library("cpp", "filib")
            .unwrap();
        assert_eq!(
            triples,
            vec![
                SpecificationTriple::new("cpp", "BOOST", "filib"),
                SpecificationTriple::new("cpp", "CATCH", "filib"),
            ]
        );
    }

    #[test]
    fn fixed_axis_identifier_is_not_validated() {
        let dir = TempDir::new().unwrap();
        add_lang(dir.path(), "cpp", &["BOOST"], &["filib"]);

        let triples = composer(&dir)
            .list_by_language_and_test_library("cpp", "NO_SUCH_LIB")
            .unwrap();
        assert_eq!(
            triples,
            vec![SpecificationTriple::new("cpp", "NO_SUCH_LIB", "filib")]
        );
    }

    #[test]
    fn missing_axis_root_is_an_error_not_a_skip() {
        let dir = TempDir::new().unwrap();
        add_lang(dir.path(), "cpp", &["BOOST"], &["filib"]);
        // A language plugin without its axis roots poisons the whole listing.
        fs::create_dir_all(dir.path().join("julia")).unwrap();

        let err = composer(&dir).list_all().unwrap_err();
        assert!(matches!(
            err,
            DiscoveryError::PluginDirectoryMissing { plugin, .. } if plugin == "julia"
        ));
    }

    #[test]
    fn empty_axis_root_yields_empty_product() {
        let dir = TempDir::new().unwrap();
        add_lang(dir.path(), "julia", &[], &["IntervalArithmetic"]);

        let triples = composer(&dir).list_by_language("julia").unwrap();
        assert_eq!(triples, Vec::new());
    }

    #[test]
    fn cache_entries_do_not_become_languages() {
        let dir = TempDir::new().unwrap();
        add_lang(dir.path(), "cpp", &["BOOST"], &["filib"]);
        fs::create_dir_all(dir.path().join("__pycache__")).unwrap();

        let triples = composer(&dir).list_all().unwrap();
        assert!(triples.iter().all(|t| t.language == "cpp"));
    }

    #[test]
    fn triple_display() {
        let triple = SpecificationTriple::new("cpp", "BOOST", "filib");
        assert_eq!(triple.to_string(), "cpp/BOOST/filib");
    }
}
