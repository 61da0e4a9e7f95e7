//! Test fixture utilities for creating synthetic plugin trees.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use intervalgen_spec::PluginTree;

/// A plugin tree built in a temporary directory.
///
/// The builder writes the on-disk layout the resolver expects:
/// `<root>/<lang>/lang.yaml`, `test/<lib>/test.yaml`,
/// `arith/<lib>/arith.yaml`, and optional `callbacks.<ext>` modules.
pub struct PluginTreeFixture {
    root: TempDir,
}

impl PluginTreeFixture {
    /// Creates a new empty plugin tree fixture.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Returns the tree root path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Returns a [`PluginTree`] view over the fixture.
    pub fn tree(&self) -> PluginTree {
        PluginTree::new(self.path())
    }

    /// Adds a language plugin with its `lang.yaml` and both axis roots.
    pub fn add_language(&self, lang: &str) -> PathBuf {
        let dir = self.path().join(lang);
        fs::create_dir_all(dir.join("test")).expect("Failed to create test axis root");
        fs::create_dir_all(dir.join("arith")).expect("Failed to create arith axis root");
        self.write(
            &format!("{}/lang.yaml", lang),
            &format!("language: {}\nline_comment_token: '//'\n", lang),
        );
        dir
    }

    /// Adds a language directory with `lang.yaml` but no axis roots.
    ///
    /// Enumeration treats such a language as an error, never a skip.
    pub fn add_bare_language(&self, lang: &str) -> PathBuf {
        let dir = self.path().join(lang);
        fs::create_dir_all(&dir).expect("Failed to create language dir");
        self.write(
            &format!("{}/lang.yaml", lang),
            &format!("language: {}\n", lang),
        );
        dir
    }

    /// Adds a test-library plugin under a language.
    pub fn add_test_lib(&self, lang: &str, name: &str) -> PathBuf {
        self.write(
            &format!("{}/test/{}/test.yaml", lang, name),
            &format!("test_library: {}\nassert_template: 'CHECK($actual, $expected)'\n", name),
        )
    }

    /// Adds an arithmetic-library plugin under a language.
    pub fn add_arith_lib(&self, lang: &str, name: &str) -> PathBuf {
        self.write(
            &format!("{}/arith/{}/arith.yaml", lang, name),
            &format!("arith_library: {}\ninterval_type: 'interval<double>'\n", name),
        )
    }

    /// Adds a custom formatter module for a language.
    pub fn add_callbacks(&self, lang: &str, ext: &str) -> PathBuf {
        self.write(&format!("{}/callbacks.{}", lang, ext), "-- formatter overrides\n")
    }

    /// Writes an arbitrary file under the tree root, creating parents.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(path.parent().expect("relative path has a parent"))
            .expect("Failed to create parent dirs");
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }

    /// Creates an arbitrary directory under the tree root.
    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(&path).expect("Failed to create fixture dir");
        path
    }
}

impl Default for PluginTreeFixture {
    fn default() -> Self {
        Self::new()
    }
}
