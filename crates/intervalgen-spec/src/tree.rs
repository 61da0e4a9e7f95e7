//! Read-only view over the plugin root directory.

use std::path::{Path, PathBuf};

/// Per-language configuration file, `<root>/<lang>/lang.yaml`.
pub const LANG_SPEC_FILE: &str = "lang.yaml";

/// Per-test-library configuration file, `<root>/<lang>/test/<lib>/test.yaml`.
pub const TEST_SPEC_FILE: &str = "test.yaml";

/// Per-arithmetic-library configuration file, `<root>/<lang>/arith/<lib>/arith.yaml`.
pub const ARITH_SPEC_FILE: &str = "arith.yaml";

const TEST_SUBDIR: &str = "test";
const ARITH_SUBDIR: &str = "arith";

/// A read-only view over a plugin tree rooted at a fixed path.
///
/// The tree owns nothing but the root path; every lookup re-reads the file
/// system, so there is no staleness guarantee between calls. The root is
/// fixed at construction rather than held as process-wide state.
#[derive(Debug, Clone)]
pub struct PluginTree {
    root: PathBuf,
}

impl PluginTree {
    /// Creates a view over the plugin tree rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root path of the tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory of a language plugin, `<root>/<lang>`.
    pub fn language_dir(&self, lang: &str) -> PathBuf {
        self.root.join(lang)
    }

    /// Specification file of a language plugin, `<root>/<lang>/lang.yaml`.
    pub fn language_spec_file(&self, lang: &str) -> PathBuf {
        self.language_dir(lang).join(LANG_SPEC_FILE)
    }

    /// Root of a language's test-library axis, `<root>/<lang>/test`.
    pub fn test_root(&self, lang: &str) -> PathBuf {
        self.language_dir(lang).join(TEST_SUBDIR)
    }

    /// Directory of a test-library plugin, `<root>/<lang>/test/<lib>`.
    pub fn test_lib_dir(&self, lang: &str, test_lib: &str) -> PathBuf {
        self.test_root(lang).join(test_lib)
    }

    /// Specification file of a test-library plugin.
    pub fn test_lib_spec_file(&self, lang: &str, test_lib: &str) -> PathBuf {
        self.test_lib_dir(lang, test_lib).join(TEST_SPEC_FILE)
    }

    /// Root of a language's arithmetic-library axis, `<root>/<lang>/arith`.
    pub fn arith_root(&self, lang: &str) -> PathBuf {
        self.language_dir(lang).join(ARITH_SUBDIR)
    }

    /// Directory of an arithmetic-library plugin, `<root>/<lang>/arith/<lib>`.
    pub fn arith_lib_dir(&self, lang: &str, arith_lib: &str) -> PathBuf {
        self.arith_root(lang).join(arith_lib)
    }

    /// Specification file of an arithmetic-library plugin.
    pub fn arith_lib_spec_file(&self, lang: &str, arith_lib: &str) -> PathBuf {
        self.arith_lib_dir(lang, arith_lib).join(ARITH_SPEC_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths() {
        let tree = PluginTree::new("/plugins");

        assert_eq!(tree.root(), Path::new("/plugins"));
        assert_eq!(tree.language_dir("cpp"), Path::new("/plugins/cpp"));
        assert_eq!(
            tree.language_spec_file("cpp"),
            Path::new("/plugins/cpp/lang.yaml")
        );
        assert_eq!(tree.test_root("cpp"), Path::new("/plugins/cpp/test"));
        assert_eq!(
            tree.test_lib_spec_file("cpp", "BOOST"),
            Path::new("/plugins/cpp/test/BOOST/test.yaml")
        );
        assert_eq!(tree.arith_root("cpp"), Path::new("/plugins/cpp/arith"));
        assert_eq!(
            tree.arith_lib_spec_file("cpp", "filib"),
            Path::new("/plugins/cpp/arith/filib/arith.yaml")
        );
    }
}
