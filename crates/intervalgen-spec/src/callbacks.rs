//! Resolution and dispatch of per-language value-formatter overrides.
//!
//! A language plugin may ship a custom formatter module,
//! `<root>/<lang>/callbacks.<ext>`. Resolution only answers "is one there";
//! the module's contents are never inspected here, and a malformed module
//! fails no earlier than its first invocation by the code generator.
//!
//! On the dispatch side, [`ValueFormatter`] is the capability a custom
//! module is adapted into: one method per semantic token, each defaulting to
//! the built-in formatter, so a provider overrides any subset and the rest
//! falls through unchanged.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::formatters::{self, FormatError, FormatterToken};
use crate::tree::PluginTree;

const CALLBACKS_STEM: &str = "callbacks";

/// The outcome of resolving a language's custom formatter module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackReference {
    /// A custom module exists at the given path.
    Module(PathBuf),
    /// No custom module; the default formatters apply. Not an error.
    Default,
}

impl CallbackReference {
    /// Returns true when no custom module was found.
    pub fn is_default(&self) -> bool {
        matches!(self, CallbackReference::Default)
    }

    /// Returns the module path, if a custom module was found.
    pub fn module_path(&self) -> Option<&Path> {
        match self {
            CallbackReference::Module(path) => Some(path),
            CallbackReference::Default => None,
        }
    }
}

/// Resolves the custom formatter module of a language, if any.
///
/// Probes the language directory for a file named `callbacks` with any
/// extension. Absence (including an absent language directory) yields
/// [`CallbackReference::Default`]; this signals "use default formatters"
/// and is never an error. The reference is computed fresh on every call.
pub fn resolve_callbacks(tree: &PluginTree, lang: &str) -> CallbackReference {
    let dir = tree.language_dir(lang);
    let Ok(entries) = fs::read_dir(&dir) else {
        return CallbackReference::Default;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let is_callbacks = path.file_stem().is_some_and(|stem| stem == CALLBACKS_STEM)
            && path.extension().is_some();
        if is_callbacks && path.is_file() {
            debug!(lang, path = %path.display(), "resolved custom formatter module");
            return CallbackReference::Module(path);
        }
    }
    CallbackReference::Default
}

/// Value formatting for literals rendered into generated test code.
///
/// Every method has a default implementation delegating to the matching
/// built-in formatter in [`crate::formatters`]; a language-specific provider
/// overrides only the tokens it shadows. [`format`](ValueFormatter::format)
/// routes a [`FormatterToken`] to the per-token method, so lookup always
/// hits the override first and falls back to the default otherwise.
pub trait ValueFormatter {
    /// Formats an integral numeral.
    fn int(&self, text: &str) -> Result<String, FormatError> {
        formatters::int(text)
    }

    /// Formats a decimal or hexadecimal floating-point numeral.
    fn floating_point_number(&self, text: &str) -> Result<String, FormatError> {
        formatters::floating_point_number(text)
    }

    /// Formats a string literal.
    fn string(&self, text: &str) -> Result<String, FormatError> {
        formatters::string(text)
    }

    /// Formats a dotted qualified name.
    fn qualified_identifier(&self, text: &str) -> Result<String, FormatError> {
        formatters::qualified_identifier(text)
    }

    /// Formats an input variable name.
    fn input_variable_name(&self, text: &str) -> Result<String, FormatError> {
        formatters::input_variable_name(text)
    }

    /// Formats an output variable name.
    fn output_variable_name(&self, text: &str) -> Result<String, FormatError> {
        formatters::output_variable_name(text)
    }

    /// Routes a semantic token to its formatter.
    fn format(&self, token: FormatterToken, text: &str) -> Result<String, FormatError> {
        match token {
            FormatterToken::Int => self.int(text),
            FormatterToken::FloatingPointNumber => self.floating_point_number(text),
            FormatterToken::String => self.string(text),
            FormatterToken::QualifiedIdentifier => self.qualified_identifier(text),
            FormatterToken::InputVariableName => self.input_variable_name(text),
            FormatterToken::OutputVariableName => self.output_variable_name(text),
        }
    }
}

/// The process-wide default formatter set: no overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatters;

impl ValueFormatter for DefaultFormatters {}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn absent_module_resolves_to_default() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("cpp")).unwrap();
        let tree = PluginTree::new(dir.path());

        assert!(resolve_callbacks(&tree, "cpp").is_default());
        // An absent language directory is also "use defaults", not an error.
        assert!(resolve_callbacks(&tree, "julia").is_default());
    }

    #[test]
    fn present_module_resolves_to_its_path() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("cpp")).unwrap();
        let module = dir.path().join("cpp").join("callbacks.lua");
        fs::write(&module, "-- formatter overrides").unwrap();
        let tree = PluginTree::new(dir.path());

        let reference = resolve_callbacks(&tree, "cpp");
        assert_eq!(reference.module_path(), Some(module.as_path()));
    }

    #[test]
    fn callbacks_directory_is_not_a_module() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("cpp").join("callbacks.d")).unwrap();
        let tree = PluginTree::new(dir.path());

        assert!(resolve_callbacks(&tree, "cpp").is_default());
    }

    #[test]
    fn extensionless_file_is_not_a_module() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("cpp")).unwrap();
        fs::write(dir.path().join("cpp").join("callbacks"), "").unwrap();
        let tree = PluginTree::new(dir.path());

        assert!(resolve_callbacks(&tree, "cpp").is_default());
    }

    /// A provider that renames variables but shadows nothing else.
    struct PrefixedVariables;

    impl ValueFormatter for PrefixedVariables {
        fn input_variable_name(&self, text: &str) -> Result<String, FormatError> {
            Ok(format!("i_{}", text))
        }

        fn output_variable_name(&self, text: &str) -> Result<String, FormatError> {
            Ok(format!("o_{}", text))
        }
    }

    #[test]
    fn unshadowed_tokens_fall_back_to_defaults() {
        let custom = PrefixedVariables;
        let defaults = DefaultFormatters;

        assert_eq!(
            custom.input_variable_name("inp_1_1").unwrap(),
            "i_inp_1_1"
        );
        assert_eq!(
            custom.output_variable_name("outp_1_1").unwrap(),
            "o_outp_1_1"
        );
        for token in [
            FormatterToken::Int,
            FormatterToken::FloatingPointNumber,
            FormatterToken::String,
            FormatterToken::QualifiedIdentifier,
        ] {
            assert_eq!(
                custom.format(token, "42").unwrap(),
                defaults.format(token, "42").unwrap()
            );
        }
    }

    #[test]
    fn dispatch_routes_every_token() {
        let defaults = DefaultFormatters;
        assert_eq!(defaults.format(FormatterToken::Int, "42").unwrap(), "42.0");
        assert_eq!(
            defaults
                .format(FormatterToken::QualifiedIdentifier, "A.B")
                .unwrap(),
            "a_b"
        );
        assert_eq!(
            defaults
                .format(FormatterToken::InputVariableName, "inp_2_1")
                .unwrap(),
            "inp_2_1"
        );
    }
}
