//! Shared configuration loader for the CDX toolchain.
//!
//! `defaults/cdx.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`CdxConfig`].

use cdx_parser::cdx::classifying::PrecedenceTable;
use cdx_parser::cdx::formats::treeviz::TreevizOptions;
use cdx_parser::cdx::lexing::{LexOptions, OptionsError};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/cdx.default.toml");

/// Top-level configuration consumed by CDX applications.
#[derive(Debug, Clone, Deserialize)]
pub struct CdxConfig {
    pub lexing: LexingConfig,
    pub classifier: ClassifierConfig,
    pub inspect: InspectConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexingConfig {
    pub indent_unit: String,
}

/// Category names in precedence order.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    pub precedence: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub max_label_chars: usize,
    pub show_spans: bool,
}

impl CdxConfig {
    /// Validates the lexing and classifier sections into parser options.
    pub fn lex_options(&self) -> Result<LexOptions, OptionsError> {
        let precedence = PrecedenceTable::from_names(&self.classifier.precedence)?;
        LexOptions::new(precedence, self.lexing.indent_unit.clone())
    }

    pub fn treeviz_options(&self) -> TreevizOptions {
        TreevizOptions {
            max_label_chars: self.inspect.treeviz.max_label_chars,
            show_spans: self.inspect.treeviz.show_spans,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<CdxConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<CdxConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdx_parser::cdx::classifying::PrecedenceError;
    use std::fs;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.lexing.indent_unit, "\t");
        assert_eq!(config.inspect.treeviz.max_label_chars, 30);
        assert!(config.inspect.treeviz.show_spans);
    }

    #[test]
    fn default_precedence_matches_parser_default() {
        let options = load_defaults().unwrap().lex_options().unwrap();
        assert_eq!(options.precedence(), &PrecedenceTable::default());
        assert_eq!(options, LexOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("lexing.indent_unit", "  ")
            .expect("override to apply")
            .set_override("inspect.treeviz.show_spans", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.lex_options().unwrap().indent_unit(), "  ");
        assert!(!config.treeviz_options().show_spans);
    }

    #[test]
    fn layers_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cdx.toml");
        fs::write(
            &path,
            "[classifier]\nprecedence = [\"number-integer\", \"list\"]\n",
        )
        .unwrap();
        let config = Loader::new().with_file(&path).build().unwrap();
        let options = config.lex_options().unwrap();
        assert_eq!(options.precedence().categories().len(), 2);
        assert_eq!(options.indent_unit(), "\t");
    }

    #[test]
    fn optional_file_may_be_missing() {
        let config = Loader::new()
            .with_optional_file("does-not-exist/cdx.toml")
            .build()
            .unwrap();
        assert_eq!(config.lexing.indent_unit, "\t");
        assert!(Loader::new()
            .with_file("does-not-exist/cdx.toml")
            .build()
            .is_err());
    }

    #[test]
    fn rejects_bad_values() {
        let config = Loader::new()
            .set_override("lexing.indent_unit", "")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            config.lex_options(),
            Err(OptionsError::InvalidIndentUnit(String::new()))
        );

        let mut config = load_defaults().unwrap();
        config.classifier.precedence.push("sparkles".to_string());
        assert_eq!(
            config.lex_options(),
            Err(OptionsError::Precedence(PrecedenceError::UnknownCategory(
                "sparkles".to_string()
            )))
        );
    }
}
