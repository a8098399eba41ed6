//! Extractor configuration
//!
//! `DoxyConfig` carries everything an extraction run needs: the directory the
//! Doxygen XML lives in and the calling-convention macros to strip from
//! declarations. It can be built in code or loaded from a TOML file:
//!
//! ```toml
//! xml_root = "build/doc/xml"
//! strip_macros = ["KRB5_CALLCONV_C", "KRB5_CALLCONV"]
//! templates_dir = "doc/rst_templates"
//! output_dir = "doc/appdev/refs"
//! ```

use crate::diagnostics::{DoxyError, DoxyResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Calling-convention annotations stripped by default.
pub const DEFAULT_STRIP_MACROS: &[&str] = &["KRB5_CALLCONV_C", "KRB5_CALLCONV"];

/// Configuration for an [`Extractor`](crate::Extractor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoxyConfig {
    /// Directory containing the Doxygen XML resources
    pub xml_root: PathBuf,
    /// Annotation tokens removed from declarations and type text
    pub strip_macros: Vec<String>,
    /// Directory holding `<template>.tmpl` files
    pub templates_dir: Option<PathBuf>,
    /// Directory rendered pages are written to
    pub output_dir: PathBuf,
}

impl Default for DoxyConfig {
    fn default() -> Self {
        Self {
            xml_root: PathBuf::from("xml"),
            strip_macros: DEFAULT_STRIP_MACROS.iter().map(|m| m.to_string()).collect(),
            templates_dir: None,
            output_dir: PathBuf::from("rst"),
        }
    }
}

impl DoxyConfig {
    /// Create a config reading XML from `xml_root`
    pub fn new(xml_root: impl Into<PathBuf>) -> Self {
        Self {
            xml_root: xml_root.into(),
            ..Default::default()
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> DoxyResult<Self> {
        toml::from_str(content).map_err(|e| DoxyError::config(e.to_string()))
    }

    /// Load a config from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> DoxyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DoxyError::config(format!("{}: {}", path.display(), e)))
    }

    /// Add a macro to strip
    pub fn with_strip_macro(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.strip_macros.contains(&name) {
            self.strip_macros.push(name);
        }
        self
    }

    /// Set the templates directory
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = Some(dir.into());
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = DoxyConfig::default();
        assert_eq!(config.xml_root, PathBuf::from("xml"));
        assert_eq!(config.strip_macros, vec!["KRB5_CALLCONV_C", "KRB5_CALLCONV"]);
        assert!(config.templates_dir.is_none());
    }

    #[test]
    fn test_builder() {
        let config = DoxyConfig::new("out/xml")
            .with_strip_macro("GSSAPI_CALLCONV")
            .with_strip_macro("KRB5_CALLCONV")
            .with_templates_dir("tmpl")
            .with_output_dir("refs");

        assert_eq!(config.strip_macros.len(), 3);
        assert_eq!(config.xml_root, PathBuf::from("out/xml"));
        assert_eq!(config.templates_dir, Some(PathBuf::from("tmpl")));
        assert_eq!(config.output_dir, PathBuf::from("refs"));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = DoxyConfig::from_toml_str(
            r#"
            xml_root = "doc/xml"
            strip_macros = ["API_CALL"]
            "#,
        )
        .unwrap();

        assert_eq!(config.xml_root, PathBuf::from("doc/xml"));
        assert_eq!(config.strip_macros, vec!["API_CALL"]);
        assert_eq!(config.output_dir, PathBuf::from("rst"));
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = DoxyConfig::from_toml_str("xml_root = [1, 2]").unwrap_err();
        assert!(matches!(err, DoxyError::Config(_)));
    }
}
