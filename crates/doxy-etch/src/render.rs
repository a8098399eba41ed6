//! Rendering records into reStructuredText pages
//!
//! The extractor itself stops at [`DocRecord`]s. This module is the default
//! rendering collaborator: [`RecordRenderer`] is the seam, [`TemplateRenderer`]
//! implements it with handlebars templates, [`TemplateSet`] picks a template
//! per record category and [`OutputWriter`] writes `<name>.rst` files.

use crate::diagnostics::{DoxyError, DoxyResult};
use crate::record::{DocRecord, RecordCategory};
use handlebars::Handlebars;
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of template files looked up by [`TemplateRenderer::from_dir`]
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Extension of generated pages
pub const OUTPUT_EXTENSION: &str = "rst";

/// Turns a record into page text using a named template
pub trait RecordRenderer {
    fn render(&self, record: &DocRecord, template: &str) -> DoxyResult<String>;
}

/// Which template renders which record category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    by_category: IndexMap<RecordCategory, String>,
}

impl TemplateSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Templates for typedef pages
    pub fn types() -> Self {
        Self::new()
            .with(RecordCategory::Composite, "type_document")
            .with(RecordCategory::Variable, "variable_document")
    }

    /// Templates for macro pages
    pub fn macros() -> Self {
        Self::new().with(RecordCategory::Composite, "define_document")
    }

    /// Map a category to a template name
    pub fn with(mut self, category: RecordCategory, template: impl Into<String>) -> Self {
        self.by_category.insert(category, template.into());
        self
    }

    /// Template for a category
    pub fn template_for(&self, category: RecordCategory) -> Option<&str> {
        self.by_category.get(&category).map(String::as_str)
    }

    /// All template names, in insertion order
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.by_category.values().map(String::as_str)
    }
}

/// Handlebars-backed renderer
///
/// Templates see the record's serialized fields (`name`, `definition`,
/// `type`, `short_description`, `attributes`, ...). Output is not HTML, so
/// escaping is disabled.
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a renderer with no templates
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(false);
        Self { registry }
    }

    /// Load `<dir>/<name>.tmpl` for every template named in `templates`
    pub fn from_dir(dir: impl AsRef<Path>, templates: &TemplateSet) -> DoxyResult<Self> {
        let dir = dir.as_ref();
        let mut renderer = Self::new();
        for name in templates.template_names() {
            let path = dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION));
            renderer.register_template_file(name, &path)?;
        }
        Ok(renderer)
    }

    /// Register a template from source text
    pub fn register_template_string(&mut self, name: &str, source: &str) -> DoxyResult<()> {
        self.registry
            .register_template_string(name, source)
            .map_err(|e| DoxyError::template(format!("{}: {}", name, e)))
    }

    /// Register a template from a file
    pub fn register_template_file(&mut self, name: &str, path: &Path) -> DoxyResult<()> {
        if !path.is_file() {
            return Err(DoxyError::template(format!(
                "template file not found: {}",
                path.display()
            )));
        }
        self.registry
            .register_template_file(name, path)
            .map_err(|e| DoxyError::template(format!("{}: {}", path.display(), e)))
    }

    /// Check whether a template is registered
    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }
}

impl RecordRenderer for TemplateRenderer {
    fn render(&self, record: &DocRecord, template: &str) -> DoxyResult<String> {
        if !self.has_template(template) {
            return Err(DoxyError::template(format!(
                "template not registered: {}",
                template
            )));
        }
        self.registry
            .render(template, record)
            .map_err(|e| DoxyError::template(format!("{} ({}): {}", template, record.name, e)))
    }
}

/// Writes rendered records into a target directory
#[derive(Debug, Clone)]
pub struct OutputWriter {
    target_dir: PathBuf,
}

impl OutputWriter {
    /// Create a writer for `target_dir`
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
        }
    }

    /// Target directory
    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    /// Path a record is written to
    pub fn output_path(&self, record: &DocRecord) -> PathBuf {
        self.target_dir
            .join(format!("{}.{}", record.name, OUTPUT_EXTENSION))
    }

    /// Render `record` with the template for its category and write it
    pub fn save(
        &self,
        record: &DocRecord,
        renderer: &dyn RecordRenderer,
        templates: &TemplateSet,
    ) -> DoxyResult<PathBuf> {
        let template = templates.template_for(record.category).ok_or_else(|| {
            DoxyError::template(format!(
                "no template for category '{}' ({})",
                record.category, record.name
            ))
        })?;
        let content = renderer.render(record, template)?;

        fs::create_dir_all(&self.target_dir)?;
        let path = self.output_path(record);
        fs::write(&path, content)?;
        tracing::debug!("Wrote {}", path.display());
        Ok(path)
    }

    /// Save every record, returning the written paths in order
    pub fn save_all(
        &self,
        records: &[DocRecord],
        renderer: &dyn RecordRenderer,
        templates: &TemplateSet,
    ) -> DoxyResult<Vec<PathBuf>> {
        records
            .iter()
            .map(|r| self.save(r, renderer, templates))
            .collect()
    }
}
