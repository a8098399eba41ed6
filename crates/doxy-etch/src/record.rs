//! Normalized documentation records
//!
//! `DocRecord` is the unit every extractor produces: one documented typedef,
//! variable or macro, ready to be handed to a template. Field names are the
//! ones templates see.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Template family a record is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordCategory {
    /// Typedefs and macros
    Composite,
    /// Variables, including struct fields
    Variable,
}

impl RecordCategory {
    /// Name used in templates and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordCategory::Composite => "composite",
            RecordCategory::Variable => "variable",
        }
    }
}

impl fmt::Display for RecordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documented entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    pub category: RecordCategory,
    pub name: String,
    /// Doxygen id, unique across the run
    pub id: String,
    /// Declaration with annotations removed and `*` escaped
    pub definition: String,
    /// Macro signature such as `KRB5_TC_MATCH (a, b)`; only set for macros
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_signature: Option<String>,
    #[serde(rename = "type")]
    pub type_text: String,
    pub initializer: String,
    pub short_description: String,
    pub long_description: String,
    /// Fields of the compound a typedef aliases
    #[serde(default)]
    pub attributes: Vec<DocRecord>,
}

impl DocRecord {
    /// Create a record with empty text fields
    pub fn new(
        category: RecordCategory,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            id: id.into(),
            definition: String::new(),
            name_signature: None,
            type_text: String::new(),
            initializer: String::new(),
            short_description: String::new(),
            long_description: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Set the definition
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Set the type text
    pub fn with_type(mut self, type_text: impl Into<String>) -> Self {
        self.type_text = type_text.into();
        self
    }

    /// Set brief and detailed descriptions
    pub fn with_descriptions(
        mut self,
        short_description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Self {
        self.short_description = short_description.into();
        self.long_description = long_description.into();
        self
    }

    /// Whether this is a macro record
    pub fn is_macro(&self) -> bool {
        self.name_signature.is_some()
    }
}

/// Documentation of a compound (struct or union) and its fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundDoc {
    pub brief_description: String,
    pub detailed_description: String,
    pub attributes: Vec<DocRecord>,
}
