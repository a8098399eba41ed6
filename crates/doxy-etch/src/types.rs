//! Type resolution
//!
//! Doxygen renders a declaration's type as a `<type>` element whose text may
//! be split around a `<ref>` to the documented symbol:
//!
//! ```xml
//! <type>const <ref refid="struct__krb5__data" kindref="compound">krb5_data</ref> *</type>
//! ```
//!
//! This module turns that into a [`ResolvedType`] and provides the macro
//! stripping and escaping applied to declaration text.

use crate::diagnostics::{DoxyError, DoxyResult};
use crate::xml::descendant_text;
use regex::Regex;
use roxmltree::Node;

/// Removes calling-convention annotations such as `KRB5_CALLCONV`
#[derive(Debug, Clone)]
pub struct MacroStripper {
    pattern: Option<Regex>,
}

impl MacroStripper {
    /// Build a stripper for the given macro names
    ///
    /// Longer names are matched first so that `KRB5_CALLCONV_C` is not
    /// reduced to a dangling `_C` by `KRB5_CALLCONV`.
    pub fn new<I, S>(macros: I) -> DoxyResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = macros
            .into_iter()
            .map(|m| m.as_ref().trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        if names.is_empty() {
            return Ok(Self { pattern: None });
        }
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        names.dedup();

        let alternation = names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&alternation)
            .map_err(|e| DoxyError::config(format!("invalid strip macro list: {}", e)))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// A stripper that leaves text untouched
    pub fn none() -> Self {
        Self { pattern: None }
    }

    /// Remove every occurrence of every known macro
    pub fn strip(&self, text: &str) -> String {
        match &self.pattern {
            Some(pattern) => pattern.replace_all(text, "").into_owned(),
            None => text.to_string(),
        }
    }
}

/// The `(reference id, rendered text)` pair of a `<type>` node
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedType {
    /// Target of the type's `<ref>`, if any
    pub refid: Option<String>,
    /// All text of the node with annotations removed
    pub text: String,
}

impl ResolvedType {
    /// Heuristic for function pointer typedefs: their type text has a parenthesis
    pub fn is_function_pointer(&self) -> bool {
        self.text.contains('(')
    }

    /// Drop the reference id, keeping the text
    pub fn without_ref(self) -> Self {
        Self {
            refid: None,
            text: self.text,
        }
    }
}

/// Resolve a `<type>` (or `<ref>`) node
///
/// When the node has several `<ref>` children the first one in document
/// order is used.
pub fn resolve_type(node: Node<'_, '_>, stripper: &MacroStripper) -> ResolvedType {
    let refid = node
        .children()
        .filter(|c| c.has_tag_name("ref"))
        .find_map(|r| r.attribute("refid"))
        .map(str::to_string);

    let text = stripper.strip(&descendant_text(node)).trim().to_string();

    ResolvedType { refid, text }
}

/// Escape characters reStructuredText would treat as inline markup
pub fn escape_markup(text: &str) -> String {
    text.replace('*', "\\*")
}

/// Declaration text as carried in a record: annotations removed, `*` escaped
pub fn render_definition(text: &str, stripper: &MacroStripper) -> String {
    escape_markup(&stripper.strip(text))
}
