//! Extractor - the extraction driver
//!
//! Walks every `<memberdef>` of a requested resource and dispatches it to the
//! typedef, variable or macro extractor. Each call is a full, stateless pass:
//! the resource is read and parsed, and typedefs read at most one more
//! resource each for their compound.

use crate::compound::{compound_resource_name, extract_compound, CompoundLookup};
use crate::config::DoxyConfig;
use crate::define::extract_define;
use crate::diagnostics::DoxyResult;
use crate::record::{CompoundDoc, DocRecord};
use crate::typedef::extract_typedef;
use crate::types::MacroStripper;
use crate::variable::extract_variable;
use crate::xml::XmlSource;
use roxmltree::Node;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Member kinds the extractor knows how to normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberKind {
    Typedef,
    Variable,
    Define,
}

impl MemberKind {
    /// Doxygen `kind` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Typedef => "typedef",
            MemberKind::Variable => "variable",
            MemberKind::Define => "define",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typedef" => Ok(MemberKind::Typedef),
            "variable" => Ok(MemberKind::Variable),
            "define" => Ok(MemberKind::Define),
            other => Err(format!(
                "unsupported member kind '{}' (expected typedef, variable or define)",
                other
            )),
        }
    }
}

/// Set of member kinds to extract
///
/// Kinds are compared as raw strings, so a filter may also name kinds the
/// extractor does not normalize; those members are still skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KindFilter {
    kinds: BTreeSet<String>,
}

impl KindFilter {
    /// Create an empty filter (matches nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a kind
    pub fn with(mut self, kind: impl Into<String>) -> Self {
        self.kinds.insert(kind.into());
        self
    }

    /// Check a `kind` attribute value
    pub fn allows(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }

    /// Number of kinds
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the filter names no kinds
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KindFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MemberKind> for KindFilter {
    fn from(kind: MemberKind) -> Self {
        Self::new().with(kind.as_str())
    }
}

/// Extraction driver bound to one XML root
#[derive(Debug, Clone)]
pub struct Extractor {
    config: DoxyConfig,
    source: XmlSource,
    stripper: MacroStripper,
}

impl Extractor {
    /// Create an extractor for the given configuration
    pub fn new(config: DoxyConfig) -> DoxyResult<Self> {
        let stripper = MacroStripper::new(&config.strip_macros)?;
        let source = XmlSource::new(&config.xml_root);
        tracing::debug!("Reading Doxygen XML from {}", source.root().display());
        Ok(Self {
            config,
            source,
            stripper,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &DoxyConfig {
        &self.config
    }

    /// Get the XML source
    pub fn source(&self) -> &XmlSource {
        &self.source
    }

    /// Extract every qualifying member of a resource, in document order
    ///
    /// With `include`, only members whose kind is listed are extracted. Any
    /// malformed member aborts the whole call.
    pub fn run(&self, resource: &str, include: Option<&KindFilter>) -> DoxyResult<Vec<DocRecord>> {
        let loaded = self.source.load(resource)?;
        let doc = loaded.parse()?;

        let mut records = Vec::new();
        for node in doc.descendants().filter(|n| n.has_tag_name("memberdef")) {
            let Some(kind) = node.attribute("kind") else {
                continue;
            };
            if include.is_some_and(|f| !f.allows(kind)) {
                continue;
            }
            match kind.parse::<MemberKind>() {
                Ok(kind) => records.push(self.extract_member(node, kind)?),
                Err(_) => tracing::debug!("Skipping {} member in {}", kind, resource),
            }
        }

        tracing::info!("Processed {} members from {}", records.len(), resource);
        Ok(records)
    }

    /// Extract a compound resource's documentation and fields
    pub fn run_compound(
        &self,
        resource: &str,
        include: Option<&KindFilter>,
    ) -> DoxyResult<CompoundDoc> {
        let loaded = self.source.load(resource)?;
        let doc = loaded.parse()?;
        extract_compound(&doc, &self.stripper, include)
    }

    /// Extract one member node
    pub fn extract_member(&self, node: Node<'_, '_>, kind: MemberKind) -> DoxyResult<DocRecord> {
        let record = match kind {
            MemberKind::Typedef => extract_typedef(node, &self.stripper, self)?,
            MemberKind::Variable => extract_variable(node, &self.stripper)?,
            MemberKind::Define => extract_define(node, &self.stripper)?,
        };
        tracing::debug!("Extracted {} {}", kind, record.name);
        Ok(record)
    }
}

impl CompoundLookup for Extractor {
    fn lookup_compound(&self, refid: &str) -> DoxyResult<Option<CompoundDoc>> {
        let resource = compound_resource_name(refid);
        if !self.source.exists(&resource) {
            return Ok(None);
        }
        self.run_compound(&resource, None).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_member_kind_parse() {
        assert_eq!("typedef".parse::<MemberKind>(), Ok(MemberKind::Typedef));
        assert_eq!("define".parse::<MemberKind>(), Ok(MemberKind::Define));
        assert!("function".parse::<MemberKind>().is_err());
        assert_eq!(MemberKind::Variable.to_string(), "variable");
    }

    #[test]
    fn test_kind_filter() {
        let filter: KindFilter = ["typedef", "define"].into_iter().collect();
        assert!(filter.allows("typedef"));
        assert!(!filter.allows("variable"));
        assert_eq!(filter.len(), 2);

        let single = KindFilter::from(MemberKind::Variable);
        assert!(single.allows("variable"));
        assert!(KindFilter::new().is_empty());
    }

    #[test]
    fn test_extractor_accessors() {
        let extractor = Extractor::new(DoxyConfig::new("xml")).unwrap();
        assert_eq!(extractor.config().xml_root, std::path::PathBuf::from("xml"));
        assert_eq!(extractor.source().root(), std::path::Path::new("xml"));
    }

    #[test]
    fn test_lookup_missing_compound_is_none() {
        let extractor = Extractor::new(DoxyConfig::new("/nonexistent/doxy-etch")).unwrap();
        assert_eq!(extractor.lookup_compound("struct__x").unwrap(), None);
    }
}
