//! Compound extraction and merging
//!
//! A typedef that aliases a documented struct usually carries little
//! documentation of its own; the struct's `<compounddef>` resource has the
//! description and the fields. This module extracts that resource and folds
//! it into the typedef's record.

use crate::description::{brief, detailed};
use crate::diagnostics::DoxyResult;
use crate::extractor::KindFilter;
use crate::record::{CompoundDoc, DocRecord};
use crate::types::MacroStripper;
use crate::variable::extract_variable;
use crate::xml::required_child;
use roxmltree::Document;

/// Source of compound documentation, keyed by Doxygen reference id
pub trait CompoundLookup {
    /// Documentation of the compound `refid`, or `None` when it has no
    /// resource of its own
    fn lookup_compound(&self, refid: &str) -> DoxyResult<Option<CompoundDoc>>;
}

/// Resource name of a compound's XML
pub fn compound_resource_name(refid: &str) -> String {
    format!("{}.xml", refid)
}

/// Extract a compound document
///
/// Only `variable` members are surfaced as attributes; `include`, when given,
/// further restricts which member kinds are considered.
pub fn extract_compound(
    doc: &Document<'_>,
    stripper: &MacroStripper,
    include: Option<&KindFilter>,
) -> DoxyResult<CompoundDoc> {
    let compounddef = required_child(doc.root_element(), "compounddef")?;
    let brief_description = brief(required_child(compounddef, "briefdescription")?);
    let detailed_description = detailed(required_child(compounddef, "detaileddescription")?);

    let mut attributes = Vec::new();
    for node in doc.descendants().filter(|n| n.has_tag_name("memberdef")) {
        let Some(kind) = node.attribute("kind") else {
            continue;
        };
        if include.is_some_and(|f| !f.allows(kind)) || kind != "variable" {
            continue;
        }
        attributes.push(extract_variable(node, stripper)?);
    }

    Ok(CompoundDoc {
        brief_description,
        detailed_description,
        attributes,
    })
}

/// Fold compound documentation into a typedef record
///
/// A non-empty compound brief replaces the typedef's. The compound's detailed
/// text is placed before the typedef's unless one already contains the
/// other, so merging the same compound twice changes nothing. The compound's
/// fields become the record's attributes.
pub fn merge_compound(record: &mut DocRecord, compound: CompoundDoc) {
    if !compound.brief_description.is_empty() {
        record.short_description = compound.brief_description;
    }

    let detailed = compound.detailed_description;
    if !detailed.is_empty() && !record.long_description.contains(&detailed) {
        record.long_description = if detailed.contains(&record.long_description) {
            detailed
        } else {
            format!("{}\n{}", detailed, record.long_description)
        };
    }

    record.attributes = compound.attributes;
}
