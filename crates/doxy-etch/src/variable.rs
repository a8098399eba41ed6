//! Variable extraction
//!
//! Handles `<memberdef kind="variable">`: global variables of a header and,
//! through the compound extractor, the fields of a documented struct.

use crate::diagnostics::DoxyResult;
use crate::member::{definition_text, MemberHeader};
use crate::record::{DocRecord, RecordCategory};
use crate::types::{render_definition, resolve_type, MacroStripper};
use crate::xml::required_child;
use roxmltree::Node;

/// Build a variable record
///
/// The type's reference id is dropped: variables never carry nested
/// attributes.
pub fn extract_variable(node: Node<'_, '_>, stripper: &MacroStripper) -> DoxyResult<DocRecord> {
    let header = MemberHeader::read(node)?;
    let definition = render_definition(&definition_text(node)?, stripper);
    let resolved = resolve_type(required_child(node, "type")?, stripper).without_ref();

    Ok(DocRecord::new(RecordCategory::Variable, header.name, header.id)
        .with_definition(definition)
        .with_type(resolved.text)
        .with_descriptions(header.brief, header.detailed))
}
