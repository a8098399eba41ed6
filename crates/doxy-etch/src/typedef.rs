//! Typedef extraction
//!
//! Represents a C typedef like:
//! ```c
//! typedef struct _krb5_data { ... } krb5_data;
//! typedef krb5_error_code (KRB5_CALLCONV *krb5_prompter_fct)(...);
//! ```
//!
//! When the aliased type is itself a documented compound, its description
//! and fields are merged into the typedef's record (see
//! [`merge_compound`](crate::compound::merge_compound)).

use crate::compound::{merge_compound, CompoundLookup};
use crate::diagnostics::DoxyResult;
use crate::member::{definition_text, MemberHeader};
use crate::record::{DocRecord, RecordCategory};
use crate::types::{render_definition, resolve_type, MacroStripper};
use crate::xml::required_child;
use roxmltree::Node;

/// Build a typedef record, resolving its compound through `lookup`
///
/// Function pointer types are never resolved. A reference to a compound
/// without its own resource leaves the record as extracted.
pub fn extract_typedef(
    node: Node<'_, '_>,
    stripper: &MacroStripper,
    lookup: &dyn CompoundLookup,
) -> DoxyResult<DocRecord> {
    let header = MemberHeader::read(node)?;
    let definition = render_definition(&definition_text(node)?, stripper);
    let mut resolved = resolve_type(required_child(node, "type")?, stripper);
    if resolved.is_function_pointer() {
        resolved = resolved.without_ref();
    }

    let mut record = DocRecord::new(RecordCategory::Composite, header.name, header.id)
        .with_definition(definition)
        .with_type(resolved.text)
        .with_descriptions(header.brief, header.detailed);

    if let Some(refid) = resolved.refid {
        match lookup.lookup_compound(&refid)? {
            Some(compound) => {
                tracing::debug!(
                    "Merging compound {} into typedef {} ({} attributes)",
                    refid,
                    record.name,
                    compound.attributes.len()
                );
                merge_compound(&mut record, compound);
            }
            None => {
                tracing::debug!("No compound documentation for {} ({})", record.name, refid);
            }
        }
    }

    Ok(record)
}
