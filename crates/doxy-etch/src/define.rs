//! Macro (`#define`) extraction
//!
//! Macros carry their signature in `name_signature` and their value in
//! `initializer`; `definition` and `type` stay empty.

use crate::diagnostics::DoxyResult;
use crate::member::MemberHeader;
use crate::para::format_paragraph;
use crate::record::{DocRecord, RecordCategory};
use crate::types::{resolve_type, MacroStripper};
use crate::xml::{child, children, descendant_text};
use roxmltree::Node;

/// Build a macro record
pub fn extract_define(node: Node<'_, '_>, stripper: &MacroStripper) -> DoxyResult<DocRecord> {
    let header = MemberHeader::read(node)?;
    let signature = signature(node, &header.name);
    let initializer = child(node, "initializer")
        .map(|init| initializer_text(init, stripper))
        .unwrap_or_default();

    let mut record = DocRecord::new(RecordCategory::Composite, header.name, header.id)
        .with_descriptions(header.brief, header.detailed);
    record.name_signature = Some(signature);
    record.initializer = initializer;
    Ok(record)
}

/// `NAME (a, b)` for function-like macros, empty otherwise
fn signature(node: Node<'_, '_>, name: &str) -> String {
    let mut params = children(node, "param").peekable();
    if params.peek().is_none() {
        return String::new();
    }

    // each formatted param ends in ", "; the last one's comma is dropped
    let list: String = params.map(format_paragraph).collect();
    format!("{} ({})", name, list).replace(", )", ")")
}

/// Rendered macro value
///
/// Literal text is kept in document order, and every `<ref>` to another
/// documented symbol is replaced by its resolved text.
fn initializer_text(init: Node<'_, '_>, stripper: &MacroStripper) -> String {
    init.children()
        .map(|c| {
            if c.is_text() {
                c.text().unwrap_or_default().to_string()
            } else if c.has_tag_name("ref") {
                resolve_type(c, stripper).text
            } else {
                descendant_text(c)
            }
        })
        .collect()
}
