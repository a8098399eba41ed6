//! Brief and detailed descriptions
//!
//! Both operate on the `<para>` children of a `<briefdescription>` or
//! `<detaileddescription>` node. They differ on purpose: `brief` drops
//! paragraphs that format to nothing, `detailed` keeps them so that blank
//! lines in the source survive into the rendered page.

use crate::para::format_paragraph;
use crate::xml::children;
use roxmltree::Node;

/// Brief description: non-empty formatted paragraphs, newline-joined
pub fn brief(node: Node<'_, '_>) -> String {
    children(node, "para")
        .map(format_paragraph)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Detailed description: every content paragraph, newline-joined
///
/// Paragraphs holding the return value section or the parameter list are
/// skipped since records carry neither.
pub fn detailed(node: Node<'_, '_>) -> String {
    children(node, "para")
        .filter(|p| !is_signature_section(*p))
        .map(format_paragraph)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether a paragraph directly contains `<simplesect kind="return">` or
/// `<parameterlist kind="param">`
fn is_signature_section(para: Node<'_, '_>) -> bool {
    para.children().any(|c| {
        (c.has_tag_name("simplesect") && c.attribute("kind") == Some("return"))
            || (c.has_tag_name("parameterlist") && c.attribute("kind") == Some("param"))
    })
}
