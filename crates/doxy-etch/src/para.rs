//! Paragraph formatting
//!
//! Doxygen paragraphs are mixed content: prose interleaved with `<ref>`,
//! `<emphasis>`, `<computeroutput>` and other elements. Formatting happens in
//! two steps. [`flatten`] lists every text node under the paragraph as a
//! [`TextChunk`] tagged with the element that owns it and whether it is that
//! element's leading text or the text trailing after it. [`render_chunk`]
//! then maps each chunk to reStructuredText on its own, so the rules can be
//! tested without building XML trees.

use roxmltree::Node;

/// Structural role of the element owning a text chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Text directly inside the paragraph being formatted
    Paragraph,
    /// `<ref>` cross-reference
    Reference,
    /// `<emphasis>`
    Emphasis,
    /// `<computeroutput>` inline code
    ComputerOutput,
    /// `<defname>` macro parameter name
    ParamName,
    /// Anything without an output mapping
    Other,
}

impl TextRole {
    /// Role for an element tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ref" => TextRole::Reference,
            "emphasis" => TextRole::Emphasis,
            "computeroutput" => TextRole::ComputerOutput,
            "defname" => TextRole::ParamName,
            _ => TextRole::Other,
        }
    }
}

/// Position of a chunk relative to its owning element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextPosition {
    /// Inside the element, before any child element
    Leading,
    /// After the element's closing tag
    Trailing,
}

/// One text node of a paragraph, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunk<'a> {
    pub text: &'a str,
    pub role: TextRole,
    pub position: TextPosition,
}

impl<'a> TextChunk<'a> {
    pub fn new(text: &'a str, role: TextRole, position: TextPosition) -> Self {
        Self {
            text,
            role,
            position,
        }
    }
}

/// List every text node under `para` in document order
///
/// A text node that follows an element sibling is that element's trailing
/// text; any other text node is the leading text of its parent. The
/// paragraph's own trailing text is outside the paragraph and not listed.
pub fn flatten<'a>(para: Node<'a, '_>) -> Vec<TextChunk<'a>> {
    para.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| {
            let text = n.text()?;
            let (owner, position) = match n.prev_sibling() {
                Some(prev) if prev.is_element() => (prev, TextPosition::Trailing),
                Some(prev) if !prev.is_text() => return None,
                _ => (n.parent()?, TextPosition::Leading),
            };
            let role = if owner == para {
                TextRole::Paragraph
            } else {
                TextRole::from_tag(owner.tag_name().name())
            };
            Some(TextChunk::new(text, role, position))
        })
        .collect()
}

/// Render one chunk, or `None` when it contributes nothing
pub fn render_chunk(chunk: &TextChunk<'_>) -> Option<String> {
    let text = chunk.text.trim();
    if text.is_empty() {
        return None;
    }
    let rendered = match (chunk.role, chunk.position) {
        (TextRole::Paragraph, _) => text.to_string(),
        (TextRole::Reference, TextPosition::Leading) => format!(":c:type:`{}`", text),
        (TextRole::Emphasis | TextRole::ComputerOutput, TextPosition::Leading) => {
            format!("*{}*", text)
        }
        (
            TextRole::Reference | TextRole::Emphasis | TextRole::ComputerOutput,
            TextPosition::Trailing,
        ) => text.to_string(),
        (TextRole::ParamName, TextPosition::Leading) => format!("{}, ", text),
        _ => return None,
    };
    Some(rendered)
}

/// Render and space-join a list of chunks
pub fn format_chunks(chunks: &[TextChunk<'_>]) -> String {
    chunks
        .iter()
        .filter_map(render_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reconstruct the inline-formatted text of a paragraph node
pub fn format_paragraph(para: Node<'_, '_>) -> String {
    format_chunks(&flatten(para))
}
