//! Fields shared by every `<memberdef>`

use crate::description::{brief, detailed};
use crate::diagnostics::{DoxyError, DoxyResult};
use crate::xml::{direct_text, required_attribute, required_child};
use roxmltree::Node;

/// Name, id and descriptions of a member definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberHeader {
    pub name: String,
    pub id: String,
    pub brief: String,
    pub detailed: String,
}

impl MemberHeader {
    /// Read the header of a `<memberdef>` node
    ///
    /// `<name>` (with text), `<briefdescription>`, `<detaileddescription>` and
    /// the `id` attribute are all required.
    pub fn read(node: Node<'_, '_>) -> DoxyResult<Self> {
        let id = required_attribute(node, "id")?.to_string();
        let name = direct_text(required_child(node, "name")?).trim().to_string();
        if name.is_empty() {
            return Err(DoxyError::missing_element(
                "name",
                format!("memberdef '{}' (empty)", id),
            ));
        }

        Ok(Self {
            brief: brief(required_child(node, "briefdescription")?),
            detailed: detailed(required_child(node, "detaileddescription")?),
            name,
            id,
        })
    }
}

/// Direct text of the required `<definition>` child
pub fn definition_text(node: Node<'_, '_>) -> DoxyResult<String> {
    Ok(direct_text(required_child(node, "definition")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    #[test]
    fn test_read_header() {
        let doc = Document::parse(
            r#"<memberdef kind="variable" id="v1"><name>length</name>
<briefdescription><para>Length.</para></briefdescription>
<detaileddescription><para>In bytes.</para></detaileddescription></memberdef>"#,
        )
        .unwrap();
        let header = MemberHeader::read(doc.root_element()).unwrap();

        assert_eq!(header.name, "length");
        assert_eq!(header.id, "v1");
        assert_eq!(header.brief, "Length.");
        assert_eq!(header.detailed, "In bytes.");
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let doc = Document::parse(
            r#"<memberdef id="v1"><briefdescription/><detaileddescription/></memberdef>"#,
        )
        .unwrap();
        let err = MemberHeader::read(doc.root_element()).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_empty_name_is_fatal() {
        let doc = Document::parse(
            r#"<memberdef id="v1"><name/><briefdescription/><detaileddescription/></memberdef>"#,
        )
        .unwrap();
        assert!(MemberHeader::read(doc.root_element()).is_err());
    }

    #[test]
    fn test_missing_id_is_fatal() {
        let doc = Document::parse(
            "<memberdef><name>x</name><briefdescription/><detaileddescription/></memberdef>",
        )
        .unwrap();
        let err = MemberHeader::read(doc.root_element()).unwrap_err();
        assert_eq!(err.to_string(), "Missing attribute 'id' on <memberdef>");
    }
}
