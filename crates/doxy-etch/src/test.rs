//! Test utilities and XML fixtures for doxy-etch.
//!
//! Builders for the Doxygen XML shapes the extractors consume, plus an
//! in-memory [`CompoundLookup`] that records which compounds were requested.
//!
//! # Example
//!
//! ```
//! use doxy_etch::test::{define_member, wrap_members};
//!
//! let xml = wrap_members(&[define_member("d1", "KRB5_TC_MATCH", &["a", "b"], None)]);
//! assert!(xml.contains("<defname>a</defname>"));
//! ```

use crate::compound::CompoundLookup;
use crate::diagnostics::DoxyResult;
use crate::record::CompoundDoc;
use std::cell::RefCell;
use std::collections::HashMap;

/// A `<memberdef>` with the given kind, id and name; `body` follows `<name>`
pub fn member_xml(kind: &str, id: &str, name: &str, body: &str) -> String {
    format!(
        r#"<memberdef kind="{}" id="{}" prot="public" static="no"><name>{}</name>{}</memberdef>"#,
        kind, id, name, body
    )
}

/// A typedef member. `type_xml`, `brief` and `detailed` are inner XML.
pub fn typedef_member(
    id: &str,
    name: &str,
    type_xml: &str,
    definition: &str,
    brief: &str,
    detailed: &str,
) -> String {
    member_xml(
        "typedef",
        id,
        name,
        &format!(
            "<type>{}</type><definition>{}</definition><briefdescription>{}</briefdescription><detaileddescription>{}</detaileddescription>",
            type_xml, definition, brief, detailed
        ),
    )
}

/// A variable member with a plain type and a one-paragraph brief (none when empty)
pub fn variable_member(
    id: &str,
    name: &str,
    type_text: &str,
    definition: &str,
    brief: &str,
) -> String {
    let brief = if brief.is_empty() {
        String::new()
    } else {
        format!("<para>{}</para>", brief)
    };
    member_xml(
        "variable",
        id,
        name,
        &format!(
            "<type>{}</type><definition>{}</definition><briefdescription>{}</briefdescription><detaileddescription></detaileddescription>",
            type_text, definition, brief
        ),
    )
}

/// A macro member; empty parameter names produce an empty `<param/>`
pub fn define_member(id: &str, name: &str, params: &[&str], initializer: Option<&str>) -> String {
    let params: String = params
        .iter()
        .map(|p| {
            if p.is_empty() {
                "<param></param>".to_string()
            } else {
                format!("<param><defname>{}</defname></param>", p)
            }
        })
        .collect();
    let initializer = initializer
        .map(|i| format!("<initializer>{}</initializer>", i))
        .unwrap_or_default();
    member_xml(
        "define",
        id,
        name,
        &format!(
            "{}{}<briefdescription></briefdescription><detaileddescription></detaileddescription>",
            params, initializer
        ),
    )
}

/// A header file resource holding `members`
pub fn wrap_members(members: &[String]) -> String {
    format!(
        r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.8.17"><compounddef id="krb5_8hin" kind="file" language="C++"><compoundname>krb5.hin</compoundname><sectiondef kind="define">{}</sectiondef><briefdescription></briefdescription><detaileddescription></detaileddescription></compounddef></doxygen>"#,
        members.concat()
    )
}

/// A struct compound resource. `brief` and `detailed` are inner XML.
pub fn compound_xml(id: &str, brief: &str, detailed: &str, members: &[String]) -> String {
    format!(
        r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.8.17"><compounddef id="{}" kind="struct" language="C++" prot="public"><compoundname>_{}</compoundname><sectiondef kind="public-attrib">{}</sectiondef><briefdescription>{}</briefdescription><detaileddescription>{}</detaileddescription></compounddef></doxygen>"#,
        id,
        id,
        members.concat(),
        brief,
        detailed
    )
}

/// In-memory compound source
#[derive(Debug, Default)]
pub struct MockCompounds {
    compounds: HashMap<String, CompoundDoc>,
    requests: RefCell<Vec<String>>,
}

impl MockCompounds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a compound under `refid`
    pub fn with(mut self, refid: &str, compound: CompoundDoc) -> Self {
        self.compounds.insert(refid.to_string(), compound);
        self
    }

    /// Ids looked up so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl CompoundLookup for MockCompounds {
    fn lookup_compound(&self, refid: &str) -> DoxyResult<Option<CompoundDoc>> {
        self.requests.borrow_mut().push(refid.to_string());
        Ok(self.compounds.get(refid).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_fixtures_are_well_formed() {
        let header = wrap_members(&[
            typedef_member("t", "krb5_x", "int", "typedef int krb5_x", "", ""),
            variable_member("v", "x", "int", "int x", "X."),
            define_member("d", "X", &["a", ""], Some("1")),
        ]);
        let doc = Document::parse(&header).unwrap();
        assert_eq!(
            doc.descendants()
                .filter(|n| n.has_tag_name("memberdef"))
                .count(),
            3
        );

        let compound = compound_xml("struct__x", "<para>B</para>", "", &[]);
        assert!(Document::parse(&compound).is_ok());
    }

    #[test]
    fn test_mock_compounds_records_requests() {
        let mock = MockCompounds::new().with("a", CompoundDoc::default());
        assert!(mock.lookup_compound("a").unwrap().is_some());
        assert!(mock.lookup_compound("b").unwrap().is_none());
        assert_eq!(mock.requests(), vec!["a".to_string(), "b".to_string()]);
    }
}
