//! Tag rules for XML documents, where every element is treated alike.

use crate::rule::{ContentType, TagDefinition};

/// The single rule shared by all XML elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlTagRule {
    closed_by_parent: bool,
    implicit_namespace_prefix: Option<&'static str>,
    is_void: bool,
    ignore_first_lf: bool,
    can_self_close: bool,
    prevent_namespace_inheritance: bool,
}

impl XmlTagRule {
    const fn new() -> Self {
        Self {
            closed_by_parent: false,
            implicit_namespace_prefix: None,
            is_void: false,
            ignore_first_lf: false,
            can_self_close: true,
            prevent_namespace_inheritance: false,
        }
    }
}

impl Default for XmlTagRule {
    fn default() -> Self {
        Self::new()
    }
}

impl TagDefinition for XmlTagRule {
    fn closed_by_parent(&self) -> bool {
        self.closed_by_parent
    }

    fn implicit_namespace_prefix(&self) -> Option<&str> {
        self.implicit_namespace_prefix
    }

    fn is_void(&self) -> bool {
        self.is_void
    }

    fn ignore_first_lf(&self) -> bool {
        self.ignore_first_lf
    }

    fn can_self_close(&self) -> bool {
        self.can_self_close
    }

    fn prevent_namespace_inheritance(&self) -> bool {
        self.prevent_namespace_inheritance
    }

    fn is_closed_by_child(&self, _name: &str) -> bool {
        false
    }

    fn content_type(&self, _prefix: Option<&str>) -> ContentType {
        ContentType::ParsableData
    }
}

static XML_TAG_RULE: XmlTagRule = XmlTagRule::new();

/// Returns the XML rule; the name does not affect the result.
pub fn get_xml_tag_definition(_name: &str) -> &'static XmlTagRule {
    &XML_TAG_RULE
}
