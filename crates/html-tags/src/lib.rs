//! HTML tag content-model rules for template parsing.
//!
//! A markup parser consults these rules to decide element boundaries:
//! - void elements that take no children or end tag
//! - elements closed implicitly by a sibling start tag or by their parent's end
//! - raw text, escapable raw text and parsable content models
//! - implicit `svg`/`math` namespaces and where their inheritance stops
//!
//! # Example
//!
//! ```
//! use html_tags::{get_html_tag_definition, ContentType};
//!
//! let p = get_html_tag_definition("p");
//! assert!(p.is_closed_by_child("div"));
//! assert!(!p.is_closed_by_child("span"));
//!
//! let script = get_html_tag_definition("script");
//! assert_eq!(script.content_type(None), ContentType::RawText);
//! ```

mod dom_elements;
mod error;
pub mod ns;
mod registry;
mod rule;
mod xml;

pub use dom_elements::DOM_ELEMENTS;
pub use error::TagError;
pub use registry::{get_html_tag_definition, tag_registry, TagRegistry};
pub use rule::{ContentType, ContentTypeSpec, TagDefinition, TagRule};
pub use xml::{get_xml_tag_definition, XmlTagRule};
