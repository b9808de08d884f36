//! Per-tag parsing rules.

use rustc_hash::FxHashSet;
use std::borrow::Cow;

/// How the body of an element is tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ContentType {
    /// Unparsed text with no entity decoding (`<script>`, `<style>`).
    RawText,
    /// Text with entity decoding but no nested tags (`<textarea>`, `<title>`).
    EscapableRawText,
    /// Regular markup.
    #[default]
    ParsableData,
}

/// A content type that may depend on the element's namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentTypeSpec {
    /// The same content type in every namespace.
    Fixed(ContentType),
    /// Per-namespace overrides with a fallback.
    ByNamespace {
        /// Used when the prefix is absent or has no override.
        default: ContentType,
        /// `(prefix, content type)` pairs.
        overrides: Vec<(&'static str, ContentType)>,
    },
}

impl Default for ContentTypeSpec {
    fn default() -> Self {
        Self::Fixed(ContentType::ParsableData)
    }
}

/// Behavior shared by HTML and XML tag rules, as consumed by a markup parser.
pub trait TagDefinition {
    /// Whether the element is closed implicitly when its parent closes.
    fn closed_by_parent(&self) -> bool;
    /// Namespace prefix applied to the element and, unless prevented, its descendants.
    fn implicit_namespace_prefix(&self) -> Option<&str>;
    /// Whether the element has no children and no end tag.
    fn is_void(&self) -> bool;
    /// Whether a newline directly after the start tag is dropped.
    fn ignore_first_lf(&self) -> bool;
    /// Whether `<tag/>` is accepted for a non-void element.
    fn can_self_close(&self) -> bool;
    /// Whether children do not inherit the implicit namespace.
    fn prevent_namespace_inheritance(&self) -> bool;
    /// Whether an open element is closed by a child start tag named `name`.
    fn is_closed_by_child(&self, name: &str) -> bool;
    /// The content type for the given namespace prefix.
    fn content_type(&self, prefix: Option<&str>) -> ContentType;
}

/// Parsing rules for one HTML tag name.
///
/// Rules are built once by [`TagRegistry`](crate::TagRegistry) and are read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRule {
    /// Lowercase child names that implicitly close this element.
    closed_by_children: FxHashSet<&'static str>,
    closed_by_parent: bool,
    is_void: bool,
    ignore_first_lf: bool,
    can_self_close: bool,
    content_type: ContentTypeSpec,
    implicit_namespace_prefix: Option<&'static str>,
    prevent_namespace_inheritance: bool,
}

impl TagRule {
    /// A rule for a listed or known HTML element. Self-closing is not allowed.
    pub(crate) fn html() -> Self {
        Self {
            closed_by_children: FxHashSet::default(),
            closed_by_parent: false,
            is_void: false,
            ignore_first_lf: false,
            can_self_close: false,
            content_type: ContentTypeSpec::default(),
            implicit_namespace_prefix: None,
            prevent_namespace_inheritance: false,
        }
    }

    /// The rule for names the registry knows nothing about.
    pub(crate) fn fallback() -> Self {
        Self {
            can_self_close: true,
            ..Self::html()
        }
    }

    /// `children` must be lowercase.
    pub(crate) fn closed_by(mut self, children: &[&'static str]) -> Self {
        debug_assert!(children
            .iter()
            .all(|name| !name.chars().any(char::is_uppercase)));
        self.closed_by_children.extend(children.iter().copied());
        self
    }

    pub(crate) fn closed_by_parent_end(mut self) -> Self {
        self.closed_by_parent = true;
        self
    }

    /// Void elements are always closed by their parent.
    pub(crate) fn void(mut self) -> Self {
        self.is_void = true;
        self.closed_by_parent = true;
        self
    }

    pub(crate) fn skip_first_lf(mut self) -> Self {
        self.ignore_first_lf = true;
        self
    }

    pub(crate) fn content(mut self, content_type: ContentTypeSpec) -> Self {
        self.content_type = content_type;
        self
    }

    pub(crate) fn namespace(mut self, prefix: &'static str) -> Self {
        self.implicit_namespace_prefix = Some(prefix);
        self
    }

    pub(crate) fn no_namespace_inheritance(mut self) -> Self {
        self.prevent_namespace_inheritance = true;
        self
    }

    /// Whether the element has no children and no end tag.
    #[inline]
    pub fn is_void(&self) -> bool {
        self.is_void
    }

    /// Whether the element is closed implicitly when its parent closes.
    #[inline]
    pub fn closed_by_parent(&self) -> bool {
        self.closed_by_parent
    }

    /// Whether a newline directly after the start tag is dropped.
    #[inline]
    pub fn ignore_first_lf(&self) -> bool {
        self.ignore_first_lf
    }

    /// Whether `<tag/>` is accepted even though the element is not void.
    #[inline]
    pub fn can_self_close(&self) -> bool {
        self.can_self_close
    }

    /// Namespace prefix implied for this element.
    #[inline]
    pub fn implicit_namespace_prefix(&self) -> Option<&'static str> {
        self.implicit_namespace_prefix
    }

    /// Whether children must not inherit the implicit namespace prefix.
    #[inline]
    pub fn prevent_namespace_inheritance(&self) -> bool {
        self.prevent_namespace_inheritance
    }

    /// Returns the names of children that implicitly close this element.
    pub fn closed_by_children(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.closed_by_children.iter().copied()
    }

    /// Returns the content type specification, which may vary by namespace.
    pub fn content_type_spec(&self) -> &ContentTypeSpec {
        &self.content_type
    }

    /// Whether a child start tag named `name` closes this element.
    ///
    /// Void elements report `true` for every child, since they cannot contain any.
    /// The child name is compared case-insensitively.
    pub fn is_closed_by_child(&self, name: &str) -> bool {
        if self.is_void {
            return true;
        }
        let name = if name.chars().any(char::is_uppercase) {
            Cow::Owned(name.to_lowercase())
        } else {
            Cow::Borrowed(name)
        };
        self.closed_by_children.contains(&*name)
    }

    /// Resolves the content type for an element in the given namespace.
    pub fn content_type(&self, prefix: Option<&str>) -> ContentType {
        match &self.content_type {
            ContentTypeSpec::Fixed(content_type) => *content_type,
            ContentTypeSpec::ByNamespace { default, overrides } => prefix
                .and_then(|prefix| {
                    overrides
                        .iter()
                        .find(|(ns, _)| *ns == prefix)
                        .map(|(_, content_type)| *content_type)
                })
                .unwrap_or(*default),
        }
    }
}

impl TagDefinition for TagRule {
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

    fn is_closed_by_child(&self, name: &str) -> bool {
        TagRule::is_closed_by_child(self, name)
    }

    fn content_type(&self, prefix: Option<&str>) -> ContentType {
        TagRule::content_type(self, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_rule() {
        let rule = TagRule::fallback();
        assert!(rule.can_self_close());
        assert!(!rule.is_void());
        assert!(!rule.closed_by_parent());
        assert_eq!(rule.content_type(None), ContentType::ParsableData);
        assert!(!rule.is_closed_by_child("div"));
    }

    #[test]
    fn test_void_implies_closed_by_parent() {
        let rule = TagRule::html().void();
        assert!(rule.closed_by_parent());
        assert!(rule.is_closed_by_child("anything"));
    }

    #[test]
    fn test_closed_by_child_is_case_insensitive() {
        let rule = TagRule::html().closed_by(&["li"]);
        assert!(rule.is_closed_by_child("li"));
        assert!(rule.is_closed_by_child("LI"));
        assert!(!rule.is_closed_by_child("ul"));
    }

    #[test]
    fn test_namespace_content_type() {
        let rule = TagRule::html().content(ContentTypeSpec::ByNamespace {
            default: ContentType::EscapableRawText,
            overrides: vec![("svg", ContentType::ParsableData)],
        });
        assert_eq!(rule.content_type(None), ContentType::EscapableRawText);
        assert_eq!(rule.content_type(Some("svg")), ContentType::ParsableData);
        assert_eq!(rule.content_type(Some("math")), ContentType::EscapableRawText);
    }
}
