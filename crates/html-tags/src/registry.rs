//! The tag name to rule registry.

use crate::dom_elements::DOM_ELEMENTS;
use crate::ns::ns_prefix;
use crate::rule::{ContentType, ContentTypeSpec, TagRule};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use std::sync::OnceLock;

/// Block-level tags whose start tag closes an open `<p>`.
const P_CLOSED_BY: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "div",
    "dl",
    "fieldset",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

const RUBY_CLOSED_BY: &[&str] = &["rb", "rt", "rtc", "rp"];

/// Rules listed explicitly; every other known name gets a plain HTML rule.
fn listed_rules() -> Vec<(&'static str, TagRule)> {
    let void = || TagRule::html().void();
    let closing = |children: &[&'static str]| TagRule::html().closed_by(children);

    vec![
        ("base", void()),
        ("meta", void()),
        ("area", void()),
        ("embed", void()),
        ("link", void()),
        ("img", void()),
        ("input", void()),
        ("param", void()),
        ("hr", void()),
        ("br", void()),
        ("source", void()),
        ("track", void()),
        ("wbr", void()),
        ("p", closing(P_CLOSED_BY).closed_by_parent_end()),
        ("thead", closing(&["tbody", "tfoot"])),
        ("tbody", closing(&["tbody", "tfoot"]).closed_by_parent_end()),
        ("tfoot", closing(&["tbody"]).closed_by_parent_end()),
        ("tr", closing(&["tr"]).closed_by_parent_end()),
        ("td", closing(&["td", "th"]).closed_by_parent_end()),
        ("th", closing(&["td", "th"]).closed_by_parent_end()),
        ("col", void()),
        ("svg", TagRule::html().namespace("svg")),
        // The end tag's parent is the start tag itself, so the namespace is set
        // here too, but children host non-SVG content.
        (
            "foreignObject",
            TagRule::html().namespace("svg").no_namespace_inheritance(),
        ),
        ("math", TagRule::html().namespace("math")),
        ("li", closing(&["li"]).closed_by_parent_end()),
        ("dt", closing(&["dt", "dd"])),
        ("dd", closing(&["dt", "dd"]).closed_by_parent_end()),
        ("rb", closing(RUBY_CLOSED_BY).closed_by_parent_end()),
        ("rt", closing(RUBY_CLOSED_BY).closed_by_parent_end()),
        ("rtc", closing(&["rb", "rtc", "rp"]).closed_by_parent_end()),
        ("rp", closing(RUBY_CLOSED_BY).closed_by_parent_end()),
        ("optgroup", closing(&["optgroup"]).closed_by_parent_end()),
        (
            "option",
            closing(&["option", "optgroup"]).closed_by_parent_end(),
        ),
        ("pre", TagRule::html().skip_first_lf()),
        ("listing", TagRule::html().skip_first_lf()),
        (
            "style",
            TagRule::html().content(ContentTypeSpec::Fixed(ContentType::RawText)),
        ),
        (
            "script",
            TagRule::html().content(ContentTypeSpec::Fixed(ContentType::RawText)),
        ),
        (
            "title",
            TagRule::html().content(ContentTypeSpec::ByNamespace {
                default: ContentType::EscapableRawText,
                overrides: vec![("svg", ContentType::ParsableData)],
            }),
        ),
        (
            "textarea",
            TagRule::html()
                .content(ContentTypeSpec::Fixed(ContentType::EscapableRawText))
                .skip_first_lf(),
        ),
    ]
}

/// Maps tag names to their parsing rules.
///
/// Lookups try the exact name first, then its lowercase form, then fall back to a
/// permissive default rule. Lookups never fail.
///
/// # Example
///
/// ```
/// use html_tags::{ContentType, TagRegistry};
///
/// let registry = TagRegistry::new(["div", "span"]);
/// assert!(registry.get("br").is_void());
/// assert!(registry.get("p").is_closed_by_child("div"));
/// assert_eq!(registry.get("title").content_type(Some("svg")), ContentType::ParsableData);
/// ```
#[derive(Debug, Clone)]
pub struct TagRegistry {
    rules: Vec<TagRule>,
    /// Registered name -> rule index.
    exact: FxHashMap<SmolStr, usize>,
    /// Lowercased registered name -> rule index.
    folded: FxHashMap<SmolStr, usize>,
    fallback: TagRule,
}

impl TagRegistry {
    /// Builds the registry from the listed rules plus every known element name.
    ///
    /// Known names without a namespace prefix that are not listed explicitly get a
    /// rule that forbids self-closing. Namespaced names such as `:svg:rect` are
    /// skipped.
    pub fn new<I>(known_elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut registry = Self {
            rules: Vec::new(),
            exact: FxHashMap::default(),
            folded: FxHashMap::default(),
            fallback: TagRule::fallback(),
        };

        for (name, rule) in listed_rules() {
            registry.insert(SmolStr::new_static(name), rule);
        }
        let listed = registry.rules.len();

        for name in known_elements {
            let name = name.as_ref();
            if registry.exact.contains_key(name) || ns_prefix(name).is_some() {
                continue;
            }
            registry.insert(SmolStr::new(name), TagRule::html());
        }

        tracing::debug!(
            listed,
            known = registry.rules.len() - listed,
            "tag registry built"
        );
        registry
    }

    /// Builds the registry from the bundled DOM element list.
    pub fn with_dom_elements() -> Self {
        Self::new(DOM_ELEMENTS)
    }

    fn insert(&mut self, name: SmolStr, rule: TagRule) {
        let index = self.rules.len();
        self.rules.push(rule);
        self.folded
            .entry(SmolStr::new(name.to_lowercase()))
            .or_insert(index);
        self.exact.insert(name, index);
    }

    /// Returns the rule for `name`.
    pub fn get(&self, name: &str) -> &TagRule {
        self.get_registered(name).unwrap_or(&self.fallback)
    }

    /// Returns the rule for `name` if it is listed or known, without falling back.
    pub fn get_registered(&self, name: &str) -> Option<&TagRule> {
        let index = match self.exact.get(name) {
            Some(index) => *index,
            None => *self.folded.get(name.to_lowercase().as_str())?,
        };
        self.rules.get(index)
    }

    /// Whether `name` resolves to a listed or known rule.
    pub fn is_known(&self, name: &str) -> bool {
        self.get_registered(name).is_some()
    }

    /// The rule returned for unknown names.
    pub fn fallback(&self) -> &TagRule {
        &self.fallback
    }

    /// Returns the number of registered names.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::with_dom_elements()
    }
}

static TAG_REGISTRY: OnceLock<TagRegistry> = OnceLock::new();

/// Returns the process-wide registry, building it from the bundled DOM element
/// list on first use.
pub fn tag_registry() -> &'static TagRegistry {
    TAG_REGISTRY.get_or_init(TagRegistry::with_dom_elements)
}

/// Looks up `name` in the process-wide registry.
pub fn get_html_tag_definition(name: &str) -> &'static TagRule {
    tag_registry().get(name)
}
