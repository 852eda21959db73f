//! Render descriptors handed to the virtual-DOM library.
//!
//! # Design
//! - A `VNode` is rebuilt on every render pass and never cached here.
//! - Attribute names are static because every wrapper knows the attributes of
//!   the element it wraps; values are owned strings.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::classes::ClassSet;

/// Attribute carrying a component's [`WidgetKey`] on its rendered element.
pub const KEY_ATTRIBUTE: &str = "data-kv-key";

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

/// Identity of one component instance, stable for its whole life.
///
/// Rendered as [`KEY_ATTRIBUTE`] so the mount walk can find the element a
/// component produced even after a native element rearranges its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetKey(u64);

impl WidgetKey {
    pub(crate) fn next() -> Self {
        Self(NEXT_KEY.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for WidgetKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Descriptor of one rendered element and its subtree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VNode {
    /// Element tag name, e.g. `ons-splitter`.
    pub tag: &'static str,
    /// Optional `id` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Class names in render order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Remaining attributes keyed by name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<&'static str, String>,
    /// Key of the component that rendered this element.
    #[serde(skip)]
    pub key: Option<WidgetKey>,
    /// Child descriptors in child-list order.
    pub children: Vec<VNode>,
}

impl VNode {
    /// Creates a descriptor for `tag` with no attributes or children.
    #[must_use]
    pub const fn element(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            key: None,
            children: Vec::new(),
        }
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends the given classes after any already present.
    #[must_use]
    pub fn with_classes(mut self, classes: &ClassSet) -> Self {
        for name in classes.iter() {
            if !self.classes.iter().any(|existing| existing == name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    /// Sets a named attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value.into());
        self
    }

    /// Tags the element with the key of the component rendering it.
    #[must_use]
    pub const fn with_key(mut self, key: WidgetKey) -> Self {
        self.key = Some(key);
        self
    }

    /// Replaces the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Joined `class` attribute value, if any class is set.
    #[must_use]
    pub fn class_attr(&self) -> Option<String> {
        (!self.classes.is_empty()).then(|| self.classes.join(" "))
    }
}
