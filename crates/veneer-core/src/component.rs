//! Component trait, shared widget state, and the mount/teardown walks.
//!
//! # Design
//! - Every component embeds a [`Widget`] (key, class set, mount state) and
//!   renders exactly one element tagged with its key.
//! - Mounting finds each child's element by key below the parent's element,
//!   so native elements may wrap or move their children on upgrade.
//! - Hooks are invoked by the walks, never by components themselves.

use std::any::Any;

use tracing::{debug, warn};

use crate::classes::ClassSet;
use crate::element::ElementHandle;
use crate::lifecycle::Lifecycle;
use crate::vnode::{KEY_ATTRIBUTE, VNode, WidgetKey};

/// State every component carries regardless of the element it wraps.
#[derive(Debug)]
pub struct Widget {
    key: WidgetKey,
    classes: ClassSet,
    lifecycle: Lifecycle,
}

impl Widget {
    /// Creates unmounted widget state with the given classes and a fresh key.
    #[must_use]
    pub fn new(classes: ClassSet) -> Self {
        Self {
            key: WidgetKey::next(),
            classes,
            lifecycle: Lifecycle::Unmounted,
        }
    }

    /// Key rendered on this component's element.
    #[must_use]
    pub const fn key(&self) -> WidgetKey {
        self.key
    }

    /// Current class set.
    #[must_use]
    pub const fn classes(&self) -> &ClassSet {
        &self.classes
    }

    /// Mutable class set; changes show up on the next render.
    pub const fn classes_mut(&mut self) -> &mut ClassSet {
        &mut self.classes
    }

    /// Current mount state.
    #[must_use]
    pub const fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Native element backing the component, when mounted.
    #[must_use]
    pub const fn element(&self) -> Option<&ElementHandle> {
        self.lifecycle.element()
    }

    /// Renders `tag` with this widget's classes and the given children.
    #[must_use]
    pub fn render_tag(&self, tag: &'static str, children: Vec<VNode>) -> VNode {
        VNode::element(tag)
            .with_key(self.key)
            .with_classes(&self.classes)
            .with_children(children)
    }
}

impl Default for Widget {
    fn default() -> Self {
        Self::new(ClassSet::new())
    }
}

/// A node of the component tree.
pub trait Component: Any {
    /// Shared widget state.
    fn widget(&self) -> &Widget;

    /// Mutable shared widget state.
    fn widget_mut(&mut self) -> &mut Widget;

    /// Describes the element for the current state. Must not mutate anything.
    fn render(&self) -> VNode;

    /// Tag of the rendered element. Override when it is known without rendering.
    fn tag(&self) -> &'static str {
        self.render().tag
    }

    /// Owned children in render order.
    fn children(&self) -> &[Box<dyn Component>] {
        &[]
    }

    /// Mutable owned children in render order.
    fn children_mut(&mut self) -> &mut [Box<dyn Component>] {
        &mut []
    }

    /// Called once per physical mount, after the element is recorded.
    fn after_insert(&mut self, _element: &ElementHandle) {}

    /// Called when the element backing the component goes away.
    fn after_destroy(&mut self) {}
}

impl dyn Component {
    /// Downcasts to a concrete component type.
    #[must_use]
    pub fn downcast_ref<C: Component>(&self) -> Option<&C> {
        (self as &dyn Any).downcast_ref::<C>()
    }

    /// Mutably downcasts to a concrete component type.
    pub fn downcast_mut<C: Component>(&mut self) -> Option<&mut C> {
        (self as &mut dyn Any).downcast_mut::<C>()
    }
}

/// Attaches `component` and its subtree to the native element tree rooted at `element`.
///
/// A component already mounted on the same physical element is left alone, so
/// repeated walks after each render pass fire `after_insert` only for elements
/// that are new. Children are looked up by key; a child whose element is
/// missing, or carries a different tag, stays unmounted.
pub fn mount(component: &mut dyn Component, element: &ElementHandle) {
    let lifecycle = component.widget().lifecycle();
    if !lifecycle.is_mounted_on(element) {
        if lifecycle.is_mounted() {
            debug!(tag = %element.tag_name(), "element replaced; remounting component");
            component.widget_mut().lifecycle.unmount();
            component.after_destroy();
        }
        component.widget_mut().lifecycle.mount(ElementHandle::clone(element));
        component.after_insert(element);
    }

    for child in component.children_mut() {
        let key = child.widget().key();
        let tag = child.tag();
        match find_keyed(element, key) {
            Some(child_element) if child_element.tag_name() == tag => {
                mount(child.as_mut(), &child_element);
            }
            Some(child_element) => warn!(
                %key,
                expected = tag,
                found = %child_element.tag_name(),
                "keyed element has another tag; child not mounted"
            ),
            None => warn!(%key, tag, "no element rendered for child; child not mounted"),
        }
    }
}

/// Depth-first search below `element` for the element tagged with `key`.
///
/// Elements keyed for other components are not entered.
fn find_keyed(element: &ElementHandle, key: WidgetKey) -> Option<ElementHandle> {
    let wanted = key.to_string();
    let mut pending = element.children();
    pending.reverse();
    while let Some(candidate) = pending.pop() {
        match candidate.attribute(KEY_ATTRIBUTE) {
            Some(found) if found == wanted => return Some(candidate),
            Some(_) => {}
            None => {
                let mut nested = candidate.children();
                nested.reverse();
                pending.extend(nested);
            }
        }
    }
    None
}

/// Tears down `component` and its subtree, children first.
pub fn teardown(component: &mut dyn Component) {
    for child in component.children_mut() {
        teardown(child.as_mut());
    }
    if component.widget_mut().lifecycle.unmount().is_some() {
        component.after_destroy();
    }
}
