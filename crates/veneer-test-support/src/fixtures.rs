//! Element trees standing in for the DOM a renderer would produce.

use std::rc::Rc;

use veneer_core::{Component, KEY_ATTRIBUTE, Root, VNode};

use crate::element::MemoryElement;

/// Builds the single element a renderer would create for `node`, without children.
#[must_use]
pub fn element_for(node: &VNode) -> Rc<MemoryElement> {
    let element = MemoryElement::new(node.tag);
    if let Some(key) = node.key {
        element.set_attribute(KEY_ATTRIBUTE, key.to_string());
    }
    if let Some(class) = node.class_attr() {
        element.set_attribute("class", class);
    }
    element
}

/// Builds a fresh element tree with the same shape as `node`.
#[must_use]
pub fn element_tree_for(node: &VNode) -> Rc<MemoryElement> {
    let element = element_for(node);
    for child in &node.children {
        element.append_child(element_tree_for(child));
    }
    element
}

/// Renders `root`, "patches" a fresh element tree, mounts onto it, and returns it.
pub fn mounted(root: &mut Root) -> Rc<MemoryElement> {
    let element = element_tree_for(&root.render());
    root.mount(&element.handle());
    element
}
