//! Child storage for container components.

use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use crate::classes::ClassSet;
use crate::component::{Component, Widget, teardown};
use crate::vnode::VNode;

/// Widget state plus an exclusively owned, ordered child list.
#[derive(Default)]
pub struct Panel {
    widget: Widget,
    children: Vec<Box<dyn Component>>,
}

impl Panel {
    /// Creates an empty panel with the given classes.
    #[must_use]
    pub fn new(classes: ClassSet) -> Self {
        Self {
            widget: Widget::new(classes),
            children: Vec::new(),
        }
    }

    /// Shared widget state of the owning container.
    #[must_use]
    pub const fn widget(&self) -> &Widget {
        &self.widget
    }

    /// Mutable widget state of the owning container.
    pub const fn widget_mut(&mut self) -> &mut Widget {
        &mut self.widget
    }

    /// Appends a child and returns it for further configuration.
    pub fn add<C: Component>(&mut self, child: C) -> &mut C {
        let index = self.children.len();
        self.children.push(Box::new(child));
        debug!(index, "child appended");
        match self.children[index].downcast_mut::<C>() {
            Some(child) => child,
            None => unreachable!("a freshly appended child keeps its concrete type"),
        }
    }

    /// Removes the child at `index`, tearing down its subtree.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Component>> {
        if index >= self.children.len() {
            return None;
        }
        let mut child = self.children.remove(index);
        teardown(child.as_mut());
        Some(child)
    }

    /// Removes and tears down every child.
    pub fn remove_all(&mut self) -> Vec<Box<dyn Component>> {
        let mut removed: Vec<_> = self.children.drain(..).collect();
        for child in &mut removed {
            teardown(child.as_mut());
        }
        removed
    }

    /// Number of children.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if there are no children.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in order.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn Component>] {
        &self.children
    }

    /// Mutable children in order.
    pub fn children_mut(&mut self) -> &mut [Box<dyn Component>] {
        &mut self.children
    }

    /// Child at `index` if it is a `C`.
    #[must_use]
    pub fn child<C: Component>(&self, index: usize) -> Option<&C> {
        self.children.get(index)?.downcast_ref::<C>()
    }

    /// Mutable child at `index` if it is a `C`.
    pub fn child_mut<C: Component>(&mut self, index: usize) -> Option<&mut C> {
        self.children.get_mut(index)?.downcast_mut::<C>()
    }

    /// Renders every child in order.
    #[must_use]
    pub fn children_vnodes(&self) -> Vec<VNode> {
        self.children.iter().map(|child| child.render()).collect()
    }

    /// Renders `tag` with the panel's classes around the rendered children.
    #[must_use]
    pub fn render_tag(&self, tag: &'static str) -> VNode {
        self.widget.render_tag(tag, self.children_vnodes())
    }
}

impl Debug for Panel {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Panel")
            .field("widget", &self.widget)
            .field("children", &self.children.len())
            .finish()
    }
}

/// A component that owns a [`Panel`] and accepts children.
pub trait Container: Component {
    /// Child storage.
    fn panel(&self) -> &Panel;

    /// Mutable child storage.
    fn panel_mut(&mut self) -> &mut Panel;

    /// Appends a child and returns it for chaining.
    fn add<C: Component>(&mut self, child: C) -> &mut C
    where
        Self: Sized,
    {
        self.panel_mut().add(child)
    }
}
