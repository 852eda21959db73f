//! Application root container.

use crate::classes::ClassSet;
use crate::component::{self, Component, Widget};
use crate::element::ElementHandle;
use crate::panel::{Container, Panel};
use crate::vnode::VNode;

/// Id of the host element used when none is configured.
pub const DEFAULT_ROOT_ID: &str = "kvapp";

const ROOT_CLASS: &str = "kv__root";
const ROOT_TAG: &str = "div";

/// Top of a component tree, rendered as a `div` inside the host element `id`.
#[derive(Debug)]
pub struct Root {
    id: String,
    panel: Panel,
}

impl Root {
    /// Creates an empty root bound to the host element `id`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            panel: Panel::new(ClassSet::from(ROOT_CLASS)),
        }
    }

    /// Host element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Mounts the whole tree onto `element`, the element rendered for this root.
    pub fn mount(&mut self, element: &ElementHandle) {
        component::mount(self, element);
    }

    /// Tears down the whole tree.
    pub fn unmount(&mut self) {
        component::teardown(self);
    }
}

impl Default for Root {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_ID)
    }
}

impl Component for Root {
    fn widget(&self) -> &Widget {
        self.panel.widget()
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self.panel.widget_mut()
    }

    fn render(&self) -> VNode {
        self.panel.render_tag(ROOT_TAG)
    }

    fn tag(&self) -> &'static str {
        ROOT_TAG
    }

    fn children(&self) -> &[Box<dyn Component>] {
        self.panel.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Component>] {
        self.panel.children_mut()
    }
}

impl Container for Root {
    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }
}
