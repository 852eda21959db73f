//! `ons-splitter` wrapper.

use veneer_core::{
    Build, ClassSet, Component, Container, ElementHandle, ListenerSlot, Panel, PropValue,
    Property, PropertyEntry, PropertyResult, PropertyTable, Root, VNode, Widget,
};

use crate::event::{BackButtonEvent, DEVICE_BACK_BUTTON};
use crate::page::Page;

const TAG: &str = "ons-splitter";

const LEFT: Property<ElementHandle> = Property::new("left");
const RIGHT: Property<ElementHandle> = Property::new("right");
const SIDE: Property<ElementHandle> = Property::new("side");
const CONTENT: Property<ElementHandle> = Property::new("content");

const PROPERTIES: PropertyTable<Splitter> = PropertyTable::new(&[
    PropertyEntry {
        name: "leftSide",
        kind: "element",
        get: |splitter| splitter.left_side().map(PropValue::Element),
        set: None,
    },
    PropertyEntry {
        name: "rightSide",
        kind: "element",
        get: |splitter| splitter.right_side().map(PropValue::Element),
        set: None,
    },
    PropertyEntry {
        name: "side",
        kind: "element",
        get: |splitter| splitter.side().map(PropValue::Element),
        set: None,
    },
    PropertyEntry {
        name: "content",
        kind: "element",
        get: |splitter| splitter.content().map(PropValue::Element),
        set: None,
    },
]);

/// A splitter component: side menus around a content area.
#[derive(Debug)]
pub struct Splitter {
    panel: Panel,
    on_device_back_button: ListenerSlot<BackButtonEvent>,
}

impl Splitter {
    /// Creates an unmounted splitter with the given classes.
    #[must_use]
    pub fn new(classes: ClassSet) -> Self {
        Self {
            panel: Panel::new(classes),
            on_device_back_button: ListenerSlot::new(DEVICE_BACK_BUTTON),
        }
    }

    /// Current left side element.
    #[must_use]
    pub fn left_side(&self) -> Option<ElementHandle> {
        LEFT.get(self.panel.widget().element())
    }

    /// Current right side element.
    #[must_use]
    pub fn right_side(&self) -> Option<ElementHandle> {
        RIGHT.get(self.panel.widget().element())
    }

    /// Side element reported by the splitter's own `side` property.
    #[must_use]
    pub fn side(&self) -> Option<ElementHandle> {
        SIDE.get(self.panel.widget().element())
    }

    /// Current content element.
    #[must_use]
    pub fn content(&self) -> Option<ElementHandle> {
        CONTENT.get(self.panel.widget().element())
    }

    /// Reads a property by its public name (`leftSide`, `rightSide`, `side`, `content`).
    ///
    /// # Errors
    ///
    /// Returns an error when the name is unknown.
    pub fn property(&self, name: &str) -> PropertyResult<Option<PropValue>> {
        PROPERTIES.get(self, name)
    }

    /// Names accepted by [`Splitter::property`].
    pub fn property_names() -> impl Iterator<Item = &'static str> {
        PROPERTIES.names()
    }

    /// Sets the device back button listener.
    pub fn on_device_back_button(&mut self, callback: impl Fn(BackButtonEvent) + 'static) {
        let element = self.panel.widget().element().cloned();
        self.on_device_back_button.set(callback, element.as_ref());
    }

    /// Clears the device back button listener.
    pub fn on_device_back_button_clear(&mut self) {
        let element = self.panel.widget().element().cloned();
        self.on_device_back_button.clear(element.as_ref());
    }
}

impl Component for Splitter {
    fn widget(&self) -> &Widget {
        self.panel.widget()
    }

    fn widget_mut(&mut self) -> &mut Widget {
        self.panel.widget_mut()
    }

    fn render(&self) -> VNode {
        self.panel.render_tag(TAG)
    }

    fn tag(&self) -> &'static str {
        TAG
    }

    fn children(&self) -> &[Box<dyn Component>] {
        self.panel.children()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Component>] {
        self.panel.children_mut()
    }

    fn after_insert(&mut self, element: &ElementHandle) {
        self.on_device_back_button.register(element);
    }
}

impl Container for Splitter {
    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }
}

/// Containers a splitter may be placed in.
pub trait SplitterParent: Container {}

impl SplitterParent for Root {}
impl SplitterParent for Page {}

/// `splitter` builder for [`SplitterParent`] containers.
pub trait SplitterDsl {
    /// Builds a splitter, runs the initializer, appends it, and returns it.
    fn splitter(&mut self, build: Build<'_, Splitter>) -> &mut Splitter;
}

impl<P: SplitterParent> SplitterDsl for P {
    fn splitter(&mut self, build: Build<'_, Splitter>) -> &mut Splitter {
        build.attach(self, Splitter::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_read_nothing_before_mount() {
        let splitter = Splitter::new(ClassSet::new());
        assert!(splitter.left_side().is_none());
        assert!(splitter.right_side().is_none());
        assert!(splitter.side().is_none());
        assert!(splitter.content().is_none());
        assert_eq!(splitter.property("side"), Ok(None));
    }

    #[test]
    fn property_table_lists_public_names() {
        assert_eq!(
            Splitter::property_names().collect::<Vec<_>>(),
            vec!["leftSide", "rightSide", "side", "content"]
        );
        assert!(Splitter::new(ClassSet::new()).property("width").is_err());
    }

    #[test]
    fn renders_tag_with_classes() {
        let splitter = Splitter::new(ClassSet::from("main"));
        let node = splitter.render();
        assert_eq!(node.tag, TAG);
        assert_eq!(node.classes, vec!["main".to_string()]);
        assert!(node.children.is_empty());
    }
}
