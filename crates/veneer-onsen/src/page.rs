//! `ons-page` container.

use veneer_core::{
    Build, ClassSet, Component, Container, ElementHandle, ListenerSlot, Panel, Root, VNode, Widget,
};

use crate::event::{BackButtonEvent, DEVICE_BACK_BUTTON};

const TAG: &str = "ons-page";

/// A page component hosting other Onsen widgets.
#[derive(Debug)]
pub struct Page {
    panel: Panel,
    on_device_back_button: ListenerSlot<BackButtonEvent>,
}

impl Page {
    /// Creates an empty, unmounted page.
    #[must_use]
    pub fn new(classes: ClassSet) -> Self {
        Self {
            panel: Panel::new(classes),
            on_device_back_button: ListenerSlot::new(DEVICE_BACK_BUTTON),
        }
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

impl Component for Page {
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

impl Container for Page {
    fn panel(&self) -> &Panel {
        &self.panel
    }

    fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }
}

/// `page` builder for the application root.
pub trait PageDsl {
    /// Builds a page, runs the initializer, appends it, and returns it.
    fn page(&mut self, build: Build<'_, Page>) -> &mut Page;
}

impl PageDsl for Root {
    fn page(&mut self, build: Build<'_, Page>) -> &mut Page {
        build.attach(self, Page::new)
    }
}
