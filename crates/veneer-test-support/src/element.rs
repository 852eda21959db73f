//! In-memory native element that records what components do to it.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use veneer_core::{ElementHandle, EventHandler, NativeElement, NativeEvent, PropValue};

/// One change to an element's event handler table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Registration {
    /// A handler was installed for the event.
    Set(String),
    /// The handler for the event was removed.
    Cleared(String),
}

/// Recording stand-in for a DOM element.
#[derive(Default)]
pub struct MemoryElement {
    tag: String,
    attributes: RefCell<BTreeMap<String, String>>,
    properties: RefCell<BTreeMap<String, PropValue>>,
    handlers: RefCell<BTreeMap<String, EventHandler>>,
    registrations: RefCell<Vec<Registration>>,
    calls: RefCell<Vec<(String, Vec<PropValue>)>>,
    children: RefCell<Vec<Rc<Self>>>,
}

impl MemoryElement {
    /// Creates a detached element with no children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            tag: tag.into(),
            ..Self::default()
        })
    }

    /// Creates an element with the given children.
    #[must_use]
    pub fn with_children(tag: impl Into<String>, children: Vec<Rc<Self>>) -> Rc<Self> {
        let element = Self::new(tag);
        element.children.replace(children);
        element
    }

    /// Upcasts to the handle components store.
    #[must_use]
    pub fn handle(self: &Rc<Self>) -> ElementHandle {
        Rc::clone(self) as ElementHandle
    }

    /// Appends a child element.
    pub fn append_child(&self, child: Rc<Self>) {
        self.children.borrow_mut().push(child);
    }

    /// Child element at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Rc<Self>> {
        self.children.borrow().get(index).cloned()
    }

    /// Sets a markup attribute.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.borrow_mut().insert(name.into(), value.into());
    }

    /// Presets a property as the native element would expose it.
    pub fn insert_property(&self, name: impl Into<String>, value: PropValue) {
        self.properties.borrow_mut().insert(name.into(), value);
    }

    /// Every handler change so far, oldest first.
    #[must_use]
    pub fn registrations(&self) -> Vec<Registration> {
        self.registrations.borrow().clone()
    }

    /// Number of times a handler was installed for `event`.
    #[must_use]
    pub fn registration_count(&self, event: &str) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|entry| matches!(entry, Registration::Set(name) if name == event))
            .count()
    }

    /// Returns `true` while a handler is installed for `event`.
    #[must_use]
    pub fn has_handler(&self, event: &str) -> bool {
        self.handlers.borrow().contains_key(event)
    }

    /// Delivers `event` to the installed handler. Returns `false` when none is installed.
    pub fn dispatch(&self, event: NativeEvent) -> bool {
        let handler = self.handlers.borrow().get(event.name()).cloned();
        handler.is_some_and(|handler| {
            handler(event);
            true
        })
    }

    /// Method invocations so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, Vec<PropValue>)> {
        self.calls.borrow().clone()
    }
}

impl NativeElement for MemoryElement {
    fn tag_name(&self) -> String {
        self.tag.clone()
    }

    fn property(&self, name: &str) -> Option<PropValue> {
        self.properties.borrow().get(name).cloned()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    fn set_property(&self, name: &str, value: Option<PropValue>) {
        let mut properties = self.properties.borrow_mut();
        match value {
            Some(value) => {
                properties.insert(name.to_string(), value);
            }
            None => {
                properties.remove(name);
            }
        }
    }

    fn set_handler(&self, event: &str, handler: Option<EventHandler>) {
        let mut handlers = self.handlers.borrow_mut();
        let mut registrations = self.registrations.borrow_mut();
        match handler {
            Some(handler) => {
                handlers.insert(event.to_string(), handler);
                registrations.push(Registration::Set(event.to_string()));
            }
            None => {
                handlers.remove(event);
                registrations.push(Registration::Cleared(event.to_string()));
            }
        }
    }

    fn call(&self, method: &str, args: &[PropValue]) -> Option<PropValue> {
        self.calls
            .borrow_mut()
            .push((method.to_string(), args.to_vec()));
        None
    }

    fn children(&self) -> Vec<ElementHandle> {
        self.children.borrow().iter().map(Self::handle).collect()
    }

    fn is_same(&self, other: &dyn NativeElement) -> bool {
        std::ptr::addr_eq(std::ptr::from_ref(self), std::ptr::from_ref(other))
    }
}
