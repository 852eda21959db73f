//! Boundary to the native (browser or toolkit) element behind a component.
//!
//! # Design
//! - Components never touch the DOM directly; they talk to an `ElementHandle`.
//! - The shapes of properties and events belong to the wrapped element, so
//!   values cross the boundary as a small dynamic `PropValue`.
//! - Handles are `Rc` because the UI runs on one thread and the renderer and
//!   the component both hold on to the same element.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// Shared handle to a mounted native element.
pub type ElementHandle = Rc<dyn NativeElement>;

/// Handler registered on a native element for a named event.
pub type EventHandler = Rc<dyn Fn(NativeEvent)>;

/// Operations a wrapper needs from the element it wraps.
pub trait NativeElement: Any {
    /// Lower-case tag name of the element.
    fn tag_name(&self) -> String;

    /// Reads a named property. `None` means the property is absent or undefined.
    fn property(&self, name: &str) -> Option<PropValue>;

    /// Reads a markup attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Writes a named property. `None` resets it to undefined.
    fn set_property(&self, name: &str, value: Option<PropValue>);

    /// Registers (`Some`) or clears (`None`) the handler for a named event.
    fn set_handler(&self, event: &str, handler: Option<EventHandler>);

    /// Invokes a named method and returns its result, if any.
    fn call(&self, method: &str, args: &[PropValue]) -> Option<PropValue>;

    /// Child elements in document order.
    fn children(&self) -> Vec<ElementHandle>;

    /// Returns `true` when both handles refer to the same physical element.
    fn is_same(&self, other: &dyn NativeElement) -> bool;
}

/// Dynamically typed value exchanged with a native element.
#[derive(Clone)]
pub enum PropValue {
    /// Boolean property.
    Bool(bool),
    /// Numeric property.
    Number(f64),
    /// String property.
    Text(String),
    /// Property holding another element.
    Element(ElementHandle),
}

impl PropValue {
    /// Short name of the carried type, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::Element(_) => "element",
        }
    }
}

impl Debug for PropValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => formatter.debug_tuple("Bool").field(value).finish(),
            Self::Number(value) => formatter.debug_tuple("Number").field(value).finish(),
            Self::Text(value) => formatter.debug_tuple("Text").field(value).finish(),
            Self::Element(element) => formatter
                .debug_tuple("Element")
                .field(&element.tag_name())
                .finish(),
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Number(left), Self::Number(right)) => left.to_bits() == right.to_bits(),
            (Self::Text(left), Self::Text(right)) => left == right,
            (Self::Element(left), Self::Element(right)) => left.is_same(right.as_ref()),
            _ => false,
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<ElementHandle> for PropValue {
    fn from(value: ElementHandle) -> Self {
        Self::Element(value)
    }
}

/// Event delivered by a native element to a registered handler.
#[derive(Clone)]
pub struct NativeEvent {
    name: String,
    detail: BTreeMap<String, PropValue>,
    parent_handler: Option<Rc<dyn Fn()>>,
}

impl NativeEvent {
    /// Creates an event with no detail.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: BTreeMap::new(),
            parent_handler: None,
        }
    }

    /// Attaches a detail value.
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: PropValue) -> Self {
        self.detail.insert(key.into(), value);
        self
    }

    /// Attaches the handler the element falls back to when the event is passed up.
    #[must_use]
    pub fn with_parent_handler(mut self, handler: impl Fn() + 'static) -> Self {
        self.parent_handler = Some(Rc::new(handler));
        self
    }

    /// Event name as reported by the element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a detail value.
    #[must_use]
    pub fn detail(&self, key: &str) -> Option<&PropValue> {
        self.detail.get(key)
    }

    /// Runs the parent handler. Returns `false` when the element supplied none.
    pub fn call_parent_handler(&self) -> bool {
        self.parent_handler.as_ref().is_some_and(|handler| {
            handler();
            true
        })
    }
}

impl Debug for NativeEvent {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NativeEvent")
            .field("name", &self.name)
            .field("detail", &self.detail)
            .field("has_parent_handler", &self.parent_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn parent_handler_runs_only_when_present() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let event = NativeEvent::new("backbutton").with_parent_handler(move || {
            counter.set(counter.get() + 1);
        });
        assert!(event.call_parent_handler());
        assert_eq!(calls.get(), 1);
        assert!(!NativeEvent::new("backbutton").call_parent_handler());
    }

    #[test]
    fn prop_values_compare_by_kind_and_value() {
        assert_eq!(PropValue::from("left"), PropValue::Text("left".into()));
        assert_ne!(PropValue::from(true), PropValue::from("true"));
        assert_eq!(PropValue::from(1.5).kind(), "number");
    }
}
