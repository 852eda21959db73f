//! Native element handle backed by a live DOM object.
//!
//! # Design
//! - Properties and methods are reached through `js_sys::Reflect`, because the
//!   wrapped custom elements define them at runtime.
//! - Event handlers are installed as handler properties (`onclick` style), the
//!   way Onsen elements expose `onDeviceBackButton`.
//! - Installed closures live in the handle so the JS side never calls into a
//!   dropped closure; clearing a handler drops its closure.
//! - JS exceptions are logged, and the closure table only changes when the
//!   element accepted the change.

use std::any::Any;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use veneer_core::{ElementHandle, EventHandler, NativeElement, NativeEvent, PropValue};

use crate::handlers::HandlerTable;

/// DOM object exposed to components as a [`NativeElement`].
pub struct DomElement {
    object: Object,
    handlers: HandlerTable<Closure<dyn Fn(JsValue)>>,
}

impl DomElement {
    /// Wraps a document element.
    #[must_use]
    pub fn from_element(element: Element) -> ElementHandle {
        Self::from_object(element.unchecked_into::<Object>())
    }

    /// Looks up a global object such as `ons` on `window`.
    #[must_use]
    pub fn global(name: &str) -> Option<ElementHandle> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(name)).ok()?;
        value.dyn_into::<Object>().ok().map(Self::from_object)
    }

    fn from_object(object: Object) -> ElementHandle {
        Rc::new(Self {
            object,
            handlers: HandlerTable::new(),
        })
    }

    /// Underlying element, when the wrapped object is one.
    #[must_use]
    pub fn element(&self) -> Option<&Element> {
        self.object.dyn_ref::<Element>()
    }
}

fn to_js(value: &PropValue) -> JsValue {
    match value {
        PropValue::Bool(value) => JsValue::from_bool(*value),
        PropValue::Number(value) => JsValue::from_f64(*value),
        PropValue::Text(value) => JsValue::from_str(value),
        PropValue::Element(handle) => (handle.as_ref() as &dyn Any)
            .downcast_ref::<DomElement>()
            .map_or(JsValue::UNDEFINED, |dom| dom.object.clone().into()),
    }
}

fn from_js(value: JsValue) -> Option<PropValue> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(flag) = value.as_bool() {
        return Some(PropValue::Bool(flag));
    }
    if let Some(number) = value.as_f64() {
        return Some(PropValue::Number(number));
    }
    if let Some(text) = value.as_string() {
        return Some(PropValue::Text(text));
    }
    value
        .dyn_into::<Element>()
        .ok()
        .map(|element| PropValue::Element(DomElement::from_element(element)))
}

/// Assigns `object[name] = value`, logging refusals and exceptions.
fn assign(object: &Object, name: &str, value: &JsValue) -> bool {
    match Reflect::set(object, &JsValue::from_str(name), value) {
        Ok(true) => true,
        Ok(false) => {
            warn!(name, "native element refused assignment");
            false
        }
        Err(err) => {
            warn!(name, error = ?err, "native assignment threw");
            false
        }
    }
}

fn native_event(name: &str, event: JsValue) -> NativeEvent {
    let native = NativeEvent::new(name);
    let parent = Reflect::get(&event, &JsValue::from_str("callParentHandler"))
        .and_then(|value| value.dyn_into::<Function>());
    match parent {
        Ok(parent) => {
            let name = name.to_string();
            native.with_parent_handler(move || {
                if let Err(err) = parent.call0(&event) {
                    warn!(event = %name, error = ?err, "parent handler threw");
                }
            })
        }
        Err(_) => native,
    }
}

impl NativeElement for DomElement {
    fn tag_name(&self) -> String {
        self.element().map_or_else(
            || "object".to_string(),
            |element| element.tag_name().to_ascii_lowercase(),
        )
    }

    fn property(&self, name: &str) -> Option<PropValue> {
        Reflect::get(&self.object, &JsValue::from_str(name))
            .ok()
            .and_then(from_js)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element()?.get_attribute(name)
    }

    fn set_property(&self, name: &str, value: Option<PropValue>) {
        let value = value.as_ref().map_or(JsValue::UNDEFINED, to_js);
        assign(&self.object, name, &value);
    }

    fn set_handler(&self, event: &str, handler: Option<EventHandler>) {
        match handler {
            Some(handler) => {
                let name = event.to_string();
                let closure = Closure::<dyn Fn(JsValue)>::new(move |raw: JsValue| {
                    handler(native_event(&name, raw));
                });
                self.handlers.install(event, closure, |closure| {
                    assign(&self.object, event, closure.as_ref())
                });
            }
            None => {
                self.handlers
                    .clear(event, || assign(&self.object, event, &JsValue::UNDEFINED));
            }
        }
    }

    fn call(&self, method: &str, args: &[PropValue]) -> Option<PropValue> {
        let mut target: JsValue = self.object.clone().into();
        let mut segments = method.split('.').peekable();
        while let Some(segment) = segments.next() {
            let member = Reflect::get(&target, &JsValue::from_str(segment)).ok()?;
            if segments.peek().is_some() {
                target = member;
                continue;
            }
            let function = member.dyn_into::<Function>().ok()?;
            let js_args: Array = args.iter().map(to_js).collect();
            return match Reflect::apply(&function, &target, &js_args) {
                Ok(value) => from_js(value),
                Err(err) => {
                    warn!(method, error = ?err, "native method threw");
                    None
                }
            };
        }
        None
    }

    fn children(&self) -> Vec<ElementHandle> {
        let Some(element) = self.element() else {
            return Vec::new();
        };
        let collection = element.children();
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .map(Self::from_element)
            .collect()
    }

    fn is_same(&self, other: &dyn NativeElement) -> bool {
        (other as &dyn Any)
            .downcast_ref::<Self>()
            .is_some_and(|other| other.object == self.object)
    }
}
