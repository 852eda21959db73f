//! Event listeners whose registration waits for the element to exist.
//!
//! # Design
//! - The callback is stored on the component so it survives element recreation.
//! - Setting or clearing while mounted touches the element immediately;
//!   otherwise the stored callback is registered by the next mount.

use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use tracing::debug;

use crate::element::{ElementHandle, EventHandler, NativeEvent};

/// Stored callback for one named native event, delivered as `E`.
pub struct ListenerSlot<E> {
    event: &'static str,
    callback: Option<Rc<dyn Fn(E)>>,
}

impl<E: From<NativeEvent> + 'static> ListenerSlot<E> {
    /// Creates an empty slot for the native event `event`.
    #[must_use]
    pub const fn new(event: &'static str) -> Self {
        Self {
            event,
            callback: None,
        }
    }

    /// Native event name.
    #[must_use]
    pub const fn event(&self) -> &'static str {
        self.event
    }

    /// Returns `true` while a callback is stored.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.callback.is_some()
    }

    /// Stores `callback`, registering it right away when `element` is present.
    pub fn set(&mut self, callback: impl Fn(E) + 'static, element: Option<&ElementHandle>) {
        self.callback = Some(Rc::new(callback));
        if let Some(element) = element {
            self.register(element);
        }
    }

    /// Drops the stored callback and clears the registration when `element` is present.
    pub fn clear(&mut self, element: Option<&ElementHandle>) {
        self.callback = None;
        if let Some(element) = element {
            debug!(event = self.event, "clearing native event handler");
            element.set_handler(self.event, None);
        }
    }

    /// Registers the stored callback on a freshly mounted element. No-op when empty.
    pub fn register(&self, element: &ElementHandle) {
        if let Some(callback) = &self.callback {
            debug!(
                event = self.event,
                tag = %element.tag_name(),
                "registering native event handler"
            );
            let callback = Rc::clone(callback);
            let handler: EventHandler = Rc::new(move |event| callback(E::from(event)));
            element.set_handler(self.event, Some(handler));
        }
    }
}

impl<E> Debug for ListenerSlot<E> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ListenerSlot")
            .field("event", &self.event)
            .field("set", &self.callback.is_some())
            .finish()
    }
}
