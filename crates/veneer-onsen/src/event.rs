//! Typed events raised by Onsen elements.

use veneer_core::NativeEvent;

/// Handler property Onsen elements expose for the hardware back button.
pub(crate) const DEVICE_BACK_BUTTON: &str = "onDeviceBackButton";

/// Hardware back button press delivered to a page or splitter.
#[derive(Clone, Debug)]
pub struct BackButtonEvent {
    inner: NativeEvent,
}

impl BackButtonEvent {
    /// Passes the press on to the handler of the enclosing element.
    /// Returns `false` when the element supplied no parent handler.
    pub fn call_parent_handler(&self) -> bool {
        self.inner.call_parent_handler()
    }

    /// Underlying native event.
    #[must_use]
    pub const fn native(&self) -> &NativeEvent {
        &self.inner
    }
}

impl From<NativeEvent> for BackButtonEvent {
    fn from(inner: NativeEvent) -> Self {
        Self { inner }
    }
}
