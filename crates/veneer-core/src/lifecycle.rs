//! Mount state of a component.

use std::fmt::{self, Debug, Formatter};

use crate::element::ElementHandle;

/// Whether a component's native element currently exists in the document.
#[derive(Clone, Default)]
pub enum Lifecycle {
    /// Not rendered into the document yet, or torn down.
    #[default]
    Unmounted,
    /// Backed by a live native element.
    Mounted(ElementHandle),
}

impl Lifecycle {
    /// The native element, when mounted.
    #[must_use]
    pub const fn element(&self) -> Option<&ElementHandle> {
        match self {
            Self::Unmounted => None,
            Self::Mounted(element) => Some(element),
        }
    }

    /// Returns `true` when mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        matches!(self, Self::Mounted(_))
    }

    /// Returns `true` when mounted on exactly this physical element.
    #[must_use]
    pub fn is_mounted_on(&self, element: &ElementHandle) -> bool {
        self.element()
            .is_some_and(|current| current.is_same(element.as_ref()))
    }

    pub(crate) fn mount(&mut self, element: ElementHandle) {
        *self = Self::Mounted(element);
    }

    pub(crate) fn unmount(&mut self) -> Option<ElementHandle> {
        match std::mem::take(self) {
            Self::Mounted(element) => Some(element),
            Self::Unmounted => None,
        }
    }
}

impl Debug for Lifecycle {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmounted => formatter.write_str("Unmounted"),
            Self::Mounted(element) => formatter
                .debug_tuple("Mounted")
                .field(&element.tag_name())
                .finish(),
        }
    }
}
