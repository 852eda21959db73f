//! Typed property keys and name-addressed property tables.
//!
//! # Design
//! - `Property<T>` pairs a native property name with the Rust type it carries,
//!   so wrappers expose plain typed accessors.
//! - `PropertyTable<C>` maps public names to getter/setter pairs for tooling
//!   that needs to address properties by string.

use std::marker::PhantomData;

use crate::element::{ElementHandle, PropValue};
use crate::error::{PropertyError, PropertyResult};

/// Conversion between Rust values and [`PropValue`].
pub trait FromProp: Sized {
    /// Kind reported by [`PropValue::kind`] for this type.
    const KIND: &'static str;

    /// Converts a dynamic value, returning `None` on a kind mismatch.
    fn from_prop(value: PropValue) -> Option<Self>;

    /// Wraps the value for the native boundary.
    fn into_prop(self) -> PropValue;
}

impl FromProp for bool {
    const KIND: &'static str = "bool";

    fn from_prop(value: PropValue) -> Option<Self> {
        match value {
            PropValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::Bool(self)
    }
}

impl FromProp for f64 {
    const KIND: &'static str = "number";

    fn from_prop(value: PropValue) -> Option<Self> {
        match value {
            PropValue::Number(value) => Some(value),
            _ => None,
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::Number(self)
    }
}

impl FromProp for String {
    const KIND: &'static str = "text";

    fn from_prop(value: PropValue) -> Option<Self> {
        match value {
            PropValue::Text(value) => Some(value),
            _ => None,
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::Text(self)
    }
}

impl FromProp for ElementHandle {
    const KIND: &'static str = "element";

    fn from_prop(value: PropValue) -> Option<Self> {
        match value {
            PropValue::Element(element) => Some(element),
            _ => None,
        }
    }

    fn into_prop(self) -> PropValue {
        PropValue::Element(self)
    }
}

/// Typed key for one property of a native element.
#[derive(Debug)]
pub struct Property<T> {
    name: &'static str,
    _kind: PhantomData<fn() -> T>,
}

impl<T> Property<T> {
    /// Declares a property by its native name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _kind: PhantomData,
        }
    }

    /// Native property name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: FromProp> Property<T> {
    /// Reads the property. Unmounted elements and kind mismatches read as `None`.
    #[must_use]
    pub fn get(&self, element: Option<&ElementHandle>) -> Option<T> {
        element
            .and_then(|element| element.property(self.name))
            .and_then(T::from_prop)
    }

    /// Writes the property on a mounted element; a no-op when unmounted.
    pub fn set(&self, element: Option<&ElementHandle>, value: Option<T>) {
        if let Some(element) = element {
            element.set_property(self.name, value.map(FromProp::into_prop));
        }
    }
}

/// One name-addressed property of a component type `C`.
pub struct PropertyEntry<C: 'static> {
    /// Public property name.
    pub name: &'static str,
    /// Kind accepted by the setter, as reported by [`PropValue::kind`].
    pub kind: &'static str,
    /// Reads the current value.
    pub get: fn(&C) -> Option<PropValue>,
    /// Writes a value already checked against `kind`; `None` for read-only properties.
    pub set: Option<fn(&mut C, PropValue)>,
}

/// Static table of the name-addressed properties of a component type.
pub struct PropertyTable<C: 'static> {
    entries: &'static [PropertyEntry<C>],
}

impl<C: 'static> PropertyTable<C> {
    /// Wraps a static list of entries.
    #[must_use]
    pub const fn new(entries: &'static [PropertyEntry<C>]) -> Self {
        Self { entries }
    }

    /// Public names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + use<C> {
        let entries = self.entries;
        entries.iter().map(|entry| entry.name)
    }

    fn entry(&self, name: &str) -> PropertyResult<&PropertyEntry<C>> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| PropertyError::Unknown {
                name: name.to_string(),
            })
    }

    /// Reads a property by name.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Unknown`] if the name is not in the table.
    pub fn get(&self, component: &C, name: &str) -> PropertyResult<Option<PropValue>> {
        let entry = self.entry(name)?;
        Ok((entry.get)(component))
    }

    /// Writes a property by name.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Unknown`], [`PropertyError::ReadOnly`], or
    /// [`PropertyError::TypeMismatch`] when the write cannot be applied.
    pub fn set(&self, component: &mut C, name: &str, value: PropValue) -> PropertyResult<()> {
        let entry = self.entry(name)?;
        let setter = entry.set.ok_or_else(|| PropertyError::ReadOnly {
            name: name.to_string(),
        })?;
        if value.kind() != entry.kind {
            return Err(PropertyError::TypeMismatch {
                name: name.to_string(),
                expected: entry.kind,
                actual: value.kind(),
            });
        }
        setter(component, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Label {
        text: String,
    }

    const LABEL_PROPERTIES: PropertyTable<Label> = PropertyTable::new(&[
        PropertyEntry {
            name: "text",
            kind: "text",
            get: |label| Some(PropValue::Text(label.text.clone())),
            set: Some(|label, value| {
                if let Some(text) = String::from_prop(value) {
                    label.text = text;
                }
            }),
        },
        PropertyEntry {
            name: "empty",
            kind: "bool",
            get: |label| Some(PropValue::Bool(label.text.is_empty())),
            set: None,
        },
    ]);

    #[test]
    fn unmounted_reads_are_absent() {
        let title: Property<String> = Property::new("title");
        assert_eq!(title.get(None), None);
        title.set(None, Some("ignored".into()));
        assert_eq!(title.name(), "title");
    }

    #[test]
    fn table_reads_and_writes_by_name() -> Result<(), PropertyError> {
        let mut label = Label::default();
        LABEL_PROPERTIES.set(&mut label, "text", PropValue::from("hello"))?;
        assert_eq!(label.text, "hello");
        assert_eq!(
            LABEL_PROPERTIES.get(&label, "empty")?,
            Some(PropValue::Bool(false))
        );
        assert_eq!(
            LABEL_PROPERTIES.names().collect::<Vec<_>>(),
            vec!["text", "empty"]
        );
        Ok(())
    }

    #[test]
    fn table_rejects_invalid_writes() {
        let mut label = Label::default();
        assert_eq!(
            LABEL_PROPERTIES.set(&mut label, "empty", PropValue::Bool(true)),
            Err(PropertyError::ReadOnly {
                name: "empty".into()
            })
        );
        assert_eq!(
            LABEL_PROPERTIES.set(&mut label, "text", PropValue::Bool(true)),
            Err(PropertyError::TypeMismatch {
                name: "text".into(),
                expected: "text",
                actual: "bool",
            })
        );
        assert!(matches!(
            LABEL_PROPERTIES.get(&label, "width"),
            Err(PropertyError::Unknown { .. })
        ));
    }
}
