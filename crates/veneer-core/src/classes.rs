//! Ordered CSS class sets carried by every component.

use std::fmt::{self, Display, Formatter};

/// Insertion-ordered set of CSS class names.
///
/// Names are trimmed on insert. Duplicates and blank names are dropped, since
/// a blank entry would render as a stray space in the `class` attribute. A
/// single `class_name` given to a builder goes through the same rule, so
/// `"  "` yields an empty set rather than a one-element one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassSet {
    names: Vec<String>,
}

impl ClassSet {
    /// Creates an empty class set.
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Builds the set used by DSL builders: an explicit set wins, otherwise a
    /// single class name becomes a one-element set.
    #[must_use]
    pub fn resolve(classes: Option<Self>, class_name: Option<&str>) -> Self {
        classes.unwrap_or_else(|| class_name.map(Self::from).unwrap_or_default())
    }

    /// Adds a class name, trimmed. Returns `false` when it was already present or blank.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.names.push(trimmed.to_string());
        true
    }

    /// Removes a class name. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.names.len();
        self.names.retain(|existing| existing != name);
        before != self.names.len()
    }

    /// Returns `true` if the class name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Number of classes in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no class is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates class names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Class names as owned strings, in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.names.clone()
    }
}

impl Display for ClassSet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.names.join(" "))
    }
}

impl From<&str> for ClassSet {
    fn from(value: &str) -> Self {
        let mut set = Self::new();
        set.insert(value);
        set
    }
}

impl<S: Into<String>> FromIterator<S> for ClassSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<S: Into<String>> Extend<S> for ClassSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for name in iter {
            self.insert(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_set_takes_precedence_over_class_name() {
        let classes: ClassSet = ["a", "b"].into_iter().collect();
        let resolved = ClassSet::resolve(Some(classes.clone()), Some("ignored"));
        assert_eq!(resolved, classes);
    }

    #[test]
    fn class_name_becomes_single_entry_set() {
        let resolved = ClassSet::resolve(None, Some("main"));
        assert_eq!(resolved.to_vec(), vec!["main".to_string()]);
        assert!(ClassSet::resolve(None, None).is_empty());
    }

    #[test]
    fn insert_ignores_duplicates_and_blanks() {
        let mut set = ClassSet::new();
        assert!(set.insert("card"));
        assert!(!set.insert("card"));
        assert!(!set.insert("   "));
        assert!(set.insert("wide"));
        assert_eq!(set.to_string(), "card wide");
        assert!(set.remove("card"));
        assert!(!set.remove("card"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn class_name_is_trimmed_and_blank_name_gives_empty_set() {
        assert_eq!(ClassSet::resolve(None, Some(" main ")).to_string(), "main");
        assert!(ClassSet::resolve(None, Some("  ")).is_empty());
    }
}
