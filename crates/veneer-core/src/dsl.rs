//! Options and helpers behind the declarative builder functions.
//!
//! Widget modules expose extension traits on the containers they may live in
//! (`root.splitter(Build::new())`); each of those funnels through
//! [`Build::attach`] so construction, configuration, and attachment always
//! happen in that order.

use std::fmt::{self, Debug, Formatter};

use tracing::debug;

use crate::classes::ClassSet;
use crate::component::Component;
use crate::panel::Container;

/// Runs a configuration closure against a freshly constructed value.
pub trait Configure: Sized {
    /// Applies `init` and hands the configured value back.
    #[must_use]
    fn configure(mut self, init: impl FnOnce(&mut Self)) -> Self {
        init(&mut self);
        self
    }
}

impl<C: Component> Configure for C {}

/// Initializer stored by [`Build`].
type Init<'a, C> = Box<dyn FnOnce(&mut C) + 'a>;

/// Arguments of a DSL builder function.
pub struct Build<'a, C> {
    classes: Option<ClassSet>,
    class_name: Option<String>,
    init: Option<Init<'a, C>>,
}

impl<C> Default for Build<'_, C> {
    fn default() -> Self {
        Self {
            classes: None,
            class_name: None,
            init: None,
        }
    }
}

impl<'a, C: Component> Build<'a, C> {
    /// No classes and no initializer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit class set; wins over [`Build::class_name`].
    #[must_use]
    pub fn classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes = Some(classes.into_iter().collect());
        self
    }

    /// Single class name, used only when no class set is given.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Initializer run against the component before it is attached.
    #[must_use]
    pub fn init(mut self, init: impl FnOnce(&mut C) + 'a) -> Self {
        self.init = Some(Box::new(init));
        self
    }

    /// Class set the component will be constructed with.
    #[must_use]
    pub fn resolved_classes(&self) -> ClassSet {
        ClassSet::resolve(self.classes.clone(), self.class_name.as_deref())
    }

    /// Constructs with `construct`, configures, appends to `parent`, and returns the child.
    pub fn attach<'p, P: Container>(
        self,
        parent: &'p mut P,
        construct: impl FnOnce(ClassSet) -> C,
    ) -> &'p mut C {
        let mut component = construct(self.resolved_classes());
        if let Some(init) = self.init {
            init(&mut component);
        }
        debug!(
            component = std::any::type_name::<C>(),
            "attaching built component"
        );
        parent.add(component)
    }
}

impl<C> Debug for Build<'_, C> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Build")
            .field("classes", &self.classes)
            .field("class_name", &self.class_name)
            .field("init", &self.init.is_some())
            .finish()
    }
}
