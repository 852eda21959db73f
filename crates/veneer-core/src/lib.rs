#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Component model shared by every Veneer widget module.
//!
//! Layout: `classes.rs` (class sets), `vnode.rs` (render descriptors),
//! `element.rs` (native element boundary), `property.rs` (typed and
//! name-addressed properties), `listener.rs` (deferred event registration),
//! `lifecycle.rs` (mount state), `component.rs` (component trait and mount
//! walk), `panel.rs` (child storage and containers), `dsl.rs` (builder
//! options), `root.rs` (application root).

pub mod classes;
pub mod component;
pub mod dsl;
pub mod element;
pub mod error;
pub mod lifecycle;
pub mod listener;
pub mod panel;
pub mod property;
pub mod root;
pub mod vnode;

pub use classes::ClassSet;
pub use component::{Component, Widget, mount, teardown};
pub use dsl::{Build, Configure};
pub use element::{ElementHandle, EventHandler, NativeElement, NativeEvent, PropValue};
pub use error::{MountError, PropertyError, PropertyResult};
pub use lifecycle::Lifecycle;
pub use listener::ListenerSlot;
pub use panel::{Container, Panel};
pub use property::{FromProp, Property, PropertyEntry, PropertyTable};
pub use root::{DEFAULT_ROOT_ID, Root};
pub use vnode::{KEY_ATTRIBUTE, VNode, WidgetKey};
