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

//! Yew rendering bridge for Veneer component trees.
//! Descriptor conversion works on every target; the DOM element handle and the
//! host component only exist on wasm32.

#[cfg(any(target_arch = "wasm32", test))]
mod handlers;
pub mod html;

#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod host;

pub use html::to_html;

#[cfg(target_arch = "wasm32")]
pub use dom::DomElement;
#[cfg(target_arch = "wasm32")]
pub use host::{Host, HostMsg, HostProps, SharedTree, start};
