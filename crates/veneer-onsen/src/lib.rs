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

//! Onsen UI custom elements wrapped as Veneer components.
//!
//! Layout: `event.rs` (typed Onsen events), `page.rs` (`ons-page` container),
//! `splitter.rs` (`ons-splitter`), `runtime.rs` (global `ons` settings).

pub mod event;
pub mod page;
pub mod runtime;
pub mod splitter;

pub use event::BackButtonEvent;
pub use page::{Page, PageDsl};
pub use runtime::apply_settings;
pub use splitter::{Splitter, SplitterDsl, SplitterParent};
