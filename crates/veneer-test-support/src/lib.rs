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

//! Shared test helpers used across integration suites.
//! Layout: element.rs (recording native element double), fixtures.rs (element trees mirroring renders).

pub mod element;
pub mod fixtures;

pub use element::{MemoryElement, Registration};
pub use fixtures::{element_for, element_tree_for, mounted};
