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

//! Typed configuration for Veneer applications.
//!
//! Layout: `model.rs` (typed config models), `loader.rs` (JSON/file loading and
//! environment overrides), `validate.rs` (field validation), `error.rs`.

pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ENV_LOG_LEVEL, ENV_ONSEN_PLATFORM, ENV_ROOT_ID, load, load_with_env};
pub use model::{LogOutput, LoggingSettings, OnsenConfig, Platform, UiConfig};
