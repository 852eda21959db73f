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
//! Veneer demo: wasm entry point and native stub that prints the rendered tree.

mod app;

#[cfg(target_arch = "wasm32")]
fn main() -> anyhow::Result<()> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tracing::warn;
    use veneer_config::{UiConfig, validate::validate};
    use veneer_telemetry::{LoggingConfig, init_logging};
    use veneer_yew::{DomElement, start};

    let config = UiConfig::from_json_str(include_str!("../veneer.json"))?;
    validate(&config)?;
    init_logging(&LoggingConfig::from_settings(&config.logging, app::BUILD_SHA))?;

    match DomElement::global("ons") {
        Some(ons) => veneer_onsen::apply_settings(&config.onsen, ons.as_ref()),
        None => warn!("onsen runtime not loaded; settings skipped"),
    }

    let tree = Rc::new(RefCell::new(app::build(&config)));
    let _handle = start(tree)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::io::{self, Write};
    use std::path::PathBuf;

    use anyhow::Context;
    use veneer_core::Component;
    use veneer_telemetry::{LoggingConfig, init_logging};

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = veneer_config::load(path.as_deref()).context("failed to load configuration")?;
    init_logging(&LoggingConfig::from_settings(&config.logging, app::BUILD_SHA))?;

    let tree = app::build(&config);
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &tree.render())?;
    writeln!(stdout)?;
    Ok(())
}
