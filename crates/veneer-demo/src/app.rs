//! Demo component tree.

use tracing::info;
use veneer_config::UiConfig;
use veneer_core::{Build, Root};
use veneer_onsen::{BackButtonEvent, Page, PageDsl, SplitterDsl};

/// Build identifier baked in at compile time.
pub(crate) const BUILD_SHA: &str = match option_env!("VENEER_BUILD_SHA") {
    Some(sha) => sha,
    None => "dev",
};

/// Builds the demo tree: a page holding a splitter that handles the back button.
pub(crate) fn build(config: &UiConfig) -> Root {
    let mut root = Root::new(config.root_id.as_str());
    root.page(Build::new().class_name("demo").init(|page: &mut Page| {
        page.splitter(Build::new().class_name("menu"))
            .on_device_back_button(|event: BackButtonEvent| {
                let forwarded = event.call_parent_handler();
                info!(forwarded, "device back button pressed");
            });
    }));
    root
}
