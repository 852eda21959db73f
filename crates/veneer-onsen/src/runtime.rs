//! Global Onsen settings, applied through the `ons` object before the first render.

use tracing::info;
use veneer_config::OnsenConfig;
use veneer_core::{NativeElement, PropValue};

/// Applies `config` to the global `ons` object.
///
/// Onsen reads these settings when elements are created, so this must run
/// before the component tree is first rendered.
pub fn apply_settings(config: &OnsenConfig, ons: &dyn NativeElement) {
    if let Some(platform) = config.platform {
        ons.call("platform.select", &[PropValue::from(platform.as_str())]);
    }
    if !config.auto_styling {
        ons.call("disableAutoStyling", &[]);
    }
    if !config.animations {
        ons.call("disableAnimations", &[]);
    }
    info!(
        platform = config.platform.map_or("auto", |platform| platform.as_str()),
        auto_styling = config.auto_styling,
        animations = config.animations,
        "onsen settings applied"
    );
}
