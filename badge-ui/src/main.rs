// SPDX-License-Identifier: MIT OR Apache-2.0

use badge_ui::components::config_error::ConfigError;
use badge_ui::constants::badge_config;
use badge_ui::{Badge, ClassMergeProvider, NodeRef};
use dioxus::prelude::*;

/// Gallery of badges exercising class overrides, click passthrough and
/// node references.
#[component]
fn Showcase() -> Element {
    let mut clicks = use_signal(|| 0u32);
    let node: NodeRef = use_signal(|| None);

    use_effect(move || {
        if node.read().is_some() {
            log::info!("reference badge mounted");
        }
    });

    rsx! {
        div { class: "flex gap-2 p-4",
            Badge { "Default" }
            Badge { class: "bg-red-500 text-white", "Overridden" }
            Badge {
                class: "cursor-pointer",
                title: "Click to count",
                onclick: move |_| clicks += 1,
                "Clicked {clicks}"
            }
            Badge { "data-testid": "ref-badge", node_ref: node, "Referenced" }
        }
    }
}

/// App root component
#[component]
fn App() -> Element {
    let config = use_hook(|| badge_config().and_then(|c| c.validate()));
    let policy = match config {
        Ok(config) => config.merge_policy,
        Err(message) => {
            log::error!("{message}");
            return rsx! {
                ConfigError { message }
            };
        }
    };

    rsx! {
        ClassMergeProvider { policy, Showcase {} }
    }
}

fn main() {
    // An invalid level is reported by `App` once the logger is up.
    let level = badge_config()
        .and_then(|c| c.log_level())
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
