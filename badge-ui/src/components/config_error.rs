// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", "{message}" }
            p {
                "Check "
                code { "window.__BADGE_CONFIG" }
                ": "
                code { "mergePolicy" }
                " accepts \"tailwind\" or \"concat\", "
                code { "logLevel" }
                " accepts a log level name."
            }
        }
    }
}
