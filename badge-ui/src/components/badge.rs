// SPDX-License-Identifier: MIT OR Apache-2.0

//! Badge component: a small rounded label for status or count indicators.

use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

use class_merge::ClassMerge;

use crate::context::{use_class_merger, NodeRef};

/// Default classes every badge starts from.
pub const BADGE_CLASSES: &str =
    "inline-flex items-center rounded-full bg-muted px-2 py-1 text-xs font-medium";

/// Name the component goes by in logs and developer tooling.
pub const BADGE_DISPLAY_NAME: &str = "Badge";

/// Renders a `<div>` styled as a badge.
///
/// Any `div` or global attribute is passed through unchanged. A `class`
/// attribute is not overwritten but merged into [`BADGE_CLASSES`] with the
/// merger from context (see [`use_class_merger`]), so conflicting utilities
/// from the caller replace the defaults.
///
/// ```ignore
/// let node = use_signal(|| None);
/// rsx! {
///     Badge { class: "bg-red-500", "data-testid": "status", node_ref: node, "New" }
/// }
/// ```
#[component]
pub fn Badge(
    #[props(extends = GlobalAttributes, extends = div)] attributes: Vec<Attribute>,
    /// Set to the rendered node once it is mounted, reset to `None` when the
    /// badge unmounts.
    #[props(default)]
    node_ref: Option<NodeRef>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    /// Pointer hover handlers, for badges that anchor a tooltip.
    #[props(default)]
    onmouseenter: Option<EventHandler<MouseEvent>>,
    #[props(default)] onmouseleave: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    use_drop(move || {
        if let Some(mut node) = node_ref {
            // The owner may be dropping in the same pass.
            if let Ok(mut slot) = node.try_write() {
                *slot = None;
            }
        }
    });

    let merger = use_class_merger();
    let (overrides, attributes) = split_class(attributes);
    let class = match overrides {
        Some(overrides) => merger.merge(BADGE_CLASSES, &overrides),
        None => BADGE_CLASSES.to_string(),
    };

    rsx! {
        div {
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            onmouseenter: move |evt| {
                if let Some(handler) = onmouseenter {
                    handler.call(evt);
                }
            },
            onmouseleave: move |evt| {
                if let Some(handler) = onmouseleave {
                    handler.call(evt);
                }
            },
            onmounted: move |evt: MountedEvent| {
                if let Some(mut node) = node_ref {
                    log::debug!("{BADGE_DISPLAY_NAME}: node mounted");
                    node.set(Some(evt.data()));
                }
            },
            ..attributes,
            {children}
        }
    }
}

/// Pull every `class` attribute out of the passthrough bag.
///
/// Returns the class text joined in order (`None` when absent or blank) and
/// the remaining attributes untouched.
fn split_class(attributes: Vec<Attribute>) -> (Option<String>, Vec<Attribute>) {
    let mut classes = Vec::new();
    let mut rest = Vec::with_capacity(attributes.len());

    for attribute in attributes {
        if attribute.name != "class" || attribute.namespace.is_some() {
            rest.push(attribute);
            continue;
        }
        match attribute.value {
            AttributeValue::Text(text) => classes.push(text),
            AttributeValue::None => {}
            other => log::warn!("{BADGE_DISPLAY_NAME}: ignoring non-text class value {other:?}"),
        }
    }

    let joined = classes.join(" ");
    let overrides = (!joined.trim().is_empty()).then_some(joined);
    (overrides, rest)
}
