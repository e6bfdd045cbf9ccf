// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for badge components
//!
//! The class merge policy is shared through Dioxus's context system so a
//! whole subtree can switch policy without threading a prop through every
//! component.

use std::rc::Rc;

use class_merge::{ClassMerger, MergePolicy};
use dioxus::prelude::*;

/// Output handle for reference forwarding.
///
/// `None` until the component's node is mounted, then a non-owning handle to
/// it. The node itself stays owned by the renderer.
pub type NodeRef = Signal<Option<Rc<MountedData>>>;

/// Merger provided by the nearest [`ClassMergeProvider`], or the Tailwind
/// merger when no ancestor provides one.
pub fn use_class_merger() -> ClassMerger {
    try_use_context::<ClassMerger>().unwrap_or_default()
}

/// Provides a class merger to every component below it.
///
/// A custom `merger` takes precedence over `policy`. The merger is captured
/// on first render and stays fixed for the lifetime of the subtree.
#[component]
pub fn ClassMergeProvider(
    #[props(default)] policy: MergePolicy,
    #[props(default)] merger: Option<ClassMerger>,
    children: Element,
) -> Element {
    use_context_provider(|| {
        log::debug!("providing class merger (policy: {policy})");
        merger.unwrap_or_else(|| policy.merger())
    });

    rsx! { {children} }
}
