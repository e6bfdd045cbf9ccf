// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Browser test harness for badge-ui.
//
// `TestRoot` owns a detached-on-drop `<div>` under `<body>` that a Dioxus
// root renders into, so each test reads as render, settle, assert.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// A `<body>`-attached host element for one test. Removed from the page on
/// drop, so a failing assertion still leaves the document clean.
pub struct TestRoot {
    host: web_sys::Element,
}

impl TestRoot {
    /// Launch `app` into a fresh host element and wait for it to settle.
    pub async fn render(app: fn() -> Element) -> Self {
        let document = gloo_utils::document();
        let host = document
            .create_element("div")
            .expect("create test host element");
        document
            .body()
            .expect("document has a body")
            .append_child(&host)
            .expect("attach test host element");

        dioxus::web::launch::launch_virtual_dom(
            VirtualDom::new(app),
            dioxus::web::Config::new().rootelement(host.clone()),
        );
        settle().await;

        Self { host }
    }

    /// The first element rendered by the root.
    pub fn first(&self) -> web_sys::Element {
        self.host
            .first_element_child()
            .expect("root rendered an element")
    }

    /// The element matching `selector`, if any.
    pub fn find(&self, selector: &str) -> Option<web_sys::Element> {
        self.host
            .query_selector(selector)
            .expect("valid selector")
    }
}

impl Drop for TestRoot {
    fn drop(&mut self) {
        self.host.remove();
    }
}

/// Let Dioxus flush pending work.
///
/// Two animation frames: mutations land in the first, effects and
/// `onmounted` handlers have run by the second.
pub async fn settle() {
    for _ in 0..2 {
        let frame = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .expect("requestAnimationFrame");
        });
        JsFuture::from(frame).await.expect("animation frame");
    }
}

/// Fire a non-bubbling mouse event such as `mouseenter` at `target`.
pub fn dispatch_mouse(target: &web_sys::Element, kind: &str) {
    let event = web_sys::MouseEvent::new(kind).expect("construct mouse event");
    target.dispatch_event(&event).expect("dispatch mouse event");
}
