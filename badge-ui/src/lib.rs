// SPDX-License-Identifier: MIT OR Apache-2.0

//! badge-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`) can
//! import components. The showcase entry-point lives in `main.rs`.

pub mod components;
pub mod constants;
pub mod context;

pub use components::badge::{Badge, BadgeProps, BADGE_CLASSES, BADGE_DISPLAY_NAME};
pub use context::{use_class_merger, ClassMergeProvider, NodeRef};
