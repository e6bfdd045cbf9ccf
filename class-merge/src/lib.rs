// SPDX-License-Identifier: MIT OR Apache-2.0

//! Class-string merging for utility-first CSS components.
//!
//! Components ship a fixed set of default classes and let callers pass a
//! `class` override. How the two combine is a [`ClassMerge`] policy:
//!
//! ```
//! use class_merge::{cn, ClassMerge, ConcatMerge};
//!
//! assert_eq!(cn("px-2 py-1", Some("px-4")), "py-1 px-4");
//! assert_eq!(ConcatMerge.merge("px-2 py-1", "px-4"), "px-2 py-1 px-4");
//! ```

pub mod error;
pub mod policy;

pub use error::ParsePolicyError;
pub use policy::{ClassMerge, ClassMerger, ConcatMerge, MergePolicy, TailwindMerge};

/// Merge `extra` into `base` with the Tailwind policy.
pub fn cn(base: &str, extra: Option<&str>) -> String {
    TailwindMerge.merge(base, extra.unwrap_or_default())
}

/// Whitespace-separated tokens of a class string.
pub fn tokens(class: &str) -> impl Iterator<Item = &str> {
    class.split_whitespace()
}
