// SPDX-License-Identifier: MIT OR Apache-2.0

//! Merge policies.
//!
//! A policy decides what happens when a caller-supplied class string is
//! combined with a component's default classes. [`TailwindMerge`] resolves
//! conflicting utility classes in favour of the caller; [`ConcatMerge`]
//! keeps every token from both sides.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tailwind_fuse::tw_merge;

use crate::error::ParsePolicyError;
use crate::tokens;

/// Combines a base class string with caller overrides.
pub trait ClassMerge {
    /// Merge `overrides` into `base`. Tokens from `overrides` come last.
    fn merge(&self, base: &str, overrides: &str) -> String;
}

/// Conflict-aware merge backed by `tailwind_fuse`.
///
/// When two utilities target the same CSS property (`bg-muted` and
/// `bg-red-500`, `px-2` and `px-4`) only the later one survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TailwindMerge;

impl ClassMerge for TailwindMerge {
    fn merge(&self, base: &str, overrides: &str) -> String {
        if overrides.trim().is_empty() {
            return normalize(base);
        }
        tw_merge!(base, overrides)
    }
}

/// Plain concatenation. Never drops a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcatMerge;

impl ClassMerge for ConcatMerge {
    fn merge(&self, base: &str, overrides: &str) -> String {
        tokens(base)
            .chain(tokens(overrides))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn normalize(class: &str) -> String {
    tokens(class).collect::<Vec<_>>().join(" ")
}

/// Named merge policies, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    #[default]
    Tailwind,
    Concat,
}

impl MergePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergePolicy::Tailwind => "tailwind",
            MergePolicy::Concat => "concat",
        }
    }

    /// Build the merger implementing this policy.
    pub fn merger(&self) -> ClassMerger {
        match self {
            MergePolicy::Tailwind => ClassMerger::new(TailwindMerge),
            MergePolicy::Concat => ClassMerger::new(ConcatMerge),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MergePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tailwind" => Ok(MergePolicy::Tailwind),
            "concat" => Ok(MergePolicy::Concat),
            _ => Err(ParsePolicyError::Unknown(s.to_string())),
        }
    }
}

/// Shared handle to a [`ClassMerge`] implementation.
///
/// Cloning is a reference-count bump, so the handle can live in UI context
/// and be copied into every component that needs it. Two handles compare
/// equal only when they point at the same implementation instance.
#[derive(Clone)]
pub struct ClassMerger(Rc<dyn ClassMerge>);

impl ClassMerger {
    pub fn new(merge: impl ClassMerge + 'static) -> Self {
        Self(Rc::new(merge))
    }
}

impl Default for ClassMerger {
    fn default() -> Self {
        Self::new(TailwindMerge)
    }
}

impl ClassMerge for ClassMerger {
    fn merge(&self, base: &str, overrides: &str) -> String {
        self.0.merge(base, overrides)
    }
}

impl PartialEq for ClassMerger {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ClassMerger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassMerger").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "inline-flex items-center rounded-full bg-muted px-2 py-1 text-xs font-medium";

    #[test]
    fn tailwind_without_override_keeps_base() {
        assert_eq!(TailwindMerge.merge(BASE, ""), BASE);
        assert_eq!(TailwindMerge.merge(BASE, "   "), BASE);
    }

    #[test]
    fn tailwind_override_wins_on_conflict() {
        let merged = TailwindMerge.merge(BASE, "px-4");
        let merged: Vec<&str> = tokens(&merged).collect();
        assert!(merged.contains(&"px-4"));
        assert!(!merged.contains(&"px-2"), "px-2 should be replaced: {merged:?}");
        assert!(merged.contains(&"py-1"));
    }

    #[test]
    fn tailwind_keeps_non_conflicting_tokens() {
        let merged = TailwindMerge.merge(BASE, "shadow-sm uppercase");
        for token in tokens(BASE).chain(["shadow-sm", "uppercase"]) {
            assert!(
                tokens(&merged).any(|t| t == token),
                "`{token}` missing from `{merged}`"
            );
        }
    }

    #[test]
    fn concat_keeps_everything_in_order() {
        assert_eq!(
            ConcatMerge.merge("  a  b ", "c\td\n"),
            "a b c d".to_string()
        );
        assert_eq!(ConcatMerge.merge("px-2", "px-4"), "px-2 px-4");
        assert_eq!(ConcatMerge.merge("", ""), "");
    }

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("Tailwind".parse(), Ok(MergePolicy::Tailwind));
        assert_eq!(" concat ".parse(), Ok(MergePolicy::Concat));
        assert_eq!(
            "fancy".parse::<MergePolicy>(),
            Err(ParsePolicyError::Unknown("fancy".to_string()))
        );
    }

    #[test]
    fn policy_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&MergePolicy::Concat).unwrap();
        assert_eq!(json, "\"concat\"");
        let parsed: MergePolicy = serde_json::from_str("\"tailwind\"").unwrap();
        assert_eq!(parsed, MergePolicy::Tailwind);
    }

    #[test]
    fn policy_merger_dispatches() {
        assert_eq!(MergePolicy::Concat.merger().merge("px-2", "px-4"), "px-2 px-4");
        assert_eq!(MergePolicy::Tailwind.merger().merge("px-2", "px-4"), "px-4");
    }

    #[test]
    fn merger_equality_is_identity() {
        let a = ClassMerger::default();
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, ClassMerger::default());
    }
}
