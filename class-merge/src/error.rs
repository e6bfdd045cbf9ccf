// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the class-merge crate.

use thiserror::Error;

/// Returned when a merge policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePolicyError {
    #[error("unknown merge policy `{0}` (expected `tailwind` or `concat`)")]
    Unknown(String),
}
