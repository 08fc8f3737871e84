// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for strips.
//!
//! Each `StripId` is a monotonically increasing `u64` generated from a global
//! atomic counter. IDs are the opaque handles the picker hands back to the
//! host when a click lands on a strip. They are never reused within a
//! process, so a deleted strip leaves no dangling reference behind.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a strip in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StripId(u64);

static STRIP_COUNTER: AtomicU64 = AtomicU64::new(1);

impl StripId {
    /// Create a new unique strip ID
    pub fn next() -> Self {
        Self(STRIP_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for StripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "strip#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = StripId::next();
        let b = StripId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
