// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Scene data: the ordered strip collection and the active strip.
//!
//! Strips are kept in their natural collection order. That order is also
//! the hit-test order, so when strips overlap the earlier one wins.

use super::entity_id::StripId;
use super::strip::Strip;

/// The strips of one sequence editor, plus which one is active
#[derive(Debug, Clone, Default)]
pub struct Scene {
    strips: Vec<Strip>,
    active_strip: Option<StripId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a strip and return its id
    pub fn push(&mut self, strip: Strip) -> StripId {
        let id = strip.id;
        self.strips.push(strip);
        id
    }

    pub fn len(&self) -> usize {
        self.strips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }

    /// Iterate strips in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Strip> {
        self.strips.iter()
    }

    pub fn get(&self, id: StripId) -> Option<&Strip> {
        self.strips.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: StripId) -> Option<&mut Strip> {
        self.strips.iter_mut().find(|s| s.id == id)
    }

    pub fn active_strip(&self) -> Option<StripId> {
        self.active_strip
    }

    /// Make `id` the single active strip. Unknown ids are ignored.
    pub fn set_active_strip(&mut self, id: StripId) {
        if self.get(id).is_some() {
            self.active_strip = Some(id);
        } else {
            tracing::warn!("Ignoring activation of unknown strip {}", id);
        }
    }
}

impl FromIterator<Strip> for Scene {
    fn from_iter<I: IntoIterator<Item = Strip>>(iter: I) -> Self {
        Self {
            strips: iter.into_iter().collect(),
            active_strip: None,
        }
    }
}
