// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Sequencer data model

pub mod entity_id;
pub mod scene;
pub mod strip;

pub use entity_id::StripId;
pub use scene::Scene;
pub use strip::Strip;
