// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! View-space interaction: coordinate mapping, hit testing, input events

pub mod event;
pub mod viewport;

pub use event::{AreaKind, ButtonState, EventKind, PickEvent, RegionId};
pub use hit_test::hit_test;
pub use viewport::{ViewState, to_logical, to_region};
