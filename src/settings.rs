// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Picker settings and configuration constants.
//!
//! This module holds values that stay fixed for the lifetime of the
//! process. The only runtime-configurable value is the pick action, which
//! is chosen when a session is invoked.

// ============================================================================
// STRIP GEOMETRY SETTINGS
// ============================================================================
/// Nominal height of one channel in view space
const CHANNEL_HEIGHT: f64 = 1.0;

/// Vertical scale applied to strips that don't specify one
const DEFAULT_SCALE_Y: f64 = 1.0;

// ============================================================================
// VIEW SETTINGS
// ============================================================================
/// Zoom used when a view doesn't report one (1 pixel per frame/channel)
const DEFAULT_ZOOM: f64 = 1.0;

// ============================================================================
// REPORT MESSAGES
// ============================================================================
/// Warning shown when pick mode is invoked outside the sequencer
const WRONG_AREA_MESSAGE: &str = "This operator only works in the Video Sequence Editor";

/// Warning shown when a click lands outside a usable sequencer region
const INVALID_REGION_MESSAGE: &str = "Invalid region or area for VSE";

// ============================================================================
// UNDO SETTINGS
// ============================================================================
/// Name of the undo step recorded after a pick that edits the scene
const UNDO_STEP_NAME: &str = "Pick Strip";

// ============================================================================
// LOGGING SETTINGS
// ============================================================================
/// Default tracing directive when `RUST_LOG` doesn't mention this crate
const DEFAULT_LOG_DIRECTIVE: &str = "strip_picker=info";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Strip footprint settings
pub mod strip {
    /// Nominal channel height (view units)
    pub const CHANNEL_HEIGHT: f64 = super::CHANNEL_HEIGHT;

    /// Default vertical scale for a strip
    pub const DEFAULT_SCALE_Y: f64 = super::DEFAULT_SCALE_Y;
}

/// View transform defaults
pub mod view {
    /// Default zoom on both axes
    pub const DEFAULT_ZOOM: f64 = super::DEFAULT_ZOOM;
}

/// User-visible report text
pub mod messages {
    pub const WRONG_AREA: &str = super::WRONG_AREA_MESSAGE;
    pub const INVALID_REGION: &str = super::INVALID_REGION_MESSAGE;
}

/// Undo integration
pub mod undo {
    pub const STEP_NAME: &str = super::UNDO_STEP_NAME;
}

/// Logging defaults
pub mod logging {
    pub const DEFAULT_DIRECTIVE: &str = super::DEFAULT_LOG_DIRECTIVE;
}
