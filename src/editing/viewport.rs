// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Region-to-view coordinate mapping.
//!
//! A region reports its own scroll offset and zoom. The mapping is applied
//! independently per axis: `logical = pixel / zoom + scroll`. The view state
//! always comes from the host; it is never derived or cached here.

use kurbo::{Point, Vec2};

use crate::settings;

/// Scroll and zoom of one scrollable region, as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// View-space coordinate shown at the region's pixel origin
    pub scroll_offset: Vec2,
    /// Pixels per view unit on each axis (must be non-zero)
    pub zoom: Vec2,
}

impl ViewState {
    pub fn new(scroll_offset: Vec2, zoom: Vec2) -> Self {
        Self { scroll_offset, zoom }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scroll_offset: Vec2::ZERO,
            zoom: Vec2::new(settings::view::DEFAULT_ZOOM, settings::view::DEFAULT_ZOOM),
        }
    }
}

/// Convert a region-space pixel position to view (logical) coordinates
pub fn to_logical(point_px: Point, view: &ViewState) -> Point {
    Point::new(
        point_px.x / view.zoom.x + view.scroll_offset.x,
        point_px.y / view.zoom.y + view.scroll_offset.y,
    )
}

/// Convert a view (logical) position back to region-space pixels
pub fn to_region(point_logical: Point, view: &ViewState) -> Point {
    Point::new(
        (point_logical.x - view.scroll_offset.x) * view.zoom.x,
        (point_logical.y - view.scroll_offset.y) * view.zoom.y,
    )
}
