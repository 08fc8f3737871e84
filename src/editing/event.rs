// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Input events delivered by the host while pick mode is running

use kurbo::Point;
use serde::Deserialize;

/// Kind of input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Primary mouse button
    LeftMouse,
    /// Secondary mouse button
    RightMouse,
    /// Escape key
    Escape,
    /// Pointer motion without a button change
    MouseMove,
    /// Anything else (other keys, wheel, timers)
    Other,
}

/// Press/release state of a button or key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonState {
    #[default]
    Press,
    Release,
}

/// Host-defined screen area types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    /// The video sequence editor, the only area pick mode works in
    #[default]
    SequenceEditor,
    Timeline,
    Outliner,
    Properties,
}

/// Opaque handle for a region inside an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct RegionId(pub u32);

/// A single input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickEvent {
    pub kind: EventKind,
    pub state: ButtonState,
    /// Pointer position relative to the region origin, in pixels
    pub region_pos: Point,
    /// Area the event was delivered in
    pub area: AreaKind,
    /// Region under the pointer, if any
    pub region: Option<RegionId>,
}

impl PickEvent {
    pub fn new(kind: EventKind, state: ButtonState, region_pos: Point, region: RegionId) -> Self {
        Self {
            kind,
            state,
            region_pos,
            area: AreaKind::SequenceEditor,
            region: Some(region),
        }
    }

    /// Primary button press in a sequencer region
    pub fn left_click(region_pos: Point, region: RegionId) -> Self {
        Self::new(EventKind::LeftMouse, ButtonState::Press, region_pos, region)
    }

    /// Secondary button press in a sequencer region
    pub fn right_click(region_pos: Point, region: RegionId) -> Self {
        Self::new(EventKind::RightMouse, ButtonState::Press, region_pos, region)
    }

    /// Escape key press
    pub fn escape(region: RegionId) -> Self {
        Self::new(EventKind::Escape, ButtonState::Press, Point::ZERO, region)
    }

    /// Pointer motion
    pub fn mouse_move(region_pos: Point, region: RegionId) -> Self {
        Self::new(EventKind::MouseMove, ButtonState::Press, region_pos, region)
    }

    /// Same event, reported as coming from another area
    pub fn in_area(mut self, area: AreaKind) -> Self {
        self.area = area;
        self
    }

    /// Same event, with no region under the pointer
    pub fn without_region(mut self) -> Self {
        self.region = None;
        self
    }

    /// Primary button press: the event that triggers a pick
    pub fn is_confirm(&self) -> bool {
        self.kind == EventKind::LeftMouse && self.state == ButtonState::Press
    }

    /// Secondary button or escape, in either state
    pub fn is_cancel(&self) -> bool {
        matches!(self.kind, EventKind::RightMouse | EventKind::Escape)
    }
}
