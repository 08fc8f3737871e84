// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Capabilities the picker needs from its host.
//!
//! The picker never owns strip storage. It reads footprints and issues
//! single-field mutations through these traits, and talks to the user only
//! through the report and cursor methods of [`HostWindow`]. All calls are
//! synchronous and happen on the host's event-dispatch thread.

use kurbo::Rect;

use crate::editing::{AreaKind, RegionId, ViewState};

/// Severity of a user-visible report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportLevel {
    Info,
    Warning,
}

/// Cursor shapes the picker asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorKind {
    #[default]
    Default,
    /// Shown for the whole time pick mode is running
    Eyedropper,
}

/// Access to the scroll/zoom state of a region
pub trait ViewSource {
    /// Current view state of `region`, or None if the region has no 2D view
    fn view_state(&self, region: RegionId) -> Option<ViewState>;
}

/// Read access to the strips that can be picked
pub trait StripSource {
    /// Opaque handle for a strip
    type Entity: Copy;

    /// Fresh snapshot of every strip footprint, in hit-test order
    fn current_rects(&self) -> Vec<(Self::Entity, Rect)>;

    /// Identifying name of a strip, used in reports
    fn strip_name(&self, entity: Self::Entity) -> String;
}

/// Mutations a pick action can perform on a strip
pub trait StripMutator: StripSource {
    /// Make `entity` the single active strip
    fn set_active(&mut self, entity: Self::Entity);

    /// Set or clear the mute flag of `entity`
    fn set_muted(&mut self, entity: Self::Entity, muted: bool);
}

/// The window/area the picker was invoked from
pub trait HostWindow {
    /// Type of the area the operator runs in
    fn area(&self) -> AreaKind;

    /// Fire-and-forget user-visible report
    fn report(&mut self, level: ReportLevel, message: &str);

    /// Write a line to the diagnostic console
    fn print_diagnostic(&mut self, line: &str);

    /// Override the cursor while modal
    fn set_modal_cursor(&mut self, cursor: CursorKind);

    /// Undo the last `set_modal_cursor`
    fn restore_cursor(&mut self);

    /// Record the edits made so far as one named undo step
    fn push_undo_step(&mut self, name: &str);
}

/// Everything a pick session needs, in one bound
pub trait PickContext: ViewSource + StripMutator + HostWindow {}

impl<T> PickContext for T where T: ViewSource + StripMutator + HostWindow {}
