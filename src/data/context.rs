// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! `SequencerContext`: a self-contained host for pick sessions.
//!
//! It owns a [`Scene`], the view state of each region and a log of every
//! report and diagnostic line the picker produced. Reports are mirrored to
//! `tracing` so they show up in the console as well.

use std::collections::BTreeMap;

use kurbo::Rect;

use crate::editing::{AreaKind, RegionId, ViewState};
use crate::host::{CursorKind, HostWindow, ReportLevel, StripMutator, StripSource, ViewSource};
use crate::model::{Scene, StripId};

/// A report emitted through [`HostWindow::report`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: ReportLevel::Warning,
            message: message.into(),
        }
    }
}

/// Sequence editor area with its regions, strips and user-facing output
#[derive(Debug, Clone)]
pub struct SequencerContext {
    scene: Scene,
    area: AreaKind,
    regions: BTreeMap<RegionId, ViewState>,
    /// Cursor set by the running modal operator, if any
    modal_cursor: Option<CursorKind>,
    reports: Vec<Report>,
    diagnostics: Vec<String>,
    undo_steps: Vec<String>,
}

impl SequencerContext {
    pub fn new(scene: Scene, area: AreaKind) -> Self {
        Self {
            scene,
            area,
            regions: BTreeMap::new(),
            modal_cursor: None,
            reports: Vec::new(),
            diagnostics: Vec::new(),
            undo_steps: Vec::new(),
        }
    }

    /// Add (or replace) a region with a 2D view
    pub fn with_region(mut self, region: RegionId, view: ViewState) -> Self {
        self.regions.insert(region, view);
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn view_of(&self, region: RegionId) -> Option<ViewState> {
        self.regions.get(&region).copied()
    }

    /// Cursor currently shown over the area
    pub fn cursor(&self) -> CursorKind {
        self.modal_cursor.unwrap_or_default()
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Lines written to the diagnostic console, oldest first
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Names of the undo steps recorded, oldest first
    pub fn undo_steps(&self) -> &[String] {
        &self.undo_steps
    }
}

impl ViewSource for SequencerContext {
    fn view_state(&self, region: RegionId) -> Option<ViewState> {
        self.view_of(region)
    }
}

impl StripSource for SequencerContext {
    type Entity = StripId;

    fn current_rects(&self) -> Vec<(StripId, Rect)> {
        self.scene.iter().map(|s| (s.id, s.footprint())).collect()
    }

    fn strip_name(&self, entity: StripId) -> String {
        match self.scene.get(entity) {
            Some(strip) => strip.name.clone(),
            None => {
                tracing::warn!("Name requested for unknown strip {}", entity);
                entity.to_string()
            }
        }
    }
}

impl StripMutator for SequencerContext {
    fn set_active(&mut self, entity: StripId) {
        self.scene.set_active_strip(entity);
    }

    fn set_muted(&mut self, entity: StripId, muted: bool) {
        match self.scene.get_mut(entity) {
            Some(strip) => strip.mute = muted,
            None => tracing::warn!("Ignoring mute change on unknown strip {}", entity),
        }
    }
}

impl HostWindow for SequencerContext {
    fn area(&self) -> AreaKind {
        self.area
    }

    fn report(&mut self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Info => tracing::info!("{}", message),
            ReportLevel::Warning => tracing::warn!("{}", message),
        }
        self.reports.push(Report {
            level,
            message: message.to_string(),
        });
    }

    fn print_diagnostic(&mut self, line: &str) {
        println!("{line}");
        self.diagnostics.push(line.to_string());
    }

    fn set_modal_cursor(&mut self, cursor: CursorKind) {
        self.modal_cursor = Some(cursor);
    }

    fn restore_cursor(&mut self) {
        self.modal_cursor = None;
    }

    fn push_undo_step(&mut self, name: &str) {
        tracing::debug!("Undo step: {}", name);
        self.undo_steps.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Strip;

    fn context() -> (SequencerContext, StripId, StripId) {
        let mut scene = Scene::new();
        let a = scene.push(Strip::new("A", 1, 0.0, 10.0));
        let b = scene.push(Strip::new("B", 2, 5.0, 15.0).with_scale_y(0.5));
        (SequencerContext::new(scene, AreaKind::SequenceEditor), a, b)
    }

    #[test]
    fn rects_follow_scene_order_and_footprints() {
        let (ctx, a, b) = context();
        let rects = ctx.current_rects();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0], (a, Rect::new(0.0, 0.5, 10.0, 1.5)));
        assert_eq!(rects[1], (b, Rect::new(5.0, 1.75, 15.0, 2.25)));
    }

    #[test]
    fn mute_and_activate_through_mutator() {
        let (mut ctx, a, b) = context();
        ctx.set_muted(b, true);
        ctx.set_active(a);
        assert!(ctx.scene().get(b).is_some_and(|s| s.mute));
        assert_eq!(ctx.scene().active_strip(), Some(a));
    }

    #[test]
    fn cursor_restores_to_default() {
        let (mut ctx, _, _) = context();
        ctx.set_modal_cursor(CursorKind::Eyedropper);
        assert_eq!(ctx.cursor(), CursorKind::Eyedropper);
        ctx.restore_cursor();
        assert_eq!(ctx.cursor(), CursorKind::Default);
    }

    #[test]
    fn reports_are_recorded_in_order() {
        let (mut ctx, _, _) = context();
        ctx.report(ReportLevel::Info, "one");
        ctx.report(ReportLevel::Warning, "two");
        assert_eq!(ctx.reports(), &[Report::info("one"), Report::warning("two")]);
    }

    #[test]
    fn unknown_region_has_no_view() {
        let (ctx, _, _) = context();
        let ctx = ctx.with_region(RegionId(1), ViewState::default());
        assert!(ctx.view_state(RegionId(1)).is_some());
        assert!(ctx.view_state(RegionId(2)).is_none());
    }
}
