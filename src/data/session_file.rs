// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Session files: a scene, a view and a scripted list of input events.
//!
//! Session files are TOML by default; files with a `.json` extension are
//! read as JSON. A minimal file looks like:
//!
//! ```toml
//! action = "mute"
//!
//! [view]
//! scroll = [0.0, 0.0]
//! zoom = [4.0, 40.0]
//!
//! [[strips]]
//! name = "Intro"
//! channel = 1
//! frame_start = 1.0
//! frame_final_end = 48.0
//!
//! [[events]]
//! kind = "left_mouse"
//! x = 80.0
//! y = 30.0
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use kurbo::{Point, Vec2};
use serde::Deserialize;

use super::context::SequencerContext;
use crate::editing::{AreaKind, ButtonState, EventKind, PickEvent, RegionId, ViewState};
use crate::model::{Scene, Strip};
use crate::picker::{PickAction, PickError};
use crate::settings;

/// Region every scripted event is delivered to
pub const MAIN_REGION: RegionId = RegionId(0);

/// Top-level session file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionFile {
    /// Area the picker is invoked from
    #[serde(default)]
    pub area: AreaKind,
    /// Action name; parsed when the session starts
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub view: ViewEntry,
    #[serde(default)]
    pub strips: Vec<StripEntry>,
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

/// Scroll/zoom of the main region
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewEntry {
    #[serde(default)]
    pub scroll: [f64; 2],
    #[serde(default = "default_zoom")]
    pub zoom: [f64; 2],
}

impl Default for ViewEntry {
    fn default() -> Self {
        Self {
            scroll: [0.0, 0.0],
            zoom: default_zoom(),
        }
    }
}

/// One strip in the scene, in hit-test order
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StripEntry {
    pub name: String,
    pub channel: u32,
    pub frame_start: f64,
    pub frame_final_end: f64,
    #[serde(default = "default_scale_y")]
    pub scale_y: f64,
    #[serde(default)]
    pub mute: bool,
}

/// One scripted input event
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SessionEvent {
    pub kind: EventKind,
    #[serde(default)]
    pub state: ButtonState,
    /// Region-space pixel position
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Area the event comes from (defaults to the file's area)
    #[serde(default)]
    pub area: Option<AreaKind>,
    /// Simulate the pointer being outside any region
    #[serde(default)]
    pub outside_region: bool,
}

fn default_zoom() -> [f64; 2] {
    [settings::view::DEFAULT_ZOOM, settings::view::DEFAULT_ZOOM]
}

fn default_scale_y() -> f64 {
    settings::strip::DEFAULT_SCALE_Y
}

impl SessionFile {
    /// Load a session file, picking the format from the extension
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;

        if is_json_file(path) {
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse JSON session {}", path.display()))
        } else {
            Self::from_toml_str(&text)
                .with_context(|| format!("Failed to parse session {}", path.display()))
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse the configured action, defaulting to select
    pub fn action(&self) -> Result<PickAction, PickError> {
        match &self.action {
            Some(name) => name.parse(),
            None => Ok(PickAction::default()),
        }
    }

    /// View state of the main region, rejecting unusable zoom factors
    pub fn view_state(&self) -> Result<ViewState> {
        let [zx, zy] = self.view.zoom;
        if !(zx.is_finite() && zy.is_finite()) || zx == 0.0 || zy == 0.0 {
            bail!("View zoom must be finite and non-zero, got [{zx}, {zy}]");
        }
        let [sx, sy] = self.view.scroll;
        Ok(ViewState::new(Vec2::new(sx, sy), Vec2::new(zx, zy)))
    }

    /// Scripted events as picker input
    pub fn pick_events(&self) -> Vec<PickEvent> {
        self.events
            .iter()
            .map(|event| event.to_pick_event(self.area))
            .collect()
    }

    /// Build the host context described by this file
    pub fn to_context(&self) -> Result<SequencerContext> {
        let view = self.view_state()?;
        let scene: Scene = self.strips.iter().map(StripEntry::to_strip).collect();
        Ok(SequencerContext::new(scene, self.area).with_region(MAIN_REGION, view))
    }
}

impl StripEntry {
    pub fn to_strip(&self) -> Strip {
        let mut strip = Strip::new(
            self.name.clone(),
            self.channel,
            self.frame_start,
            self.frame_final_end,
        )
        .with_scale_y(self.scale_y);
        strip.mute = self.mute;
        strip
    }
}

impl SessionEvent {
    fn to_pick_event(self, default_area: AreaKind) -> PickEvent {
        PickEvent {
            kind: self.kind,
            state: self.state,
            region_pos: Point::new(self.x, self.y),
            area: self.area.unwrap_or(default_area),
            region: (!self.outside_region).then_some(MAIN_REGION),
        }
    }
}

/// Check if a path has a `.json` extension
fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        action = "mute"

        [view]
        scroll = [5.0, 0.25]
        zoom = [4.0, 40.0]

        [[strips]]
        name = "Intro"
        channel = 1
        frame_start = 10.0
        frame_final_end = 50.0

        [[strips]]
        name = "Music"
        channel = 2
        frame_start = 0.0
        frame_final_end = 200.0
        scale_y = 0.5
        mute = true

        [[events]]
        kind = "mouse_move"
        x = 10.0

        [[events]]
        kind = "left_mouse"
        x = 80.0
        y = 30.0

        [[events]]
        kind = "left_mouse"
        area = "timeline"
        outside_region = true
    "#;

    #[test]
    fn parses_sample_session() {
        let file = SessionFile::from_toml_str(SAMPLE).unwrap();
        assert_eq!(file.area, AreaKind::SequenceEditor);
        assert_eq!(file.action(), Ok(PickAction::Mute));
        assert_eq!(file.strips.len(), 2);
        assert_eq!(file.strips[0].scale_y, 1.0);
        assert!(file.strips[1].mute);
    }

    #[test]
    fn events_default_to_file_area_and_main_region() {
        let file = SessionFile::from_toml_str(SAMPLE).unwrap();
        let events = file.pick_events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].kind, EventKind::LeftMouse);
        assert_eq!(events[1].state, ButtonState::Press);
        assert_eq!(events[1].region_pos, Point::new(80.0, 30.0));
        assert_eq!(events[1].region, Some(MAIN_REGION));
        assert_eq!(events[2].area, AreaKind::Timeline);
        assert_eq!(events[2].region, None);
    }

    #[test]
    fn context_carries_scene_and_view() {
        let file = SessionFile::from_toml_str(SAMPLE).unwrap();
        let ctx = file.to_context().unwrap();
        assert_eq!(ctx.scene().len(), 2);
        assert_eq!(
            ctx.view_of(MAIN_REGION),
            Some(ViewState::new(Vec2::new(5.0, 0.25), Vec2::new(4.0, 40.0)))
        );
    }

    #[test]
    fn missing_action_defaults_to_select() {
        let file = SessionFile::from_toml_str("").unwrap();
        assert_eq!(file.action(), Ok(PickAction::Select));
        assert_eq!(file.view_state().unwrap(), ViewState::default());
    }

    #[test]
    fn unknown_action_fails_at_parse_time() {
        let file = SessionFile::from_toml_str(r#"action = "explode""#).unwrap();
        assert_eq!(
            file.action(),
            Err(PickError::UnrecognizedAction("explode".to_string()))
        );
    }

    #[test]
    fn zero_zoom_is_rejected() {
        let file = SessionFile::from_toml_str("[view]\nzoom = [0.0, 1.0]").unwrap();
        assert!(file.view_state().is_err());
        assert!(file.to_context().is_err());
    }

    #[test]
    fn json_sessions_parse_with_same_schema() {
        let json = r#"{
            "area": "outliner",
            "strips": [
                {"name": "A", "channel": 3, "frame_start": 0.0, "frame_final_end": 4.0}
            ],
            "events": [{"kind": "escape"}]
        }"#;
        let file: SessionFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.area, AreaKind::Outliner);
        assert_eq!(file.strips[0].channel, 3);
        assert_eq!(file.pick_events()[0].kind, EventKind::Escape);
    }

    #[test]
    fn json_extension_detection() {
        assert!(is_json_file(Path::new("session.json")));
        assert!(is_json_file(Path::new("/tmp/SESSION.JSON")));
        assert!(!is_json_file(Path::new("session.toml")));
        assert!(!is_json_file(Path::new("session")));
    }
}
