// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! A single timeline strip and its footprint in view space.

use kurbo::Rect;

use super::entity_id::StripId;
use crate::settings;

/// A timeline element occupying a frame range on one channel
#[derive(Debug, Clone, PartialEq)]
pub struct Strip {
    pub id: StripId,
    pub name: String,
    /// Integer lane index; the strip is vertically centered on it
    pub channel: u32,
    /// First frame covered by the strip (inclusive)
    pub frame_start: f64,
    /// Frame after the last frame covered (exclusive)
    pub frame_final_end: f64,
    /// Vertical scale of the strip relative to one channel
    pub scale_y: f64,
    /// Whether the strip is muted (hidden from playback)
    pub mute: bool,
}

impl Strip {
    /// Create an unmuted strip with default vertical scale
    pub fn new(
        name: impl Into<String>,
        channel: u32,
        frame_start: f64,
        frame_final_end: f64,
    ) -> Self {
        Self {
            id: StripId::next(),
            name: name.into(),
            channel,
            frame_start,
            frame_final_end,
            scale_y: settings::strip::DEFAULT_SCALE_Y,
            mute: false,
        }
    }

    /// Builder-style vertical scale override
    pub fn with_scale_y(mut self, scale_y: f64) -> Self {
        self.scale_y = scale_y;
        self
    }

    /// Rectangle covered by this strip in view space.
    ///
    /// Horizontally this is `[frame_start, frame_final_end)`. Vertically it
    /// is a band of `scale_y` channel heights centered on `channel`.
    pub fn footprint(&self) -> Rect {
        let half_height = 0.5 * self.scale_y * settings::strip::CHANNEL_HEIGHT;
        let center = f64::from(self.channel);
        Rect::new(
            self.frame_start,
            center - half_height,
            self.frame_final_end,
            center + half_height,
        )
    }
}
