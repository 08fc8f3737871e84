// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Actions applied to a picked strip

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::PickError;
use crate::host::{HostWindow, StripMutator};

/// What to do with the strip under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickAction {
    /// Make the strip the active strip
    #[default]
    Select,
    /// Print the strip name to the diagnostic console
    PrintName,
    /// Mute the strip
    Mute,
    /// Unmute the strip
    Unmute,
}

impl PickAction {
    pub const ALL: [PickAction; 4] = [
        PickAction::Select,
        PickAction::PrintName,
        PickAction::Mute,
        PickAction::Unmute,
    ];

    /// Configuration name of this action
    pub fn as_str(self) -> &'static str {
        match self {
            PickAction::Select => "select",
            PickAction::PrintName => "print_name",
            PickAction::Mute => "mute",
            PickAction::Unmute => "unmute",
        }
    }

    /// Whether a pick with this action changes the scene (and so should be
    /// recorded as an undo step by the host)
    pub fn modifies_scene(self) -> bool {
        !matches!(self, PickAction::PrintName)
    }

    /// Apply the action to `entity` and return the info report text
    pub fn apply<C>(self, ctx: &mut C, entity: C::Entity) -> String
    where
        C: StripMutator + HostWindow,
    {
        let name = ctx.strip_name(entity);
        match self {
            PickAction::Select => {
                ctx.set_active(entity);
                format!("Selected: {name}")
            }
            PickAction::PrintName => {
                ctx.print_diagnostic(&format!("Picked Strip Name: {name}"));
                format!("Printed '{name}' to console")
            }
            PickAction::Mute => {
                ctx.set_muted(entity, true);
                format!("Muted: {name}")
            }
            PickAction::Unmute => {
                ctx.set_muted(entity, false);
                format!("Unmuted: {name}")
            }
        }
    }
}

impl FromStr for PickAction {
    type Err = PickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PickAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| PickError::UnrecognizedAction(s.to_string()))
    }
}

impl fmt::Display for PickAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
