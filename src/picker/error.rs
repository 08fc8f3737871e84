// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by pick sessions

use thiserror::Error;

use crate::editing::AreaKind;

/// Recoverable pick failures.
///
/// None of these are fatal: each is reported to the user and leaves the
/// session either unchanged (`Idle`) or terminated (`Cancelled`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// Pick mode was invoked from an area that isn't the sequence editor
    #[error("pick mode requires the sequence editor, invoked from {area:?}")]
    InvalidContext { area: AreaKind },

    /// A click arrived from outside a usable sequencer region
    #[error("click landed outside a sequencer region")]
    InvalidRegion,

    /// The configured action name isn't one of the known actions
    #[error("unknown action: {0}")]
    UnrecognizedAction(String),
}
