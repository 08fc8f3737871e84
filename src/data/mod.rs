// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! In-memory sequencer host and session files

mod context;
mod session_file;

pub use context::{Report, SequencerContext};
pub use session_file::{MAIN_REGION, SessionEvent, SessionFile, StripEntry, ViewEntry};
