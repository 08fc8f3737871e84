// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Pick mode: click a strip in the sequencer to apply an action to it.
//!
//! A [`PickSession`] is a small modal state machine driven one event at a
//! time by the host's dispatch loop:
//!
//! ```text
//! Idle --invoke--> Active --click on strip--> Finished
//!                    |  \--right click / esc / bad region--> Cancelled
//!                    \--click on empty space / other input--> Active
//! ```
//!
//! The session never blocks. "Waiting for a click" is the
//! [`ModalStatus::RunningModal`] return value, after which the host
//! delivers the next event. Clicking empty space keeps the session open so
//! the user can keep trying.

mod action;
mod error;

pub use action::PickAction;
pub use error::PickError;

use crate::editing::{AreaKind, PickEvent, hit_test, to_logical};
use crate::host::{CursorKind, PickContext, ReportLevel};
use crate::settings;

/// Lifecycle state of a pick session.
///
/// `Cancelled` and `Finished` are the states a session rests in after it
/// has exited pick mode. They behave like `Idle` (events pass through and
/// `invoke` starts a new pick) but remember how the last pick ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickMode {
    /// Not running; `invoke` starts a session
    #[default]
    Idle,
    /// Consuming events until a pick or cancel
    Active,
    /// Exited without applying the action
    Cancelled,
    /// Exited after applying the action to a strip
    Finished,
}

impl PickMode {
    pub fn is_terminal(self) -> bool {
        matches!(self, PickMode::Cancelled | PickMode::Finished)
    }
}

/// What the host should do after handing the session an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalStatus {
    /// Keep delivering events to this session
    RunningModal,
    /// A strip was picked and the action applied; stop delivering events
    Finished,
    /// The session was cancelled; stop delivering events
    Cancelled,
    /// The session isn't running and didn't consume the event
    PassThrough,
}

/// A single pick-mode invocation
#[derive(Debug, Clone)]
pub struct PickSession<E> {
    mode: PickMode,
    action: PickAction,
    /// Strip the last successful pick landed on
    picked: Option<E>,
}

impl<E: Copy> PickSession<E> {
    /// Create an idle session with a fixed action
    pub fn new(action: PickAction) -> Self {
        Self {
            mode: PickMode::Idle,
            action,
            picked: None,
        }
    }

    pub fn mode(&self) -> PickMode {
        self.mode
    }

    pub fn action(&self) -> PickAction {
        self.action
    }

    pub fn is_active(&self) -> bool {
        self.mode == PickMode::Active
    }

    /// Strip picked by the most recent finished session, if any
    pub fn picked(&self) -> Option<E> {
        self.picked
    }

    /// Enter pick mode.
    ///
    /// Fails with [`PickError::InvalidContext`] when invoked outside the
    /// sequence editor; the session is left as it was and the cursor is
    /// untouched. Invoking an already active session does nothing.
    ///
    /// Returning [`ModalStatus::RunningModal`] registers the session as the
    /// area's event consumer: the host routes every following event to
    /// [`handle_event`](Self::handle_event) until a terminal status.
    pub fn invoke<C>(&mut self, ctx: &mut C) -> Result<ModalStatus, PickError>
    where
        C: PickContext<Entity = E>,
    {
        if self.is_active() {
            tracing::debug!("Pick session already active, ignoring invoke");
            return Ok(ModalStatus::RunningModal);
        }

        let area = ctx.area();
        if area != AreaKind::SequenceEditor {
            ctx.report(ReportLevel::Warning, settings::messages::WRONG_AREA);
            return Err(PickError::InvalidContext { area });
        }

        ctx.set_modal_cursor(CursorKind::Eyedropper);
        self.mode = PickMode::Active;
        self.picked = None;
        tracing::debug!("Pick session started (action: {})", self.action);
        Ok(ModalStatus::RunningModal)
    }

    /// Consume one input event.
    ///
    /// An `Err` is always terminal: the warning has been reported, the
    /// cursor restored and the session is `Cancelled`.
    pub fn handle_event<C>(
        &mut self,
        ctx: &mut C,
        event: &PickEvent,
    ) -> Result<ModalStatus, PickError>
    where
        C: PickContext<Entity = E>,
    {
        if !self.is_active() {
            return Ok(ModalStatus::PassThrough);
        }

        if event.is_confirm() {
            self.pick(ctx, event)
        } else if event.is_cancel() {
            tracing::debug!("Pick session cancelled by {:?}", event.kind);
            Ok(self.terminate(ctx, PickMode::Cancelled))
        } else {
            Ok(ModalStatus::RunningModal)
        }
    }

    fn pick<C>(&mut self, ctx: &mut C, event: &PickEvent) -> Result<ModalStatus, PickError>
    where
        C: PickContext<Entity = E>,
    {
        let view = match (event.area, event.region) {
            (AreaKind::SequenceEditor, Some(region)) => ctx.view_state(region),
            _ => None,
        };
        let Some(view) = view else {
            ctx.report(ReportLevel::Warning, settings::messages::INVALID_REGION);
            self.terminate(ctx, PickMode::Cancelled);
            return Err(PickError::InvalidRegion);
        };

        let logical = to_logical(event.region_pos, &view);
        tracing::debug!(
            "[pick] region_pos=({}, {}) -> view=({}, {})",
            event.region_pos.x,
            event.region_pos.y,
            logical.x,
            logical.y
        );

        let Some(entity) = hit_test(logical, ctx.current_rects()) else {
            return Ok(ModalStatus::RunningModal);
        };

        let message = self.action.apply(ctx, entity);
        ctx.report(ReportLevel::Info, &message);
        if self.action.modifies_scene() {
            ctx.push_undo_step(settings::undo::STEP_NAME);
        }
        self.picked = Some(entity);
        Ok(self.terminate(ctx, PickMode::Finished))
    }

    fn terminate<C>(&mut self, ctx: &mut C, mode: PickMode) -> ModalStatus
    where
        C: PickContext<Entity = E>,
    {
        debug_assert!(mode.is_terminal());
        ctx.restore_cursor();
        self.mode = mode;
        match mode {
            PickMode::Finished => ModalStatus::Finished,
            _ => ModalStatus::Cancelled,
        }
    }
}

impl<E: Copy> Default for PickSession<E> {
    fn default() -> Self {
        Self::new(PickAction::default())
    }
}
