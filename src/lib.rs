// Copyright 2025 the Strip Picker Authors
// SPDX-License-Identifier: Apache-2.0

//! Strip Picker: click-to-pick for sequencer timeline strips.
//!
//! The library core is [`picker::PickSession`], a modal state machine that
//! maps a click from region pixels into view space
//! ([`editing::to_logical`]), finds the strip under it
//! ([`editing::hit_test`]) and applies a [`picker::PickAction`] through
//! the host capabilities in [`host`]. [`data::SequencerContext`] is a
//! ready-made in-memory host used by the `strip-picker` binary.

pub mod data;
pub mod editing;
pub mod host;
pub mod model;
pub mod picker;
pub mod settings;

use std::path::PathBuf;

use anyhow::{Result, bail};

use data::SessionFile;
use host::ReportLevel;
use picker::{ModalStatus, PickAction, PickSession};

/// Entry point for the `strip-picker` binary
pub fn run() -> Result<()> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(settings::logging::DEFAULT_DIRECTIVE.parse()?),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let args = parse_command_line_args(std::env::args().skip(1))?;
    let file = SessionFile::load(&args.session_path)?;

    // The action is configuration: an unknown name stops here, before any
    // session exists
    let action = match &args.action {
        Some(name) => name.parse::<PickAction>()?,
        None => file.action()?,
    };

    let mut ctx = file.to_context()?;
    let events = file.pick_events();
    tracing::info!(
        "Loaded {} strips and {} events from {}",
        ctx.scene().len(),
        events.len(),
        args.session_path.display()
    );

    let mut session = PickSession::new(action);
    match session.invoke(&mut ctx) {
        Ok(_) => {
            for (index, event) in events.iter().enumerate() {
                match session.handle_event(&mut ctx, event) {
                    Ok(ModalStatus::RunningModal) => {
                        tracing::debug!("Event {}: {:?} -> running", index, event.kind);
                    }
                    Ok(status) => {
                        tracing::info!("Event {}: {:?} -> {:?}", index, event.kind, status);
                        break;
                    }
                    Err(e) => {
                        tracing::warn!("Event {}: {}", index, e);
                        break;
                    }
                }
            }
            if session.is_active() {
                tracing::info!("Event script ended with pick mode still running");
            }
        }
        Err(e) => tracing::warn!("Could not start pick mode: {}", e),
    }

    print_summary(&ctx, &session);
    Ok(())
}

#[derive(Debug, PartialEq)]
struct Args {
    session_path: PathBuf,
    action: Option<String>,
}

/// Parse `<session-file> [--action <name>]` (program name already skipped)
fn parse_command_line_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut session_path = None;
    let mut action = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--action" {
            match args.next() {
                Some(name) => action = Some(name),
                None => bail!("--action needs a value (select|print_name|mute|unmute)"),
            }
        } else if session_path.is_none() {
            session_path = Some(PathBuf::from(arg));
        } else {
            bail!("Unexpected argument: {arg}");
        }
    }

    let Some(session_path) = session_path else {
        bail!("Usage: strip-picker <session.toml|session.json> [--action <name>]");
    };
    Ok(Args {
        session_path,
        action,
    })
}

fn print_summary(ctx: &data::SequencerContext, session: &PickSession<model::StripId>) {
    for report in ctx.reports() {
        let level = match report.level {
            ReportLevel::Info => "INFO",
            ReportLevel::Warning => "WARNING",
        };
        println!("[{level}] {}", report.message);
    }

    println!("session: {:?} (action: {})", session.mode(), session.action());
    for step in ctx.undo_steps() {
        println!("undo step: {step}");
    }
    let active = ctx.scene().active_strip();
    for strip in ctx.scene().iter() {
        println!(
            "{:>2} {:<20} ch {:>3}  [{}, {})  {}{}",
            if Some(strip.id) == active { "*" } else { "" },
            strip.name,
            strip.channel,
            strip.frame_start,
            strip.frame_final_end,
            if strip.mute { "muted" } else { "" },
            if session.picked() == Some(strip.id) { "  <- picked" } else { "" },
        );
    }
}
