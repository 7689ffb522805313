// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board state-transition engine.
//!
//! Interprets drop events into status transitions, applies the optimistic
//! local mutation, and reconciles once the remote update resolves. The
//! engine is sans-IO: [`BoardEngine::on_drop`] returns a
//! [`DropOutcome::Dispatched`] transition that the caller must send to the
//! remote ticket API, and the in-flight window is closed by an explicit
//! [`BoardEngine::settle`] with the terminal outcome.
//!
//! The per-ticket `pending` flag is the only concurrency control: at most
//! one transition per ticket is in flight at a time, while transitions for
//! different tickets proceed independently and may settle in any order. A
//! drop on a pending ticket is refused rather than raced; there is no
//! cancellation.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::store::TicketStore;
use crate::ticket::{Status, Ticket, TicketPatch};

/// A drop gesture, as resolved by the host UI's drag layer: the dragged
/// ticket and the drop target (a column id), if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    /// Id of the dragged ticket.
    pub dragged_id: String,
    /// Id of the column the card was released over. None when the card was
    /// dropped outside any column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub over_target_id: Option<String>,
}

impl DropEvent {
    /// A drop onto the named column.
    pub fn new(dragged_id: impl Into<String>, over_target: impl Into<String>) -> Self {
        DropEvent {
            dragged_id: dragged_id.into(),
            over_target_id: Some(over_target.into()),
        }
    }

    /// A drop that landed outside every column.
    pub fn without_target(dragged_id: impl Into<String>) -> Self {
        DropEvent {
            dragged_id: dragged_id.into(),
            over_target_id: None,
        }
    }
}

/// An accepted status transition, created when a drop event is interpreted
/// and consumed by the remote dispatch. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragTransition {
    pub ticket_id: String,
    pub from: Status,
    pub to: Status,
}

/// Result of interpreting a drop event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing happened and nothing must be dispatched.
    Ignored(IgnoreReason),
    /// The optimistic mutation was applied and the ticket is pending; the
    /// caller must issue the remote update for this transition and report
    /// the outcome through [`BoardEngine::settle`].
    Dispatched(DragTransition),
}

/// Why a drop produced no transition. None of these are errors: the UI is
/// presumed stale or the gesture redundant, and the next load re-syncs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The card was released outside every column.
    NoTarget,
    /// The dragged id matches no ticket in the store.
    UnknownTicket,
    /// The destination equals the ticket's current column.
    SameColumn,
    /// A prior transition for this ticket has not settled yet.
    AlreadyPending,
}

/// Terminal outcome of the remote status update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// The server accepted the update and returned the canonical record.
    Success(Ticket),
    /// The server rejected the update (or the call failed), with a reason.
    Failure(String),
}

/// The board's drag-drop state machine.
///
/// Holds the set of ticket ids with an in-flight transition. The flag is
/// engine-local and never part of the persisted ticket.
#[derive(Debug, Default)]
pub struct BoardEngine {
    pending: HashSet<String>,
}

impl BoardEngine {
    /// Creates an engine with no in-flight transitions.
    pub fn new() -> Self {
        BoardEngine::default()
    }

    /// Interprets a drop event against the store.
    ///
    /// An absent target, an unknown ticket, a self-drop, or a still-pending
    /// ticket yields `Ignored` with no mutation and no dispatch. A
    /// destination outside the fixed column set is rejected with
    /// [`Error::InvalidColumn`], also with no mutation. Otherwise the
    /// ticket is marked pending, `status = dest` is applied to the store
    /// immediately, and the accepted transition is returned for dispatch.
    pub fn on_drop(&mut self, store: &mut TicketStore, event: &DropEvent) -> Result<DropOutcome> {
        let target = match &event.over_target_id {
            Some(target) => target,
            None => return Ok(DropOutcome::Ignored(IgnoreReason::NoTarget)),
        };

        let from = match store.get(&event.dragged_id) {
            Some(ticket) => ticket.status,
            None => return Ok(DropOutcome::Ignored(IgnoreReason::UnknownTicket)),
        };

        let dest = Status::from_str(target).map_err(|_| Error::InvalidColumn(target.clone()))?;

        if !from.can_transition_to(dest) {
            return Ok(DropOutcome::Ignored(IgnoreReason::SameColumn));
        }

        if self.pending.contains(&event.dragged_id) {
            return Ok(DropOutcome::Ignored(IgnoreReason::AlreadyPending));
        }

        self.pending.insert(event.dragged_id.clone());
        store.replace(&event.dragged_id, TicketPatch::status(dest))?;

        Ok(DropOutcome::Dispatched(DragTransition {
            ticket_id: event.dragged_id.clone(),
            from,
            to: dest,
        }))
    }

    /// Reconciles a dispatched transition with its terminal outcome.
    ///
    /// Clears the ticket's pending flag either way. On success the server's
    /// canonical record is folded into the store (the status itself was
    /// already applied optimistically). On failure the optimistic mutation
    /// is NOT rolled back; the error carries the ticket id and the
    /// attempted status so the caller can decide whether to retry or
    /// revert. Settling a transition that is no longer pending is a no-op.
    pub fn settle(
        &mut self,
        store: &mut TicketStore,
        transition: &DragTransition,
        outcome: UpdateOutcome,
    ) -> Result<()> {
        if !self.pending.remove(&transition.ticket_id) {
            return Ok(());
        }
        match outcome {
            UpdateOutcome::Success(ticket) => {
                store.upsert_one(ticket);
                Ok(())
            }
            UpdateOutcome::Failure(reason) => Err(Error::RemoteUpdateFailed {
                ticket_id: transition.ticket_id.clone(),
                status: transition.to,
                reason,
            }),
        }
    }

    /// True while a transition for this ticket is awaiting its outcome.
    /// The UI uses this to suppress redundant drags and show an in-flight
    /// indicator on the card.
    pub fn is_pending(&self, ticket_id: &str) -> bool {
        self.pending.contains(ticket_id)
    }

    /// Number of tickets with an in-flight transition.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
