// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The event-driven board facade.
//!
//! `BoardClient` owns the ticket store, the member snapshot, the filter
//! criteria, and the board engine, and exposes the two entry points the UI
//! event source drives (`on_drop`, `on_filter_change`) plus the queries the
//! view renders from (`visible_columns`, `distinct_labels`,
//! `has_unassigned`, ...).
//!
//! All methods run on the caller's thread; the only suspension point is
//! the `TicketApi::update_status` call made inside `on_drop`, bracketed by
//! the engine's dispatch and settle. A host whose transport completes
//! asynchronously should drive `kb_core::BoardEngine` directly instead and
//! feed completions back as events.

use kb_core::{
    BoardEngine, ColumnBucket, DragTransition, DropEvent, DropOutcome, FilterChangeEvent,
    FilterCriteria, IgnoreReason, Member, Ticket, TicketStats, TicketStore, UpdateOutcome,
};

use crate::api::{MemberDirectory, TicketApi};
use crate::error::{Error, Result};

/// What a drop event amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropResult {
    /// The gesture was redundant or stale; nothing was sent.
    Ignored(IgnoreReason),
    /// The transition was dispatched and the server confirmed it.
    Committed(DragTransition),
}

/// Client-side state for one project's kanban board.
pub struct BoardClient<A: TicketApi> {
    api: A,
    store: TicketStore,
    members: Vec<Member>,
    criteria: FilterCriteria,
    engine: BoardEngine,
}

impl<A: TicketApi> BoardClient<A> {
    /// Creates an empty board over the given remote ticket API.
    pub fn new(api: A) -> Self {
        BoardClient {
            api,
            store: TicketStore::new(),
            members: Vec::new(),
            criteria: FilterCriteria::new(),
            engine: BoardEngine::new(),
        }
    }

    /// Load-complete event: replaces the ticket and member snapshots.
    /// Filter criteria survive a reload.
    pub fn load(&mut self, tickets: Vec<Ticket>, members: Vec<Member>) {
        self.store.load(tickets);
        self.members = members;
    }

    /// Re-pulls the member set from a directory collaborator.
    pub fn refresh_members<D: MemberDirectory>(
        &mut self,
        directory: &mut D,
        project_id: &str,
    ) -> Result<()> {
        self.members = directory
            .list_members(project_id)
            .map_err(Error::Directory)?;
        Ok(())
    }

    /// Handles a drop gesture.
    ///
    /// Accepted transitions are applied to the store optimistically, sent
    /// through the ticket API exactly once, and settled with the terminal
    /// outcome. A failure surfaces as
    /// [`kb_core::Error::RemoteUpdateFailed`]; the optimistic status is
    /// left in place for the caller to retry or revert.
    pub fn on_drop(&mut self, event: &DropEvent) -> Result<DropResult> {
        let transition = match self.engine.on_drop(&mut self.store, event)? {
            DropOutcome::Ignored(reason) => {
                tracing::debug!("drop of {} ignored: {:?}", event.dragged_id, reason);
                return Ok(DropResult::Ignored(reason));
            }
            DropOutcome::Dispatched(transition) => transition,
        };

        tracing::debug!(
            "updating {} from {} to {}",
            transition.ticket_id,
            transition.from,
            transition.to
        );
        let outcome = match self.api.update_status(&transition.ticket_id, transition.to) {
            Ok(ticket) => UpdateOutcome::Success(ticket),
            Err(err) => {
                tracing::warn!("status update for {} failed: {}", transition.ticket_id, err);
                UpdateOutcome::Failure(err.message)
            }
        };
        self.engine.settle(&mut self.store, &transition, outcome)?;

        Ok(DropResult::Committed(transition))
    }

    /// Handles a filter change from the UI.
    pub fn on_filter_change(&mut self, event: FilterChangeEvent) {
        self.criteria.apply_event(event);
    }

    /// The filtered ticket set, in store order.
    pub fn visible_tickets(&self) -> Vec<&Ticket> {
        kb_core::filter::visible(self.store.get_all(), &self.members, &self.criteria)
    }

    /// The filtered set grouped into the four fixed columns.
    pub fn visible_columns(&self) -> Vec<ColumnBucket<'_>> {
        kb_core::project(&self.visible_tickets())
    }

    /// Union of all tickets' labels, for label-suggestion lists.
    pub fn distinct_labels(&self) -> Vec<String> {
        kb_core::filter::distinct_labels(self.store.get_all())
    }

    /// Distinct labels matching a suggestion query.
    pub fn label_suggestions(&self, query: &str) -> Vec<String> {
        kb_core::filter::label_suggestions(self.store.get_all(), query)
    }

    /// Whether any ticket is unassigned (gates the `"unassigned"` facet
    /// entry).
    pub fn has_unassigned(&self) -> bool {
        kb_core::filter::has_unassigned(self.store.get_all())
    }

    /// The current filter selection.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Per-status counts over the full (unfiltered) snapshot.
    pub fn stats(&self) -> TicketStats {
        self.store.stats()
    }

    /// True while a transition for this ticket is in flight.
    pub fn is_pending(&self, ticket_id: &str) -> bool {
        self.engine.is_pending(ticket_id)
    }

    /// The full snapshot, unfiltered, in store order.
    pub fn tickets(&self) -> &[Ticket] {
        self.store.get_all()
    }

    /// Looks up one ticket.
    pub fn get_ticket(&self, id: &str) -> Option<&Ticket> {
        self.store.get(id)
    }

    /// The member snapshot.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Inserts a server-created ticket into the snapshot (post-create).
    pub fn upsert_ticket(&mut self, ticket: Ticket) {
        self.store.upsert_one(ticket);
    }

    /// Drops a ticket from the snapshot (post-delete).
    pub fn remove_ticket(&mut self, id: &str) -> Result<Ticket> {
        Ok(self.store.remove(id)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
