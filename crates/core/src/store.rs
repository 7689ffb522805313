// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory ticket store.
//!
//! Owns the canonical ticket list for the active project scope. Order is
//! the order the server returned (typically creation order) and is
//! preserved by every mutation. All operations are synchronous over the
//! snapshot; there are no side effects beyond the store itself.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ticket::{Status, Ticket, TicketPatch};

/// Per-status ticket counts over a store snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl TicketStats {
    /// Counts tickets by status.
    pub fn from_tickets(tickets: &[Ticket]) -> Self {
        let mut stats = TicketStats::default();
        for ticket in tickets {
            stats.total += 1;
            match ticket.status {
                Status::Open => stats.open += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Resolved => stats.resolved += 1,
                Status::Closed => stats.closed += 1,
            }
        }
        stats
    }
}

/// The authoritative in-memory ticket collection for one project scope.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    tickets: Vec<Ticket>,
}

impl TicketStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        TicketStore::default()
    }

    /// Replaces the whole snapshot (load-complete event).
    pub fn load(&mut self, tickets: Vec<Ticket>) {
        self.tickets = tickets;
    }

    /// All tickets in server order.
    pub fn get_all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Looks up a ticket by id.
    pub fn get(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Merges `patch` into the ticket with the given id and returns the
    /// updated record. Identity is immutable; fields the patch leaves as
    /// None are unchanged. Fails with `TicketNotFound` without touching the
    /// store.
    pub fn replace(&mut self, id: &str, patch: TicketPatch) -> Result<&Ticket> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TicketNotFound(id.to_string()))?;
        ticket.apply(patch);
        Ok(ticket)
    }

    /// Inserts a ticket, or replaces the record with the same id in place.
    /// New tickets append at the end (post-creation insertion).
    pub fn upsert_one(&mut self, ticket: Ticket) {
        match self.tickets.iter_mut().find(|t| t.id == ticket.id) {
            Some(existing) => *existing = ticket,
            None => self.tickets.push(ticket),
        }
    }

    /// Removes a ticket by id, returning the removed record.
    pub fn remove(&mut self, id: &str) -> Result<Ticket> {
        let index = self
            .tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| Error::TicketNotFound(id.to_string()))?;
        Ok(self.tickets.remove(index))
    }

    /// Per-status counts over the current snapshot.
    pub fn stats(&self) -> TicketStats {
        TicketStats::from_tickets(&self.tickets)
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
