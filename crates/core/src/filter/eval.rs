// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filter criteria against tickets.

use crate::member::{resolve_display_name, Member};
use crate::ticket::{Priority, Ticket};

use super::criteria::{FilterCriteria, StatusFilter, UNASSIGNED};

/// Returns the tickets matching every active facet, in input order.
///
/// Evaluation is a fresh pass over the full set on every call; there is no
/// caching. Cost is O(n * m) for n tickets and m active facets, which is
/// fine at UI scale.
pub fn visible<'a>(
    tickets: &'a [Ticket],
    members: &[Member],
    criteria: &FilterCriteria,
) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|ticket| matches(ticket, members, criteria))
        .collect()
}

/// Conjunction of the five facet predicates.
fn matches(ticket: &Ticket, members: &[Member], criteria: &FilterCriteria) -> bool {
    matches_status(ticket, criteria.status)
        && matches_text(ticket, &criteria.search_term)
        && matches_labels(ticket, &criteria.selected_labels)
        && matches_priority(ticket, &criteria.selected_priorities)
        && matches_assignee(ticket, members, &criteria.selected_assignees)
}

/// Status facet: `Only(s)` requires an exact status match.
fn matches_status(ticket: &Ticket, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Only(status) => ticket.status == status,
    }
}

/// Text facet: the term must appear in the title or the description,
/// case-insensitively, as a substring.
fn matches_text(ticket: &Ticket, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    ticket.title.to_lowercase().contains(&term)
        || ticket.description.to_lowercase().contains(&term)
}

/// Label facet: the ticket must carry at least one selected label (OR
/// within the facet).
fn matches_labels(ticket: &Ticket, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    selected.iter().any(|label| ticket.labels.contains(label))
}

/// Priority facet: the ticket's priority must be selected.
fn matches_priority(ticket: &Ticket, selected: &[Priority]) -> bool {
    selected.is_empty() || selected.contains(&ticket.priority)
}

/// Assignee facet: union of two branches.
///
/// An unassigned ticket passes when `"unassigned"` is selected. An assigned
/// ticket passes when its resolved display name (member name, falling back
/// to email) is selected. An assignee that resolves to no known member
/// fails closed.
fn matches_assignee(ticket: &Ticket, members: &[Member], selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    match &ticket.assignee_id {
        None => selected.iter().any(|s| s == UNASSIGNED),
        Some(user_id) => resolve_display_name(members, user_id)
            .is_some_and(|name| selected.iter().any(|s| s == name)),
    }
}

/// Union of all tickets' labels, in first-seen order. Used to populate
/// label-suggestion lists.
pub fn distinct_labels(tickets: &[Ticket]) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for ticket in tickets {
        for label in &ticket.labels {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }
    }
    labels
}

/// Distinct labels containing `query`, case-insensitively. An empty query
/// returns every distinct label.
pub fn label_suggestions(tickets: &[Ticket], query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    distinct_labels(tickets)
        .into_iter()
        .filter(|label| label.to_lowercase().contains(&query))
        .collect()
}

/// True when any ticket has no assignee. Gates showing the `"unassigned"`
/// entry in the assignee facet.
pub fn has_unassigned(tickets: &[Ticket]) -> bool {
    tickets.iter().any(|t| t.assignee_id.is_none())
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
