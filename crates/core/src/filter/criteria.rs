// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter criteria held as transient UI state.

use serde::{Deserialize, Serialize};

use crate::ticket::{Priority, Status};

/// Pseudo-assignee selecting tickets that have no assignee.
pub const UNASSIGNED: &str = "unassigned";

/// The status facet: one column, or no restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    /// Every status passes.
    #[default]
    All,
    /// Only tickets with exactly this status pass.
    Only(Status),
}

/// The active selection across all five facets.
///
/// Held by the view layer for the lifetime of the board screen, reset by
/// the clear-all action, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Status facet.
    pub status: StatusFilter,
    /// Free-text facet; empty means inactive.
    pub search_term: String,
    /// Label facet; a ticket needs at least one of these.
    pub selected_labels: Vec<String>,
    /// Priority facet.
    pub selected_priorities: Vec<Priority>,
    /// Assignee facet: member display names and/or [`UNASSIGNED`].
    pub selected_assignees: Vec<String>,
}

impl FilterCriteria {
    /// Criteria with every facet inactive.
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    /// Resets every facet (the clear-all action).
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    /// True when any facet restricts the visible set.
    pub fn is_active(&self) -> bool {
        self.status != StatusFilter::All
            || !self.search_term.is_empty()
            || !self.selected_labels.is_empty()
            || !self.selected_priorities.is_empty()
            || !self.selected_assignees.is_empty()
    }

    /// Adds the label to the selection, or removes it if already selected.
    pub fn toggle_label(&mut self, label: &str) {
        toggle(&mut self.selected_labels, label);
    }

    /// Adds the priority to the selection, or removes it if already
    /// selected.
    pub fn toggle_priority(&mut self, priority: Priority) {
        if let Some(index) = self.selected_priorities.iter().position(|p| *p == priority) {
            self.selected_priorities.remove(index);
        } else {
            self.selected_priorities.push(priority);
        }
    }

    /// Adds the assignee display name (or [`UNASSIGNED`]) to the selection,
    /// or removes it if already selected.
    pub fn toggle_assignee(&mut self, assignee: &str) {
        toggle(&mut self.selected_assignees, assignee);
    }

    /// Folds one filter-change event into the criteria.
    pub fn apply_event(&mut self, event: FilterChangeEvent) {
        match event {
            FilterChangeEvent::SetStatus(status) => self.status = status,
            FilterChangeEvent::SetSearchTerm(term) => self.search_term = term,
            FilterChangeEvent::ToggleLabel(label) => self.toggle_label(&label),
            FilterChangeEvent::TogglePriority(priority) => self.toggle_priority(priority),
            FilterChangeEvent::ToggleAssignee(assignee) => self.toggle_assignee(&assignee),
            FilterChangeEvent::ClearAll => self.clear(),
        }
    }
}

fn toggle(selection: &mut Vec<String>, value: &str) {
    if let Some(index) = selection.iter().position(|v| v == value) {
        selection.remove(index);
    } else {
        selection.push(value.to_string());
    }
}

/// A change to the filter criteria, as delivered by the UI event source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FilterChangeEvent {
    /// Restrict the status facet (or lift it with `StatusFilter::All`).
    SetStatus(StatusFilter),
    /// Replace the free-text search term.
    SetSearchTerm(String),
    /// Toggle one label in the label facet.
    ToggleLabel(String),
    /// Toggle one priority in the priority facet.
    TogglePriority(Priority),
    /// Toggle one display name (or `"unassigned"`) in the assignee facet.
    ToggleAssignee(String),
    /// Reset every facet.
    ClearAll,
}

#[cfg(test)]
#[path = "criteria_tests.rs"]
mod tests;
