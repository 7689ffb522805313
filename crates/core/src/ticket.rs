// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core ticket types for the kanban board engine.
//!
//! This module contains the fundamental data types: Ticket, Status,
//! Priority, and TicketPatch. Field names and enum values serialize in the
//! forms the remote ticket API exchanges (`camelCase` keys,
//! `SCREAMING_SNAKE_CASE` values).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of a ticket. Doubles as the board's column identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Newly filed, not yet picked up. Initial state for new tickets.
    Open,
    /// Currently being worked on.
    InProgress,
    /// Work finished, awaiting verification or release.
    Resolved,
    /// Terminal state; no further work expected.
    Closed,
}

impl Status {
    /// The fixed, ordered column set of the kanban board.
    pub const COLUMNS: [Status; 4] = [
        Status::Open,
        Status::InProgress,
        Status::Resolved,
        Status::Closed,
    ];

    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::InProgress => "IN_PROGRESS",
            Status::Resolved => "RESOLVED",
            Status::Closed => "CLOSED",
        }
    }

    /// Check if a transition from this status to target is valid.
    ///
    /// All non-self transitions are valid (lenient transitions); a board
    /// drop onto the current column is a null transition.
    pub fn can_transition_to(&self, target: Status) -> bool {
        *self != target
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in_progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Urgency of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Every priority, in ascending order. Used to enumerate the priority
    /// facet in filter UIs.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// The primary entity tracked on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique identifier, assigned by the server, stable within a project.
    pub id: String,
    /// Short description of the work.
    pub title: String,
    /// Longer description providing context.
    pub description: String,
    /// Current workflow state.
    pub status: Status,
    /// Urgency of the work.
    pub priority: Priority,
    /// Member `user_id` this ticket is assigned to. None means unassigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    /// Labels in insertion order. No case-sensitive duplicates.
    #[serde(default)]
    pub labels: Vec<String>,
    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last modified (server-owned).
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates an open, medium-priority, unassigned ticket with the current
    /// timestamp.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Ticket {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: Status::Open,
            priority: Priority::Medium,
            assignee_id: None,
            labels: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description (builder pattern).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status (builder pattern).
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority (builder pattern).
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the assignee (builder pattern).
    pub fn with_assignee(mut self, assignee_id: impl Into<String>) -> Self {
        self.assignee_id = Some(assignee_id.into());
        self
    }

    /// Adds each label in order, skipping duplicates (builder pattern).
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.add_label(label);
        }
        self
    }

    /// Adds a label, preserving insertion order.
    ///
    /// Returns false (and leaves the ticket unchanged) if the label is
    /// already present. Comparison is case-sensitive.
    pub fn add_label(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.labels.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    /// Removes a label. Returns true if it was present.
    pub fn remove_label(&mut self, label: &str) -> bool {
        let before = self.labels.len();
        self.labels.retain(|l| l != label);
        self.labels.len() != before
    }

    /// Merges a patch into this ticket. Fields the patch leaves as None are
    /// unchanged; `id` and `created_at` are immutable.
    pub fn apply(&mut self, patch: TicketPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee_id) = patch.assignee_id {
            self.assignee_id = Some(assignee_id);
        }
        if let Some(labels) = patch.labels {
            self.labels = labels;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }
}

/// A partial ticket update. None fields are left unchanged when applied.
///
/// Mirrors the remote API's PATCH document; the board engine only ever
/// sends the status field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl TicketPatch {
    /// Creates a patch that only moves the ticket to `status`.
    pub fn status(status: Status) -> Self {
        TicketPatch {
            status: Some(status),
            ..TicketPatch::default()
        }
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
