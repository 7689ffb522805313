// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-core operations.

use thiserror::Error;

use crate::ticket::Status;

/// All possible errors that can occur in kb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    #[error(
        "invalid column: '{0}'\n  hint: valid columns are: OPEN, IN_PROGRESS, RESOLVED, CLOSED"
    )]
    InvalidColumn(String),

    #[error(
        "invalid status: '{0}'\n  hint: valid statuses are: OPEN, IN_PROGRESS, RESOLVED, CLOSED"
    )]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: LOW, MEDIUM, HIGH")]
    InvalidPriority(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: MEMBER, OWNER")]
    InvalidRole(String),

    #[error("remote update failed for {ticket_id} (attempted status {status}): {reason}")]
    RemoteUpdateFailed {
        ticket_id: String,
        status: Status,
        reason: String,
    },
}

/// A specialized Result type for kb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
