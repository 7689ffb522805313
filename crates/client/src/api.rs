// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator contracts for the remote side of the board.
//!
//! The board core is transport-free; these traits are the seams where the
//! host application plugs in its HTTP (or any other) layer. The engine
//! only distinguishes success from failure: timeouts, retries, and
//! authentication all live behind the trait.

use thiserror::Error;

use kb_core::{Member, Status, Ticket};

/// An opaque failure from a collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable failure description.
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        ApiError {
            message: message.into(),
        }
    }
}

/// A specialized Result type for collaborator calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// The remote ticket API.
///
/// The board client calls `update_status` exactly once per accepted
/// transition and awaits a single terminal outcome: the updated canonical
/// record, or a failure with a reason.
pub trait TicketApi {
    fn update_status(&mut self, ticket_id: &str, status: Status) -> ApiResult<Ticket>;
}

/// The project member directory, read-only input to assignee resolution.
pub trait MemberDirectory {
    fn list_members(&mut self, project_id: &str) -> ApiResult<Vec<Member>>;
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
