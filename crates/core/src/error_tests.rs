// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::ticket::Status;

#[test]
fn ticket_not_found_names_the_id() {
    let err = Error::TicketNotFound("t-42".to_string());
    assert_eq!(err.to_string(), "ticket not found: t-42");
}

#[test]
fn invalid_column_lists_the_valid_columns() {
    let err = Error::InvalidColumn("BOGUS".to_string());
    let message = err.to_string();
    assert!(message.contains("'BOGUS'"));
    assert!(message.contains("OPEN, IN_PROGRESS, RESOLVED, CLOSED"));
}

#[test]
fn remote_update_failed_carries_ticket_and_attempted_status() {
    let err = Error::RemoteUpdateFailed {
        ticket_id: "t-1".to_string(),
        status: Status::Closed,
        reason: "connection reset".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("t-1"));
    assert!(message.contains("CLOSED"));
    assert!(message.contains("connection reset"));
}
