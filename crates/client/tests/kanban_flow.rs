// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Full board session against a scripted remote: load, filter, drag, fail,
//! retry.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use kb_client::{ApiError, ApiResult, BoardClient, DropResult, TicketApi};
use kb_core::{
    DropEvent, FilterChangeEvent, IgnoreReason, Member, Priority, Status, StatusFilter, Ticket,
    UNASSIGNED,
};

#[derive(Debug, Default)]
struct Remote {
    tickets: Vec<Ticket>,
    update_count: usize,
    fail_with: Option<String>,
}

#[derive(Clone, Default)]
struct ScriptedApi(Rc<RefCell<Remote>>);

impl TicketApi for ScriptedApi {
    fn update_status(&mut self, ticket_id: &str, status: Status) -> ApiResult<Ticket> {
        let mut remote = self.0.borrow_mut();
        remote.update_count += 1;
        if let Some(reason) = remote.fail_with.take() {
            return Err(ApiError::new(reason));
        }
        let ticket = remote
            .tickets
            .iter_mut()
            .find(|t| t.id == ticket_id)
            .ok_or_else(|| ApiError::new(format!("no such ticket: {ticket_id}")))?;
        ticket.status = status;
        Ok(ticket.clone())
    }
}

fn project_snapshot() -> (Vec<Ticket>, Vec<Member>) {
    let tickets = vec![
        Ticket::new("t-1", "Fix login redirect")
            .with_description("Authentication flow loops after logout")
            .with_priority(Priority::High)
            .with_labels(["auth", "backend"]),
        Ticket::new("t-2", "Billing page blank")
            .with_status(Status::InProgress)
            .with_priority(Priority::High)
            .with_assignee("u1")
            .with_labels(["billing"]),
        Ticket::new("t-3", "Write onboarding docs")
            .with_status(Status::Resolved)
            .with_priority(Priority::Low)
            .with_assignee("u2"),
        Ticket::new("t-4", "Rotate API keys").with_priority(Priority::High),
    ];
    let members = vec![
        Member::new("u1", "ada@example.com").with_name("Ada"),
        Member::new("u2", "brin@example.com"),
    ];
    (tickets, members)
}

#[test]
fn a_full_board_session() {
    let (tickets, members) = project_snapshot();
    let api = ScriptedApi::default();
    api.0.borrow_mut().tickets = tickets.clone();

    let mut board = BoardClient::new(api.clone());
    board.load(tickets, members);

    // The unfiltered board: two open tickets, one per remaining column.
    let columns = board.visible_columns();
    assert_eq!(columns[0].len(), 2);
    assert_eq!(columns[1].len(), 1);
    assert_eq!(columns[2].len(), 1);
    assert!(columns[3].is_empty());

    // Narrow to high-priority unassigned work.
    board.on_filter_change(FilterChangeEvent::TogglePriority(Priority::High));
    board.on_filter_change(FilterChangeEvent::ToggleAssignee(UNASSIGNED.to_string()));
    let ids: Vec<&str> = board
        .visible_tickets()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["t-1", "t-4"]);

    // Pick up the login fix.
    let result = board
        .on_drop(&DropEvent::new("t-1", "IN_PROGRESS"))
        .unwrap();
    assert!(matches!(result, DropResult::Committed(_)));
    assert_eq!(board.get_ticket("t-1").unwrap().status, Status::InProgress);

    // The filter keeps applying to the moved card.
    let columns = board.visible_columns();
    assert!(columns[0].tickets.iter().all(|t| t.id != "t-1"));
    assert!(columns[1].tickets.iter().any(|t| t.id == "t-1"));

    // A flaky server: the next move fails but the board stays responsive.
    api.0.borrow_mut().fail_with = Some("502 bad gateway".to_string());
    let err = board.on_drop(&DropEvent::new("t-4", "CLOSED")).unwrap_err();
    assert!(err.to_string().contains("t-4"));
    assert_eq!(board.get_ticket("t-4").unwrap().status, Status::Closed);
    assert!(!board.is_pending("t-4"));

    // Retrying the same ticket succeeds once the server recovers.
    let retry = board.on_drop(&DropEvent::new("t-4", "RESOLVED")).unwrap();
    assert!(matches!(retry, DropResult::Committed(_)));

    // Redundant gestures cost nothing.
    let calls_before = api.0.borrow().update_count;
    let ignored = board.on_drop(&DropEvent::new("t-4", "RESOLVED")).unwrap();
    assert_eq!(ignored, DropResult::Ignored(IgnoreReason::SameColumn));
    let ignored = board.on_drop(&DropEvent::without_target("t-4")).unwrap();
    assert_eq!(ignored, DropResult::Ignored(IgnoreReason::NoTarget));
    assert_eq!(api.0.borrow().update_count, calls_before);

    // Clearing filters restores the whole board, reflecting every move.
    board.on_filter_change(FilterChangeEvent::ClearAll);
    assert_eq!(board.visible_tickets().len(), 4);
    let stats = board.stats();
    assert_eq!(stats.open, 0);
    assert_eq!(stats.in_progress, 2);
    assert_eq!(stats.resolved, 2);
    assert_eq!(stats.closed, 0);
}

#[test]
fn status_tabs_drive_the_status_facet() {
    let (tickets, members) = project_snapshot();
    let api = ScriptedApi::default();
    let mut board = BoardClient::new(api);
    board.load(tickets, members);

    board.on_filter_change(FilterChangeEvent::SetStatus(StatusFilter::Only(
        Status::Resolved,
    )));
    let ids: Vec<&str> = board
        .visible_tickets()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["t-3"]);

    board.on_filter_change(FilterChangeEvent::SetStatus(StatusFilter::All));
    assert_eq!(board.visible_tickets().len(), 4);
}

#[test]
fn search_matches_descriptions_case_insensitively() {
    let (tickets, members) = project_snapshot();
    let api = ScriptedApi::default();
    let mut board = BoardClient::new(api);
    board.load(tickets, members);

    board.on_filter_change(FilterChangeEvent::SetSearchTerm("auth".to_string()));
    let ids: Vec<&str> = board
        .visible_tickets()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    // Matches "Authentication flow ..." in t-1's description; "Billing page
    // blank" does not contain the term.
    assert_eq!(ids, vec!["t-1"]);
}
