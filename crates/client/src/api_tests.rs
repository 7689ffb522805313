// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

struct AlwaysDown;

impl TicketApi for AlwaysDown {
    fn update_status(&mut self, _ticket_id: &str, _status: Status) -> ApiResult<Ticket> {
        Err(ApiError::new("service unavailable"))
    }
}

impl MemberDirectory for AlwaysDown {
    fn list_members(&mut self, _project_id: &str) -> ApiResult<Vec<Member>> {
        Err(ApiError::new("service unavailable"))
    }
}

#[test]
fn api_error_displays_its_message() {
    let err = ApiError::new("503 service unavailable");
    assert_eq!(err.to_string(), "503 service unavailable");
}

#[test]
fn one_type_can_implement_both_collaborators() {
    let mut remote = AlwaysDown;
    assert!(remote.update_status("t-1", Status::Closed).is_err());
    assert!(remote.list_members("p-1").is_err());
}

#[test]
fn ticket_api_is_object_safe() {
    let mut remote: Box<dyn TicketApi> = Box::new(AlwaysDown);
    let err = remote.update_status("t-1", Status::Open).unwrap_err();
    assert_eq!(err, ApiError::new("service unavailable"));
}
