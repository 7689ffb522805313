// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project members, used for assignee display-name resolution and for
//! enumerating the assignee facet. The board core never mutates members.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A member's role within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Member,
    Owner,
}

impl Role {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "MEMBER",
            Role::Owner => "OWNER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "member" => Ok(Role::Member),
            "owner" => Ok(Role::Owner),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

/// A member of the active project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Stable reference used by tickets' `assignee_id`.
    pub user_id: String,
    /// Login email; the display-name fallback.
    pub email: String,
    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Role within the project.
    pub role: Role,
}

impl Member {
    /// Creates a regular member with no display name.
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Member {
            user_id: user_id.into(),
            email: email.into(),
            name: None,
            role: Role::Member,
        }
    }

    /// Sets the display name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the role (builder pattern).
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// The name shown for this member: `name`, falling back to `email`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// Resolves a ticket's assignee id to a display name against the member
/// set. Returns None when the id matches no known member.
pub fn resolve_display_name<'a>(members: &'a [Member], user_id: &str) -> Option<&'a str> {
    members
        .iter()
        .find(|m| m.user_id == user_id)
        .map(Member::display_name)
}

#[cfg(test)]
#[path = "member_tests.rs"]
mod tests;
