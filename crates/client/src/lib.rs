// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-client: Event-driven facade for the kb kanban board engine.
//!
//! This crate wires the kb-core engines to the host application: it
//! defines the collaborator contracts for the remote ticket API and the
//! member directory, and a `BoardClient` that turns UI events (drops,
//! filter changes) into store mutations, remote calls, and renderable
//! column projections.

pub mod api;
pub mod client;
pub mod error;

pub use api::{ApiError, ApiResult, MemberDirectory, TicketApi};
pub use client::{BoardClient, DropResult};
pub use error::{Error, Result};
