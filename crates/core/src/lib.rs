// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-core: Board engine for the kb kanban client
//!
//! This crate provides the in-memory ticket store, the multi-facet filter,
//! the drag-drop status-transition state machine, and the column projector
//! backing the kanban view. It is transport- and render-free; the remote
//! ticket API and the UI layer are external collaborators.

pub mod board;
pub mod column;
pub mod error;
pub mod filter;
pub mod member;
pub mod store;
pub mod ticket;

pub use board::{BoardEngine, DragTransition, DropEvent, DropOutcome, IgnoreReason, UpdateOutcome};
pub use column::{project, ColumnBucket};
pub use error::{Error, Result};
pub use filter::{FilterChangeEvent, FilterCriteria, StatusFilter, UNASSIGNED};
pub use member::{Member, Role};
pub use store::{TicketStats, TicketStore};
pub use ticket::{Priority, Status, Ticket, TicketPatch};
