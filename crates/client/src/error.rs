// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-client operations.

use thiserror::Error;

use crate::api::ApiError;

/// All possible errors that can occur driving the board client.
#[derive(Debug, Error)]
pub enum Error {
    /// An engine error, including `RemoteUpdateFailed` after a dispatched
    /// transition came back with a failure.
    #[error(transparent)]
    Engine(#[from] kb_core::Error),

    /// The member directory could not be read.
    #[error("member directory error: {0}")]
    Directory(ApiError),
}

/// A specialized Result type for kb-client operations.
pub type Result<T> = std::result::Result<T, Error>;
