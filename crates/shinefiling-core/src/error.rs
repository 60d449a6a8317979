// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the ShineFiling client.

use thiserror::Error;

/// Top-level error type for all client operations.
#[derive(Debug, Error)]
pub enum ShineError {
    // -- Backend API --
    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response from backend: {0}")]
    InvalidResponse(String),

    // -- Account --
    #[error("sign-in rejected: {0}")]
    AuthRejected(String),

    #[error("verification code rejected: {0}")]
    OtpRejected(String),

    #[error("not signed in")]
    NotSignedIn,

    // -- Storage / persistence --
    #[error("database error: {0}")]
    Database(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Input --
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ShineError>;
