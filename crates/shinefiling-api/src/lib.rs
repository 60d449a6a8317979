// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ShineFiling REST client for the hosted backend.

pub mod client;
pub mod rest;

pub use client::{BackendApi, DocumentUpload};
pub use rest::HttpBackendClient;
