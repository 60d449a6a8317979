// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

pub mod admin;
pub mod apply;
pub mod dashboard;
pub mod documents;
pub mod home;
pub mod payments;
pub mod service_detail;
pub mod settings;
