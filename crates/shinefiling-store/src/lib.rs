// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ShineFiling local persistence: durable key-value storage, the in-process
// event bus, and the persisted session.

pub mod events;
pub mod integrity;
pub mod kv;
pub mod session;

pub use events::{AppEvent, EventBus};
pub use integrity::hash_bytes;
pub use kv::{KvStore, MemoryStore, SqliteStore};
pub use session::SessionStore;
