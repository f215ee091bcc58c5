//! # checkin-core
//!
//! State management and derived-view computation for Summit Check-In.
//!
//! A check-in records an attendee name and team affiliation. The store
//! keeps running counts, persists a snapshot after every mutation, and
//! computes progress toward a configurable goal plus the current leading
//! team (or tie). Views observe the store through notification sinks;
//! the core never touches presentation.
//!
//! ## Key components
//!
//! - [`Team`] — the closed catalog of three teams, with submission-code
//!   normalization and display labels
//! - [`CheckInState`] — the canonical state value (total, per-team
//!   counts, newest-first attendee list) and its derived views
//! - [`codec`] — tolerant snapshot encode/decode (never fails loudly)
//! - [`StateStore`] — durable string-keyed storage abstraction, with
//!   file-backed and in-memory implementations
//! - [`CheckInStore`] — the single mutation path, persistence, and
//!   event emission
//! - [`CheckInEvent`] / [`NotificationSink`] — the core → view
//!   notification boundary

pub mod codec;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod storage;
pub mod store;
pub mod team;

pub use config::{CheckInConfig, Goal};
pub use error::{CheckInError, ValidationError};
pub use events::{CheckInEvent, EventDispatcher, LogSink, NotificationSink, RejectedField};
pub use state::{Attendee, CheckInState, Leader, Progress, TeamCounts};
pub use storage::{JsonFileStore, MemoryStore, StateStore, SNAPSHOT_KEY};
pub use store::CheckInStore;
pub use team::Team;
