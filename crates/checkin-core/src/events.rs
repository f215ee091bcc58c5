// events.rs — Event model and notification dispatch.
//
// The store emits events at its three notification points: one full
// snapshot on hydration (the replay event, so a view bulk-renders the
// roster), one incremental event per successful check-in, and one
// rejection event per validation failure (for field-level hints).
//
// Sinks observe; they cannot mutate state or block a mutation. The
// dispatcher is synchronous — there is exactly one logical actor driving
// the store, so no ordering protocol is needed.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CheckInError;
use crate::state::{Attendee, Leader, Progress, TeamCounts};

/// Which submitted field a rejection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectedField {
    Name,
    Team,
}

impl fmt::Display for RejectedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectedField::Name => write!(f, "name"),
            RejectedField::Team => write!(f, "team"),
        }
    }
}

/// Events emitted by the check-in store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum CheckInEvent {
    /// Prior state was replayed at startup. Carries the full snapshot.
    Hydrated {
        total: u64,
        teams: TeamCounts,
        attendees: Vec<Attendee>,
        progress: Progress,
        leader: Leader,
        timestamp: DateTime<Utc>,
    },

    /// One attendee checked in. Carries the new record and the updated
    /// derived values.
    CheckedIn {
        attendee: Attendee,
        total: u64,
        teams: TeamCounts,
        progress: Progress,
        leader: Leader,
        timestamp: DateTime<Utc>,
    },

    /// A submission failed validation. No state changed.
    CheckInRejected {
        field: RejectedField,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl CheckInEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            CheckInEvent::Hydrated { .. } => "hydrated",
            CheckInEvent::CheckedIn { .. } => "checked_in",
            CheckInEvent::CheckInRejected { .. } => "check_in_rejected",
        }
    }
}

/// Trait for receiving check-in events.
///
/// Implementations decide what to do with each event: append to a log
/// file, redraw a view region, call a webhook, etc.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the system.
    fn send(&self, event: &CheckInEvent) -> Result<(), CheckInError>;
}

/// Logs events as JSONL to a file (always-on sink).
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &CheckInEvent) -> Result<(), CheckInError> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| CheckInError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| CheckInError::IoError {
                path: self.path.display().to_string(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| CheckInError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
#[derive(Default)]
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &CheckInEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!("notification sink error: {}", e);
            }
        }
    }
}
