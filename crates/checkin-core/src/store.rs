// store.rs — CheckInStore: canonical state, mutation, and notification.
//
// The store owns the CheckInState value, a storage backend for the
// snapshot blob, the configured goal, and the event dispatcher. All
// mutation goes through apply_check_in; there is no delete or edit.
//
// Lifecycle: Uninitialized → Ready. Hydration runs exactly once at
// startup and replays the persisted snapshot (if any) as a single
// Hydrated event. If a caller ever applies a check-in first, the store
// behaves as if hydrated empty rather than misbehaving.
//
// Persistence is a best-effort side effect: a write failure is logged
// and swallowed, and the in-memory state stays authoritative for the
// session.

use chrono::Utc;

use crate::codec;
use crate::config::Goal;
use crate::error::ValidationError;
use crate::events::{CheckInEvent, EventDispatcher, NotificationSink, RejectedField};
use crate::state::{Attendee, CheckInState, Leader, Progress};
use crate::storage::{StateStore, SNAPSHOT_KEY};
use crate::team::Team;

/// Store lifecycle phase. Hydration is one-shot; there are no further
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StorePhase {
    Uninitialized,
    Ready,
}

/// The check-in store: holds the canonical state, applies check-in
/// mutations, computes derived values, and notifies observers.
pub struct CheckInStore {
    state: CheckInState,
    phase: StorePhase,
    backend: Box<dyn StateStore>,
    goal: Goal,
    dispatcher: EventDispatcher,
}

impl CheckInStore {
    /// Create an empty, not-yet-hydrated store over the given backend.
    pub fn new(backend: Box<dyn StateStore>, goal: Goal) -> Self {
        Self {
            state: CheckInState::default(),
            phase: StorePhase::Uninitialized,
            backend,
            goal,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Register an observer for store events.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.dispatcher.add_sink(sink);
    }

    /// Restore prior state from the backend, once.
    ///
    /// A read error or a malformed blob reads as "no prior state" and is
    /// never surfaced to the user. Emits one Hydrated event carrying the
    /// full snapshot so a view can bulk-render the roster. Calls after
    /// the first are ignored.
    pub fn hydrate(&mut self) {
        if self.phase == StorePhase::Ready {
            return;
        }

        let blob = match self.backend.get(SNAPSHOT_KEY) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!("snapshot read failed, starting fresh: {}", e);
                None
            }
        };

        match blob.as_deref().and_then(codec::decode) {
            Some(state) => {
                tracing::debug!(total = state.total, "hydrated prior state");
                self.state = state;
            }
            None => {
                if blob.is_some() {
                    tracing::warn!("malformed snapshot ignored, starting fresh");
                }
                self.state = CheckInState::default();
            }
        }

        self.phase = StorePhase::Ready;
        self.dispatcher.dispatch(&CheckInEvent::Hydrated {
            total: self.state.total,
            teams: self.state.teams,
            attendees: self.state.attendees.clone(),
            progress: self.progress(),
            leader: self.leader(),
            timestamp: Utc::now(),
        });
    }

    /// Apply one check-in submission.
    ///
    /// Trims the name and normalizes the team code; a failure of either
    /// check emits a CheckInRejected event and returns the validation
    /// error without mutating anything. On success the state is updated,
    /// the snapshot is persisted (best effort), a CheckedIn event is
    /// emitted with the updated derived values, and the new record is
    /// returned.
    pub fn apply_check_in(
        &mut self,
        raw_name: &str,
        raw_team: &str,
    ) -> Result<Attendee, ValidationError> {
        if self.phase == StorePhase::Uninitialized {
            // Normal startup hydrates first; behave as hydrated-empty if
            // it didn't.
            self.phase = StorePhase::Ready;
        }

        let name = raw_name.trim();
        if name.is_empty() {
            return Err(self.reject(RejectedField::Name, ValidationError::EmptyName));
        }

        let Some(team) = Team::normalize(raw_team) else {
            return Err(self.reject(RejectedField::Team, ValidationError::UnknownTeam));
        };

        let attendee = Attendee {
            name: name.to_string(),
            team,
        };
        self.state.record(attendee.clone());
        self.persist();

        self.dispatcher.dispatch(&CheckInEvent::CheckedIn {
            attendee: attendee.clone(),
            total: self.state.total,
            teams: self.state.teams,
            progress: self.progress(),
            leader: self.leader(),
            timestamp: Utc::now(),
        });

        Ok(attendee)
    }

    /// Progress toward the configured goal.
    pub fn progress(&self) -> Progress {
        self.state.progress(self.goal)
    }

    /// Current leading team, or a tie.
    pub fn leader(&self) -> Leader {
        self.state.leader()
    }

    /// The configured goal.
    pub fn goal(&self) -> Goal {
        self.goal
    }

    /// Read access to the canonical state.
    pub fn state(&self) -> &CheckInState {
        &self.state
    }

    /// Emit a rejection event and hand the error back to the caller.
    fn reject(&self, field: RejectedField, err: ValidationError) -> ValidationError {
        self.dispatcher.dispatch(&CheckInEvent::CheckInRejected {
            field,
            reason: err.to_string(),
            timestamp: Utc::now(),
        });
        err
    }

    /// Write the snapshot, best effort. A failure never aborts the
    /// mutation that triggered it.
    fn persist(&mut self) {
        match codec::encode(&self.state) {
            Ok(blob) => {
                if let Err(e) = self.backend.put(SNAPSHOT_KEY, &blob) {
                    tracing::warn!("snapshot write failed: {}", e);
                }
            }
            Err(e) => tracing::warn!("snapshot encode failed: {}", e),
        }
    }
}
