// state.rs — CheckInState: the canonical check-in state value.
//
// The state is an explicit value owned by CheckInStore — no process-wide
// mutable globals. It is created empty, hydrated at most once from a
// persisted snapshot, and mutated only through the store's single
// check-in operation. Append-only: there is no delete or edit.
//
// Invariant for every reachable state:
//   total == teams.sum() == attendees.len()
//
// The derived views (progress toward the goal, current leader or tie)
// are pure functions of the state and live here so they can be tested
// without a store or a storage backend.

use serde::{Deserialize, Serialize};

use crate::config::Goal;
use crate::team::Team;

/// One checked-in attendee. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Non-empty, trimmed display name.
    pub name: String,

    /// The team the attendee checked in under.
    pub team: Team,
}

/// Per-team check-in counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCounts {
    pub water: u64,
    pub netzero: u64,
    pub renewables: u64,
}

impl TeamCounts {
    /// The counter for one team.
    pub fn get(&self, team: Team) -> u64 {
        match team {
            Team::Water => self.water,
            Team::NetZero => self.netzero,
            Team::Renewables => self.renewables,
        }
    }

    /// Increment the counter for one team.
    pub fn increment(&mut self, team: Team) {
        match team {
            Team::Water => self.water += 1,
            Team::NetZero => self.netzero += 1,
            Team::Renewables => self.renewables += 1,
        }
    }

    /// Sum across all teams.
    pub fn sum(&self) -> u64 {
        self.water + self.netzero + self.renewables
    }
}

/// Progress toward the check-in goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Rounded percentage, clamped to 0..=100.
    pub percent: u8,

    /// Whether the total has met or passed the goal.
    pub reached_goal: bool,
}

/// The leading team, or a tie.
///
/// A tie is two or more teams sharing the maximum count — including the
/// degenerate all-zero state, where every team ties at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    pub team: Option<Team>,
    pub is_tie: bool,
}

/// The canonical check-in state: total, per-team counts, and the
/// newest-first attendee list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckInState {
    pub total: u64,
    pub teams: TeamCounts,
    /// Newest first — insertion order is the only order.
    pub attendees: Vec<Attendee>,
}

impl CheckInState {
    /// Record one check-in: bump the counters and prepend the attendee.
    ///
    /// Inputs are already validated (non-empty trimmed name, recognized
    /// team) — validation is the store's job.
    pub(crate) fn record(&mut self, attendee: Attendee) {
        self.total += 1;
        self.teams.increment(attendee.team);
        self.attendees.insert(0, attendee);
    }

    /// Progress toward `goal`: rounded percentage clamped to 0..=100,
    /// plus whether the goal has been reached.
    ///
    /// `Goal` is validated-positive by construction, so the division is
    /// always defined.
    pub fn progress(&self, goal: Goal) -> Progress {
        let percent = (100.0 * self.total as f64 / goal.get() as f64).round();
        Progress {
            percent: percent.clamp(0.0, 100.0) as u8,
            reached_goal: self.total >= u64::from(goal.get()),
        }
    }

    /// The team with the strictly highest count, or a tie when two or
    /// more teams share the maximum.
    pub fn leader(&self) -> Leader {
        let max = Team::ALL
            .iter()
            .map(|&t| self.teams.get(t))
            .max()
            .unwrap_or(0);
        let mut leaders = Team::ALL.iter().filter(|&&t| self.teams.get(t) == max);
        match (leaders.next(), leaders.next()) {
            (Some(&team), None) => Leader {
                team: Some(team),
                is_tie: false,
            },
            _ => Leader {
                team: None,
                is_tie: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(water: u64, netzero: u64, renewables: u64) -> CheckInState {
        let mut state = CheckInState::default();
        for (team, count) in [
            (Team::Water, water),
            (Team::NetZero, netzero),
            (Team::Renewables, renewables),
        ] {
            for i in 0..count {
                state.record(Attendee {
                    name: format!("{}-{}", team.key(), i),
                    team,
                });
            }
        }
        state
    }

    #[test]
    fn record_keeps_counters_and_list_in_sync() {
        let state = state_with(2, 1, 0);
        assert_eq!(state.total, 3);
        assert_eq!(state.teams.sum(), 3);
        assert_eq!(state.attendees.len(), 3);
        assert_eq!(state.teams.get(Team::Water), 2);
        assert_eq!(state.teams.get(Team::NetZero), 1);
        assert_eq!(state.teams.get(Team::Renewables), 0);
    }

    #[test]
    fn record_prepends_newest_first() {
        let mut state = CheckInState::default();
        for name in ["A", "B", "C"] {
            state.record(Attendee {
                name: name.to_string(),
                team: Team::Water,
            });
        }
        let names: Vec<&str> = state.attendees.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["C", "B", "A"]);
    }

    #[test]
    fn progress_at_zero() {
        let state = CheckInState::default();
        let p = state.progress(Goal::new(50));
        assert_eq!(p.percent, 0);
        assert!(!p.reached_goal);
    }

    #[test]
    fn progress_partial_and_rounded() {
        let state = state_with(10, 0, 0);
        let p = state.progress(Goal::new(50));
        assert_eq!(p.percent, 20);
        assert!(!p.reached_goal);

        // 1/3 of the way — rounds to 33.
        let state = state_with(1, 0, 0);
        assert_eq!(state.progress(Goal::new(3)).percent, 33);
    }

    #[test]
    fn progress_at_goal() {
        let state = state_with(25, 15, 10);
        let p = state.progress(Goal::new(50));
        assert_eq!(p.percent, 100);
        assert!(p.reached_goal);
    }

    #[test]
    fn progress_clamps_past_goal() {
        let state = state_with(25, 25, 25);
        let p = state.progress(Goal::new(50));
        assert_eq!(p.percent, 100);
        assert!(p.reached_goal);
    }

    #[test]
    fn leader_single_max() {
        let leader = state_with(5, 2, 2).leader();
        assert_eq!(leader.team, Some(Team::Water));
        assert!(!leader.is_tie);
    }

    #[test]
    fn leader_two_way_tie() {
        let leader = state_with(3, 3, 1).leader();
        assert_eq!(leader.team, None);
        assert!(leader.is_tie);
    }

    #[test]
    fn leader_all_zero_is_a_tie() {
        let leader = CheckInState::default().leader();
        assert_eq!(leader.team, None);
        assert!(leader.is_tie);
    }
}
