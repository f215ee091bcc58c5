// codec.rs — Snapshot codec: CheckInState ⇄ persisted string blob.
//
// The snapshot is a single JSON document:
//
//   {"total": 3,
//    "teams": {"water": 1, "netzero": 2, "renewables": 0},
//    "attendees": [{"name": "Cal", "team": "netzero"}, ...]}
//
// Decoding is total over arbitrary input and never fails loudly: a blob
// that doesn't parse as a JSON object reads as "no prior state" (None),
// and a parsed object is repaired field by field — counters coerce to
// number-or-zero, the attendee list to empty unless list-shaped, and each
// attendee entry is kept only if it carries a non-empty name and a team
// the catalog recognizes. Unknown extra fields are ignored, which keeps
// the format forward compatible.
//
// Round-trip law: decode(&encode(s)) == Some(s) for every state the
// store can reach.

use serde_json::Value;

use crate::error::CheckInError;
use crate::state::{Attendee, CheckInState, TeamCounts};
use crate::team::Team;

/// Serialize a state snapshot to its persisted string form.
pub fn encode(state: &CheckInState) -> Result<String, CheckInError> {
    Ok(serde_json::to_string(state)?)
}

/// Parse a persisted blob back into a state, repairing what it can.
///
/// Returns `None` when the blob is not a JSON object at all; callers
/// treat that the same as an absent snapshot.
pub fn decode(raw: &str) -> Option<CheckInState> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let obj = value.as_object()?;

    let teams_val = obj.get("teams");
    let teams = TeamCounts {
        water: coerce_count(teams_val.and_then(|t| t.get("water"))),
        netzero: coerce_count(teams_val.and_then(|t| t.get("netzero"))),
        renewables: coerce_count(teams_val.and_then(|t| t.get("renewables"))),
    };

    let attendees = match obj.get("attendees").and_then(Value::as_array) {
        Some(items) => items.iter().filter_map(decode_attendee).collect(),
        None => Vec::new(),
    };

    Some(CheckInState {
        total: coerce_count(obj.get("total")),
        teams,
        attendees,
    })
}

/// Coerce a JSON value to a non-negative count, defaulting to 0.
///
/// Integers pass through, floats truncate, numeric strings parse;
/// negatives and everything else collapse to 0 so the counters stay
/// non-negative even under a tampered blob.
fn coerce_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Keep an attendee entry only if it has a non-empty name and a
/// recognized team key.
fn decode_attendee(value: &Value) -> Option<Attendee> {
    let name = value.get("name")?.as_str()?;
    if name.is_empty() {
        return None;
    }
    let team = Team::from_key(value.get("team")?.as_str()?)?;
    Some(Attendee {
        name: name.to_string(),
        team,
    })
}
