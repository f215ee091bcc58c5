// team.rs — The team catalog: a closed set of three teams.
//
// Attendees check in under one of three sustainability teams. The set is
// closed — no dynamic teams — so the catalog is a plain enum with total
// functions over it. Submission codes (what the form sends) differ from
// the serialized keys (what the snapshot stores), so both mappings live
// here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three fixed teams.
///
/// Serializes as the snapshot key (`"water"` / `"netzero"` /
/// `"renewables"`), which is also what `Team::from_key` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Water,
    NetZero,
    Renewables,
}

impl Team {
    /// All teams, in fixed display order.
    pub const ALL: [Team; 3] = [Team::Water, Team::NetZero, Team::Renewables];

    /// Map a raw submission code to a team.
    ///
    /// Exact match over the three recognized codes; anything else is
    /// `None` — unrecognized input is a validation failure upstream,
    /// never an error here.
    pub fn normalize(raw: &str) -> Option<Team> {
        match raw {
            "water" => Some(Team::Water),
            "zero" => Some(Team::NetZero),
            "power" => Some(Team::Renewables),
            _ => None,
        }
    }

    /// Parse a serialized snapshot key back to a team.
    pub fn from_key(key: &str) -> Option<Team> {
        match key {
            "water" => Some(Team::Water),
            "netzero" => Some(Team::NetZero),
            "renewables" => Some(Team::Renewables),
            _ => None,
        }
    }

    /// The snapshot key for this team.
    pub fn key(self) -> &'static str {
        match self {
            Team::Water => "water",
            Team::NetZero => "netzero",
            Team::Renewables => "renewables",
        }
    }

    /// Display label for this team.
    pub fn label(self) -> &'static str {
        match self {
            Team::Water => "Team Water Wise",
            Team::NetZero => "Team Net Zero",
            Team::Renewables => "Team Renewables",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_recognizes_the_three_codes() {
        assert_eq!(Team::normalize("water"), Some(Team::Water));
        assert_eq!(Team::normalize("zero"), Some(Team::NetZero));
        assert_eq!(Team::normalize("power"), Some(Team::Renewables));
    }

    #[test]
    fn normalize_rejects_everything_else() {
        assert_eq!(Team::normalize(""), None);
        assert_eq!(Team::normalize("netzero"), None); // key, not a code
        assert_eq!(Team::normalize("WATER"), None); // exact match only
        assert_eq!(Team::normalize("bogus"), None);
    }

    #[test]
    fn key_and_from_key_round_trip() {
        for team in Team::ALL {
            assert_eq!(Team::from_key(team.key()), Some(team));
        }
        assert_eq!(Team::from_key("power"), None); // code, not a key
    }

    #[test]
    fn labels_are_fixed() {
        assert_eq!(Team::Water.label(), "Team Water Wise");
        assert_eq!(Team::NetZero.label(), "Team Net Zero");
        assert_eq!(Team::Renewables.label(), "Team Renewables");
    }

    #[test]
    fn serde_uses_snapshot_keys() {
        let json = serde_json::to_string(&Team::NetZero).unwrap();
        assert_eq!(json, "\"netzero\"");
        let restored: Team = serde_json::from_str("\"renewables\"").unwrap();
        assert_eq!(restored, Team::Renewables);
    }
}
