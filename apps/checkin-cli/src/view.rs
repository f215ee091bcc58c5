// view.rs — Terminal rendering for store output.
//
// All presentation lives here; the core knows nothing about it. Output
// regions mirror the store's notification payloads: greeting, counters,
// progress bar, celebration line, roster.

use checkin_core::{CheckInState, CheckInStore, Leader, Team, ValidationError};

const BAR_WIDTH: usize = 40;

/// Field-level hint text for a rejected submission.
pub fn hint_for(err: ValidationError) -> &'static str {
    match err {
        ValidationError::EmptyName => "Please enter a name.",
        ValidationError::UnknownTeam => "Please select a team.",
    }
}

/// Greet a just-checked-in attendee by first name.
pub fn render_greeting(name: &str) {
    let first = name.split_whitespace().next().unwrap_or(name);
    println!("Welcome, {}!", first);
}

/// Totals, per-team counts, progress bar, and — once the goal is
/// reached — the celebration line.
pub fn render_status(store: &CheckInStore) {
    let state = store.state();
    let progress = store.progress();

    println!("Checked in: {} of {}", state.total, store.goal().get());
    for team in Team::ALL {
        println!("  {:<18} {}", team.label(), state.teams.get(team));
    }
    println!("  [{}] {}%", bar(progress.percent), progress.percent);

    if progress.reached_goal {
        println!("{}", celebration(store.leader()));
    }
}

/// The attendee list, newest first.
pub fn render_roster(state: &CheckInState) {
    if state.attendees.is_empty() {
        println!("No check-ins yet.");
        return;
    }
    for attendee in &state.attendees {
        println!("{} — {}", attendee.name, attendee.team.label());
    }
}

fn bar(percent: u8) -> String {
    let filled = BAR_WIDTH * usize::from(percent) / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn celebration(leader: Leader) -> String {
    match leader.team {
        Some(team) if !leader.is_tie => {
            format!("Goal reached! {} is in the lead!", team.label())
        }
        _ => "Goal reached! It's a tie. Great job, teams!".to_string(),
    }
}
