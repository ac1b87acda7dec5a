use chrono::{DateTime, Datelike, Utc};

use crate::model::fixture::{Fixture, FixtureStatus};
use crate::model::table::TableRow;
use crate::style::{Color, Style};

/// One display line for a fixture: clock/status token plus score token.
pub fn match_line(fixture: &Fixture, now: DateTime<Utc>, style: &dyn Style) -> String {
    format!(
        "{} {}",
        match_time(fixture, now, style),
        match_score(fixture, style)
    )
}

/// Kick off time, time on the clock, or half-time/full-time/etc. status.
pub fn match_time(fixture: &Fixture, now: DateTime<Utc>, style: &dyn Style) -> String {
    use FixtureStatus::*;

    match &fixture.status {
        Scheduled => kick_off_token(fixture.kick_off, now),
        Abandoned | Canceled | Delayed | Postponed => style.color("PP", Color::Yellow),
        InProgress | FirstHalf | SecondHalf | Overtime => {
            style.color(&fixture.clock, Color::Green)
        }
        Halftime => style.color("HT", Color::Yellow),
        HalftimeExtraTime => style.color("ET-HT", Color::Yellow),
        EndOfRegulation | FullTime => style.color("FT", Color::Red),
        FinalAfterExtraTime => style.color("AET", Color::Red),
        EndOfExtraTime | Shootout => style.color("Pens", Color::Green),
        FinalAfterPens => style.color("FT-Pens", Color::Red),
        // The feed grows new codes without notice; show them verbatim so
        // the line still means something.
        Unknown(code) => code.clone(),
    }
}

/// How far away kick off is decides how much of the date to spell out.
fn kick_off_token(kick_off: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if kick_off.date_naive() == now.date_naive() {
        kick_off.format("%-I:%M%p").to_string()
    } else if kick_off.iso_week() == now.iso_week() {
        kick_off.format("%a @ %-I:%M%p").to_string()
    } else {
        kick_off.format("%a %-d %b @ %-I:%M%p").to_string()
    }
}

/// Who's playing who and what the score is, with the winning side's name
/// and its own number in bold. A level score stays plain.
pub fn match_score(fixture: &Fixture, style: &dyn Style) -> String {
    if fixture.status.is_prematch() {
        return format!("{} v {}", fixture.home_team, fixture.away_team);
    }

    if fixture.status.is_shootout() {
        let mut home = fixture.home_team.clone();
        let mut away = fixture.away_team.clone();
        let mut home_pens = fixture.home_pens.to_string();
        let mut away_pens = fixture.away_pens.to_string();
        if fixture.home_pens > fixture.away_pens {
            home = style.bold(&home);
            home_pens = style.bold(&home_pens);
        } else if fixture.away_pens > fixture.home_pens {
            away = style.bold(&away);
            away_pens = style.bold(&away_pens);
        }
        return format!(
            "{} {}({})-{}({}) {}",
            home, fixture.home_goals, home_pens, fixture.away_goals, away_pens, away
        );
    }

    let mut home = fixture.home_team.clone();
    let mut away = fixture.away_team.clone();
    let mut home_goals = fixture.home_goals.to_string();
    let mut away_goals = fixture.away_goals.to_string();
    if fixture.home_goals > fixture.away_goals {
        home = style.bold(&home);
        home_goals = style.bold(&home_goals);
    } else if fixture.away_goals > fixture.home_goals {
        away = style.bold(&away);
        away_goals = style.bold(&away_goals);
    }
    format!("{} {}-{} {}", home, home_goals, away_goals, away)
}

/// One standings line, with the goal difference colored by its sign.
pub fn table_row(row: &TableRow, style: &dyn Style) -> String {
    let goal_difference = match row.goal_difference.chars().next() {
        Some('+') => style.color(&row.goal_difference, Color::Green),
        Some('-') => style.color(&row.goal_difference, Color::Red),
        _ => row.goal_difference.clone(),
    };
    format!(
        "{}. {} ({}|{}|{})",
        style.bold(&row.position),
        row.team,
        row.games_played,
        goal_difference,
        row.points
    )
}
