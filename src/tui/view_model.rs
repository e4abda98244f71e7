//! # View Models
//!
//! Plain display records built from core state. Components render these and
//! never read domain records directly, which keeps formatting rules (missing
//! fields, ages, counters) in one place and testable without a terminal.

use chrono::{Datelike, NaiveDate};

use crate::api::{Player, Team};
use crate::core::selection::TeamContext;

pub const MISSING: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCardView {
    pub team_id: String,
    pub name: String,
    pub league: String,
    pub stadium: String,
    pub founded: String,
}

impl TeamCardView {
    pub fn from_team(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            name: team.name.clone(),
            league: team.league.clone().unwrap_or_else(|| MISSING.to_string()),
            stadium: team
                .stadium_location
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
            founded: team
                .formed_year
                .as_deref()
                .map(|y| format!("Est. {y}"))
                .unwrap_or_else(|| MISSING.to_string()),
        }
    }
}

pub fn team_cards(teams: &[&Team]) -> Vec<TeamCardView> {
    teams.iter().map(|t| TeamCardView::from_team(t)).collect()
}

/// `"shown/total"`, or just the total when nothing is filtered out.
pub fn team_counter(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{total}")
    } else {
        format!("{shown}/{total}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterHeaderView {
    pub title: String,
    pub subtitle: String,
    pub badge_url: String,
    pub count_label: String,
}

impl RosterHeaderView {
    pub fn new(context: &TeamContext, player_count: usize) -> Self {
        let subtitle = [context.league.as_deref(), context.country.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ");
        let count_label = match player_count {
            1 => "1 player".to_string(),
            n => format!("{n} players"),
        };
        Self {
            title: context.name.clone(),
            subtitle,
            badge_url: context.badge_url.clone(),
            count_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRowView {
    pub name: String,
    pub position: String,
    pub details: String,
}

impl PlayerRowView {
    pub fn from_player(player: &Player, today: NaiveDate) -> Self {
        let born = player.birth_date.as_deref().map(|date| match age_on(date, today) {
            Some(age) => format!("born {date} ({age})"),
            None => format!("born {date}"),
        });
        let details = [
            player.nationality.clone(),
            born,
            player.signing_info.as_deref().map(|s| format!("signed {s}")),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

        Self {
            name: player.name.clone(),
            position: player
                .position
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
            details,
        }
    }
}

pub fn player_rows(players: &[Player], today: NaiveDate) -> Vec<PlayerRowView> {
    players
        .iter()
        .map(|p| PlayerRowView::from_player(p, today))
        .collect()
}

/// Whole years between a `YYYY-MM-DD` birth date and `today`.
pub fn age_on(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let born = NaiveDate::parse_from_str(birth_date, "%Y-%m-%d").ok()?;
    if born > today {
        return None;
    }
    let mut age = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        age -= 1;
    }
    u32::try_from(age).ok()
}
