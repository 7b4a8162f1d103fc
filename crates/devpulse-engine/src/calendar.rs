//! Contribution calendar resolution.
//!
//! The primary source is the calendar query; when it is absent or
//! errored, an equivalent grid is synthesized from the activity events
//! and the individually-fetched commits. The synthesized grid is an
//! approximation bounded by those two feeds, not ground truth.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use devpulse_core::snapshot::{CalendarDay, CalendarFidelity, CalendarWeek, ContributionCalendar};
use devpulse_core::upstream::{CommitRecord, EventRecord};
use std::collections::HashMap;
use tracing::info;

const WEEKS: u64 = 53;
const DAYS_PER_WEEK: u64 = 7;

/// Use the primary calendar verbatim when present; otherwise
/// synthesize a lower-fidelity grid.
pub fn resolve(
    primary: Option<ContributionCalendar>,
    events: &[EventRecord],
    commits: &[CommitRecord],
    now: DateTime<Utc>,
) -> ContributionCalendar {
    match primary {
        Some(mut calendar) => {
            calendar.fidelity = CalendarFidelity::Primary;
            calendar
        }
        None => {
            info!(
                events = events.len(),
                commits = commits.len(),
                "primary calendar unavailable, synthesizing from activity"
            );
            synthesize(events, commits, now)
        }
    }
}

/// Build a 53-week grid from the last year of events and commits: one
/// count per event and per commit falling on each date.
pub fn synthesize(
    events: &[EventRecord],
    commits: &[CommitRecord],
    now: DateTime<Utc>,
) -> ContributionCalendar {
    let mut counts: HashMap<NaiveDate, u64> = HashMap::new();
    for event in events {
        *counts.entry(event.created_at.date_naive()).or_default() += 1;
    }
    for commit in commits {
        if let Some(at) = commit.authored_at {
            *counts.entry(at.date_naive()).or_default() += 1;
        }
    }

    let today = now.date_naive();
    // Starting Sunday: 52 weeks back, minus today's weekday offset.
    let offset = (WEEKS - 1) * DAYS_PER_WEEK + u64::from(today.weekday().num_days_from_sunday());
    let start = today - Days::new(offset);

    let mut total = 0;
    let mut weeks = Vec::new();
    'grid: for w in 0..WEEKS {
        let mut days = Vec::new();
        for d in 0..DAYS_PER_WEEK {
            let date = start + Days::new(w * DAYS_PER_WEEK + d);
            if date > today {
                if !days.is_empty() {
                    weeks.push(CalendarWeek { contribution_days: days });
                }
                break 'grid;
            }
            let count = counts.get(&date).copied().unwrap_or(0);
            total += count;
            days.push(CalendarDay {
                contribution_count: count,
                date: date.format("%Y-%m-%d").to_string(),
                weekday: d as u32,
            });
        }
        weeks.push(CalendarWeek { contribution_days: days });
    }

    ContributionCalendar {
        total_contributions: total,
        weeks,
        fidelity: CalendarFidelity::Synthesized,
    }
}
