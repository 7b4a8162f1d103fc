//! Aggregation over the repository list and activity events: summary
//! counters, language histograms, recent repos, and the activity
//! timeline.

use chrono::{DateTime, Utc};
use devpulse_core::snapshot::{ActivityPoint, EventTypeCount, LanguageStat, RecentRepo, StatsBlock};
use devpulse_core::upstream::{EventRecord, RepoRecord};

/// How many languages the histogram keeps.
const TOP_LANGUAGES: usize = 7;
/// How many repositories the recent listing projects.
const RECENT_REPOS: usize = 6;
/// How many timeline buckets survive.
const TIMELINE_BUCKETS: usize = 14;
/// How many event types the histogram keeps.
const TOP_EVENT_TYPES: usize = 6;

/// Association list preserving first-seen insertion order. Histogram
/// ordering must not depend on any map's iteration guarantees.
pub(crate) struct OrderedTally<V> {
    entries: Vec<(String, V)>,
}

impl<V: Default> OrderedTally<V> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn entry(&mut self, key: &str) -> &mut V {
        if let Some(idx) = self.entries.iter().position(|(k, _)| k == key) {
            return &mut self.entries[idx].1;
        }
        self.entries.push((key.to_string(), V::default()));
        &mut self.entries.last_mut().expect("just pushed").1
    }

    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

/// Bucket timestamps by a fixed-locale short date, e.g. "Aug 29".
pub(crate) fn short_date(at: DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}

/// Keep the most recent `limit` buckets in chronological order, given
/// buckets collected in first-seen order from a newest-first feed.
pub(crate) fn most_recent_chronological<T>(mut buckets: Vec<T>, limit: usize) -> Vec<T> {
    buckets.reverse();
    let skip = buckets.len().saturating_sub(limit);
    buckets.split_off(skip)
}

#[derive(Default)]
struct LanguageTally {
    count: u64,
    size: u64,
}

/// Accumulate summary counters and the top-languages histogram from
/// the repository list.
pub fn aggregate_repos(repos: &[RepoRecord]) -> StatsBlock {
    let mut total_stars = 0;
    let mut total_forks = 0;
    let mut total_watchers = 0;
    let mut total_open_issues = 0;
    let mut forked_repos = 0;
    let mut private_repos = 0;
    let mut public_repos = 0;
    let mut languages: OrderedTally<LanguageTally> = OrderedTally::new();

    for repo in repos {
        total_stars += repo.stargazers_count;
        total_forks += repo.forks_count;
        total_watchers += repo.watchers_count;
        total_open_issues += repo.open_issues_count;

        if repo.fork {
            forked_repos += 1;
        }
        if repo.private {
            private_repos += 1;
        } else {
            public_repos += 1;
        }

        if let Some(language) = &repo.language {
            let tally = languages.entry(language);
            tally.count += 1;
            tally.size += repo.size;
        }
    }

    let mut top_languages: Vec<LanguageStat> = languages
        .into_entries()
        .into_iter()
        .map(|(language, tally)| LanguageStat {
            language,
            count: tally.count,
            size: tally.size,
        })
        .collect();
    // Stable sort: ties keep first-seen order.
    top_languages.sort_by(|a, b| b.count.cmp(&a.count));
    top_languages.truncate(TOP_LANGUAGES);

    StatsBlock {
        total_stars,
        total_forks,
        forked_repos,
        total_repos: repos.len() as u64,
        public_repos,
        private_repos,
        total_watchers,
        total_open_issues,
        top_languages,
    }
}

/// First entries of the upstream-ordered repository list, projected to
/// the thin denormalized shape. The upstream pre-sorts by recency.
pub fn recent_repos(repos: &[RepoRecord]) -> Vec<RecentRepo> {
    repos
        .iter()
        .take(RECENT_REPOS)
        .map(|repo| RecentRepo {
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
            description: repo.description.clone(),
            language: repo.language.clone(),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated_at: repo.updated_at,
            html_url: repo.html_url.clone(),
            is_private: repo.private,
        })
        .collect()
}

/// Bucket events by calendar date and keep the most recent buckets in
/// chronological order.
pub fn activity_timeline(events: &[EventRecord]) -> Vec<ActivityPoint> {
    let mut buckets: OrderedTally<u64> = OrderedTally::new();
    for event in events {
        *buckets.entry(&short_date(event.created_at)) += 1;
    }

    let points: Vec<ActivityPoint> = buckets
        .into_entries()
        .into_iter()
        .map(|(date, events)| ActivityPoint { date, events })
        .collect();
    most_recent_chronological(points, TIMELINE_BUCKETS)
}

/// Count events per type tag, with any trailing "Event" suffix
/// stripped, and keep the top entries by count.
pub fn event_types(events: &[EventRecord]) -> Vec<EventTypeCount> {
    let mut buckets: OrderedTally<u64> = OrderedTally::new();
    for event in events {
        let tag = event
            .event_type
            .strip_suffix("Event")
            .unwrap_or(&event.event_type);
        let tag = if tag.is_empty() { "Other" } else { tag };
        *buckets.entry(tag) += 1;
    }

    let mut counts: Vec<EventTypeCount> = buckets
        .into_entries()
        .into_iter()
        .map(|(event_type, count)| EventTypeCount { event_type, count })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(TOP_EVENT_TYPES);
    counts
}
