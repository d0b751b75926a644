// Activity timeline.
// Most recently updated non-fork repositories, newest first.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::Repository;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub name: String,
    pub url: String,
    /// Update date formatted like "Dec 15, 2025".
    pub display_date: String,
    pub updated_at: DateTime<Utc>,
}

pub fn activity_timeline(repositories: &[Repository], cap: usize) -> Vec<ActivityEntry> {
    let mut repos: Vec<&Repository> = repositories.iter().filter(|r| !r.is_fork).collect();
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    repos
        .into_iter()
        .take(cap)
        .map(|r| ActivityEntry {
            name: r.name.clone(),
            url: r.url.clone(),
            display_date: display_date(&r.updated_at),
            updated_at: r.updated_at,
        })
        .collect()
}

pub fn display_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::repo;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_newest_first_without_forks() {
        let now = Utc::now();
        let mut fork = repo("fork", 0, 0, now);
        fork.is_fork = true;
        let repos = vec![
            repo("old", 0, 0, now - Duration::days(30)),
            fork,
            repo("new", 0, 0, now - Duration::days(1)),
            repo("mid", 0, 0, now - Duration::days(7)),
        ];

        let timeline = activity_timeline(&repos, 6);
        let names: Vec<_> = timeline.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["new", "mid", "old"]);
    }

    #[test]
    fn test_cap() {
        let now = Utc::now();
        let repos: Vec<Repository> = (0..10)
            .map(|i| repo(&format!("r{}", i), 0, 0, now - Duration::hours(i)))
            .collect();

        let timeline = activity_timeline(&repos, 6);
        assert_eq!(timeline.len(), 6);
        assert_eq!(timeline[0].name, "r0");
        assert_eq!(timeline[5].name, "r5");
    }

    #[test]
    fn test_display_date() {
        let dt = Utc.with_ymd_and_hms(2025, 12, 5, 10, 0, 0).unwrap();
        assert_eq!(display_date(&dt), "Dec 5, 2025");
    }

    #[test]
    fn test_empty() {
        assert!(activity_timeline(&[], 6).is_empty());
    }
}
