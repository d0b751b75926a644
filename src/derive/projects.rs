// Project selection and ranking.
// Picks the repositories worth showcasing and orders them by popularity, then recency.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::config::{DisplayConfig, MAX_RECENCY_WINDOW_DAYS};
use crate::model::Repository;

use super::colors::{DEFAULT_LANGUAGE_COLOR, language_color};

/// Description previews are cut to this many characters.
const PREVIEW_CHARS: usize = 80;

/// Filtering and truncation rules for project selection.
#[derive(Debug, Clone)]
pub struct SelectionRules {
    pub cap: usize,
    pub recency_window: Duration,
    pub pages_suffix: String,
}

impl Default for SelectionRules {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for SelectionRules {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            cap: display.project_cap,
            recency_window: Duration::try_days(display.recency_window_days)
                .unwrap_or_else(|| Duration::days(MAX_RECENCY_WINDOW_DAYS)),
            pages_suffix: display.pages_suffix.clone(),
        }
    }
}

/// A selected repository with its display attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    /// Description cut to a tooltip-sized preview.
    pub preview: String,
    pub url: String,
    pub language: String,
    pub color: String,
    pub stars: u64,
    pub forks: u64,
    pub score: u64,
    /// Marker size in pixels, growing with stars.
    pub star_size: u32,
    /// Brightness in [0.4, 1.0], fading with time since the last update.
    pub glow: f64,
    pub updated_at: DateTime<Utc>,
}

/// Outcome of project selection.
///
/// `Empty` is distinct from "not loaded yet" so the renderer can show an empty state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "projects", rename_all = "snake_case")]
pub enum ProjectSelection {
    Empty,
    Projects(Vec<ProjectEntry>),
}

impl ProjectSelection {
    pub fn is_empty(&self) -> bool {
        matches!(self, ProjectSelection::Empty)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        match self {
            ProjectSelection::Empty => &[],
            ProjectSelection::Projects(entries) => entries,
        }
    }
}

/// Whether `name` is the profile's pages-site repository (`<id><suffix>`).
pub fn is_pages_site(name: &str, identity_id: &str, suffix: &str) -> bool {
    let expected = format!("{}{}", identity_id, suffix);
    name.eq_ignore_ascii_case(&expected)
}

/// Select, rank, and truncate the showcase projects.
pub fn select_projects(
    repositories: &[Repository],
    identity_id: &str,
    rules: &SelectionRules,
    now: DateTime<Utc>,
) -> ProjectSelection {
    // A window reaching past the representable range counts everything as recent.
    let active_since = now.checked_sub_signed(rules.recency_window);

    let mut selected: Vec<&Repository> = repositories
        .iter()
        .filter(|r| !r.is_fork)
        .filter(|r| !is_pages_site(&r.name, identity_id, &rules.pages_suffix))
        .filter(|r| {
            r.has_description()
                || r.star_count > 0
                || active_since.map_or(true, |since| r.updated_at > since)
        })
        .collect();

    selected.sort_by(|a, b| {
        b.score()
            .cmp(&a.score())
            .then_with(|| b.updated_at.cmp(&a.updated_at))
    });
    selected.truncate(rules.cap);

    if selected.is_empty() {
        return ProjectSelection::Empty;
    }

    ProjectSelection::Projects(selected.into_iter().map(|r| entry(r, now)).collect())
}

fn entry(repo: &Repository, now: DateTime<Utc>) -> ProjectEntry {
    let color = if repo.language.is_empty() {
        DEFAULT_LANGUAGE_COLOR
    } else {
        language_color(&repo.language)
    };

    ProjectEntry {
        name: repo.name.clone(),
        description: repo.description.clone(),
        preview: preview(&repo.description),
        url: repo.url.clone(),
        language: repo.language.clone(),
        color: color.to_string(),
        stars: repo.star_count,
        forks: repo.fork_count,
        score: repo.score(),
        star_size: star_size(repo.star_count),
        glow: recency_glow(repo.updated_at, now),
        updated_at: repo.updated_at,
    }
}

pub fn star_size(stars: u64) -> u32 {
    match stars {
        50.. => 32,
        20.. => 28,
        10.. => 24,
        5.. => 20,
        1.. => 16,
        0 => 12,
    }
}

pub fn recency_glow(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = (now - updated_at).num_seconds() as f64 / 86_400.0;
    if days <= 7.0 {
        1.0
    } else if days <= 30.0 {
        0.85
    } else if days <= 90.0 {
        0.7
    } else if days <= 180.0 {
        0.55
    } else {
        0.4
    }
}

fn preview(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.chars().count() <= PREVIEW_CHARS {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::repo;

    fn names(selection: &ProjectSelection) -> Vec<&str> {
        selection.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_score_orders_before_recency() {
        let now = Utc::now();
        let repos = vec![
            repo("a", 5, 1, now),
            repo("b", 5, 3, now - Duration::days(1)),
        ];
        assert_eq!(repos[0].score(), 5 * 2 + 1);
        assert_eq!(repos[1].score(), 5 * 2 + 3);

        let selection = select_projects(&repos, "octocat", &SelectionRules::default(), now);
        assert_eq!(names(&selection), ["b", "a"]);
        assert_eq!(selection.entries()[0].score, 13);
    }

    #[test]
    fn test_equal_scores_prefer_recent() {
        let now = Utc::now();
        let repos = vec![
            repo("older", 2, 0, now - Duration::days(10)),
            repo("newer", 2, 0, now - Duration::days(2)),
        ];

        let selection = select_projects(&repos, "octocat", &SelectionRules::default(), now);
        assert_eq!(names(&selection), ["newer", "older"]);
    }

    #[test]
    fn test_pages_site_always_excluded() {
        let now = Utc::now();
        let mut pages = repo("Octocat.github.io", 500, 90, now);
        pages.description = "My site".to_string();
        let repos = vec![pages, repo("tool", 1, 0, now)];

        let selection = select_projects(&repos, "octocat", &SelectionRules::default(), now);
        assert_eq!(names(&selection), ["tool"]);
        assert!(is_pages_site("octocat.github.io", "octocat", ".github.io"));
        assert!(!is_pages_site("octocat.github.io-old", "octocat", ".github.io"));
    }

    #[test]
    fn test_forks_and_dormant_repos_filtered() {
        let now = Utc::now();
        let mut fork = repo("fork", 10, 0, now);
        fork.is_fork = true;
        let dormant = repo("dormant", 0, 0, now - Duration::days(400));
        let mut described = repo("described", 0, 0, now - Duration::days(400));
        described.description = "Still worth showing".to_string();
        let recent = repo("recent", 0, 0, now - Duration::days(3));

        let selection = select_projects(
            &[fork, dormant, described, recent],
            "octocat",
            &SelectionRules::default(),
            now,
        );
        assert_eq!(names(&selection), ["recent", "described"]);
    }

    #[test]
    fn test_whitespace_description_does_not_count() {
        let now = Utc::now();
        let mut blank = repo("blank", 0, 0, now - Duration::days(365));
        blank.description = "   ".to_string();

        let selection = select_projects(&[blank], "octocat", &SelectionRules::default(), now);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_truncates_to_cap() {
        let now = Utc::now();
        let repos: Vec<Repository> = (0..20).map(|i| repo(&format!("r{}", i), i, 0, now)).collect();

        let selection = select_projects(&repos, "octocat", &SelectionRules::default(), now);
        assert_eq!(selection.len(), 12);
        assert_eq!(selection.entries()[0].name, "r19");
    }

    #[test]
    fn test_empty_collection_yields_marker() {
        let selection = select_projects(&[], "octocat", &SelectionRules::default(), Utc::now());
        assert_eq!(selection, ProjectSelection::Empty);
        assert!(selection.entries().is_empty());

        let json = serde_json::to_value(&selection).unwrap();
        assert_eq!(json["status"], "empty");
    }

    #[test]
    fn test_selection_is_idempotent() {
        let now = Utc::now();
        let repos: Vec<Repository> = (0..15)
            .map(|i| repo(&format!("r{}", i), i % 4, i % 3, now - Duration::days(i as i64)))
            .collect();
        let rules = SelectionRules::default();

        assert_eq!(
            select_projects(&repos, "octocat", &rules, now),
            select_projects(&repos, "octocat", &rules, now)
        );
    }

    #[test]
    fn test_extreme_recency_window_does_not_panic() {
        let now = Utc::now();
        let dormant = repo("dormant", 0, 0, now - Duration::days(400));

        let rules = SelectionRules {
            recency_window: Duration::MAX,
            ..SelectionRules::default()
        };
        let selection = select_projects(&[dormant], "octocat", &rules, now);
        assert_eq!(names(&selection), ["dormant"]);

        let display = DisplayConfig {
            recency_window_days: i64::MAX,
            ..DisplayConfig::default()
        };
        let rules = SelectionRules::from(&display);
        assert_eq!(rules.recency_window, Duration::days(MAX_RECENCY_WINDOW_DAYS));
    }

    #[test]
    fn test_huge_star_counts_rank_without_overflow() {
        let now = Utc::now();
        let repos = vec![repo("big", u64::MAX, u64::MAX, now), repo("small", 1, 0, now)];

        let selection = select_projects(&repos, "octocat", &SelectionRules::default(), now);
        assert_eq!(names(&selection), ["big", "small"]);
        assert_eq!(selection.entries()[0].score, u64::MAX);
    }

    #[test]
    fn test_visual_attributes() {
        assert_eq!(star_size(0), 12);
        assert_eq!(star_size(1), 16);
        assert_eq!(star_size(5), 20);
        assert_eq!(star_size(19), 24);
        assert_eq!(star_size(20), 28);
        assert_eq!(star_size(1000), 32);

        let now = Utc::now();
        assert_eq!(recency_glow(now - Duration::days(3), now), 1.0);
        assert_eq!(recency_glow(now - Duration::days(20), now), 0.85);
        assert_eq!(recency_glow(now - Duration::days(60), now), 0.7);
        assert_eq!(recency_glow(now - Duration::days(120), now), 0.55);
        assert_eq!(recency_glow(now - Duration::days(365), now), 0.4);
    }

    #[test]
    fn test_preview_truncation() {
        let long = "x".repeat(100);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), 81);
        assert!(cut.ends_with('…'));
        assert_eq!(preview("short"), "short");
    }
}
