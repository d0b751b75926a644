// Derivation functions.
// Pure transformations from a resolved dataset into presentation structures.

pub mod activity;
pub mod colors;
pub mod layout;
pub mod profile;
pub mod projects;
pub mod skills;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::config::DisplayConfig;
use crate::model::{Provenance, ResolvedDataset};

pub use activity::{ActivityEntry, activity_timeline};
pub use colors::{DEFAULT_LANGUAGE_COLOR, language_color};
pub use layout::{Constellation, Point, constellation};
pub use profile::{ProfileSummary, profile_summary};
pub use projects::{ProjectEntry, ProjectSelection, SelectionRules, select_projects};
pub use skills::{SkillBar, SkillOrbit, aggregate_languages, skill_bars, skill_orbits};

/// Everything the renderer consumes, derived from one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Presentation {
    pub provenance: Provenance,
    pub summary: ProfileSummary,
    pub projects: ProjectSelection,
    pub constellation: Constellation,
    pub skill_bars: Vec<SkillBar>,
    pub skill_orbits: Vec<SkillOrbit>,
    pub timeline: Vec<ActivityEntry>,
}

pub fn present<R: Rng>(
    dataset: &ResolvedDataset,
    display: &DisplayConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Presentation {
    let projects = select_projects(
        &dataset.repositories,
        &dataset.identity.id,
        &SelectionRules::from(display),
        now,
    );
    let constellation = constellation(projects.len(), rng);

    Presentation {
        provenance: dataset.provenance,
        summary: profile_summary(&dataset.identity, &dataset.repositories),
        projects,
        constellation,
        skill_bars: skill_bars(&dataset.languages),
        skill_orbits: skill_orbits(&dataset.languages),
        timeline: activity_timeline(&dataset.repositories, display.timeline_cap),
    }
}

impl Presentation {
    /// Lay the constellation out again with a new random source.
    pub fn reroll_layout<R: Rng>(&mut self, rng: &mut R) {
        self.constellation = constellation(self.projects.len(), rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::builtin_dataset;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_present_static_dataset() {
        let fallback = builtin_dataset();
        let dataset = fallback.into_resolved();
        let mut rng = StdRng::seed_from_u64(3);

        let presentation = present(&dataset, &DisplayConfig::default(), Utc::now(), &mut rng);

        assert_eq!(presentation.provenance, Provenance::Static);
        assert!(!presentation.projects.is_empty());
        assert_eq!(
            presentation.constellation.positions.len(),
            presentation.projects.len()
        );
        assert_eq!(presentation.skill_bars.len(), dataset.languages.len());
        assert!(presentation.timeline.len() <= 6);
    }

    #[test]
    fn test_present_empty_repositories() {
        let mut dataset = builtin_dataset().into_resolved();
        dataset.repositories.clear();
        dataset.languages.clear();
        let mut rng = StdRng::seed_from_u64(3);

        let presentation = present(&dataset, &DisplayConfig::default(), Utc::now(), &mut rng);

        assert!(presentation.projects.is_empty());
        assert!(presentation.constellation.positions.is_empty());
        assert!(presentation.skill_bars.is_empty());
        assert!(presentation.timeline.is_empty());
    }
}
