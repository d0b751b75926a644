// Skill aggregation.
// Counts repositories per language and shapes the counts for bar and orbit views.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{LanguageStat, Repository};

use super::colors::language_color;

/// Label for repositories without a detected language.
pub const OTHER_LANGUAGE: &str = "Other";

/// Number of languages shown as orbits.
pub const ORBIT_LIMIT: usize = 6;

/// Count repositories per language, heaviest first.
///
/// Languages with equal weight keep the order in which they first appear.
pub fn aggregate_languages(repositories: &[Repository]) -> Vec<LanguageStat> {
    let mut order: Vec<(String, u64)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for repo in repositories {
        let name = if repo.language.trim().is_empty() {
            OTHER_LANGUAGE
        } else {
            repo.language.as_str()
        };
        match index.get(name) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(name.to_string(), order.len());
                order.push((name.to_string(), 1));
            }
        }
    }

    let mut stats: Vec<LanguageStat> = order
        .into_iter()
        .map(|(name, weight)| LanguageStat {
            display_color: language_color(&name).to_string(),
            name,
            weight,
        })
        .collect();
    // sort_by is stable, which preserves first-seen order for ties
    stats.sort_by(|a, b| b.weight.cmp(&a.weight));
    stats
}

/// One row of the skill bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillBar {
    pub name: String,
    pub color: String,
    /// Share of the total weight, rounded to a whole percent.
    pub percent: u32,
    /// Bar length relative to the heaviest language, at least 8.
    pub fill: f64,
}

pub fn skill_bars(languages: &[LanguageStat]) -> Vec<SkillBar> {
    let max = languages.iter().map(|l| l.weight).max().unwrap_or(0).max(1) as f64;
    let total = languages
        .iter()
        .map(|l| l.weight)
        .fold(0, u64::saturating_add);

    languages
        .iter()
        .map(|lang| {
            let weight = lang.weight as f64;
            let percent = if total > 0 {
                (weight / total as f64 * 100.0).round() as u32
            } else {
                0
            };
            SkillBar {
                name: lang.name.clone(),
                color: lang.display_color.clone(),
                percent,
                fill: (weight / max * 100.0).max(8.0),
            }
        })
        .collect()
}

/// One planet in the orbit view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillOrbit {
    pub name: String,
    pub color: String,
    pub radius: u32,
    pub planet_size: f64,
    pub period_secs: u32,
    pub start_angle_deg: u32,
}

/// Orbits for the heaviest languages; inner rings are faster.
pub fn skill_orbits(languages: &[LanguageStat]) -> Vec<SkillOrbit> {
    let top = &languages[..languages.len().min(ORBIT_LIMIT)];
    let max = top.iter().map(|l| l.weight).max().unwrap_or(0).max(1) as f64;

    top.iter()
        .enumerate()
        .map(|(i, lang)| {
            let i = i as u32;
            SkillOrbit {
                name: lang.name.clone(),
                color: lang.display_color.clone(),
                radius: 50 + i * 40,
                planet_size: (10.0 + lang.weight as f64 / max * 14.0).clamp(12.0, 24.0),
                period_secs: 15 + i * 5,
                start_angle_deg: i * 60,
            }
        })
        .collect()
}
