//! Canned insight tables for shadow-trait reports.

use serde::{Deserialize, Serialize};

use super::{DarkTrait, TraitLevel};

use DarkTrait::*;
use TraitLevel::*;

/// Overall index at or above which styles read as assertive or guarded.
pub const HIGH_INDEX_THRESHOLD: u8 = 60;

/// Overall index at or above which styles read as balanced or self-aware.
pub const MID_INDEX_THRESHOLD: u8 = 40;

/// Strengths associated with a trait at a given level.
pub fn trait_strengths(dark_trait: DarkTrait, level: TraitLevel) -> &'static [&'static str] {
    match (dark_trait, level) {
        (Machiavellianism, Low) => &["Transparent and straightforward in your dealings"],
        (Machiavellianism, Moderate) => &[
            "Reads organizational politics accurately",
            "Plans several moves ahead",
        ],
        (Machiavellianism, Elevated) => &[
            "Highly strategic under competition",
            "Negotiates effectively for your goals",
        ],
        (Narcissism, Low) => &["Shares credit readily and listens well"],
        (Narcissism, Moderate) => &[
            "Comfortable taking the spotlight when needed",
            "Projects confidence in new situations",
        ],
        (Narcissism, Elevated) => &[
            "Inspires others with a strong personal vision",
            "Thrives in visible leadership roles",
        ],
        (Psychopathy, Low) => &["Considerate of how risks affect others"],
        (Psychopathy, Moderate) => &[
            "Stays composed in tense situations",
            "Makes hard calls without freezing",
        ],
        (Psychopathy, Elevated) => &[
            "Remains calm during crises",
            "Acts decisively when others hesitate",
        ],
    }
}

/// Areas to watch for a trait. Low levels have none.
pub fn trait_watch_areas(dark_trait: DarkTrait, level: TraitLevel) -> &'static [&'static str] {
    match (dark_trait, level) {
        (_, Low) => &[],
        (Machiavellianism, Moderate) => &["Strategic framing can come across as guarded"],
        (Machiavellianism, Elevated) => &[
            "Others may perceive your tactics as manipulative",
            "Short-term wins can cost long-term trust",
        ],
        (Narcissism, Moderate) => &["Check that others get room to contribute"],
        (Narcissism, Elevated) => &[
            "Criticism may feel more personal than intended",
            "Recognition-seeking can overshadow team success",
        ],
        (Psychopathy, Moderate) => &["Bluntness may land harder than you expect"],
        (Psychopathy, Elevated) => &[
            "Impulsive risk-taking may affect people around you",
            "Others' emotional reactions may be easy to underestimate",
        ],
    }
}

/// How shadow traits show up at work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkplaceStyle {
    HighIntensity,
    Assertive,
    Balanced,
    Collaborative,
}

impl WorkplaceStyle {
    pub fn classify(elevated_count: usize, overall: u8) -> Self {
        if elevated_count >= 2 {
            WorkplaceStyle::HighIntensity
        } else if overall >= HIGH_INDEX_THRESHOLD {
            WorkplaceStyle::Assertive
        } else if overall >= MID_INDEX_THRESHOLD {
            WorkplaceStyle::Balanced
        } else {
            WorkplaceStyle::Collaborative
        }
    }

    pub fn narrative(&self) -> &'static str {
        match self {
            WorkplaceStyle::HighIntensity => {
                "You bring high intensity and drive to your work. You excel in competitive \
                 environments but benefit from checking how your approach affects colleagues."
            }
            WorkplaceStyle::Assertive => {
                "You pursue goals assertively and are comfortable with competition. Pairing \
                 that drive with visible collaboration keeps teams on side."
            }
            WorkplaceStyle::Balanced => {
                "You balance personal ambition with team goals and can shift between \
                 competing and cooperating as the situation requires."
            }
            WorkplaceStyle::Collaborative => {
                "You favor cooperation and fairness at work. You may need to advocate more \
                 strongly for your own ideas in competitive settings."
            }
        }
    }
}

/// How shadow traits show up in close relationships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStyle {
    Guarded,
    SelfAware,
    Warm,
}

impl RelationshipStyle {
    pub fn classify(elevated_count: usize, overall: u8) -> Self {
        if elevated_count >= 1 && overall >= HIGH_INDEX_THRESHOLD {
            RelationshipStyle::Guarded
        } else if elevated_count >= 1 || overall >= MID_INDEX_THRESHOLD {
            RelationshipStyle::SelfAware
        } else {
            RelationshipStyle::Warm
        }
    }

    pub fn narrative(&self) -> &'static str {
        match self {
            RelationshipStyle::Guarded => {
                "In relationships you may keep some distance and prioritize your own needs. \
                 Deliberate openness helps partners feel secure."
            }
            RelationshipStyle::SelfAware => {
                "Some shadow tendencies surface in your relationships. Awareness of them lets \
                 you choose when to lean on them and when to soften."
            }
            RelationshipStyle::Warm => {
                "You approach relationships with warmth and trust. Make sure your own needs \
                 are voiced as clearly as you support others."
            }
        }
    }
}

/// Templated insights for a shadow profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowInsights {
    pub strengths: Vec<String>,
    pub watch_areas: Vec<String>,
    pub workplace_style: WorkplaceStyle,
    pub workplace: String,
    pub relationship_style: RelationshipStyle,
    pub relationships: String,
}

impl ShadowInsights {
    /// Builds insights from `(trait, level)` pairs and the overall index.
    pub fn build(levels: &[(DarkTrait, TraitLevel)], overall: u8) -> Self {
        let strengths = levels
            .iter()
            .flat_map(|(t, l)| trait_strengths(*t, *l).iter())
            .map(|s| s.to_string())
            .collect();
        let watch_areas = levels
            .iter()
            .flat_map(|(t, l)| trait_watch_areas(*t, *l).iter())
            .map(|s| s.to_string())
            .collect();
        let elevated = levels.iter().filter(|(_, l)| *l == Elevated).count();
        let workplace_style = WorkplaceStyle::classify(elevated, overall);
        let relationship_style = RelationshipStyle::classify(elevated, overall);

        Self {
            strengths,
            watch_areas,
            workplace_style,
            workplace: workplace_style.narrative().to_string(),
            relationship_style,
            relationships: relationship_style.narrative().to_string(),
        }
    }
}
