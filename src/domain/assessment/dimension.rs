//! The seven personality dimensions and the four question formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven continuous personality axes the assessment measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    EmotionalResilience,
    HonestyHumility,
    Adaptability,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 7] = [
        Dimension::Openness,
        Dimension::Conscientiousness,
        Dimension::Extraversion,
        Dimension::Agreeableness,
        Dimension::EmotionalResilience,
        Dimension::HonestyHumility,
        Dimension::Adaptability,
    ];

    /// Number of dimensions.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the machine key used in serialized data.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Openness => "openness",
            Dimension::Conscientiousness => "conscientiousness",
            Dimension::Extraversion => "extraversion",
            Dimension::Agreeableness => "agreeableness",
            Dimension::EmotionalResilience => "emotional_resilience",
            Dimension::HonestyHumility => "honesty_humility",
            Dimension::Adaptability => "adaptability",
        }
    }

    /// Returns the display name for this dimension.
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Openness => "Openness",
            Dimension::Conscientiousness => "Conscientiousness",
            Dimension::Extraversion => "Extraversion",
            Dimension::Agreeableness => "Agreeableness",
            Dimension::EmotionalResilience => "Emotional Resilience",
            Dimension::HonestyHumility => "Honesty-Humility",
            Dimension::Adaptability => "Adaptability",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Response format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Likert,
    ForcedChoice,
    SituationalJudgment,
    BehavioralFrequency,
}

impl QuestionType {
    /// All question types in canonical order.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::Likert,
        QuestionType::ForcedChoice,
        QuestionType::SituationalJudgment,
        QuestionType::BehavioralFrequency,
    ];

    /// Returns the machine key used in serialized data.
    pub fn key(&self) -> &'static str {
        match self {
            QuestionType::Likert => "likert",
            QuestionType::ForcedChoice => "forced_choice",
            QuestionType::SituationalJudgment => "situational_judgment",
            QuestionType::BehavioralFrequency => "behavioral_frequency",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
