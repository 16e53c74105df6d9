//! Cross-framework typing systems a question can also measure.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Typing frameworks a caller can request coverage for.
///
/// `Prism` is the native seven-dimension model and is always covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Prism,
    Mbti,
    Enneagram,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Framework::Prism => "prism",
            Framework::Mbti => "mbti",
            Framework::Enneagram => "enneagram",
        };
        write!(f, "{}", s)
    }
}

/// The four MBTI preference axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MbtiAxis {
    /// Extraversion / Introversion
    Ei,
    /// Sensing / Intuition
    Sn,
    /// Thinking / Feeling
    Tf,
    /// Judging / Perceiving
    Jp,
}

impl MbtiAxis {
    pub const ALL: [MbtiAxis; 4] = [MbtiAxis::Ei, MbtiAxis::Sn, MbtiAxis::Tf, MbtiAxis::Jp];

    /// Framework tag carried by questions that load on this axis.
    pub fn tag(&self) -> &'static str {
        match self {
            MbtiAxis::Ei => "mbti_ei",
            MbtiAxis::Sn => "mbti_sn",
            MbtiAxis::Tf => "mbti_tf",
            MbtiAxis::Jp => "mbti_jp",
        }
    }
}

/// One of the nine Enneagram types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct EnneagramType(u8);

impl EnneagramType {
    /// Creates an Enneagram type, `None` outside 1-9.
    pub fn new(number: u8) -> Option<Self> {
        (1..=9).contains(&number).then_some(Self(number))
    }

    /// All nine types in numeric order.
    pub fn all() -> impl Iterator<Item = EnneagramType> {
        (1..=9).map(EnneagramType)
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// Framework tag carried by questions that load on this type.
    pub fn tag(&self) -> String {
        format!("enneagram_{}", self.0)
    }
}

impl TryFrom<u8> for EnneagramType {
    type Error = ValidationError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| {
            ValidationError::out_of_range("enneagram_type", 1.0, 9.0, f64::from(number))
        })
    }
}

impl From<EnneagramType> for u8 {
    fn from(t: EnneagramType) -> Self {
        t.0
    }
}
