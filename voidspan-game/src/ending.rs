//! End-of-run narrative and rank.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::PLACEHOLDER_ENDING_IMAGE_URL;

/// Rank awarded by the ending writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Grade {
    /// Finished the full span with money or sanity to spare.
    S,
    A,
    B,
    C,
    /// Did almost nothing, or the rank could not be read.
    #[default]
    D,
}

impl Grade {
    /// Read the first letter of the model's rank; anything unknown is a D.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('S') => Self::S,
            Some('A') => Self::A,
            Some('B') => Self::B,
            Some('C') => Self::C,
            _ => Self::D,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// CSS hook for the rank colour.
    #[must_use]
    pub const fn tone(self) -> &'static str {
        match self {
            Self::S => "grade-gold",
            Self::A => "grade-orange",
            Self::B => "grade-green",
            Self::C => "grade-blue",
            Self::D => "grade-muted",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON object returned by the ending writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndingDraft {
    pub title: String,
    pub story: String,
    pub evaluation: String,
    pub score_grade: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndingResult {
    pub title: String,
    pub story: String,
    pub evaluation: String,
    pub grade: Grade,
    pub image_url: String,
}

impl EndingResult {
    #[must_use]
    pub fn from_draft(draft: EndingDraft, image_url: String) -> Self {
        Self {
            grade: Grade::parse(&draft.score_grade),
            title: draft.title,
            story: draft.story,
            evaluation: draft.evaluation,
            image_url,
        }
    }

    /// Ending shown when the writer could not be reached.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            title: "因果の消失".to_string(),
            story: "あなたの辿った道は、もはや既存の理では説明できない領域に達しました。"
                .to_string(),
            evaluation: "測定不能".to_string(),
            grade: Grade::D,
            image_url: PLACEHOLDER_ENDING_IMAGE_URL.to_string(),
        }
    }
}
