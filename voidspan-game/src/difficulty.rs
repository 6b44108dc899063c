//! Budget tiers offered on the start screen.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{CHICKEN_MONEY, EASY_MONEY, NORMAL_MONEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    /// A tycoon killing time; boredom is the only enemy.
    Chicken,
    /// Comfortable survival if spent with some thought.
    Easy,
    /// Every yen counts.
    #[default]
    Normal,
}

impl Difficulty {
    /// Menu order on the start screen.
    pub const ALL: [Self; 3] = [Self::Chicken, Self::Easy, Self::Normal];

    #[must_use]
    pub const fn starting_money(self) -> i64 {
        match self {
            Self::Chicken => CHICKEN_MONEY,
            Self::Easy => EASY_MONEY,
            Self::Normal => NORMAL_MONEY,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chicken => "CHICKEN",
            Self::Easy => "EASY",
            Self::Normal => "NORMAL",
        }
    }

    /// Lowercase key used for i18n lookups and CSS hooks.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Chicken => "chicken",
            Self::Easy => "easy",
            Self::Normal => "normal",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or(())
    }
}
