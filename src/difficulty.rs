use serde::{Deserialize, Serialize};

/// Strength tiers offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Parses the wire names used by the embedding page.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Self::Easy),
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Search depth and presentation delay for one tier.
///
/// Plain data: hosts may override the numbers, never the behavior. The
/// delay is advisory, the engine itself never sleeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub depth: u8,
    pub delay_ms: u32,
}

/// Per-tier profiles, falling back to the stock table for any tier a host
/// override leaves out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    pub easy: DifficultyProfile,
    pub normal: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            easy: DifficultyProfile {
                depth: 1,
                delay_ms: 1000,
            },
            normal: DifficultyProfile {
                depth: 2,
                delay_ms: 1500,
            },
            hard: DifficultyProfile {
                depth: 3,
                delay_ms: 2000,
            },
        }
    }
}

impl DifficultyConfig {
    pub fn profile(&self, tier: Difficulty) -> DifficultyProfile {
        match tier {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }
}
