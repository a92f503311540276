//! Domain model for the single check-in this app tracks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::FALLBACK_NAME;

/// Slider position when nothing is persisted yet.
pub const DEFAULT_LEVEL: i32 = 35;
/// Cup count when nothing is persisted yet.
pub const DEFAULT_CUPS: u32 = 1;
/// The cup picker stops at four cups.
pub const MAX_CUPS: u32 = 4;
/// Longest display name kept after sanitization.
pub const MAX_NAME_LEN: usize = 30;

/// The current check-in: who we are checking on and how grumpy things are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    /// Grump factor, 0 (sunshine) to 100 (thunderclouds)
    pub level: i32,
    /// Cups of coffee logged so far today
    pub cups: u32,
    /// Display name; blank falls back to "Dad" wherever it is rendered
    pub name: String,
    /// Dark-mode preference
    pub dark: bool,
    /// When this check-in last changed
    pub updated_at: DateTime<Utc>,
}

impl Default for CheckIn {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            cups: DEFAULT_CUPS,
            name: FALLBACK_NAME.to_string(),
            dark: false,
            updated_at: Utc::now(),
        }
    }
}

impl CheckIn {
    /// Clamp a level onto the 0-100 scale.
    pub fn clamp_level(level: i32) -> i32 {
        level.clamp(0, 100)
    }

    /// Cap a cup count at [`MAX_CUPS`].
    pub fn clamp_cups(cups: u32) -> u32 {
        cups.min(MAX_CUPS)
    }

    /// Strip a raw name down to letters, digits, spaces, and `.`/`'`/`-`,
    /// then truncate to [`MAX_NAME_LEN`] characters.
    pub fn sanitize_name(raw: &str) -> String {
        raw.chars()
            .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '\'' | '-'))
            .take(MAX_NAME_LEN)
            .collect()
    }
}
