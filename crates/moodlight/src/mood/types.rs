use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse character of the recent audio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoodType {
    Calm,
    Energetic,
    Intense,
    Floaty,
    /// No rule matched, or no data yet.
    #[default]
    Unknown,
}

impl MoodType {
    pub const ALL: &[MoodType] = &[
        MoodType::Calm,
        MoodType::Energetic,
        MoodType::Intense,
        MoodType::Floaty,
        MoodType::Unknown,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MoodType::Calm => "Calm",
            MoodType::Energetic => "Energetic",
            MoodType::Intense => "Intense",
            MoodType::Floaty => "Floaty",
            MoodType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
