use super::snapshot::MoodSnapshot;
use super::types::MoodType;

/// One entry of the priority-ordered classification table.
pub struct MoodRule {
    pub mood: MoodType,
    pub matches: fn(&MoodSnapshot) -> bool,
}

fn is_intense(m: &MoodSnapshot) -> bool {
    m.energy > 0.8 && m.dynamics > 0.5
}

fn is_energetic(m: &MoodSnapshot) -> bool {
    m.energy > 0.6 && m.bpm > 100.0
}

fn is_calm(m: &MoodSnapshot) -> bool {
    m.energy < 0.3 && m.dynamics < 0.2
}

fn is_floaty(m: &MoodSnapshot) -> bool {
    m.bpm < 80.0 && m.energy > 0.4
}

/// Evaluated top to bottom; the first match wins. Order is observable at
/// the rule boundaries (e.g. energy 0.9, dynamics 0.6, bpm 120 satisfies
/// both Intense and Energetic).
pub const MOOD_RULES: &[MoodRule] = &[
    MoodRule { mood: MoodType::Intense, matches: is_intense },
    MoodRule { mood: MoodType::Energetic, matches: is_energetic },
    MoodRule { mood: MoodType::Calm, matches: is_calm },
    MoodRule { mood: MoodType::Floaty, matches: is_floaty },
];

/// Classify a snapshot with [`MOOD_RULES`], falling back to `Unknown`.
///
/// Only `energy`, `dynamics` and `bpm` are read. Every other field is
/// ignored, which is what lets the predictor classify a synthetic snapshot
/// holding nothing but those three averages. A rule reading any other field
/// would see zeros there during prediction.
pub fn classify(m: &MoodSnapshot) -> MoodType {
    MOOD_RULES
        .iter()
        .find(|rule| (rule.matches)(m))
        .map_or(MoodType::Unknown, |rule| rule.mood)
}
