pub mod classifier;
pub mod history;
pub mod snapshot;
pub mod types;

pub use classifier::classify;
pub use history::MoodHistory;
pub use snapshot::MoodSnapshot;
pub use types::MoodType;
