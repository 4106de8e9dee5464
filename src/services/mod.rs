pub mod difficulty_assigner;
pub mod tally;
pub mod theme_index;

pub use difficulty_assigner::DifficultyAssigner;
pub use tally::DifficultyTally;
pub use theme_index::ThemeIndex;
