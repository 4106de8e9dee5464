pub mod difficulty;
pub mod loaders;
pub mod question;

pub use difficulty::Difficulty;
pub use loaders::{load_document, save_document, write_json_pretty};
pub use question::{QuestionDocument, QuestionRecord, DIFFICULTY_FIELD};
