pub mod json_loader;

pub use json_loader::{load_document, save_document, write_json_pretty};
