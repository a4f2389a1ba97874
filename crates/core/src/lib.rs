pub mod config;
pub mod document;

pub use config::{load_dotenv, Config};
pub use document::*;
