pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod segments;
pub mod text;
pub mod themes;
pub mod utils;

pub use config::*;
pub use document::*;
pub use engine::*;
pub use error::*;
pub use segments::*;
pub use text::*;
pub use utils::*;
