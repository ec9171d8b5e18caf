pub mod docs;
pub mod types;

pub use types::*;
