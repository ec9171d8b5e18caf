pub mod components;
pub mod renderer;
pub mod renders;
pub mod traits;
pub mod tree;

pub use components::*;
pub use renderer::*;
pub use renders::*;
pub use traits::*;
pub use tree::*;
