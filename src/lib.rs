//! # docdown
//!
//! Renders introspected program symbols (modules, classes, routines) as
//! Markdown documentation.

pub mod cli;
pub mod config;
pub mod error;
pub mod renderer;
pub mod resolver;
pub mod symbols;


pub use error::{DocError, Result};
pub use renderer::{document, render_doc, Render, RenderContext};
pub use resolver::{Resolved, Resolver};
pub use symbols::*;
