use crate::error::{DocError, Result};
use crate::symbols::Class;

/// Deepest nesting the renderer will follow before giving up.
pub const MAX_DEPTH: usize = 64;

/// Heading levels, fixed per kind of fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Document,
    Section,
    Class,
    Routine,
}

impl Heading {
    pub fn marker(self) -> &'static str {
        match self {
            Heading::Document => "#",
            Heading::Section => "##",
            Heading::Class => "###",
            Heading::Routine => "####",
        }
    }

    pub fn line(self, title: &str) -> String {
        format!("{} {}", self.marker(), title)
    }
}

/// Where a fragment is being rendered from.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    pub depth: usize,
    /// Module names are qualified relative to this one.
    pub module: Option<&'a str>,
    /// Class currently being documented, when rendering its methods.
    pub class: Option<&'a Class>,
}

impl<'a> RenderContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth, ..*self }
    }

    /// One level deeper, or an error once `MAX_DEPTH` is passed.
    pub fn descend(&self) -> Result<Self> {
        if self.depth >= MAX_DEPTH {
            return Err(DocError::DepthExceeded { limit: MAX_DEPTH });
        }
        Ok(self.with_depth(self.depth + 1))
    }

    pub fn in_module<'b>(&self, module: &'b str) -> RenderContext<'b>
    where
        'a: 'b,
    {
        RenderContext {
            depth: self.depth,
            module: Some(module),
            class: self.class,
        }
    }

    pub fn in_class<'b>(&self, class: &'b Class) -> RenderContext<'b>
    where
        'a: 'b,
    {
        RenderContext {
            depth: self.depth,
            module: Some(&class.module),
            class: Some(class),
        }
    }
}

/// Core rendering trait for every documented kind of symbol.
///
/// `name` is the name the symbol is exposed under, which may differ from
/// its real name when it is an alias.
pub trait Render {
    fn render(&self, name: &str, context: &RenderContext) -> Result<String>;
}
