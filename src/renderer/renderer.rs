use tracing::debug;

use crate::error::Result;
use crate::renderer::traits::*;
use crate::symbols::*;

/// Render the fragment for a symbol under its own name.
///
/// Data values are documented through the interface of their type.
pub fn document(symbol: &Symbol) -> Result<String> {
    let context = RenderContext::new();
    match symbol {
        Symbol::Module(module) => module.render(&module.name, &context),
        Symbol::Class(class) => class.render(&class.name, &context),
        Symbol::Routine(routine) => match routine.module.as_deref() {
            Some(module) => routine.render(&routine.name, &context.in_module(module)),
            None => routine.render(&routine.name, &context),
        },
        Symbol::Data(data) => data.class.render(&data.class.name, &context),
    }
}

/// Render a complete Markdown document headed by `description`.
pub fn render_doc(symbol: &Symbol, description: &str) -> Result<String> {
    debug!(symbol = symbol.name(), kind = ?symbol.kind(), "rendering document");
    let title = match symbol.kind() {
        SymbolKind::Data => format!("{} object", description),
        SymbolKind::Module | SymbolKind::Class | SymbolKind::Routine => description.to_string(),
    };
    Ok(format!("{}\n\n{}", Heading::Document.line(&title), document(symbol)?))
}
