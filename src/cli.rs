use std::io::Write;
use std::path::{Path, MAIN_SEPARATOR};

use tracing::warn;

use crate::error::DocError;
use crate::renderer::render_doc;
use crate::resolver::{is_path, Resolver};

pub fn usage(program: &str) -> String {
    format!(
        "{program} - render symbol documentation as Markdown

{program} <name> ...
    Show documentation in Markdown format.  <name> may be the name
    of a module or package, or a dotted reference to a class or
    function within a module or module in a package.  If <name>
    contains a '{sep}', it is used as the path to a symbol dump file
    to document.
",
        program = program,
        sep = MAIN_SEPARATOR
    )
}

/// Document each identifier in turn, writing Markdown to `out`.
///
/// A failed identifier is replaced by a single error line and processing
/// moves on, except for a missing path, which stops the run.
pub fn run<W: Write>(
    program: &str,
    identifiers: &[String],
    resolver: &Resolver,
    out: &mut W,
) -> std::io::Result<()> {
    if identifiers.is_empty() {
        write!(out, "{}", usage(program))?;
        return Ok(());
    }

    for identifier in identifiers {
        if is_path(identifier) && !Path::new(identifier).exists() {
            let err = DocError::PathNotFound {
                path: identifier.into(),
            };
            warn!(%identifier, "stopping at missing path");
            writeln!(out, "{}", err)?;
            break;
        }

        let rendered = resolver
            .resolve(identifier)
            .and_then(|resolved| render_doc(&resolved.symbol, &resolved.description));

        match rendered {
            Ok(document) => writeln!(out, "{}", document)?,
            Err(err) => {
                warn!(%identifier, error = %err, "could not document identifier");
                writeln!(out, "{}", err)?;
            }
        }
    }

    Ok(())
}
