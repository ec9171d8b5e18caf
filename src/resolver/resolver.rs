use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use tracing::debug;

use crate::config::Config;
use crate::error::{DocError, Result};
use crate::symbols::*;

/// File extension of symbol dumps on the search path.
pub const DUMP_EXTENSION: &str = "json";

/// Module consulted when no prefix of an identifier loads on its own.
pub const BUILTINS_MODULE: &str = "builtins";

/// A symbol together with the one-line description used as its title.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub symbol: Symbol,
    pub description: String,
}

/// Whether an identifier should be treated as a filesystem path.
pub fn is_path(identifier: &str) -> bool {
    identifier.contains(MAIN_SEPARATOR)
}

/// The kind-and-name phrase for a symbol, e.g. `class Widget`.
pub fn describe(symbol: &Symbol) -> String {
    match symbol {
        Symbol::Module(module) if module.package.is_some() => format!("package {}", module.name),
        Symbol::Module(module) => format!("module {}", module.name),
        Symbol::Class(class) => format!("class {}", class.name),
        Symbol::Routine(routine) if routine.builtin => format!("built-in function {}", routine.name),
        Symbol::Routine(routine) if routine.is_method() => format!("method {}", routine.name),
        Symbol::Routine(routine) => format!("function {}", routine.name),
        Symbol::Data(data) => data.class.name.clone(),
    }
}

/// Read a symbol dump from disk.
pub fn load_dump(path: &Path) -> Result<Symbol> {
    debug!(path = %path.display(), "loading symbol dump");
    let label = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let content = fs::read_to_string(path).map_err(|err| DocError::load_failed(&label, err))?;
    serde_json::from_str(&content).map_err(|err| DocError::load_failed(&label, err))
}

/// Maps user identifiers to symbols loaded from dumps on the search path.
#[derive(Debug, Clone)]
pub struct Resolver {
    search_path: Vec<PathBuf>,
}

impl Resolver {
    pub fn new(config: &Config) -> Self {
        Self {
            search_path: config.search_path.clone(),
        }
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Find the dump for a dotted module name, if any directory has one.
    fn find_dump(&self, module: &str) -> Option<PathBuf> {
        let file_name = format!("{}.{}", module, DUMP_EXTENSION);
        self.search_path
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
    }

    fn load_module(&self, module: &str) -> Result<Option<Symbol>> {
        match self.find_dump(module) {
            Some(path) => load_dump(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Locate the symbol a dotted identifier names.
    ///
    /// The longest loadable module prefix is loaded and the remaining
    /// segments are looked up as members.
    pub fn locate(&self, identifier: &str) -> Result<Option<Symbol>> {
        let parts: Vec<&str> = identifier.split('.').filter(|part| !part.is_empty()).collect();
        if parts.is_empty() {
            return Ok(None);
        }
        let mut module = None;
        let mut loaded = 0;

        while loaded < parts.len() {
            let prefix = parts[..=loaded].join(".");
            match self.load_module(&prefix)? {
                Some(symbol) => {
                    debug!(module = %prefix, "resolved module prefix");
                    module = Some(symbol);
                    loaded += 1;
                }
                None => break,
            }
        }

        let (mut current, rest) = match module {
            Some(symbol) => (symbol, &parts[loaded..]),
            None => match self.load_module(BUILTINS_MODULE)? {
                Some(builtins) => (builtins, &parts[..]),
                None => {
                    debug!(identifier, search_path = ?self.search_path(), "no module prefix found");
                    return Ok(None);
                }
            },
        };

        for part in rest {
            let next = current.members().and_then(|members| members.get(*part)).cloned();
            match next {
                Some(symbol) => current = symbol,
                None => return Ok(None),
            }
        }

        Ok(Some(current))
    }

    /// Resolve an identifier or dump path to a symbol and its description.
    pub fn resolve(&self, identifier: &str) -> Result<Resolved> {
        if is_path(identifier) {
            let path = Path::new(identifier);
            if !path.exists() {
                return Err(DocError::PathNotFound {
                    path: path.to_path_buf(),
                });
            }
            let symbol = load_dump(path)?;
            let description = describe_in(&symbol, None);
            return Ok(Resolved { symbol, description });
        }

        let symbol = self
            .locate(identifier)?
            .ok_or_else(|| DocError::not_found(identifier))?;
        let description = describe_in(&symbol, Some(identifier));
        Ok(Resolved { symbol, description })
    }
}

/// Description with the owner appended: the dotted prefix of the identifier
/// when there is one, otherwise the module a non-module symbol lives in.
fn describe_in(symbol: &Symbol, identifier: Option<&str>) -> String {
    let mut description = describe(symbol);
    match identifier.and_then(|id| id.rfind('.').map(|dot| &id[..dot])) {
        Some(owner) => {
            description.push_str(" in ");
            description.push_str(owner);
        }
        None if symbol.kind() != SymbolKind::Module => {
            if let Some(module) = symbol.module_name() {
                description.push_str(" in module ");
                description.push_str(module);
            }
        }
        None => {}
    }
    description
}
