use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Members keyed by the name they are exposed under. The map keeps them
/// sorted, which is the order every renderer walks them in.
pub type Members = BTreeMap<String, Symbol>;

/// The structural kind of a symbol, used for renderer dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Module,
    Class,
    Routine,
    Data,
}

/// A program entity as captured by the introspection dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Symbol {
    Module(Module),
    Class(Class),
    Routine(Routine),
    Data(Data),
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Module(_) => SymbolKind::Module,
            Symbol::Class(_) => SymbolKind::Class,
            Symbol::Routine(_) => SymbolKind::Routine,
            Symbol::Data(_) => SymbolKind::Data,
        }
    }

    /// The symbol's real name, independent of any alias it is exposed under.
    pub fn name(&self) -> &str {
        match self {
            Symbol::Module(module) => &module.name,
            Symbol::Class(class) => &class.name,
            Symbol::Routine(routine) => &routine.name,
            Symbol::Data(data) => &data.name,
        }
    }

    /// Name of the module this symbol lives in, when known.
    pub fn module_name(&self) -> Option<&str> {
        match self {
            Symbol::Module(module) => Some(&module.name),
            Symbol::Class(class) => Some(&class.module),
            Symbol::Routine(routine) => routine.module.as_deref(),
            Symbol::Data(data) => Some(&data.class.module),
        }
    }

    /// Child symbols reachable by attribute lookup.
    pub fn members(&self) -> Option<&Members> {
        match self {
            Symbol::Module(module) => Some(&module.members),
            Symbol::Class(class) => Some(&class.members),
            Symbol::Data(data) => Some(&data.class.members),
            Symbol::Routine(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub doc: Option<String>,
    /// Present when the module is a package: its direct submodules.
    pub package: Option<Vec<PackageEntry>>,
    /// Explicit list of public names, when the module declares one.
    pub exports: Option<Vec<String>>,
    #[serde(default)]
    pub members: Members,
    #[serde(default)]
    pub metadata: ModuleMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub name: String,
    #[serde(default)]
    pub is_package: bool,
}

impl PackageEntry {
    pub fn display_name(&self) -> String {
        if self.is_package {
            format!("{} (package)", self.name)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    pub version: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub credits: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub module: String,
    pub doc: Option<String>,
    #[serde(default)]
    pub bases: Vec<ClassRef>,
    #[serde(default)]
    pub members: Members,
}

impl Class {
    pub fn reference(&self) -> ClassRef {
        ClassRef {
            module: self.module.clone(),
            name: self.name.clone(),
        }
    }

    pub fn is(&self, class_ref: &ClassRef) -> bool {
        self.module == class_ref.module && self.name == class_ref.name
    }
}

/// A pointer to a class by module and name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassRef {
    pub module: String,
    pub name: String,
}

impl ClassRef {
    pub fn new(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    /// The class name, prefixed with its module unless that is `module`.
    pub fn qualified_name(&self, module: Option<&str>) -> String {
        if module == Some(self.module.as_str()) {
            self.name.clone()
        } else {
            format!("{}.{}", self.module, self.name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    pub module: Option<String>,
    pub doc: Option<String>,
    /// `None` when the parameter list cannot be introspected.
    pub signature: Option<Signature>,
    #[serde(default)]
    pub builtin: bool,
    /// Class whose dictionary defines this routine, for methods.
    pub owner: Option<ClassRef>,
    /// Class of the instance a bound method is attached to.
    pub bound_to: Option<ClassRef>,
}

impl Routine {
    pub const LAMBDA_NAME: &'static str = "<lambda>";

    pub fn is_lambda(&self) -> bool {
        self.name == Self::LAMBDA_NAME
    }

    pub fn is_method(&self) -> bool {
        self.owner.is_some()
    }

    /// The introspected signature, unless the routine is opaque.
    pub fn introspectable_signature(&self) -> Option<&Signature> {
        if self.builtin {
            None
        } else {
            self.signature.as_ref()
        }
    }
}

/// A parameter list. Dumps give it either as explicit `params` or in
/// argspec form, with `args` plus a `defaults` list for the tail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "SignatureDump")]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<Parameter>,
    pub varargs: Option<String>,
    #[serde(default)]
    pub kwonly: Vec<Parameter>,
    pub varkw: Option<String>,
}

impl Signature {
    /// Build a signature from positional names and a defaults list that
    /// applies to the last `defaults.len()` of them.
    pub fn from_argspec(
        args: &[&str],
        defaults: &[&str],
        varargs: Option<&str>,
        varkw: Option<&str>,
    ) -> Self {
        let first_default = args.len().saturating_sub(defaults.len());
        let skipped = defaults.len().saturating_sub(args.len());
        let params = args
            .iter()
            .enumerate()
            .map(|(i, name)| Parameter {
                name: name.to_string(),
                default: if i >= first_default {
                    Some(defaults[skipped + i - first_default].to_string())
                } else {
                    None
                },
            })
            .collect();

        Self {
            params,
            varargs: varargs.map(str::to_string),
            kwonly: Vec::new(),
            varkw: varkw.map(str::to_string),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignatureDump {
    Argspec {
        args: Vec<String>,
        #[serde(default)]
        defaults: Vec<String>,
        varargs: Option<String>,
        #[serde(default)]
        kwonly: Vec<Parameter>,
        varkw: Option<String>,
    },
    Params {
        #[serde(default)]
        params: Vec<Parameter>,
        varargs: Option<String>,
        #[serde(default)]
        kwonly: Vec<Parameter>,
        varkw: Option<String>,
    },
}

impl From<SignatureDump> for Signature {
    fn from(dump: SignatureDump) -> Self {
        match dump {
            SignatureDump::Argspec {
                args,
                defaults,
                varargs,
                kwonly,
                varkw,
            } => {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                let defaults: Vec<&str> = defaults.iter().map(String::as_str).collect();
                Signature {
                    kwonly,
                    ..Signature::from_argspec(&args, &defaults, varargs.as_deref(), varkw.as_deref())
                }
            }
            SignatureDump::Params {
                params,
                varargs,
                kwonly,
                varkw,
            } => Signature {
                params,
                varargs,
                kwonly,
                varkw,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Source representation of the default value.
    pub default: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    pub fn with_default(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: Some(default.into()),
        }
    }
}

/// A plain value. Only the interface of its type is ever documented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    pub name: String,
    #[serde(rename = "type")]
    pub class: Class,
    /// Carried from the dump for completeness. Documents show the type only.
    pub repr: Option<String>,
}
