use tracing::trace;

use crate::error::Result;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::renderer::tree::{class_tree, format_tree};
use crate::symbols::docs::{doc_text, split_doc, strip_revision};
use crate::symbols::*;

/// Housekeeping names never worth documenting, even though they are dunders.
const HIDDEN_NAMES: &[&str] = &[
    "__builtins__",
    "__doc__",
    "__file__",
    "__path__",
    "__module__",
    "__name__",
    "__slots__",
    "__package__",
];

/// Whether a module member should appear in its documentation.
pub fn visible_name(name: &str, exports: Option<&[String]>) -> bool {
    if HIDDEN_NAMES.contains(&name) {
        return false;
    }
    if name.starts_with("__") && name.ends_with("__") {
        return true;
    }
    match exports {
        Some(exports) => exports.iter().any(|export| export == name),
        None => !name.starts_with('_'),
    }
}

impl Render for Module {
    fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        trace!(module = %self.name, "rendering module");
        let context = context.in_module(&self.name);
        let exports = self.exports.as_deref();
        let mut output = String::new();

        let doc = doc_text(self.doc.as_deref());
        let (synopsis, description) = doc.as_deref().map(split_doc).unwrap_or_default();

        let mut title = name.to_string();
        if !synopsis.is_empty() {
            title.push_str(" - ");
            title.push_str(&synopsis);
        }
        output.push_str(&section("Name", &title));

        if !description.is_empty() {
            output.push_str(&section("Description", &description));
        }

        if let Some(entries) = &self.package {
            let mut contents: Vec<String> = entries.iter().map(PackageEntry::display_name).collect();
            contents.sort();
            if !contents.is_empty() {
                output.push_str(&section("Package contents", &contents.join("\n")));
            }
        }

        let classes: Vec<(&String, &Class)> = self
            .members
            .iter()
            .filter_map(|(key, member)| match member {
                Symbol::Class(class)
                    if (exports.is_some() || class.module == self.name)
                        && visible_name(key, exports) =>
                {
                    Some((key, class))
                }
                _ => None,
            })
            .collect();

        let functions: Vec<(&String, &Routine)> = self
            .members
            .iter()
            .filter_map(|(key, member)| match member {
                Symbol::Routine(routine)
                    if (exports.is_some()
                        || routine.builtin
                        || routine.module.as_deref() == Some(self.name.as_str()))
                        && visible_name(key, exports) =>
                {
                    Some((key, routine))
                }
                _ => None,
            })
            .collect();

        if !classes.is_empty() {
            let listed: Vec<&Class> = classes.iter().map(|(_, class)| *class).collect();
            let tree = format_tree(&class_tree(&listed)?, &self.name)?;
            output.push_str(&section("Classes Tree", &fenced("text", &tree)));

            let fragments = classes
                .iter()
                .map(|(key, class)| class.render(key, &context))
                .collect::<Result<Vec<_>>>()?;
            output.push_str(&section("Classes", &fragments.join("\n")));
        }

        if !functions.is_empty() {
            let fragments = functions
                .iter()
                .map(|(key, routine)| routine.render(key, &context))
                .collect::<Result<Vec<_>>>()?;
            output.push_str(&section("Functions", &fragments.join("\n")));
        }

        let metadata = &self.metadata;
        if let Some(version) = &metadata.version {
            output.push_str(&section("Version", &strip_revision(version)));
        }
        if let Some(date) = &metadata.date {
            output.push_str(&section("Date", date));
        }
        if let Some(author) = &metadata.author {
            output.push_str(&section("Author", author));
        }
        if let Some(credits) = &metadata.credits {
            output.push_str(&section("Credits", credits));
        }

        Ok(output)
    }
}

impl Render for Class {
    fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        trace!(class = %self.name, "rendering class");
        let class_context = context.descend()?.in_class(self);
        let module = Some(self.module.as_str());

        let mut title = if name == self.name {
            Heading::Class.line(&format!("class {}", bold(&self.name)))
        } else {
            Heading::Class.line(&format!("{} = class {}", bold(name), self.name))
        };

        if !self.bases.is_empty() {
            let bases: Vec<String> = self.bases.iter().map(|base| base.qualified_name(module)).collect();
            title.push_str(&format!("({})", bases.join(", ")));
        }

        let mut contents = String::new();
        if let Some(doc) = doc_text(self.doc.as_deref()) {
            contents.push_str(&doc);
            contents.push_str("\n\n");
        }

        for (key, member) in &self.members {
            if key.starts_with('_') {
                continue;
            }
            if let Symbol::Routine(method) = member {
                contents.push_str(&method.render(key, &class_context)?);
            }
        }

        if contents.is_empty() {
            return Ok(format!("{}\n", title));
        }
        Ok(format!("{}\n{}\n", title, indent(contents.trim_end(), INDENT)))
    }
}

impl Render for Routine {
    fn render(&self, name: &str, context: &RenderContext) -> Result<String> {
        let realname = &self.name;
        let mut note = String::new();
        let mut title_only = false;

        if let Some(owner) = &self.owner {
            match context.class {
                Some(class) => {
                    if !class.is(owner) {
                        note = format!(" from {}", owner.qualified_name(context.module));
                        title_only = true;
                    }
                }
                None => {
                    note = match &self.bound_to {
                        Some(instance) => {
                            format!(" method of {} instance", instance.qualified_name(context.module))
                        }
                        None => format!(" unbound {} method", owner.qualified_name(context.module)),
                    };
                }
            }
        }

        let mut title = if name == realname.as_str() {
            Heading::Routine.line(realname)
        } else {
            // Same dictionary entry exposed under a second name.
            if let Some(class) = context.class {
                if matches!(class.members.get(realname.as_str()), Some(Symbol::Routine(entry)) if entry == self) {
                    title_only = true;
                }
            }
            Heading::Routine.line(&format!("{} = {}", name, realname))
        };

        let mut argspec = match self.introspectable_signature() {
            Some(sig) => {
                let rendered = format_signature(sig);
                if self.is_lambda() {
                    title = Heading::Routine.line("lambda ");
                    rendered[1..rendered.len() - 1].to_string()
                } else {
                    rendered
                }
            }
            None => OPAQUE_SIGNATURE.to_string(),
        };
        argspec.push_str(&note);
        let decl = format!("{}{}", title, argspec);

        if title_only {
            return Ok(format!("{}\n", decl));
        }

        let doc = doc_text(self.doc.as_deref()).unwrap_or_default();
        Ok(format!("{}\n*{}*\n\n", decl, indent(&doc, INDENT).trim_end()))
    }
}
