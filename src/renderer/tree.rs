//! Inheritance tree for the classes a module defines.

use std::collections::BTreeMap;

use crate::error::{DocError, Result};
use crate::renderer::traits::MAX_DEPTH;
use crate::symbols::{Class, ClassRef};

/// One class in the tree together with its subclasses.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNode {
    pub class: ClassRef,
    /// Declared bases. Empty for classes outside the documented set.
    pub bases: Vec<ClassRef>,
    pub children: Vec<ClassNode>,
}

/// Arrange `classes` by inheritance.
///
/// Each class is filed under its bases, stopping after the first base that
/// is itself in `classes`. Classes without bases and bases from outside the
/// set become roots. Siblings are ordered by module, then name. A class
/// that no root leads to sits on an inheritance cycle and is reported as
/// [`DocError::DepthExceeded`].
pub fn class_tree(classes: &[&Class]) -> Result<Vec<ClassNode>> {
    let known: BTreeMap<ClassRef, &Class> = classes.iter().map(|c| (c.reference(), *c)).collect();
    let mut children: BTreeMap<ClassRef, Vec<ClassRef>> = BTreeMap::new();
    let mut roots: Vec<ClassRef> = Vec::new();

    for class in classes {
        let this = class.reference();
        if class.bases.is_empty() {
            if !roots.contains(&this) {
                roots.push(this);
            }
            continue;
        }
        for parent in &class.bases {
            let siblings = children.entry(parent.clone()).or_default();
            if !siblings.contains(&this) {
                siblings.push(this.clone());
            }
            if known.contains_key(parent) {
                break;
            }
        }
    }

    for parent in children.keys() {
        if !known.contains_key(parent) && !roots.contains(parent) {
            roots.push(parent.clone());
        }
    }

    let tree = walk(roots, &children, &known, 0)?;

    let mut placed = Vec::new();
    collect_known(&tree, &known, &mut placed);
    if known.keys().any(|class_ref| !placed.contains(&class_ref)) {
        return Err(DocError::DepthExceeded { limit: MAX_DEPTH });
    }
    Ok(tree)
}

fn collect_known<'t>(
    nodes: &'t [ClassNode],
    known: &BTreeMap<ClassRef, &Class>,
    placed: &mut Vec<&'t ClassRef>,
) {
    for node in nodes {
        if known.contains_key(&node.class) {
            placed.push(&node.class);
        }
        collect_known(&node.children, known, placed);
    }
}

fn walk(
    mut level: Vec<ClassRef>,
    children: &BTreeMap<ClassRef, Vec<ClassRef>>,
    known: &BTreeMap<ClassRef, &Class>,
    depth: usize,
) -> Result<Vec<ClassNode>> {
    if depth > MAX_DEPTH {
        return Err(DocError::DepthExceeded { limit: MAX_DEPTH });
    }

    level.sort();
    level
        .into_iter()
        .map(|class_ref| {
            let nested = match children.get(&class_ref) {
                Some(subclasses) => walk(subclasses.clone(), children, known, depth + 1)?,
                None => Vec::new(),
            };
            Ok(ClassNode {
                bases: known
                    .get(&class_ref)
                    .map(|class| class.bases.clone())
                    .unwrap_or_default(),
                class: class_ref,
                children: nested,
            })
        })
        .collect()
}

fn tree_prefix(depth: usize) -> String {
    if depth == 0 {
        String::new()
    } else {
        format!("{}+-- ", "|  ".repeat(depth))
    }
}

/// Line-art rendering of a class tree, one class per line.
///
/// Bases are listed after a class unless the only base is the parent it is
/// already nested under.
pub fn format_tree(nodes: &[ClassNode], module: &str) -> Result<String> {
    let mut output = String::new();
    format_level(nodes, module, None, 0, &mut output)?;
    Ok(output)
}

fn format_level(
    nodes: &[ClassNode],
    module: &str,
    parent: Option<&ClassRef>,
    depth: usize,
    output: &mut String,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(DocError::DepthExceeded { limit: MAX_DEPTH });
    }

    for node in nodes {
        output.push_str(&tree_prefix(depth));
        output.push_str(&node.class.qualified_name(Some(module)));

        let implied = node.bases.len() == 1 && parent == node.bases.first();
        if !node.bases.is_empty() && !implied {
            let names: Vec<String> = node
                .bases
                .iter()
                .map(|base| base.qualified_name(Some(module)))
                .collect();
            output.push_str(&format!("({})", names.join(", ")));
        }
        output.push('\n');

        format_level(&node.children, module, Some(&node.class), depth + 1, output)?;
    }
    Ok(())
}
