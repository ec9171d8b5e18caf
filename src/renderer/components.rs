use crate::renderer::traits::Heading;
use crate::symbols::{Parameter, Signature};

/// Indentation applied to every nested block.
pub const INDENT: &str = "    ";

/// Placeholder parameter list for routines that cannot be introspected.
pub const OPAQUE_SIGNATURE: &str = "(...)";

pub fn bold(text: &str) -> String {
    format!("**{}**", text)
}

/// Prefix every line of `text`, trimming trailing whitespace from the last one.
pub fn indent(text: &str, prefix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = text.split('\n').map(|line| format!("{}{}", prefix, line)).collect();
    if let Some(last) = lines.last_mut() {
        let trimmed = last.trim_end().len();
        last.truncate(trimmed);
    }
    lines.join("\n")
}

/// A titled section. Always ends in a blank line so sections can be concatenated.
pub fn section(title: &str, contents: &str) -> String {
    format!(
        "{}\n\n{}\n\n",
        Heading::Section.line(title),
        indent(contents, INDENT).trim_end()
    )
}

/// Wrap preformatted text in a fenced block.
pub fn fenced(language: &str, body: &str) -> String {
    let mut output = format!("```{}\n", language);
    output.push_str(body);
    if !body.is_empty() && !body.ends_with('\n') {
        output.push('\n');
    }
    output.push_str("```");
    output
}

fn render_parameter(param: &Parameter) -> String {
    match &param.default {
        Some(default) => format!("{}={}", param.name, default),
        None => param.name.clone(),
    }
}

/// Render a parameter list in call-signature order: positionals, `*varargs`,
/// keyword-only parameters, then `**varkw`.
pub fn format_signature(sig: &Signature) -> String {
    let mut parts: Vec<String> = sig.params.iter().map(render_parameter).collect();

    match &sig.varargs {
        Some(varargs) => parts.push(format!("*{}", varargs)),
        None if !sig.kwonly.is_empty() => parts.push("*".to_string()),
        None => {}
    }

    parts.extend(sig.kwonly.iter().map(render_parameter));

    if let Some(varkw) = &sig.varkw {
        parts.push(format!("**{}", varkw));
    }

    format!("({})", parts.join(", "))
}
