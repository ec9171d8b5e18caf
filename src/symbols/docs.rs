//! Docstring normalisation shared by the renderers and the resolver.

const TAB_WIDTH: usize = 8;
const REVISION_PREFIX: &str = "$Revision: ";

/// Expand tabs to the next multiple of eight columns.
fn expand_tabs(line: &str) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            expanded.extend(std::iter::repeat(' ').take(pad));
            column += pad;
        } else {
            expanded.push(ch);
            column += 1;
        }
    }
    expanded
}

/// Remove the indentation docstrings pick up from the surrounding source.
///
/// The first line is left-stripped, the common margin of all following
/// non-blank lines is removed, and empty lines at either end are dropped.
pub fn clean_doc(doc: &str) -> String {
    let mut lines: Vec<String> = doc.split('\n').map(expand_tabs).collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start().chars().count();
            (content > 0).then(|| line.chars().count() - content)
        })
        .min();

    if let Some(first) = lines.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(margin) = margin {
        for line in lines.iter_mut().skip(1) {
            *line = line.chars().skip(margin).collect();
        }
    }

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|line| line.is_empty()).count();
    lines.drain(..leading);

    lines.join("\n")
}

/// Cleaned docstring text, or `None` when there is nothing to show.
pub fn doc_text(doc: Option<&str>) -> Option<String> {
    let cleaned = clean_doc(doc?);
    let trimmed = cleaned.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a docstring into its one-line synopsis and the remaining body.
///
/// A synopsis only exists when the docstring is a single line or when its
/// first line is followed by a blank one.
pub fn split_doc(doc: &str) -> (String, String) {
    let lines: Vec<&str> = doc.trim().split('\n').collect();
    match lines.as_slice() {
        [only] => (only.to_string(), String::new()),
        [first, second, rest @ ..] if second.trim_end().is_empty() => {
            (first.to_string(), rest.join("\n"))
        }
        _ => (String::new(), lines.join("\n")),
    }
}

/// Reduce a `$Revision: 1.2 $` keyword string to `1.2`.
pub fn strip_revision(version: &str) -> String {
    match version
        .strip_prefix(REVISION_PREFIX)
        .and_then(|rest| rest.strip_suffix('$'))
    {
        Some(inner) => inner.trim().to_string(),
        None => version.to_string(),
    }
}
