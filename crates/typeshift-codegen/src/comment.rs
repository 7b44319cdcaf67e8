//! Documentation block formatting.
//!
//! Builds JSDoc blocks from extracted XML doc metadata: summary lines
//! first, a `@remarks` section when remarks text is present, then a
//! `@deprecated` tag when the declaration is obsolete. Inline C# doc
//! markup (`<see cref="..."/>`, `<inheritdoc/>`) is rewritten to its
//! JSDoc equivalent.

use std::sync::LazyLock;

use regex::Regex;
use typeshift_ast::DocInfo;

static SEE_WITH_TEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<see\s+cref="([^"]+)"\s*>([^<]*)</see>"#).unwrap());
static SEE_SELF_CLOSING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<see\s+cref="([^"]+)"\s*/>"#).unwrap());
static INHERIT_DOC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<inheritdoc\s*/?>").unwrap());

/// Formats a documentation block, one output line per vector entry, each
/// prefixed with `indent`. Returns `None` when there is nothing to emit.
pub fn format_comment(doc: &DocInfo, indent: &str) -> Option<Vec<String>> {
    if !doc.has_content() {
        return None;
    }

    let mut lines = vec![format!("{indent}/**")];
    let mut wrote_summary = false;

    if let Some(summary) = doc.summary.as_deref().filter(|s| !s.trim().is_empty()) {
        for line in summary.lines() {
            lines.push(format!("{indent} * {}", rewrite_markup(line.trim())));
        }
        wrote_summary = true;
    }

    if let Some(remarks) = doc.remarks.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("{indent} * @remarks"));
        for line in remarks.lines() {
            lines.push(format!("{indent} * {}", rewrite_markup(line.trim())));
        }
    }

    if doc.obsolete {
        if wrote_summary {
            lines.push(format!("{indent} *"));
        }
        match doc.obsolete_message.as_deref() {
            Some(message) => lines.push(format!("{indent} * @deprecated {message}")),
            None => lines.push(format!("{indent} * @deprecated")),
        }
    }

    lines.push(format!("{indent} */"));
    Some(lines)
}

/// Rewrites inline C# doc markup to JSDoc syntax.
fn rewrite_markup(text: &str) -> String {
    let text = SEE_WITH_TEXT_RE.replace_all(text, "{@link $1|$2}");
    let text = SEE_SELF_CLOSING_RE.replace_all(&text, "{@link $1}");
    INHERIT_DOC_RE.replace_all(&text, "{@inheritDoc}").into_owned()
}
