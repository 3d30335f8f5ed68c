/// Rule name for a generated parser context class.
///
/// Strips the `Context` suffix and capitalizes the first letter, so both
/// `KotlinFileContext` and the serialized `kotlinFile` become `KotlinFile`.
///
/// # Examples
/// ```
/// use treematch_core::utils::rule_name_from_class;
/// assert_eq!(rule_name_from_class("KotlinFileContext"), "KotlinFile");
/// assert_eq!(rule_name_from_class("importList"), "ImportList");
/// ```
pub fn rule_name_from_class(class: &str) -> String {
    let name = class.strip_suffix("Context").unwrap_or(class);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rule name for a named tree-sitter node kind.
///
/// # Examples
/// ```
/// use treematch_core::utils::rule_name_from_kind;
/// assert_eq!(rule_name_from_kind("source_file"), "SourceFile");
/// assert_eq!(rule_name_from_kind("_lexical_identifier"), "LexicalIdentifier");
/// ```
pub fn rule_name_from_kind(kind: &str) -> String {
    let mut result = String::with_capacity(kind.len());
    for word in kind.split('_').filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.push(first.to_ascii_uppercase());
            result.extend(chars);
        }
    }
    result
}

/// Escape a token text for a single-line dump entry.
///
/// Backslashes are left alone, as in PSI dumps, so `\n` in a dump may be
/// either a line break or a source escape sequence. The dump reader keeps
/// escapes as written; a printed token with a line break reads back as the
/// two-character escape.
pub fn escape_token_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}
