//! Identifier classification and member-name quoting.

use std::borrow::Cow;

/// Words that may not be used as declaration names.
pub const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "await",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "double",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "function",
    "goto",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "int",
    "interface",
    "let",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "volatile",
    "while",
    "with",
    "yield",
];

/// Whether `s` can be written as an unquoted property name.
///
/// Matches `[A-Za-z_$][A-Za-z0-9_$]*`. Reserved words are identifier names
/// too: `{ default: string }` is legal.
pub fn is_identifier_name(s: &str) -> bool {
    fn is_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || c == '$'
    }

    let mut chars = s.chars();
    match chars.next() {
        Some(c) if is_start(c) => chars.all(|c| is_start(c) || c.is_ascii_digit()),
        _ => false,
    }
}

/// Whether `s` can be used as a declaration name (an identifier name that is
/// not reserved).
pub fn is_identifier(s: &str) -> bool {
    is_identifier_name(s) && !RESERVED_WORDS.contains(&s)
}

/// Member names that are not identifier names are written as string literals.
///
/// # Examples
/// ```
/// use dts_dom_core::naming::quote_if_needed;
/// assert_eq!(quote_if_needed("foo"), "foo");
/// assert_eq!(quote_if_needed("foo-bar"), "\"foo-bar\"");
/// ```
pub fn quote_if_needed(s: &str) -> Cow<'_, str> {
    if is_identifier_name(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(quote_string(s))
    }
}

/// Double-quoted string literal with JSON escaping.
pub fn quote_string(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
