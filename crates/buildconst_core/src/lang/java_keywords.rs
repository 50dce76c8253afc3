//! Java keyword vocabulary and identifier checks (for generated-name diagnostics).

/// Reserved keywords and literals that cannot be used as Java identifiers.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue",
    "default", "do", "double", "else", "enum", "extends", "final", "finally", "float", "for", "goto", "if",
    "implements", "import", "instanceof", "int", "interface", "long", "native", "new", "package", "private",
    "protected", "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false", "null", "_",
];

/// Check whether an identifier is a Java keyword.
pub fn is_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Check whether a name is a usable Java identifier.
///
/// ## Notes
/// - Only ASCII letters, digits, `_` and `$` are accepted; Java allows more, but generated names are expected to be
///   plain ASCII.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') && !is_keyword(name)
}

/// Check whether text would need escaping inside a Java string literal.
///
/// The generator never escapes; this only lets callers report values that will produce broken source.
pub fn needs_escaping(text: &str) -> bool {
    text.chars().any(|c| c == '"' || c == '\\' || c.is_control())
}
