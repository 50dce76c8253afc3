//! Define the typed constant values and the access level of the generated class.
//!
//! ## Notes
//! - The value type is decided when the constants map is built, never by inspecting the value later. An `Int` and a
//!   `Long` holding the same number render differently (`17` vs `17L`).

use std::fmt;

/// Represent a single additional constant value.
///
/// ## Examples
/// ```rust
/// use buildconst_core::ConstantValue;
///
/// assert_eq!(ConstantValue::Int(17).java_literal(), "17");
/// assert_eq!(ConstantValue::Long(2300).java_literal(), "2300L");
/// assert_eq!(ConstantValue::from("def").java_literal(), "\"def\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstantValue {
    /// 32-bit integer, emitted as `int`.
    Int(i32),
    /// 64-bit integer, emitted as `long` with an `L` suffix.
    Long(i64),
    /// Emitted as `boolean`.
    Bool(bool),
    /// Canonical text of any other value, emitted as a double-quoted `String`.
    Text(String),
}

impl ConstantValue {
    /// Build a text constant from anything with a canonical text form.
    pub fn text(value: impl fmt::Display) -> Self {
        ConstantValue::Text(value.to_string())
    }

    /// Return the Java type keyword used in the field declaration.
    pub fn java_type(&self) -> &'static str {
        match self {
            ConstantValue::Int(_) => "int",
            ConstantValue::Long(_) => "long",
            ConstantValue::Bool(_) => "boolean",
            ConstantValue::Text(_) => "String",
        }
    }

    /// Return the Java literal for this value.
    ///
    /// ## Notes
    /// - Text is wrapped in double quotes verbatim; no escaping is performed.
    pub fn java_literal(&self) -> String {
        match self {
            ConstantValue::Int(v) => v.to_string(),
            ConstantValue::Long(v) => format!("{v}L"),
            ConstantValue::Bool(v) => v.to_string(),
            ConstantValue::Text(v) => format!("\"{v}\""),
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(v) => write!(f, "{v}"),
            ConstantValue::Long(v) => write!(f, "{v}"),
            ConstantValue::Bool(v) => write!(f, "{v}"),
            ConstantValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Int(value)
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Long(value)
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Bool(value)
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        ConstantValue::Text(value)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::Text(value.to_string())
    }
}

/// Access modifier applied to the generated class and every constant in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum SourceAccess {
    /// `public` class and constants.
    #[default]
    Public,
    /// Package-private class and constants (no modifier).
    Package,
}

impl SourceAccess {
    /// Return the modifier prefix, including its trailing space (empty for package access).
    pub fn modifier(self) -> &'static str {
        match self {
            SourceAccess::Public => "public ",
            SourceAccess::Package => "",
        }
    }

    /// Parse a case-insensitive access name (`public` / `package`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "public" => Some(SourceAccess::Public),
            "package" => Some(SourceAccess::Package),
            _ => None,
        }
    }

    /// Return the canonical upper-case spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceAccess::Public => "PUBLIC",
            SourceAccess::Package => "PACKAGE",
        }
    }
}

impl fmt::Display for SourceAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
