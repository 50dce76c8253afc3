//! Java code emitter - builds Java source text
//!
//! This module provides a small indentation-aware buffer for writing the generated constants class. Output always
//! uses `\n` line endings and four-space indentation, independent of the host platform.

use std::fmt::Write;

/// A buffer for building Java source code with proper indentation
#[derive(Debug)]
pub struct JavaEmitter {
    buffer: String,
    indent_level: usize,
    indent_str: &'static str,
}

impl Default for JavaEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaEmitter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            indent_str: "    ",
        }
    }

    /// Get the generated code
    pub fn finish(self) -> String {
        self.buffer
    }

    /// Get current buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Write a line with current indentation
    pub fn line(&mut self, s: &str) {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }

    /// Write a formatted line with current indentation
    pub fn linef(&mut self, args: std::fmt::Arguments<'_>) {
        self.write_indent();
        let _ = self.buffer.write_fmt(args);
        self.buffer.push('\n');
    }

    /// Write a blank line (no trailing indentation)
    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    /// Write indentation only
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent_str);
        }
    }

    /// Increase indent level
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indent level
    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    /// Write a block with braces
    pub fn block<F>(&mut self, header: &str, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.linef(format_args!("{header} {{"));
        self.indent();
        f(self);
        self.dedent();
        self.line("}");
    }

    /// Write a `//` comment; an empty text writes a bare `//`
    pub fn comment(&mut self, text: &str) {
        if text.is_empty() {
            self.line("//");
        } else {
            self.linef(format_args!("// {text}"));
        }
    }

    /// Write a package declaration
    pub fn package_decl(&mut self, package: &str) {
        self.linef(format_args!("package {package};"));
    }

    /// Write an annotation line, e.g. `@SuppressWarnings("all")`
    pub fn annotation(&mut self, annotation: &str) {
        self.linef(format_args!("@{annotation}"));
    }

    /// Write a `static final` field
    ///
    /// `modifier` carries its own trailing space (`"public "`) or is empty for package access.
    pub fn constant_field(&mut self, modifier: &str, ty: &str, name: &str, literal: &str) {
        self.linef(format_args!("{modifier}static final {ty} {name} = {literal};"));
    }

    /// Write a private no-argument constructor with an empty body
    pub fn private_constructor(&mut self, class_name: &str) {
        self.linef(format_args!("private {class_name}() {{ }}"));
    }
}
