//! Code builder utility for generating properly indented text.

use super::{BraceStyle, Indent};

/// Line and scope oriented writer used by every exporter.
///
/// Every line goes through [`push_line`](Self::push_line), which prefixes it
/// with one [`Indent`] unit per open nesting level and terminates it with
/// `\n`. Scopes opened with [`open_scope`](Self::open_scope) or
/// [`open_keyword_scope`](Self::open_keyword_scope) remember their closing
/// line, so [`close_scope`](Self::close_scope) needs no arguments.
///
/// # Example
///
/// ```
/// use enumgen_codegen::{BraceStyle, CodeBuilder, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::Spaces(4), BraceStyle::NewLine);
/// builder
///     .open_scope("namespace Demo")
///     .push_line("enum Empty { }")
///     .close_scope();
///
/// assert_eq!(builder.build(), "namespace Demo\n{\n    enum Empty { }\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent_unit: String,
    brace_style: BraceStyle,
    scopes: Vec<String>,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation and brace placement.
    pub fn new(indent: Indent, brace_style: BraceStyle) -> Self {
        Self {
            indent_level: 0,
            indent_unit: indent.unit(),
            brace_style,
            scopes: Vec::new(),
            buffer: String::new(),
        }
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Open a braced scope under `header`, honouring the configured brace style.
    pub fn open_scope(&mut self, header: &str) -> &mut Self {
        match self.brace_style {
            BraceStyle::NewLine => {
                self.push_line(header);
                self.push_line("{");
            }
            BraceStyle::SameLine => {
                self.push_line(&format!("{} {{", header));
            }
        }
        self.scopes.push("}".to_string());
        self.push_indent()
    }

    /// Open a scope that is terminated by a keyword line such as `End Enum`.
    pub fn open_keyword_scope(&mut self, header: &str, close: impl Into<String>) -> &mut Self {
        self.push_line(header);
        self.scopes.push(close.into());
        self.push_indent()
    }

    /// Close the innermost open scope.
    ///
    /// # Panics
    ///
    /// Panics if no scope is open. That is a bug in the calling exporter,
    /// not something user input can trigger.
    pub fn close_scope(&mut self) -> &mut Self {
        let Some(close) = self.scopes.pop() else {
            panic!("close_scope called without a matching open scope");
        };
        self.push_dedent();
        self.push_line(&close)
    }

    /// Add a documentation block, one `prefix`ed line per line of `text`.
    ///
    /// Trailing whitespace is stripped; blank lines get the bare prefix.
    pub fn push_doc(&mut self, prefix: &str, text: &str) -> &mut Self {
        for line in text.lines().map(str::trim_end) {
            if line.is_empty() {
                self.push_line(prefix);
            } else {
                self.push_line(&format!("{} {}", prefix, line));
            }
        }
        self
    }

    /// The text written for one indentation level.
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Consume the builder and return the generated text.
    pub fn build(self) -> String {
        debug_assert!(
            self.scopes.is_empty(),
            "{} scope(s) left open",
            self.scopes.len()
        );
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent_unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default(), BraceStyle::default())
    }
}
