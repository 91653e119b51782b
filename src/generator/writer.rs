//! Output writer with indentation tracking
//!
//! Builds the header text. Rendered templates carry their own layout and are written as-is; the writer only
//! indents lines it starts itself.

/// Writer that tracks indentation and builds the generated header
pub struct HeaderWriter {
    /// The output buffer
    output: String,
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indentation level
    indent_width: usize,
    /// Whether we're at the start of a line
    at_line_start: bool,
}

impl HeaderWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_width,
            at_line_start: true,
        }
    }

    /// Get the generated output
    pub fn finish(self) -> String {
        self.output
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent_level * self.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    /// Write a string (with auto-indent on its first line)
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(s);
        self.at_line_start = s.ends_with('\n');
    }

    /// Write a string and newline
    pub fn writeln(&mut self, s: &str) {
        self.write(s);
        self.newline();
    }

    /// Write just a newline
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    /// Write multiple blank lines
    pub fn blank_lines(&mut self, count: usize) {
        for _ in 0..count {
            self.newline();
        }
    }

    #[cfg(test)]
    fn current_indent(&self) -> usize {
        self.indent_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_writer() -> HeaderWriter {
        HeaderWriter::new(4)
    }

    // ========================================
    // Write tests
    // ========================================

    #[test]
    fn test_new_writer_empty_output() {
        assert_eq!(default_writer().finish(), "");
    }

    #[test]
    fn test_write_empty_string() {
        let mut writer = default_writer();
        writer.indent();
        writer.write("");
        assert_eq!(writer.finish(), "");
    }

    #[test]
    fn test_writeln_multiple() {
        let mut writer = default_writer();
        writer.writeln("#ifndef X_H");
        writer.writeln("#define X_H");
        assert_eq!(writer.finish(), "#ifndef X_H\n#define X_H\n");
    }

    #[test]
    fn test_rendered_block_is_not_reindented() {
        let mut writer = default_writer();
        writer.indent();
        writer.write("a\nb\n");
        writer.write("c");
        // First line indented, embedded lines untouched, next write starts a fresh line
        assert_eq!(writer.finish(), "    a\nb\n    c");
    }

    // ========================================
    // Indent/dedent tests
    // ========================================

    #[test]
    fn test_dedent_at_zero_stays_zero() {
        let mut writer = default_writer();
        writer.dedent();
        assert_eq!(writer.current_indent(), 0);
    }

    #[test]
    fn test_struct_fields() {
        let mut writer = default_writer();
        writer.writeln("typedef struct {");
        writer.indent();
        writer.writeln("int *data;");
        writer.dedent();
        writer.writeln("} Ints;");
        assert_eq!(writer.finish(), "typedef struct {\n    int *data;\n} Ints;\n");
    }

    #[test]
    fn test_indent_width_2() {
        let mut writer = HeaderWriter::new(2);
        writer.indent();
        writer.write("text");
        assert_eq!(writer.finish(), "  text");
    }

    // ========================================
    // Blank lines tests
    // ========================================

    #[test]
    fn test_blank_lines_between_content() {
        let mut writer = default_writer();
        writer.writeln("line1");
        writer.blank_lines(2);
        writer.writeln("line2");
        assert_eq!(writer.finish(), "line1\n\n\nline2\n");
    }

    #[test]
    fn test_blank_lines_zero() {
        let mut writer = default_writer();
        writer.write("before");
        writer.blank_lines(0);
        writer.write("after");
        assert_eq!(writer.finish(), "beforeafter");
    }
}
