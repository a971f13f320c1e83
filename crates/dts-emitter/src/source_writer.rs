//! Indentation-aware output buffer.

use dts_common::NewLineKind;

const INDENT: &str = "    ";

/// Accumulates printed text. Indentation is written lazily by the first
/// `write` on each line, so blank lines never carry trailing whitespace.
#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    new_line: &'static str,
    indent_level: u32,
    line_start: bool,
}

impl SourceWriter {
    #[must_use]
    pub fn new(new_line: NewLineKind) -> Self {
        SourceWriter {
            output: String::new(),
            new_line: new_line.as_str(),
            indent_level: 0,
            line_start: true,
        }
    }

    /// Write text that contains no line breaks.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.line_start {
            for _ in 0..self.indent_level {
                self.output.push_str(INDENT);
            }
            self.line_start = false;
        }
        self.output.push_str(text);
    }

    pub fn write_space(&mut self) {
        self.write(" ");
    }

    pub fn write_line(&mut self) {
        self.output.push_str(self.new_line);
        self.line_start = true;
    }

    /// Start a new line unless the current one is still empty.
    pub fn ensure_line_start(&mut self) {
        if !self.line_start {
            self.write_line();
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    #[must_use]
    pub fn indent_level(&self) -> u32 {
        self.indent_level
    }

    #[must_use]
    pub fn is_at_line_start(&self) -> bool {
        self.line_start
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_is_written_lazily() {
        let mut writer = SourceWriter::new(NewLineKind::LineFeed);
        writer.write("a {");
        writer.write_line();
        writer.increase_indent();
        writer.write_line();
        writer.write("b;");
        writer.write_line();
        writer.decrease_indent();
        writer.write("}");
        assert_eq!(writer.finish(), "a {\n\n    b;\n}");
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut writer = SourceWriter::new(NewLineKind::CarriageReturnLineFeed);
        writer.write("x;");
        writer.ensure_line_start();
        writer.ensure_line_start();
        writer.write("y;");
        assert_eq!(writer.finish(), "x;\r\ny;");
    }

    #[test]
    fn test_decrease_indent_saturates() {
        let mut writer = SourceWriter::new(NewLineKind::LineFeed);
        writer.decrease_indent();
        assert_eq!(writer.indent_level(), 0);
        assert!(writer.is_at_line_start());
        assert!(writer.is_empty());
    }
}
