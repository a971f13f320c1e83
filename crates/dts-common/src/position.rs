//! Line/column positions for diagnostics.

use memchr::memchr_iter;

/// Zero-based line and character (byte column) of an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

/// Precomputed line start offsets for a source text.
#[derive(Debug, Clone)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map. `\n`, `\r\n` and lone `\r` all end a line.
    pub fn build(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0u32];
        for idx in memchr_iter(b'\n', bytes) {
            line_starts.push((idx + 1) as u32);
        }
        // Lone carriage returns are rare; fold them in only when present.
        if bytes.contains(&b'\r') {
            for (idx, &b) in bytes.iter().enumerate() {
                if b == b'\r' && bytes.get(idx + 1) != Some(&b'\n') {
                    line_starts.push((idx + 1) as u32);
                }
            }
            line_starts.sort_unstable();
        }
        LineMap { line_starts }
    }

    /// Offset of the first byte of `line`, if the line exists.
    #[must_use]
    pub fn line_start(&self, line: u32) -> Option<u32> {
        self.line_starts.get(line as usize).copied()
    }

    #[must_use]
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        Position {
            line: line as u32,
            character: offset - self.line_starts[line],
        }
    }
}
