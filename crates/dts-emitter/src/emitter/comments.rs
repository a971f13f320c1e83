// Comment and trivia scanning over original source text.

use dts_scanner::char_codes::{is_line_break, is_white_space_single_line};

/// A comment found in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRange {
    pub pos: u32,
    pub end: u32,
    pub kind: CommentKind,
    /// A line break follows the comment before the next token or comment.
    pub has_trailing_newline: bool,
}

impl CommentRange {
    #[must_use]
    pub fn text<'t>(&self, source: &'t str) -> &'t str {
        source.get(self.pos as usize..self.end as usize).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    SingleLine, // // comment
    MultiLine,  // /* comment */
}

fn char_at(text: &str, pos: usize) -> Option<char> {
    text.get(pos..)?.chars().next()
}

/// Skip a line break at `pos`, treating `\r\n` as one break.
fn skip_line_break(text: &str, pos: usize, ch: char) -> usize {
    let next = pos + ch.len_utf8();
    if ch == '\r' && text.as_bytes().get(next) == Some(&b'\n') {
        next + 1
    } else {
        next
    }
}

/// Scan one comment starting at `pos`. Returns its kind, end offset and
/// whether a multi-line comment contains a line break.
fn scan_comment(text: &str, pos: usize) -> Option<(CommentKind, usize, bool)> {
    let bytes = text.as_bytes();
    if bytes.get(pos) != Some(&b'/') {
        return None;
    }
    match bytes.get(pos + 1) {
        Some(b'/') => {
            let mut i = pos + 2;
            while let Some(ch) = char_at(text, i) {
                if is_line_break(ch) {
                    break;
                }
                i += ch.len_utf8();
            }
            Some((CommentKind::SingleLine, i, false))
        }
        Some(b'*') => {
            let mut i = pos + 2;
            let mut spans_lines = false;
            loop {
                let Some(ch) = char_at(text, i) else {
                    // Unterminated: the comment runs to end of file.
                    break;
                };
                if ch == '*' && bytes.get(i + 1) == Some(&b'/') {
                    i += 2;
                    break;
                }
                spans_lines |= is_line_break(ch);
                i += ch.len_utf8();
            }
            Some((CommentKind::MultiLine, i, spans_lines))
        }
        _ => None,
    }
}

/// Comments on the same line after `pos`, up to the first line break.
pub fn get_trailing_comment_ranges(text: &str, pos: usize) -> Vec<CommentRange> {
    let mut comments: Vec<CommentRange> = Vec::new();
    let mut i = pos;

    while let Some(ch) = char_at(text, i) {
        if is_white_space_single_line(ch) {
            i += ch.len_utf8();
            continue;
        }
        if is_line_break(ch) {
            if let Some(last) = comments.last_mut() {
                last.has_trailing_newline = true;
            }
            break;
        }
        let Some((kind, end, spans_lines)) = scan_comment(text, i) else {
            break;
        };
        comments.push(CommentRange {
            pos: i as u32,
            end: end as u32,
            kind,
            has_trailing_newline: false,
        });
        i = end;
        if spans_lines {
            break;
        }
    }

    comments
}

/// Comments between `pos` and the next token.
///
/// When `pos` is not the start of the file, comments before the first line
/// break belong to the previous token (see `get_trailing_comment_ranges`)
/// and are not collected.
pub fn get_leading_comment_ranges(text: &str, pos: usize) -> Vec<CommentRange> {
    let mut comments: Vec<CommentRange> = Vec::new();
    let mut collecting = pos == 0;
    let mut i = pos;

    if i == 0 && text.starts_with("#!") {
        i = text.find(['\n', '\r']).unwrap_or(text.len());
    }

    while let Some(ch) = char_at(text, i) {
        if is_white_space_single_line(ch) {
            i += ch.len_utf8();
            continue;
        }
        if is_line_break(ch) {
            i = skip_line_break(text, i, ch);
            collecting = true;
            if let Some(last) = comments.last_mut() {
                last.has_trailing_newline = true;
            }
            continue;
        }
        let Some((kind, end, _)) = scan_comment(text, i) else {
            break;
        };
        if collecting {
            comments.push(CommentRange {
                pos: i as u32,
                end: end as u32,
                kind,
                has_trailing_newline: false,
            });
        }
        i = end;
    }

    comments
}

/// Offset of the first token at or after `pos`.
#[must_use]
pub fn skip_trivia(text: &str, pos: usize) -> usize {
    let mut i = pos;
    while let Some(ch) = char_at(text, i) {
        if is_white_space_single_line(ch) {
            i += ch.len_utf8();
        } else if is_line_break(ch) {
            i = skip_line_break(text, i, ch);
        } else if let Some((_, end, _)) = scan_comment(text, i) {
            i = end;
        } else {
            break;
        }
    }
    i
}

/// Offset of the start of the line containing `pos`.
#[must_use]
pub fn line_start(text: &str, pos: usize) -> usize {
    let pos = pos.min(text.len());
    memchr::memrchr2(b'\n', b'\r', &text.as_bytes()[..pos]).map_or(0, |i| i + 1)
}

/// Column of `pos` in characters, tabs counted as one.
#[must_use]
pub fn column_of(text: &str, pos: usize) -> usize {
    let start = line_start(text, pos);
    text.get(start..pos).map_or(0, |line| line.chars().count())
}

/// Split text on `\r\n`, `\n` and `\r`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match memchr::memchr2(b'\n', b'\r', current.as_bytes()) {
            Some(i) => {
                let after = if current[i..].starts_with("\r\n") {
                    i + 2
                } else {
                    i + 1
                };
                rest = Some(&current[after..]);
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Remove up to `count` leading spaces or tabs.
#[must_use]
pub fn strip_indentation(line: &str, count: usize) -> &str {
    let offset = line
        .bytes()
        .take(count)
        .take_while(|&b| b == b' ' || b == b'\t')
        .count();
    &line[offset..]
}

#[cfg(test)]
#[path = "tests/comments_tests.rs"]
mod comments_tests;
