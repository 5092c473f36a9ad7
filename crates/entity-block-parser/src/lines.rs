//! Comment-aware scanning over a line table.
//!
//! The source is split once into [`Line`]s holding the original text, the
//! code part before the `--` comment marker, the comment after it, and the
//! byte offset of the line in the source. Every search below works on the
//! code parts only and reports offsets into the original text.
//!
//! String and character literals are opaque: keywords, parentheses,
//! semicolons and comment markers inside them are not matched.

use std::borrow::Cow;

/// Line comment marker.
pub(crate) const COMMENT_MARKER: &str = "--";

/// One physical line of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    text: &'a str,
    code: &'a str,
    comment: Option<&'a str>,
    start: usize,
}

impl<'a> Line<'a> {
    fn new(text: &'a str, start: usize) -> Self {
        let (code, comment) = split_comment(text);
        Self {
            text,
            code,
            comment,
            start,
        }
    }

    /// The original line without its terminator.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The line up to the comment marker.
    pub fn code(&self) -> &'a str {
        self.code
    }

    /// The text after the comment marker, if the line has a comment.
    pub fn comment(&self) -> Option<&'a str> {
        self.comment
    }

    /// Byte offset of the line in the source.
    pub fn start(&self) -> usize {
        self.start
    }

    fn code_end(&self) -> usize {
        self.start + self.code.len()
    }
}

/// Splits a line into its code part and the comment after `--`.
pub(crate) fn split_comment(line: &str) -> (&str, Option<&str>) {
    match blank_literals(line).find(COMMENT_MARKER) {
        Some(index) => (&line[..index], Some(&line[index + COMMENT_MARKER.len()..])),
        None => (line, None),
    }
}

/// The source split into lines, searchable outside comments.
///
/// # Examples
///
/// ```
/// # use entity_block_parser::LineTable;
/// let source = "-- entity in a comment\nentity counter is";
/// let table = LineTable::new(source);
/// assert_eq!(table.find_keyword("entity"), Some(23));
/// ```
#[derive(Debug, Clone)]
pub struct LineTable<'a> {
    source: &'a str,
    lines: Vec<Line<'a>>,
}

impl<'a> LineTable<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut start = 0;
        let lines = source
            .split('\n')
            .map(|text| {
                let line = Line::new(text, start);
                start += text.len() + 1;
                line
            })
            .collect();
        Self { source, lines }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Finds the first literal occurrence of `needle` outside comments.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.find_from(0, needle)
    }

    /// Finds the first literal occurrence of `needle` outside comments,
    /// starting at byte offset `from`.
    pub fn find_from(&self, from: usize, needle: &str) -> Option<usize> {
        self.code_from(from).find_map(|(offset, code)| {
            blank_literals(code)
                .find(needle)
                .map(|index| offset + index)
        })
    }

    /// Finds the first occurrence of `keyword` outside comments, ignoring
    /// ASCII case and matching whole words only.
    pub fn find_keyword(&self, keyword: &str) -> Option<usize> {
        self.find_keyword_from(0, keyword)
    }

    /// Like [`find_keyword`](Self::find_keyword), starting at byte offset `from`.
    pub fn find_keyword_from(&self, from: usize, keyword: &str) -> Option<usize> {
        self.code_from(from).find_map(|(offset, code)| {
            find_word(&blank_literals(code), keyword).map(|index| offset + index)
        })
    }

    /// Finds the first closing parenthesis at or after `from` that has no
    /// opening partner at or after `from`.
    ///
    /// Parentheses inside comments are ignored. Returns `None` when the text
    /// ends before the parenthesis depth goes negative.
    pub fn find_unmatched_close(&self, from: usize) -> Option<usize> {
        let mut depth: usize = 0;
        for (offset, code) in self.code_from(from) {
            for (index, ch) in blank_literals(code).char_indices() {
                match ch {
                    '(' => depth += 1,
                    ')' if depth == 0 => return Some(offset + index),
                    ')' => depth -= 1,
                    _ => {}
                }
            }
        }
        None
    }

    /// Concatenates the code parts between two byte offsets, one space per
    /// line break.
    pub fn code_between(&self, from: usize, to: usize) -> String {
        let mut parts = Vec::new();
        for (offset, code) in self.code_from(from) {
            if offset >= to {
                break;
            }
            let end = (to - offset).min(code.len());
            parts.push(code.get(..end).unwrap_or(code));
        }
        parts.join(" ")
    }

    /// Yields `(offset, code)` for every line, with the code of the line
    /// containing `from` cut to start at `from`.
    fn code_from(&self, from: usize) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines
            .iter()
            .filter(move |line| line.code_end() >= from)
            .filter_map(move |line| {
                let skip = from.saturating_sub(line.start);
                line.code.get(skip..).map(|code| (line.start + skip, code))
            })
    }
}

/// Replaces the contents of string and character literals with spaces.
///
/// The delimiting quotes are kept and the byte length is unchanged, so
/// offsets into the result are offsets into `code`. A doubled `""` inside a
/// string is an escaped quote. A `'` directly after an identifier or `)` is
/// an attribute tick, not a character literal.
pub(crate) fn blank_literals(code: &str) -> Cow<'_, str> {
    if !code.contains(['"', '\'']) {
        return Cow::Borrowed(code);
    }

    let chars: Vec<char> = code.chars().collect();
    let mut blanked = String::with_capacity(code.len());
    let blank = |out: &mut String, ch: char| out.extend(std::iter::repeat_n(' ', ch.len_utf8()));

    let mut in_string = false;
    let mut index = 0;
    while index < chars.len() {
        let ch = chars[index];
        if in_string {
            if ch == '"' && chars.get(index + 1) == Some(&'"') {
                blanked.push_str("  ");
                index += 1;
            } else if ch == '"' {
                in_string = false;
                blanked.push(ch);
            } else {
                blank(&mut blanked, ch);
            }
        } else if ch == '"' {
            in_string = true;
            blanked.push(ch);
        } else if ch == '\''
            && chars.get(index + 2) == Some(&'\'')
            && !index
                .checked_sub(1)
                .is_some_and(|before| is_identifier_char(chars[before]) || chars[before] == ')')
        {
            blanked.push('\'');
            blank(&mut blanked, chars[index + 1]);
            blanked.push('\'');
            index += 2;
        } else {
            blanked.push(ch);
        }
        index += 1;
    }

    Cow::Owned(blanked)
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Finds `word` in `text` ignoring ASCII case, only where it is not part of a
/// longer identifier.
pub(crate) fn find_word(text: &str, word: &str) -> Option<usize> {
    if word.is_empty() {
        return None;
    }
    let haystack = text.to_ascii_lowercase();
    let needle = word.to_ascii_lowercase();
    let bytes = haystack.as_bytes();

    haystack.match_indices(&needle).map(|(index, _)| index).find(|&index| {
        let end = index + needle.len();
        let before = index.checked_sub(1).map(|i| bytes[i]);
        let after = bytes.get(end).copied();
        !before.is_some_and(is_identifier_byte) && !after.is_some_and(is_identifier_byte)
    })
}

fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Finds the first closing parenthesis in `text` that has no opening partner
/// in `text`, ignoring comments.
///
/// `text` starts after an already consumed `(`.
///
/// # Examples
///
/// ```
/// # use entity_block_parser::find_unmatched_close;
/// assert_eq!(find_unmatched_close("a(b)c)d"), Some(5));
/// assert_eq!(find_unmatched_close("a -- )\n)"), Some(7));
/// assert_eq!(find_unmatched_close("a(b)"), None);
/// ```
pub fn find_unmatched_close(text: &str) -> Option<usize> {
    LineTable::new(text).find_unmatched_close(0)
}

/// Finds the first literal occurrence of `needle` in `text` outside comments.
///
/// # Examples
///
/// ```
/// # use entity_block_parser::find;
/// assert_eq!(find("x -- ;\ny;", ";"), Some(8));
/// assert_eq!(find("-- only ; here", ";"), None);
/// ```
pub fn find(text: &str, needle: &str) -> Option<usize> {
    LineTable::new(text).find(needle)
}
