//! Generic and port clause extraction.
//!
//! A clause is the parenthesized list after the `generic` or `port` keyword.
//! Its body is split into raw declarations on `;`, and every line comment in
//! the body is attached to the declaration it trails.

use log::warn;

use crate::lines::{LineTable, blank_literals, split_comment};

/// The body of a clause and the offset just past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Clause<'a> {
    pub body: &'a str,
    pub end: usize,
}

/// A declaration before field parsing: its code text and attached comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawDeclaration {
    pub code: String,
    pub comment: String,
}

/// Locates the clause introduced by `keyword` at or after `from`.
///
/// Returns `None` when the keyword is absent or not followed by `(`. A clause
/// without its closing parenthesis extends to the end of the text.
pub(crate) fn find_clause<'a>(
    table: &LineTable<'a>,
    keyword: &str,
    from: usize,
) -> Option<Clause<'a>> {
    let source = table.source();
    let keyword_at = table.find_keyword_from(from, keyword)?;

    let Some(open) = table.find_from(keyword_at + keyword.len(), "(") else {
        warn!(keyword, offset = keyword_at; "Clause keyword without opening parenthesis, ignoring clause");
        return None;
    };

    let body_start = open + 1;
    let body_end = match table.find_unmatched_close(body_start) {
        Some(close) => close,
        None => {
            warn!(keyword, offset = open; "Unterminated clause, reading to end of text");
            source.len()
        }
    };

    Some(Clause {
        body: &source[body_start..body_end],
        end: (body_end + 1).min(source.len()),
    })
}

/// Splits a clause body into raw declarations with their comments.
///
/// A comment on a line holding `n > 0` semicolons belongs to the last
/// declaration ending on that line. A comment on a line without semicolons
/// belongs to the next declaration to end, and a trailing comment on the
/// final line belongs to the unterminated last declaration. Segments that are
/// blank after splitting are dropped. Semicolons inside literals do not split.
pub(crate) fn split_declarations(body: &str) -> Vec<RawDeclaration> {
    let lines: Vec<&str> = body.split('\n').filter(|line| !line.is_empty()).collect();

    let mut comments: Vec<Vec<&str>> = Vec::new();
    let mut codes = Vec::with_capacity(lines.len());
    let mut completed = 0;

    for (index, line) in lines.iter().enumerate() {
        let (code, comment) = split_comment(line);

        let mut count = blank_literals(code).matches(';').count();
        if index == lines.len() - 1 && !code.trim().is_empty() {
            count += 1;
        }

        if let Some(comment) = comment {
            let target = completed + count.saturating_sub(1);
            if comments.len() <= target {
                comments.resize_with(target + 1, Vec::new);
            }
            comments[target].push(comment);
        }

        completed += count;
        codes.push(code);
    }

    let joined = codes.join(" ");
    let mut segments = Vec::new();
    let mut segment_start = 0;
    for (index, _) in blank_literals(&joined).match_indices(';') {
        segments.push(&joined[segment_start..index]);
        segment_start = index + 1;
    }
    segments.push(&joined[segment_start..]);

    segments
        .into_iter()
        .enumerate()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .map(|(index, segment)| RawDeclaration {
            code: segment.to_string(),
            comment: comments
                .get(index)
                .map(|parts| simplify(&parts.join(" ")))
                .unwrap_or_default(),
        })
        .collect()
}

/// Collapses runs of whitespace to a single space and trims both ends.
pub(crate) fn simplify(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
