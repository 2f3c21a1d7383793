// Core Lexer Helpers
//
// Quote-aware scanning primitives shared by the per-shape clause extractors.
// Everything here works on byte offsets into the normalised statement text and
// never looks inside quoted literals.

use crate::query::parser::lexer::{LexError, LexResult};

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn is_quote(ch: char) -> bool {
    ch == '\'' || ch == '"'
}

/// Collapse whitespace outside literals and check that every quote closes.
///
/// Runs of whitespace outside quotes become a single space. Everything else,
/// keywords included, keeps its original case; keyword matching is
/// case-insensitive further down. Quoted spans are copied verbatim, including
/// a doubled quote used as an escape.
pub fn normalize(sql: &str) -> LexResult<String> {
    let mut out = String::with_capacity(sql.len());
    let mut chars = sql.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else if is_quote(ch) {
            out.push(ch);
            let mut closed = false;
            while let Some(inner) = chars.next() {
                out.push(inner);
                if inner == ch {
                    // '' inside a literal is an escaped quote
                    if chars.peek() == Some(&ch) {
                        out.push(ch);
                        chars.next();
                        continue;
                    }
                    closed = true;
                    break;
                }
            }
            if !closed {
                return Err(LexError::UnterminatedLiteral);
            }
        } else {
            out.push(ch);
        }
    }

    Ok(out.trim_end().to_string())
}

/// Byte offsets of every character that sits outside a quoted literal
fn unquoted_indices(s: &str) -> Vec<(usize, char)> {
    let mut result = Vec::with_capacity(s.len());
    let mut quote: Option<char> = None;

    for (i, ch) in s.char_indices() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => {
                if is_quote(ch) {
                    quote = Some(ch);
                } else {
                    result.push((i, ch));
                }
            }
        }
    }
    result
}

/// Find the first whole-word occurrence of `keyword` outside quotes
pub fn find_keyword(s: &str, keyword: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut prev: Option<char> = None;

    for (i, ch) in s.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            prev = Some(ch);
            continue;
        }
        if is_quote(ch) {
            quote = Some(ch);
            prev = Some(ch);
            continue;
        }

        let boundary_before = prev.map_or(true, |p| !is_word_char(p));
        if boundary_before {
            if let Some(candidate) = s.get(i..i + keyword.len()) {
                let boundary_after = s[i + keyword.len()..]
                    .chars()
                    .next()
                    .map_or(true, |n| !is_word_char(n));
                if boundary_after && candidate.eq_ignore_ascii_case(keyword) {
                    return Some(i);
                }
            }
        }
        prev = Some(ch);
    }
    None
}

/// Split `s` around the first occurrence of `keyword`, dropping the keyword itself
pub fn split_at_keyword<'a>(s: &'a str, keyword: &str) -> Option<(&'a str, &'a str)> {
    find_keyword(s, keyword).map(|pos| (&s[..pos], &s[pos + keyword.len()..]))
}

/// Split on `sep` wherever it appears outside quotes
pub fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    for (i, ch) in unquoted_indices(s) {
        if ch == sep {
            parts.push(&s[start..i]);
            start = i + ch.len_utf8();
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Number of times `ch` appears outside quotes
pub fn count_unquoted(s: &str, ch: char) -> usize {
    unquoted_indices(s).into_iter().filter(|(_, c)| *c == ch).count()
}

/// Split into whitespace-separated words, keeping quoted literals whole
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut quote: Option<char> = None;

    for (i, ch) in s.char_indices() {
        if let Some(q) = quote {
            if ch == q {
                quote = None;
            }
            continue;
        }
        if ch.is_whitespace() {
            if let Some(st) = start.take() {
                words.push(&s[st..i]);
            }
            continue;
        }
        if start.is_none() {
            start = Some(i);
        }
        if is_quote(ch) {
            quote = Some(ch);
        }
    }
    if let Some(st) = start {
        words.push(&s[st..]);
    }
    words
}

/// A parenthesised group and the text around it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParenGroup<'a> {
    pub before: &'a str,
    pub inner: &'a str,
    pub after: &'a str,
}

/// Locate the first parenthesis pair outside quotes.
///
/// Returns `Ok(None)` when there is no opening parenthesis at all.
pub fn paren_group(s: &str) -> LexResult<Option<ParenGroup<'_>>> {
    let mut open: Option<usize> = None;
    let mut depth = 0usize;

    for (i, ch) in unquoted_indices(s) {
        match ch {
            '(' => {
                if open.is_none() {
                    open = Some(i);
                }
                depth += 1;
            }
            ')' => {
                let Some(start) = open else {
                    return Err(LexError::UnbalancedParentheses);
                };
                depth -= 1;
                if depth == 0 {
                    return Ok(Some(ParenGroup {
                        before: &s[..start],
                        inner: &s[start + 1..i],
                        after: &s[i + 1..],
                    }));
                }
            }
            _ => {}
        }
    }

    match open {
        Some(_) => Err(LexError::UnbalancedParentheses),
        None => Ok(None),
    }
}

/// Strip surrounding whitespace and `;,()[]` from an extracted fragment
pub fn trim_identifier(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || ";,()[]".contains(c))
}

/// Trim a single-name fragment and reject empty or multi-word results
pub fn single_identifier<'a>(s: &'a str, field: &'static str) -> LexResult<&'a str> {
    let name = trim_identifier(s);
    if name.is_empty() {
        return Err(LexError::MissingClause(field));
    }
    if split_words(name).len() > 1 {
        return Err(LexError::InvalidIdentifier(field));
    }
    Ok(name)
}

/// Comma-split a list, trimming each entry and rejecting empty or multi-word entries
pub fn identifier_list<'a>(s: &'a str, list: &'static str, field: &'static str) -> LexResult<Vec<&'a str>> {
    if trim_identifier(s).is_empty() {
        return Err(LexError::MissingClause(list));
    }
    split_unquoted(s, ',')
        .into_iter()
        .map(|entry| {
            let name = trim_identifier(entry);
            if name.is_empty() || split_words(name).len() > 1 {
                Err(LexError::InvalidIdentifier(field))
            } else {
                Ok(name)
            }
        })
        .collect()
}

/// Reject any leftover text where the grammar expects nothing
pub fn expect_empty(s: &str) -> LexResult<()> {
    let rest = s.trim();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(LexError::UnexpectedText(rest.to_string()))
    }
}
