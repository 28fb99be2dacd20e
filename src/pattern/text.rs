//! Small textual predicates shared by the rules.
//!
//! Predicates that take a `trimmed` argument expect pre-trimmed input.

pub const LINE_COMMENT: &str = "//";
pub const BLOCK_COMMENT_OPEN: &str = "/*";
pub const BLOCK_COMMENT_CLOSE: &str = "*/";

/// Whether a trimmed line starts with a line or block comment opener.
#[must_use]
pub fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with(LINE_COMMENT) || trimmed.starts_with(BLOCK_COMMENT_OPEN)
}

/// Whether a trimmed line documents whatever follows it.
#[must_use]
pub fn is_comment_lead_in(trimmed: &str) -> bool {
    trimmed.starts_with(LINE_COMMENT) || trimmed.ends_with(BLOCK_COMMENT_CLOSE)
}

/// Whether a trimmed line ends with a statement terminator.
#[must_use]
pub fn is_statement(trimmed: &str) -> bool {
    trimmed.ends_with(';')
}

/// Whether the text is made of nothing but braces and whitespace.
#[must_use]
pub fn is_brace_only(text: &str) -> bool {
    text.chars()
        .all(|c| c == '{' || c == '}' || c.is_whitespace())
}

#[must_use]
pub const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || !b.is_ascii()
}

/// Whether `word` occurs in `text` as a standalone token.
#[must_use]
pub fn contains_word(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let bytes = text.as_bytes();
    text.match_indices(word).any(|(start, _)| {
        let end = start + word.len();
        let before_ok = start == 0 || !is_ident_byte(bytes[start - 1]);
        let after_ok = end >= bytes.len() || !is_ident_byte(bytes[end]);
        before_ok && after_ok
    })
}

/// Whether the line declares a constant.
#[must_use]
pub fn is_const_declaration(text: &str) -> bool {
    contains_word(text, "const")
}

/// Whether the line contains an assignment or comparison operator.
///
/// `=` covers `==`, `!=`, `<=`, `>=` and compound assignment.
#[must_use]
pub fn has_assignment_or_comparison(text: &str) -> bool {
    text.contains(['=', '<', '>'])
}

/// Integer literals on a line, in order of appearance.
///
/// A literal is a digit run not glued to an identifier or a `.`, so
/// `x2`, `3.14` and `0x1F` yield nothing. A `-` directly in front is part of
/// the literal unless it follows an identifier (`n-2` is a subtraction).
#[must_use]
pub fn integer_literals(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut literals = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let end = i;

        let glued_before = start > 0 && (is_ident_byte(bytes[start - 1]) || bytes[start - 1] == b'.');
        let glued_after = end < bytes.len() && (is_ident_byte(bytes[end]) || bytes[end] == b'.');
        if glued_before || glued_after {
            continue;
        }

        let negative = start > 0
            && bytes[start - 1] == b'-'
            && (start == 1 || !is_ident_byte(bytes[start - 2]));
        let literal_start = if negative { start - 1 } else { start };
        literals.push(&text[literal_start..end]);
    }

    literals
}

/// Whether an integer literal is one of the values allowed inline: 0, 1 or -1.
#[must_use]
pub fn is_trivial_integer(literal: &str) -> bool {
    let magnitude = literal.strip_prefix('-').unwrap_or(literal);
    matches!(magnitude.trim_start_matches('0'), "" | "1")
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
