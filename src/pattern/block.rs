use crate::document::SourceLine;

/// Net brace count of one line: opening minus closing braces.
fn brace_delta(line: &SourceLine) -> i64 {
    let opens = line.raw.matches('{').count();
    let closes = line.raw.matches('}').count();
    i64::try_from(opens).unwrap_or(i64::MAX) - i64::try_from(closes).unwrap_or(i64::MAX)
}

/// Find the line that closes the brace-delimited body starting at `start`.
///
/// Scans forward from `start` adding each line's net brace count to a running
/// depth. The body is entered once the depth first becomes positive; the
/// result is the 0-based index of the first line after which the depth is back
/// to zero. A line that opens and closes its own braces nets zero and does not
/// enter a body. Returns `None` when the body never opens or never closes
/// before end of file.
#[must_use]
pub fn find_block_end(lines: &[SourceLine], start: usize) -> Option<usize> {
    let mut depth: i64 = 0;
    let mut inside_body = false;

    for (i, line) in lines.iter().enumerate().skip(start) {
        depth += brace_delta(line);
        if depth > 0 {
            inside_body = true;
        } else if inside_body && depth == 0 {
            return Some(i);
        }
    }

    None
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
