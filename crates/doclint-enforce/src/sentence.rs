//! Complete-sentence detection over raw comment text.
//!
//! Only the first line of a comment is considered. A sentence is a run of
//! whitespace-separated words whose first word starts with an uppercase
//! letter and whose last word ends in `.`, `!` or `?`.

/// Default minimum number of words in a sentence.
pub const DEFAULT_MIN_WORDS: usize = 1;

const TERMINALS: [char; 3] = ['.', '!', '?'];
const OPENERS: [char; 5] = ['(', '[', '"', '\'', '`'];
const CLOSERS: [char; 5] = [')', ']', '"', '\'', '`'];

/// True if the first line of `comment` contains a complete sentence.
pub fn has_complete_sentence(comment: &str) -> bool {
    has_complete_sentence_with(comment, DEFAULT_MIN_WORDS)
}

/// Like [`has_complete_sentence`], requiring at least `min_words` words.
/// A `min_words` of 0 is treated as 1.
pub fn has_complete_sentence_with(comment: &str, min_words: usize) -> bool {
    match first_content_line(comment) {
        Some(line) => line_has_sentence(line, min_words.max(1)),
        None => false,
    }
}

/// The first line of the comment with its leader decoration removed.
///
/// A first line holding nothing but a block opener (`/*`, `/**`, `/*!`) is skipped,
/// so the sentence may start on the line after it.
pub fn first_content_line(comment: &str) -> Option<&str> {
    let mut lines = comment.lines();
    let first = lines.next()?;
    if matches!(first.trim(), "/*" | "/**" | "/*!") {
        return lines.next().map(strip_leader);
    }
    Some(strip_leader(first))
}

/// Remove comment markers (`//`, `///`, `/*`, ` * `, `*/`) and surrounding whitespace.
pub fn strip_leader(line: &str) -> &str {
    let line = line.trim();
    let line = line.strip_suffix("*/").unwrap_or(line).trim_end();
    line.trim_start_matches(|c: char| c == '/' || c == '*' || c.is_whitespace())
}

fn line_has_sentence(line: &str, min_words: usize) -> bool {
    let mut words = 0usize;
    let mut starts_upper = false;
    for word in line.split_whitespace() {
        if words == 0 {
            starts_upper = starts_uppercase(word);
        }
        words += 1;
        if ends_sentence(word) {
            if starts_upper && words >= min_words {
                return true;
            }
            words = 0;
        }
    }
    false
}

fn starts_uppercase(word: &str) -> bool {
    word.trim_start_matches(OPENERS)
        .chars()
        .next()
        .is_some_and(char::is_uppercase)
}

fn ends_sentence(word: &str) -> bool {
    word.trim_end_matches(CLOSERS).ends_with(TERMINALS)
}
