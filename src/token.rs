//! Glob tokenization.
//!
//! Deconstructs a glob string into an ordered sequence of literal and
//! wildcard tokens. Source globs collapse runs of `*` into one token;
//! destination globs keep each `*` as its own capture slot.

use std::fmt;

/// Atomic parsed unit of a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobToken {
    /// Maximal run of non-wildcard characters, matched verbatim.
    Literal(String),
    /// `*` — zero or more characters.
    Star,
    /// `?` — exactly one character.
    Question,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WildcardKind {
    Star,
    Question,
}

impl fmt::Display for WildcardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WildcardKind::Star => write!(f, "star"),
            WildcardKind::Question => write!(f, "question"),
        }
    }
}

/// Number of wildcard tokens of each kind in a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WildcardCounts {
    pub stars: usize,
    pub questions: usize,
}

impl WildcardCounts {
    pub fn of(tokens: &[GlobToken]) -> Self {
        tokens.iter().fold(Self::default(), |mut counts, token| {
            match token {
                GlobToken::Star => counts.stars += 1,
                GlobToken::Question => counts.questions += 1,
                GlobToken::Literal(_) => {}
            }
            counts
        })
    }
}

/// Parse a glob string into tokens.
///
/// With `collapse_stars` (source globs), a run of consecutive `*` —
/// including `**` — becomes a single [`GlobToken::Star`]. Without it
/// (destination globs), every `*` is its own token so each one is a
/// distinct substitution slot.
///
/// There is no escaping syntax: every character other than `*` and `?`
/// is literal, including `.`, `^`, and `$`.
pub fn tokenize(glob: &str, collapse_stars: bool) -> Vec<GlobToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();

    let mut chars = glob.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                flush_literal(&mut tokens, &mut literal);
                tokens.push(GlobToken::Star);
                if collapse_stars {
                    while chars.peek() == Some(&'*') {
                        chars.next();
                    }
                }
            }
            '?' => {
                flush_literal(&mut tokens, &mut literal);
                tokens.push(GlobToken::Question);
            }
            other => literal.push(other),
        }
    }
    flush_literal(&mut tokens, &mut literal);

    tokens
}

fn flush_literal(tokens: &mut Vec<GlobToken>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(GlobToken::Literal(std::mem::take(literal)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_runs_become_single_tokens() {
        let tokens = tokenize("report.txt", true);
        assert_eq!(tokens, vec![GlobToken::Literal("report.txt".to_string())]);
    }

    #[test]
    fn wildcards_preserve_left_to_right_order() {
        let tokens = tokenize("a*b?c", true);
        assert_eq!(
            tokens,
            vec![
                GlobToken::Literal("a".to_string()),
                GlobToken::Star,
                GlobToken::Literal("b".to_string()),
                GlobToken::Question,
                GlobToken::Literal("c".to_string()),
            ]
        );
    }

    #[test]
    fn source_star_runs_collapse() {
        let tokens = tokenize("**b**f**", true);
        assert_eq!(
            tokens,
            vec![
                GlobToken::Star,
                GlobToken::Literal("b".to_string()),
                GlobToken::Star,
                GlobToken::Literal("f".to_string()),
                GlobToken::Star,
            ]
        );
        assert_eq!(WildcardCounts::of(&tokens).stars, 3);
    }

    #[test]
    fn destination_star_runs_stay_separate() {
        let tokens = tokenize("***", false);
        assert_eq!(
            tokens,
            vec![GlobToken::Star, GlobToken::Star, GlobToken::Star]
        );
        assert_eq!(WildcardCounts::of(&tokens).stars, 3);
    }

    #[test]
    fn counts_fold_stars_and_questions() {
        let counts = WildcardCounts::of(&tokenize("?*x?*", true));
        assert_eq!(counts.stars, 2);
        assert_eq!(counts.questions, 2);
    }

    #[test]
    fn dots_and_regex_metacharacters_are_literal() {
        let tokens = tokenize("a.^$b", true);
        assert_eq!(tokens, vec![GlobToken::Literal("a.^$b".to_string())]);
    }
}
