//! Anchored glob matching with wildcard capture.
//!
//! Matches a candidate name against a source token sequence and records
//! the substring each wildcard consumed, in left-to-right token order.

use crate::token::{GlobToken, WildcardKind};

/// Substrings captured by a successful match, split by wildcard kind.
/// Both lists are ordered by the wildcard's position in the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaptureResult {
    pub star_captures: Vec<String>,
    pub question_captures: Vec<String>,
}

/// Match `candidate` against the whole token sequence, anchored at both
/// ends. Returns `None` when no assignment of wildcard captures makes
/// the pattern cover the entire candidate.
///
/// `*` is greedy: the longest capture is tried first, backtracking to
/// shorter ones until the rest of the pattern also matches. `?` always
/// consumes exactly one character. Literals match verbatim and
/// case-sensitively. Matching is by `char`, so multi-byte names capture
/// on character boundaries.
pub fn match_captures(tokens: &[GlobToken], candidate: &str) -> Option<CaptureResult> {
    let chars: Vec<char> = candidate.chars().collect();
    let mut captures = Vec::new();

    if !match_at(tokens, &chars, &mut captures) {
        return None;
    }

    let mut result = CaptureResult::default();
    for (kind, text) in captures {
        match kind {
            WildcardKind::Star => result.star_captures.push(text),
            WildcardKind::Question => result.question_captures.push(text),
        }
    }
    Some(result)
}

fn match_at(
    tokens: &[GlobToken],
    chars: &[char],
    captures: &mut Vec<(WildcardKind, String)>,
) -> bool {
    let (token, rest) = match tokens.split_first() {
        Some(split) => split,
        None => return chars.is_empty(),
    };

    match token {
        GlobToken::Literal(text) => {
            let len = text.chars().count();
            if chars.len() < len || !text.chars().eq(chars[..len].iter().copied()) {
                return false;
            }
            match_at(rest, &chars[len..], captures)
        }
        GlobToken::Question => {
            let (first, remaining) = match chars.split_first() {
                Some(split) => split,
                None => return false,
            };
            captures.push((WildcardKind::Question, first.to_string()));
            if match_at(rest, remaining, captures) {
                return true;
            }
            captures.pop();
            false
        }
        GlobToken::Star => {
            // Greedy: longest capture first, shrinking until the
            // remainder of the pattern matches the remainder of the
            // string.
            for taken in (0..=chars.len()).rev() {
                captures.push((WildcardKind::Star, chars[..taken].iter().collect()));
                if match_at(rest, &chars[taken..], captures) {
                    return true;
                }
                captures.pop();
            }
            false
        }
    }
}
