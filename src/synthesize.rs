//! New-name synthesis.
//!
//! Replays a destination token sequence, substituting each wildcard
//! with the next unconsumed capture from the source match.

use crate::matcher::CaptureResult;
use crate::token::GlobToken;

/// Build the new name for a matched candidate.
///
/// Literals are appended verbatim; each `*` takes the next star capture
/// and each `?` the next question capture, in left-to-right order.
///
/// # Panics
///
/// Panics if the destination demands more captures than the match
/// produced. Wildcard counts are validated before matching, so hitting
/// this is a caller bug, not a user error.
pub fn synthesize(dest_tokens: &[GlobToken], captures: &CaptureResult) -> String {
    let mut stars = captures.star_captures.iter();
    let mut questions = captures.question_captures.iter();

    let mut name = String::new();
    for token in dest_tokens {
        match token {
            GlobToken::Literal(text) => name.push_str(text),
            GlobToken::Star => {
                name.push_str(stars.next().expect("star captures exhausted"));
            }
            GlobToken::Question => {
                name.push_str(questions.next().expect("question captures exhausted"));
            }
        }
    }
    name
}
