//! Fuzzy subsequence matching.
//!
//! A candidate matches when every character of the pattern appears in it in
//! order, with any number of characters in between. Comparison is
//! case-insensitive. Each match gets a score that rewards matches at the start
//! of the text, after separators, on camelCase humps and in runs, and
//! penalizes unmatched characters.

const FIRST_CHAR_MATCH_BONUS: i64 = 10;
const MATCH_FOLLOWING_SEPARATOR_BONUS: i64 = 20;
const CAMEL_CASE_MATCH_BONUS: i64 = 20;
const ADJACENT_MATCH_BONUS: i64 = 5;
const UNMATCHED_LEADING_CHAR_PENALTY: i64 = -5;
const MAX_UNMATCHED_LEADING_CHAR_PENALTY: i64 = -15;

/// A candidate that contains the pattern as a subsequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Position of the candidate in the input sequence.
    pub index: usize,
    pub score: i64,
}

/// Match `pattern` against every candidate and return the matches, best
/// score first. Equal scores keep their input order.
pub fn find_matches<I, S>(pattern: &str, candidates: I) -> Vec<FuzzyMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<FuzzyMatch> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            score_candidate(&pattern, candidate.as_ref()).map(|score| FuzzyMatch { index, score })
        })
        .collect();

    // sort_by is stable
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Greedy left-to-right match of `pattern` in `candidate`.
fn score_candidate(pattern: &[char], candidate: &str) -> Option<i64> {
    let chars: Vec<char> = candidate.chars().collect();
    let mut last_match: Option<usize> = None;
    let mut score = 0i64;
    let mut next = 0usize;

    for (i, &c) in chars.iter().enumerate() {
        if next == pattern.len() {
            break;
        }
        if !eq_fold(c, pattern[next]) {
            continue;
        }

        if next == 0 {
            score += (i as i64 * UNMATCHED_LEADING_CHAR_PENALTY)
                .max(MAX_UNMATCHED_LEADING_CHAR_PENALTY);
        }

        if i == 0 {
            score += FIRST_CHAR_MATCH_BONUS;
        } else {
            let prev = chars[i - 1];
            if is_separator(prev) {
                score += MATCH_FOLLOWING_SEPARATOR_BONUS;
            }
            if prev.is_lowercase() && c.is_uppercase() {
                score += CAMEL_CASE_MATCH_BONUS;
            }
            if last_match == Some(i - 1) {
                score += ADJACENT_MATCH_BONUS;
            }
        }

        last_match = Some(i);
        next += 1;
    }

    if next < pattern.len() {
        return None;
    }

    score -= (chars.len() - pattern.len()) as i64;
    Some(score)
}

fn eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

fn is_separator(c: char) -> bool {
    matches!(c, '/' | '-' | '_' | ' ' | '.' | '\\')
}
