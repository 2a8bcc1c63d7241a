//! Jaro similarity
//!
//! Characters match when they are equal and no further apart than the match
//! window. Matching is greedy: each position of `s1`, left to right, takes the
//! first unmatched equal character of `s2` inside its window. Strings are
//! compared as Unicode scalar values; ASCII input is compared byte-wise, which
//! is equivalent, and short ASCII input uses u64 match flags.

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rayon::prelude::*;
use smallvec::SmallVec;
use std::cmp::{max, min};

type CharVec = SmallVec<[char; 64]>;
type BoolVec = SmallVec<[bool; 64]>;

/// Match window for two strings of the given lengths: `max(len1, len2) / 2 - 1`, floored at 0.
#[inline(always)]
pub fn match_window(len1: usize, len2: usize) -> usize {
    (max(len1, len2) / 2).saturating_sub(1)
}

#[inline(always)]
fn jaro_score(matches: usize, transpositions: usize, len1: usize, len2: usize) -> f64 {
    let m = matches as f64;
    let t = (transpositions / 2) as f64;
    (m / len1 as f64 + m / len2 as f64 + (m - t) / m) / 3.0
}

/// Jaro over ASCII strings of at most 64 bytes, with match flags kept in a u64.
#[inline(always)]
fn jaro_bitflags_ascii(s1: &[u8], s2: &[u8]) -> f64 {
    let len1 = s1.len();
    let len2 = s2.len();
    let window = match_window(len1, len2);

    let mut s1_matches: u64 = 0;
    let mut s2_matches: u64 = 0;
    let mut matches = 0usize;

    for (i, &c1) in s1.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = min(i + window + 1, len2);
        for j in start..end {
            if (s2_matches >> j) & 1 != 0 || c1 != s2[j] {
                continue;
            }
            s1_matches |= 1u64 << i;
            s2_matches |= 1u64 << j;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Walk both flag sets in rank order, one lowest set bit at a time.
    let mut transpositions = 0usize;
    let mut remaining1 = s1_matches;
    let mut remaining2 = s2_matches;
    while remaining1 != 0 {
        let i = remaining1.trailing_zeros() as usize;
        let j = remaining2.trailing_zeros() as usize;
        if s1[i] != s2[j] {
            transpositions += 1;
        }
        remaining1 &= remaining1 - 1;
        remaining2 &= remaining2 - 1;
    }

    jaro_score(matches, transpositions, len1, len2)
}

/// Jaro over arbitrary comparable units.
fn jaro_units<T: Copy + Eq>(s1: &[T], s2: &[T]) -> f64 {
    let len1 = s1.len();
    let len2 = s2.len();
    let window = match_window(len1, len2);

    let mut s1_matches: BoolVec = SmallVec::from_elem(false, len1);
    let mut s2_matches: BoolVec = SmallVec::from_elem(false, len2);
    let mut matches = 0usize;

    for i in 0..len1 {
        let start = i.saturating_sub(window);
        let end = min(i + window + 1, len2);
        for j in start..end {
            if s2_matches[j] || s1[i] != s2[j] {
                continue;
            }
            s1_matches[i] = true;
            s2_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let matched1 = s1.iter().zip(&s1_matches).filter(|(_, m)| **m).map(|(c, _)| c);
    let matched2 = s2.iter().zip(&s2_matches).filter(|(_, m)| **m).map(|(c, _)| c);
    let transpositions = matched1.zip(matched2).filter(|(a, b)| a != b).count();

    jaro_score(matches, transpositions, len1, len2)
}

/// Jaro similarity in [0, 1]. Two empty strings score 1, one empty string scores 0.
pub fn jaro_similarity_raw(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() && s2.is_empty() {
        return 1.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    if s1 == s2 {
        return 1.0;
    }

    if s1.is_ascii() && s2.is_ascii() {
        let (b1, b2) = (s1.as_bytes(), s2.as_bytes());
        if b1.len() <= 64 && b2.len() <= 64 {
            return jaro_bitflags_ascii(b1, b2);
        }
        return jaro_units(b1, b2);
    }

    let s1_chars: CharVec = s1.chars().collect();
    let s2_chars: CharVec = s2.chars().collect();
    jaro_units(&s1_chars, &s2_chars)
}

#[inline(always)]
fn apply_similarity_cutoff(sim: f64, score_cutoff: Option<f64>) -> f64 {
    match score_cutoff {
        Some(cutoff) if sim < cutoff => 0.0,
        _ => sim,
    }
}

#[inline(always)]
fn apply_distance_cutoff(dist: f64, score_cutoff: Option<f64>) -> f64 {
    match score_cutoff {
        Some(cutoff) if dist > cutoff => 1.0,
        _ => dist,
    }
}

/// Calculate Jaro similarity between two strings.
#[cfg_attr(feature = "python", pyfunction)]
#[cfg_attr(feature = "python", pyo3(signature = (s1, s2, *, score_cutoff=None)))]
pub fn jaro_similarity(s1: &str, s2: &str, score_cutoff: Option<f64>) -> f64 {
    apply_similarity_cutoff(jaro_similarity_raw(s1, s2), score_cutoff)
}

/// Calculate Jaro distance (1 - similarity).
#[cfg_attr(feature = "python", pyfunction)]
#[cfg_attr(feature = "python", pyo3(signature = (s1, s2, *, score_cutoff=None)))]
pub fn jaro_distance(s1: &str, s2: &str, score_cutoff: Option<f64>) -> f64 {
    apply_distance_cutoff(1.0 - jaro_similarity_raw(s1, s2), score_cutoff)
}

// ============ Batch Operations ============

#[cfg_attr(feature = "python", pyfunction)]
#[cfg_attr(feature = "python", pyo3(signature = (pairs, *, score_cutoff=None)))]
pub fn jaro_similarity_batch(pairs: Vec<(String, String)>, score_cutoff: Option<f64>) -> Vec<f64> {
    tracing::debug!(pairs = pairs.len(), "jaro similarity batch");
    pairs
        .par_iter()
        .map(|(s1, s2)| jaro_similarity(s1, s2, score_cutoff))
        .collect()
}

#[cfg_attr(feature = "python", pyfunction)]
#[cfg_attr(feature = "python", pyo3(signature = (pairs, *, score_cutoff=None)))]
pub fn jaro_distance_batch(pairs: Vec<(String, String)>, score_cutoff: Option<f64>) -> Vec<f64> {
    tracing::debug!(pairs = pairs.len(), "jaro distance batch");
    pairs
        .par_iter()
        .map(|(s1, s2)| jaro_distance(s1, s2, score_cutoff))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jaro_similarity() {
        let sim = jaro_similarity_raw("MARTHA", "MARHTA");
        assert!((sim - 17.0 / 18.0).abs() < 1e-12);
        let sim = jaro_similarity_raw("DIXON", "DICKSONX");
        assert!((sim - 0.7667).abs() < 0.001);
    }

    #[test]
    fn test_jaro_identical() {
        assert_eq!(jaro_similarity_raw("test", "test"), 1.0);
    }

    #[test]
    fn test_jaro_empty() {
        assert_eq!(jaro_similarity_raw("", ""), 1.0);
        assert_eq!(jaro_similarity_raw("abc", ""), 0.0);
        assert_eq!(jaro_similarity_raw("", "abc"), 0.0);
    }

    #[test]
    fn test_jaro_no_common_chars() {
        assert_eq!(jaro_similarity_raw("abc", "xyz"), 0.0);
        // shared characters fall outside a window of 0
        assert_eq!(jaro_similarity_raw("abc", "cxa"), 0.0);
    }

    #[test]
    fn test_match_window() {
        assert_eq!(match_window(0, 0), 0);
        assert_eq!(match_window(1, 1), 0);
        assert_eq!(match_window(3, 2), 0);
        assert_eq!(match_window(4, 1), 1);
        assert_eq!(match_window(6, 6), 2);
        assert_eq!(match_window(5, 8), 3);
    }

    #[test]
    fn test_bitflags_agree_with_units() {
        let cases = [
            ("MARTHA", "MARHTA"),
            ("DIXON", "DICKSONX"),
            ("JELLYFISH", "SMELLYFISH"),
            ("aaaa", "aa"),
            ("abcdefgh", "hgfedcba"),
        ];
        for (a, b) in cases {
            let flags = jaro_bitflags_ascii(a.as_bytes(), b.as_bytes());
            let units = jaro_units(a.as_bytes(), b.as_bytes());
            assert!((flags - units).abs() < 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn test_long_ascii_matches_unicode_path() {
        let a = "the quick brown fox jumps over the lazy dog ".repeat(3);
        let b = "the quick brown dog jumps over the lazy fox ".repeat(3);
        let bytes = jaro_units(a.as_bytes(), b.as_bytes());
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        let chars = jaro_units(&a_chars, &b_chars);
        assert!((bytes - chars).abs() < 1e-12);
        assert!((jaro_similarity_raw(&a, &b) - bytes).abs() < 1e-12);
    }

    #[test]
    fn test_unicode_code_points() {
        // 'é' is two bytes but one unit
        let sim = jaro_similarity_raw("café", "cafe");
        assert!((sim - (3.0 / 4.0 + 3.0 / 4.0 + 1.0) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_cutoffs() {
        assert_eq!(jaro_similarity("abc", "xyz", Some(0.5)), 0.0);
        assert_eq!(jaro_distance("abc", "xyz", Some(0.5)), 1.0);
        assert_eq!(jaro_distance("test", "test", None), 0.0);
    }
}
