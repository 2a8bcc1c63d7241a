//! Common prefix length
//!
//! Counts leading characters shared by both strings, up to a boundary.

/// Length of the shared leading run of identical characters, capped at `boundary`.
#[inline(always)]
pub fn common_prefix_length(s1: &str, s2: &str, boundary: usize) -> usize {
    // ASCII: compare bytes directly, no char decoding
    if s1.is_ascii() && s2.is_ascii() {
        return s1
            .bytes()
            .zip(s2.bytes())
            .take(boundary)
            .take_while(|(a, b)| a == b)
            .count();
    }

    s1.chars()
        .zip(s2.chars())
        .take(boundary)
        .take_while(|(a, b)| a == b)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(common_prefix_length("prefix", "pretest", 4), 3);
        assert_eq!(common_prefix_length("abcdef", "abc", 4), 3);
        assert_eq!(common_prefix_length("abcdef", "abcdef", 4), 4);
        assert_eq!(common_prefix_length("abc", "xyz", 4), 0);
    }

    #[test]
    fn test_prefix_boundary() {
        assert_eq!(common_prefix_length("hello", "hello", 0), 0);
        assert_eq!(common_prefix_length("hello", "hello", 10), 5);
        assert_eq!(common_prefix_length("", "hello", 4), 0);
    }

    #[test]
    fn test_prefix_unicode() {
        assert_eq!(common_prefix_length("éclair", "éclat", 4), 4);
        assert_eq!(common_prefix_length("über", "uber", 4), 0);
    }
}
