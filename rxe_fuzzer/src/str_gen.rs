/**
 * Input string generation strategies.
 */

use std::ops::Range;
use crate::rnd::*;

pub trait StringGenStrategy {
    fn generate(&self) -> String;
}

/**
 * Random string from a charset.
 */

pub struct RandomStringGenerator {
    len: Range<usize>,
    charset: Vec<char>,
}

impl RandomStringGenerator {
    pub fn with_len_and_charset(len: Range<usize>, charset: &str) -> Self {
        assert!(!charset.is_empty(), "empty input charset");
        Self{ len, charset: charset.chars().collect() }
    }
}

impl StringGenStrategy for RandomStringGenerator {
    fn generate(&self) -> String {
        string_from(&self.len, &self.charset)
    }
}

/**
 * Picks one of the given strings, or a random one when the list runs dry.
 */

pub struct MixedStringGenerator {
    fixed: Vec<String>,
    fallback: RandomStringGenerator,
}

impl MixedStringGenerator {
    pub fn new(fixed: Vec<String>, fallback: RandomStringGenerator) -> Self {
        Self{ fixed, fallback }
    }
}

impl StringGenStrategy for MixedStringGenerator {
    fn generate(&self) -> String {
        if self.fixed.is_empty() || one_in(2) {
            self.fallback.generate()
        }
        else {
            pick(&self.fixed).clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respects_length_and_charset() {
        reseed(7);
        let g = RandomStringGenerator::with_len_and_charset(2..5, "xy");
        for _ in 0..100 {
            let s = g.generate();
            assert!(s.chars().count() >= 2 && s.chars().count() < 5, "{:?}", s);
            assert!(s.chars().all(|c| c == 'x' || c == 'y'), "{:?}", s);
        }
    }

    #[test]
    fn non_ascii_charset_yields_whole_characters() {
        reseed(13);
        let g = RandomStringGenerator::with_len_and_charset(1..6, "\u{e9}\u{df}z");
        for _ in 0..200 {
            let s = g.generate();
            assert!(s.chars().all(|c| c == '\u{e9}' || c == '\u{df}' || c == 'z'), "{:?}", s);
        }
    }

    #[test]
    fn mixed_uses_fixed_strings() {
        reseed(3);
        let g = MixedStringGenerator::new(
            vec!["fixed".into()],
            RandomStringGenerator::with_len_and_charset(0..3, "a"));
        assert!((0..100).any(|_| g.generate() == "fixed"));
    }
}
