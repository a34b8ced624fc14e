/**
 * Pattern generation strategies.
 */

use crate::rnd::*;

pub trait PatternGenStrategy {
    fn generate(&self) -> String;
}

/**
 * Random pattern following the grammar level by level, so every result parses.
 */

pub struct RandomPatternGenerator {
    max_depth: usize,
    charset: Vec<char>,
}

impl RandomPatternGenerator {
    pub fn with_depth_and_charset(max_depth: usize, charset: &str) -> Self {
        assert!(!charset.is_empty() && charset.chars().all(|c| c.is_ascii_alphanumeric()));
        Self{ max_depth, charset: charset.chars().collect() }
    }

    fn alternative(&self, depth: usize) -> String {
        let first = self.sequence(depth);
        if depth > 0 && one_in(3) {
            format!("{}|{}", first, self.alternative(depth - 1))
        }
        else {
            first
        }
    }

    fn sequence(&self, depth: usize) -> String {
        let first = self.quantified(depth);
        if depth > 0 && one_in(2) {
            format!("{}{}", first, self.sequence(depth - 1))
        }
        else {
            first
        }
    }

    fn quantified(&self, depth: usize) -> String {
        let atom = self.atom(depth);
        match in_range(&(0..4)) {
            0 => format!("{}*", atom),
            1 => format!("{}?", atom),
            _ => atom,
        }
    }

    fn atom(&self, depth: usize) -> String {
        if depth > 0 && one_in(3) {
            format!("({})", self.alternative(depth - 1))
        }
        else {
            pick(&self.charset).to_string()
        }
    }
}

impl PatternGenStrategy for RandomPatternGenerator {
    fn generate(&self) -> String {
        self.alternative(self.max_depth)
    }
}
