/**
 * Per-thread reproducible randomness for the generators.
 */

use std::cell::RefCell;
use std::ops::Range;
use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

thread_local! {
    static DICE: RefCell<Mcg128Xsl64> = RefCell::new(Mcg128Xsl64::seed_from_u64(0));
}

pub fn seed_from_system_time() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0, |since| since.as_secs())
}

/// Restarts this thread's sequence from `seed` and hands the seed back, so
/// a failing run can be reported and replayed.
pub fn reseed(seed: u64) -> u64 {
    DICE.with(|dice| *dice.borrow_mut() = Mcg128Xsl64::seed_from_u64(seed));
    seed
}

/// Uniform in `range`, which must not be empty.
pub fn in_range(range: &Range<usize>) -> usize {
    DICE.with(|dice| dice.borrow_mut().gen_range(range.start, range.end))
}

/// True with a probability of `1 / n`.
pub fn one_in(n: usize) -> bool {
    in_range(&(0..n)) == 0
}

pub fn pick<T>(items: &[T]) -> &T {
    assert!(!items.is_empty(), "nothing to pick from");
    &items[in_range(&(0..items.len()))]
}

/// A string of `len` characters, each drawn from `charset`.
pub fn string_from(len: &Range<usize>, charset: &[char]) -> String {
    (0..in_range(len)).map(|_| *pick(charset)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reseeding_replays_the_sequence() {
        assert_eq!(reseed(99), 99);
        let first: Vec<usize> = (0..20).map(|_| in_range(&(0..1000))).collect();
        reseed(99);
        let second: Vec<usize> = (0..20).map(|_| in_range(&(0..1000))).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn multibyte_charset_stays_intact() {
        reseed(1);
        let charset = ['\u{e9}', '\u{df}', '\u{3bb}'];
        for _ in 0..200 {
            let s = string_from(&(1..2), &charset);
            assert_eq!(s.chars().count(), 1, "{:?}", s);
            assert!(s.chars().all(|c| charset.contains(&c)), "{:?}", s);
        }
    }
}
