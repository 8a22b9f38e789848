//! The "nice string" predicate.
//!
//! A string is nice when at least two of these hold:
//!
//! - it contains none of `ba`, `bu`, `be` (case-insensitive)
//! - it contains at least three vowels (`a`, `e`, `i`, `o`, `u`, case-insensitive)
//! - it contains a double letter, i.e. two equal adjacent characters (case-sensitive)

const BAD_SUBSTRINGS: [&str; 3] = ["ba", "bu", "be"];
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const MIN_VOWELS: usize = 3;

/// Outcome of each individual niceness check for one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiceChecks {
    /// None of `ba`, `bu`, `be` occurs.
    pub no_bad_substring: bool,
    /// At least three vowels occur.
    pub enough_vowels: bool,
    /// Two equal characters occur next to each other.
    pub double_letter: bool,
}

impl NiceChecks {
    /// Number of checks that passed (0..=3).
    pub fn passed(&self) -> usize {
        [self.no_bad_substring, self.enough_vowels, self.double_letter]
            .into_iter()
            .filter(|&ok| ok)
            .count()
    }

    /// `true` iff at least two checks passed.
    pub fn is_nice(&self) -> bool {
        self.passed() >= 2
    }
}

/// Run all three checks against `s`.
pub fn nice_checks(s: &str) -> NiceChecks {
    let lower = s.to_lowercase();
    NiceChecks {
        no_bad_substring: !BAD_SUBSTRINGS.iter().any(|bad| lower.contains(bad)),
        enough_vowels: lower.chars().filter(|c| VOWELS.contains(c)).count() >= MIN_VOWELS,
        double_letter: has_double_letter(s),
    }
}

/// Returns `true` if `s` is nice.
pub fn is_nice(s: &str) -> bool {
    nice_checks(s).is_nice()
}

fn has_double_letter(s: &str) -> bool {
    s.chars().zip(s.chars().skip(1)).any(|(a, b)| a == b)
}
