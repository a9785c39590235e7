use std::fmt;

use serde::{Deserialize, Serialize};

use super::letter::Letter;

/// A multiset of letters, stored as one counter per letter.
///
/// Used both as the contents of a [`Hand`](crate::Hand) and as the set of
/// letters a placement requires from it.
///
/// # Example
///
/// ```
/// use lexigrid_engine::{Letter, LetterCounts};
///
/// let required: LetterCounts = [Letter::A, Letter::T, Letter::A].into_iter().collect();
/// assert_eq!(required.get(Letter::A), 2);
/// assert_eq!(required.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LetterCounts {
    counts: [u16; Letter::LEN],
}

impl LetterCounts {
    pub const EMPTY: Self = Self {
        counts: [0; Letter::LEN],
    };

    /// Largest count a single letter can reach.
    pub const MAX_COUNT: usize = u16::MAX as usize;

    #[must_use]
    pub const fn get(&self, letter: Letter) -> usize {
        self.counts[letter.index()] as usize
    }

    /// Returns the number of letters in the multiset, counting duplicates.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&c| usize::from(c)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Adds one instance of `letter`.
    ///
    /// Each count saturates at [`Self::MAX_COUNT`].
    pub fn add(&mut self, letter: Letter) {
        let count = &mut self.counts[letter.index()];
        *count = count.saturating_add(1);
    }

    /// Removes one instance of `letter`.
    ///
    /// Returns `false` and leaves the multiset untouched if `letter` is absent.
    pub fn remove(&mut self, letter: Letter) -> bool {
        let count = &mut self.counts[letter.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Returns `true` if every letter of `other` is present here at least as often.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.counts
            .iter()
            .zip(&other.counts)
            .all(|(have, need)| have >= need)
    }

    /// Returns the letters of `other` that this multiset lacks.
    #[must_use]
    pub fn shortfall(&self, other: &Self) -> Self {
        let mut missing = Self::EMPTY;
        for (i, (have, need)) in self.counts.iter().zip(&other.counts).enumerate() {
            missing.counts[i] = need.saturating_sub(*have);
        }
        missing
    }

    /// Iterates letters in alphabetical order, repeating each by its count.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::ALL
            .iter()
            .flat_map(|&letter| std::iter::repeat_n(letter, self.get(letter)))
    }
}

impl FromIterator<Letter> for LetterCounts {
    fn from_iter<T: IntoIterator<Item = Letter>>(iter: T) -> Self {
        let mut counts = Self::EMPTY;
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
