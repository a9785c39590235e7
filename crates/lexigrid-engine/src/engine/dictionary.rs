use std::collections::HashSet;

use super::placement::Placement;

/// Decides whether a placement spells a legal word.
///
/// Legality here is string membership only: adjacency and cross-words formed
/// on the board are not considered.
pub trait WordValidator {
    fn is_legal_word(&self, placement: &Placement) -> bool;
}

/// An in-memory word list.
///
/// Lookups are exact and case-sensitive; the canonical form is upper case.
///
/// # Example
///
/// ```
/// use lexigrid_engine::Dictionary;
///
/// let dictionary = Dictionary::parse("CAT\r\nHOUSE\n\nDOG\n");
/// assert_eq!(dictionary.len(), 3);
/// assert!(dictionary.contains("HOUSE"));
/// assert!(!dictionary.contains("house"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from text holding one word per line.
    ///
    /// Trailing whitespace (including `\r`) is trimmed and blank lines are skipped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S> FromIterator<S> for Dictionary
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordValidator for Dictionary {
    fn is_legal_word(&self, placement: &Placement) -> bool {
        self.contains(&placement.word())
    }
}
