use crate::error::LexiconError;
use rand::Rng;
use rustc_hash::FxHashSet;

/// Immutable word list used both as the source of placeable words and as the
/// validity oracle for every letter run on a grid.
///
/// The raw list is kept in source order with duplicates, so drawing a word is
/// uniform over the list rather than over the distinct words: a word that
/// appears twice in the source is drawn twice as often.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<String>,
    set: FxHashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from a sequence of words.
    ///
    /// Entries are trimmed and ASCII-lowercased. Any entry that is empty or
    /// holds a character outside `a`-`z` fails the whole construction.
    pub fn from_words<I, S>(words: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for (index, word) in words.into_iter().enumerate() {
            lexicon.push(index, word.as_ref())?;
        }
        Ok(lexicon)
    }

    /// Parse a newline-separated word list.
    ///
    /// Blank lines and lines starting with `#` are skipped. Errors report the
    /// 1-based line number.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut lexicon = Self::default();
        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            lexicon.push(line_no + 1, line)?;
        }
        Ok(lexicon)
    }

    fn push(&mut self, index: usize, raw: &str) -> Result<(), LexiconError> {
        let word = raw.trim().to_ascii_lowercase();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(LexiconError::InvalidWord {
                index,
                word: raw.to_string(),
            });
        }
        self.set.insert(word.clone());
        self.words.push(word);
        Ok(())
    }

    /// Case-insensitive whole-word membership test
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.set.contains(&word.to_ascii_lowercase())
        } else {
            self.set.contains(word)
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the raw list, duplicates included
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The raw list in source order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Draw one word uniformly over the raw list
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.words.len());
        Some(&self.words[index])
    }
}
