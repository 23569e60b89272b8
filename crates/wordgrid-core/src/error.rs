use std::fmt;

/// Error raised while building a [`Lexicon`](crate::Lexicon) from a word source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// An entry was empty or held characters outside `a`-`z`
    InvalidWord {
        /// Position of the entry in the source (1-based line number for
        /// text sources, 0-based index for iterators)
        index: usize,
        /// The offending entry as it appeared in the source
        word: String,
    },
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::InvalidWord { index, word } => {
                write!(f, "invalid word {:?} at entry {}", word, index)
            }
        }
    }
}

impl std::error::Error for LexiconError {}

/// Error raised by grid construction and parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Board size must be at least 1
    InvalidSize(usize),
    /// A parsed row did not match the board width
    RowLength { row: usize, expected: usize, found: usize },
    /// A parsed cell was neither a letter nor `.`
    InvalidCell { row: usize, col: usize, found: char },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidSize(size) => write!(f, "invalid board size {}", size),
            GridError::RowLength { row, expected, found } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            GridError::InvalidCell { row, col, found } => {
                write!(f, "invalid cell {:?} at row {}, col {}", found, row, col)
            }
        }
    }
}

impl std::error::Error for GridError {}
