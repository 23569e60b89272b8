use crate::grid::{line_position, scan_line, Grid, Orientation, Position};
use crate::Lexicon;
use serde::{Deserialize, Serialize};

/// Which lines the validator rescans when checking a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RescanScope {
    /// Every row and every column of the grid
    #[default]
    Full,
    /// Only the line the word lies on and the lines crossing it.
    ///
    /// Gives the same verdict as `Full` as long as the grid was valid before
    /// the candidate, which holds for any grid built through a [`Board`].
    ///
    /// [`Board`]: crate::Board
    Touched,
}

/// A candidate word position: orientation, start cell and word
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub orientation: Orientation,
    pub start: Position,
    pub word: String,
}

impl Placement {
    pub fn new(orientation: Orientation, start: Position, word: &str) -> Self {
        Self {
            orientation,
            start,
            word: word.to_ascii_lowercase(),
        }
    }

    /// Number of cells the word covers
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// True when the whole word lies inside a `size x size` grid
    pub fn fits(&self, size: usize) -> bool {
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (self.start.col, self.start.row),
            Orientation::Vertical => (self.start.row, self.start.col),
        };
        across < size && along + self.len() <= size
    }

    /// Each covered position with the letter the word puts there
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(move |(i, ch)| (self.start.step(self.orientation, i), ch))
    }

    /// The letter this placement puts at `pos`, if it covers `pos`
    pub fn letter_at(&self, pos: Position) -> Option<char> {
        let offset = match self.orientation {
            Orientation::Horizontal if pos.row == self.start.row => {
                pos.col.checked_sub(self.start.col)?
            }
            Orientation::Vertical if pos.col == self.start.col => {
                pos.row.checked_sub(self.start.row)?
            }
            _ => return None,
        };
        self.word.chars().nth(offset)
    }
}

/// Decide whether `placement` may be committed to `grid`.
///
/// `placed` is the number of words already committed; the first word on an
/// empty board does not need to touch anything. The grid is never modified:
/// runs are checked against the grid as it would look with the word written.
pub fn is_admissible(
    grid: &Grid,
    lexicon: &Lexicon,
    placement: &Placement,
    placed: usize,
    scope: RescanScope,
) -> bool {
    let size = grid.size();
    if placement.is_empty() || !placement.fits(size) {
        return false;
    }

    let mut overlaps = 0;
    let mut standalone = 0;
    for (pos, letter) in placement.cells() {
        match grid.get(pos) {
            Some(existing) if !existing.eq_ignore_ascii_case(&letter) => return false,
            Some(_) => overlaps += 1,
            None => standalone += 1,
        }
    }
    if standalone == 0 {
        return false;
    }
    if placed > 0 && overlaps == 0 {
        return false;
    }

    let cell = |pos: Position| placement.letter_at(pos).or_else(|| grid.get(pos));
    let line_is_valid = |orientation: Orientation, line: usize| {
        scan_line(
            size,
            |i| cell(line_position(orientation, line, i)),
            |_, run| lexicon.contains(run),
        )
    };

    match scope {
        RescanScope::Full => Orientation::all()
            .into_iter()
            .all(|orientation| (0..size).all(|line| line_is_valid(orientation, line))),
        RescanScope::Touched => {
            let (own_line, first, cross) = match placement.orientation {
                Orientation::Horizontal => (
                    placement.start.row,
                    placement.start.col,
                    Orientation::Vertical,
                ),
                Orientation::Vertical => (
                    placement.start.col,
                    placement.start.row,
                    Orientation::Horizontal,
                ),
            };
            line_is_valid(placement.orientation, own_line)
                && (first..first + placement.len()).all(|line| line_is_valid(cross, line))
        }
    }
}
