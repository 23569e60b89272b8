use crate::error::GridError;
use crate::grid::{Grid, Orientation, Position};
use crate::placement::{is_admissible, Placement, RescanScope};
use crate::Lexicon;
use serde::Serialize;

/// A grid together with the words committed to it.
///
/// Words only reach the grid through the placement validator, so every run
/// of two or more letters is a word after each commit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Board {
    grid: Grid,
    placements: Vec<Placement>,
}

impl Board {
    /// Empty `size x size` board
    pub fn new(size: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(size)?,
            placements: Vec::new(),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Committed placements in commit order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of words committed so far
    pub fn placement_count(&self) -> usize {
        self.placements.len()
    }

    pub fn density(&self) -> f64 {
        self.grid.density()
    }

    /// Run the placement validator against the current grid
    pub fn admits(&self, lexicon: &Lexicon, placement: &Placement, scope: RescanScope) -> bool {
        is_admissible(&self.grid, lexicon, placement, self.placements.len(), scope)
    }

    /// Every admissible placement of `word`, across before down, row-major
    pub fn candidates(&self, lexicon: &Lexicon, word: &str, scope: RescanScope) -> Vec<Placement> {
        let size = self.grid.size();
        let len = word.chars().count();
        let mut found = Vec::new();
        if len == 0 || len > size {
            return found;
        }

        for orientation in Orientation::all() {
            let (rows, cols) = match orientation {
                Orientation::Horizontal => (size, size - len + 1),
                Orientation::Vertical => (size - len + 1, size),
            };
            for row in 0..rows {
                for col in 0..cols {
                    let placement = Placement::new(orientation, Position::new(row, col), word);
                    if self.admits(lexicon, &placement, scope) {
                        found.push(placement);
                    }
                }
            }
        }
        found
    }

    /// Validate and commit in one step. Returns false and leaves the board
    /// untouched when the placement is rejected.
    pub fn try_place(&mut self, lexicon: &Lexicon, placement: Placement) -> bool {
        if !self.admits(lexicon, &placement, RescanScope::Full) {
            return false;
        }
        self.commit(placement);
        true
    }

    /// Write an already validated placement
    pub(crate) fn commit(&mut self, placement: Placement) {
        for (pos, letter) in placement.cells() {
            self.grid.set(pos, Some(letter));
        }
        self.placements.push(placement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "car", "at", "art"]).unwrap()
    }

    #[test]
    fn test_try_place_commits_letters() {
        let lexicon = lexicon();
        let mut board = Board::new(4).unwrap();
        let cat = Placement::new(Orientation::Horizontal, Position::new(0, 0), "cat");
        assert!(board.try_place(&lexicon, cat.clone()));
        assert_eq!(board.placement_count(), 1);
        assert_eq!(board.grid().rows()[0], "cat.");
        assert_eq!(board.placements(), &[cat]);
        assert_eq!(board.density(), 3.0 / 16.0);

        let grid = board.into_grid();
        assert_eq!(grid.rows(), vec!["cat.", "....", "....", "...."]);
    }

    #[test]
    fn test_rejected_placement_leaves_board_untouched() {
        let lexicon = lexicon();
        let mut board = Board::new(4).unwrap();
        assert!(board.try_place(
            &lexicon,
            Placement::new(Orientation::Horizontal, Position::new(0, 0), "cat")
        ));
        assert!(board.try_place(
            &lexicon,
            Placement::new(Orientation::Vertical, Position::new(0, 0), "car")
        ));
        let before = board.clone();

        // "art" down from the a of "cat" forms "ar" and "rt" across
        let art = Placement::new(Orientation::Vertical, Position::new(0, 1), "art");
        assert!(!board.try_place(&lexicon, art));
        assert_eq!(board, before);
    }

    #[test]
    fn test_candidates_first_word_anywhere_it_fits() {
        let lexicon = lexicon();
        let board = Board::new(4).unwrap();
        // 4 rows x 2 starts across, 2 starts x 4 cols down
        assert_eq!(board.candidates(&lexicon, "cat", RescanScope::Full).len(), 16);
        assert!(board.candidates(&lexicon, "carts", RescanScope::Full).is_empty());
        assert!(board.candidates(&lexicon, "", RescanScope::Full).is_empty());
    }

    #[test]
    fn test_candidates_after_first_word_must_touch() {
        let lexicon = lexicon();
        let mut board = Board::new(4).unwrap();
        assert!(board.try_place(
            &lexicon,
            Placement::new(Orientation::Horizontal, Position::new(0, 0), "cat")
        ));
        let candidates = board.candidates(&lexicon, "art", RescanScope::Full);
        assert_eq!(
            candidates,
            vec![Placement::new(Orientation::Vertical, Position::new(0, 1), "art")]
        );
    }

    #[test]
    fn test_serializes_grid_and_placements() {
        let lexicon = lexicon();
        let mut board = Board::new(3).unwrap();
        assert!(board.try_place(
            &lexicon,
            Placement::new(Orientation::Vertical, Position::new(0, 2), "at")
        ));
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["grid"]["rows"][1], "..t");
        assert_eq!(json["placements"][0]["orientation"], "vertical");
        assert_eq!(json["placements"][0]["word"], "at");
    }
}
