use crate::error::GridError;
use crate::Lexicon;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default board dimension
pub const DEFAULT_SIZE: usize = 15;

/// Smallest board the front ends let a player pick
pub const MIN_INTERACTIVE_SIZE: usize = 4;

/// Character used for empty cells in the row notation
pub const EMPTY_CELL: char = '.';

/// A cell position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position `steps` cells further along `orientation`
    pub fn step(self, orientation: Orientation, steps: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.col + steps),
            Orientation::Vertical => Self::new(self.row + steps, self.col),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a word or run reads in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Orientation {
    pub fn all() -> [Orientation; 2] {
        [Orientation::Horizontal, Orientation::Vertical]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "across"),
            Orientation::Vertical => write!(f, "down"),
        }
    }
}

/// A maximal run of two or more letters along one row or column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub start: Position,
    pub orientation: Orientation,
    pub text: String,
}

/// Walk one line of `len` cells, calling `on_run` with the start offset and
/// text of every maximal run of two or more letters. Stops early and returns
/// false as soon as `on_run` does.
pub(crate) fn scan_line<C, R>(len: usize, cell: C, mut on_run: R) -> bool
where
    C: Fn(usize) -> Option<char>,
    R: FnMut(usize, &str) -> bool,
{
    let mut run = String::new();
    let mut start = 0;
    let mut cells = 0;
    for i in 0..=len {
        let value = if i < len { cell(i) } else { None };
        match value {
            Some(ch) => {
                if cells == 0 {
                    start = i;
                }
                run.push(ch);
                cells += 1;
            }
            None => {
                if cells >= 2 && !on_run(start, &run) {
                    return false;
                }
                run.clear();
                cells = 0;
            }
        }
    }
    true
}

/// Square board of cells, each empty or holding one lowercase letter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GridData", try_from = "GridData")]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty `size x size` grid.
    ///
    /// Fails for size 0 and for sizes whose cell count overflows or cannot
    /// be allocated.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::InvalidSize(size));
        }
        let count = size.checked_mul(size).ok_or(GridError::InvalidSize(size))?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| GridError::InvalidSize(size))?;
        cells.resize(count, None);
        Ok(Self { size, cells })
    }

    /// Parse rows of letters with `.` for empty cells.
    ///
    /// The number of rows sets the size; every row must have that many cells.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let mut grid = Self::new(rows.len())?;
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref().trim();
            let found = line.chars().count();
            if found != grid.size {
                return Err(GridError::RowLength {
                    row,
                    expected: grid.size,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let value = match ch {
                    EMPTY_CELL => None,
                    c if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
                    c => return Err(GridError::InvalidCell { row, col, found: c }),
                };
                grid.set(Position::new(row, col), value);
            }
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    /// Letter at `pos`, or None when empty
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[self.index(pos)]
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Overwrite one cell. Letters are stored lowercase.
    pub fn set(&mut self, pos: Position, value: Option<char>) {
        let index = self.index(pos);
        self.cells[index] = value.map(|c| c.to_ascii_lowercase());
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled_count()
    }

    /// Fraction of cells holding a letter
    pub fn density(&self) -> f64 {
        self.filled_count() as f64 / self.cells.len() as f64
    }

    /// Rows as strings, `.` for empty cells
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.unwrap_or(EMPTY_CELL)).collect())
            .collect()
    }

    /// Every maximal horizontal then vertical run of two or more letters
    pub fn runs(&self) -> Vec<Run> {
        let mut runs = Vec::new();
        for orientation in Orientation::all() {
            for line in 0..self.size {
                scan_line(
                    self.size,
                    |i| self.get(line_position(orientation, line, i)),
                    |start, text| {
                        runs.push(Run {
                            start: line_position(orientation, line, start),
                            orientation,
                            text: text.to_string(),
                        });
                        true
                    },
                );
            }
        }
        runs
    }

    /// Runs that are not words of `lexicon`
    pub fn invalid_runs(&self, lexicon: &Lexicon) -> Vec<Run> {
        self.runs()
            .into_iter()
            .filter(|run| !lexicon.contains(&run.text))
            .collect()
    }

    /// True when every run is a word of `lexicon`
    pub fn is_valid(&self, lexicon: &Lexicon) -> bool {
        self.runs().iter().all(|run| lexicon.contains(&run.text))
    }
}

/// Position of the `i`th cell of row (or column) `line`
pub(crate) fn line_position(orientation: Orientation, line: usize, i: usize) -> Position {
    match orientation {
        Orientation::Horizontal => Position::new(line, i),
        Orientation::Vertical => Position::new(i, line),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(self.size * 2 + 1));
        writeln!(f, "{}", border)?;
        for row in self.cells.chunks(self.size) {
            write!(f, "|")?;
            for cell in row {
                let ch = cell.map(|c| c.to_ascii_uppercase()).unwrap_or(' ');
                write!(f, " {}", ch)?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "{}", border)
    }
}

/// Serialized form of a grid
#[derive(Serialize, Deserialize)]
struct GridData {
    size: usize,
    rows: Vec<String>,
}

impl From<Grid> for GridData {
    fn from(grid: Grid) -> Self {
        Self {
            size: grid.size,
            rows: grid.rows(),
        }
    }
}

impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        if data.rows.len() != data.size {
            return Err(GridError::InvalidSize(data.size));
        }
        Grid::from_rows(&data.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "car", "at", "art", "ta"]).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_size() {
        assert_eq!(Grid::new(0), Err(GridError::InvalidSize(0)));
        let grid = Grid::new(DEFAULT_SIZE).unwrap();
        assert_eq!(grid.size(), 15);
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.density(), 0.0);
    }

    #[test]
    fn test_new_rejects_overflowing_size() {
        let half = 1usize << (usize::BITS / 2);
        assert_eq!(Grid::new(half), Err(GridError::InvalidSize(half)));
        assert_eq!(Grid::new(usize::MAX), Err(GridError::InvalidSize(usize::MAX)));
    }

    #[test]
    fn test_single_cells_are_not_runs() {
        // A lone multi-byte letter still occupies one cell
        let mut grid = Grid::new(3).unwrap();
        grid.set(Position::new(1, 1), Some('é'));
        assert!(grid.runs().is_empty());
        assert!(grid.is_valid(&lexicon()));

        grid.set(Position::new(1, 2), Some('é'));
        let runs = grid.runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "éé");
    }

    #[test]
    fn test_from_rows_and_rows_round_trip() {
        let rows = ["cat.", "a...", "r...", "...."];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.get(Position::new(0, 1)), Some('a'));
        assert!(grid.is_empty_at(Position::new(3, 3)));
        assert_eq!(grid.rows(), rows);
        assert_eq!(grid.filled_count(), 5);
        assert_eq!(grid.empty_count(), 11);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(
            Grid::from_rows(&["ab", "a"]),
            Err(GridError::RowLength {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::from_rows(&["a1", ".."]),
            Err(GridError::InvalidCell {
                row: 0,
                col: 1,
                found: '1'
            })
        );
    }

    #[test]
    fn test_from_rows_lowercases() {
        let grid = Grid::from_rows(&["CA", ".T"]).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some('c'));
    }

    #[test]
    fn test_runs_cover_rows_and_columns() {
        let grid = Grid::from_rows(&["cat.", "a...", "r.x.", "...."]).unwrap();
        let runs = grid.runs();
        assert_eq!(
            runs,
            vec![
                Run {
                    start: Position::new(0, 0),
                    orientation: Orientation::Horizontal,
                    text: "cat".to_string()
                },
                Run {
                    start: Position::new(0, 0),
                    orientation: Orientation::Vertical,
                    text: "car".to_string()
                },
            ]
        );
        assert!(grid.is_valid(&lexicon()));
    }

    #[test]
    fn test_invalid_runs_reported() {
        let grid = Grid::from_rows(&["cat.", "ax..", "r...", "...."]).unwrap();
        let bad: Vec<String> = grid
            .invalid_runs(&lexicon())
            .into_iter()
            .map(|r| r.text)
            .collect();
        // Both the row and the column through the x read "ax"
        assert_eq!(bad, vec!["ax".to_string(), "ax".to_string()]);
        assert!(!grid.is_valid(&lexicon()));
    }

    #[test]
    fn test_run_touching_edge_is_scanned() {
        let grid = Grid::from_rows(&["...", ".at", "..."]).unwrap();
        let runs = grid.runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].start, Position::new(1, 1));
        assert_eq!(runs[0].text, "at");
    }

    #[test]
    fn test_display_bordered() {
        let grid = Grid::from_rows(&["at", ".."]).unwrap();
        assert_eq!(grid.to_string(), "+-----+\n| A T |\n|     |\n+-----+");
    }

    #[test]
    fn test_serde_uses_rows() {
        let grid = Grid::from_rows(&["at", ".."]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"size":2,"rows":["at",".."]}"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid>(r#"{"size":3,"rows":["at",".."]}"#).is_err());
    }
}
