use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use serde::Serialize;
use std::io::{self, Write};
use wordgrid_core::{Board, Grid, Run, SearchOutcome, EMPTY_CELL};

/// JSON shape of a generated board
#[derive(Debug, Serialize)]
pub struct BoardReport {
    pub size: usize,
    pub rows: Vec<String>,
    pub density: f64,
    pub placements: usize,
}

impl BoardReport {
    pub fn new(board: &Board) -> Self {
        Self {
            size: board.size(),
            rows: board.grid().rows(),
            density: board.density(),
            placements: board.placement_count(),
        }
    }
}

/// JSON shape of a best-of search; `best` is null when no pass finished
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub best: Option<BoardReport>,
    pub generated: usize,
}

impl SearchReport {
    pub fn new(outcome: &SearchOutcome) -> Self {
        Self {
            best: outcome.best.as_ref().map(BoardReport::new),
            generated: outcome.generated,
        }
    }
}

/// JSON shape of a grid check
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub invalid_runs: Vec<Run>,
}

/// Writes boards and summary lines, colored when a theme is set
pub struct Printer<W: Write> {
    out: W,
    theme: Option<Theme>,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, theme: Option<Theme>) -> Self {
        Self { out, theme }
    }

    /// Bordered grid, uppercase letters, blanks for empty cells
    pub fn grid(&mut self, grid: &Grid) -> io::Result<()> {
        let Some(theme) = &self.theme else {
            writeln!(self.out, "{}", grid)?;
            return self.out.flush();
        };

        let border = format!("+{}+", "-".repeat(grid.size() * 2 + 1));
        queue!(
            self.out,
            SetForegroundColor(theme.border),
            Print(&border),
            Print("\n")
        )?;
        for row in grid.rows() {
            queue!(
                self.out,
                SetForegroundColor(theme.border),
                Print("|"),
                SetForegroundColor(theme.letter)
            )?;
            for ch in row.chars() {
                let shown = if ch == EMPTY_CELL { ' ' } else { ch.to_ascii_uppercase() };
                queue!(self.out, Print(' '), Print(shown))?;
            }
            queue!(self.out, SetForegroundColor(theme.border), Print(" |\n"))?;
        }
        queue!(self.out, Print(&border), ResetColor, Print("\n"))?;
        self.out.flush()
    }

    pub fn info(&mut self, text: &str) -> io::Result<()> {
        let color = self.theme.as_ref().map(|t| t.info);
        self.line(text, color)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let color = self.theme.as_ref().map(|t| t.error);
        self.line(text, color)
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        let color = self.theme.as_ref().map(|t| t.success);
        self.line(text, color)
    }

    fn line(&mut self, text: &str, color: Option<Color>) -> io::Result<()> {
        match color {
            Some(color) => queue!(
                self.out,
                SetForegroundColor(color),
                Print(text),
                ResetColor,
                Print("\n")
            )?,
            None => writeln!(self.out, "{}", text)?,
        }
        self.out.flush()
    }

    /// Pretty-printed JSON followed by a newline
    pub fn json<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// One-line summary under a board
pub fn summary(board: &Board) -> String {
    format!(
        "Density: {:.1}%  Words placed: {}",
        board.density() * 100.0,
        board.placement_count()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordgrid_core::{Lexicon, Orientation, Placement, Position};

    fn board() -> Board {
        let lexicon = Lexicon::from_words(["cat", "car"]).unwrap();
        let mut board = Board::new(5).unwrap();
        assert!(board.try_place(
            &lexicon,
            Placement::new(Orientation::Horizontal, Position::new(0, 0), "cat")
        ));
        assert!(board.try_place(
            &lexicon,
            Placement::new(Orientation::Vertical, Position::new(0, 0), "car")
        ));
        board
    }

    fn printed<F: FnOnce(&mut Printer<&mut Vec<u8>>) -> io::Result<()>>(
        theme: Option<Theme>,
        f: F,
    ) -> String {
        let mut out = Vec::new();
        let mut printer = Printer::new(&mut out, theme);
        f(&mut printer).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_grid_matches_display() {
        let board = board();
        let text = printed(None, |p| p.grid(board.grid()));
        assert_eq!(text, format!("{}\n", board.grid()));
        assert!(text.starts_with("+-----------+\n| C A T     |\n"));
    }

    #[test]
    fn test_colored_grid_keeps_letters() {
        let board = board();
        let text = printed(Some(Theme::dark()), |p| p.grid(board.grid()));
        assert!(text.contains('\u{1b}'));
        assert!(text.contains(" C A T  "));
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(&board()), "Density: 20.0%  Words placed: 2");
    }

    #[test]
    fn test_board_report_json() {
        let report = BoardReport::new(&board());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["size"], 5);
        assert_eq!(json["rows"][1], "a....");
        assert_eq!(json["placements"], 2);
    }

    #[test]
    fn test_empty_search_report_json() {
        let report = SearchReport::new(&SearchOutcome::default());
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"best":null,"generated":0}"#);
    }
}
