use serde::Serialize;
use wordgrid_core::search::budget_from_millis;
use wordgrid_core::{
    BestOfSearch, Board, Clock, Generator, GeneratorConfig, Grid, Lexicon, Run,
    MIN_INTERACTIVE_SIZE,
};

/// A generated board as handed to JavaScript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub size: usize,
    pub rows: Vec<String>,
    pub density: f64,
    pub placements: usize,
}

impl From<&Board> for BoardView {
    fn from(board: &Board) -> Self {
        Self {
            size: board.size(),
            rows: board.grid().rows(),
            density: board.density(),
            placements: board.placement_count(),
        }
    }
}

/// Best-of search result; `best` is null when no pass finished
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub best: Option<BoardView>,
    pub generated: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckView {
    pub valid: bool,
    pub invalid_runs: Vec<Run>,
}

/// Lexicon plus generation settings, independent of the JS bindings
pub struct Session {
    lexicon: Lexicon,
    config: GeneratorConfig,
}

impl Session {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            config: GeneratorConfig::default(),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn set_size(&mut self, size: usize) -> Result<(), String> {
        if size < MIN_INTERACTIVE_SIZE {
            return Err(format!(
                "board size must be at least {}, got {}",
                MIN_INTERACTIVE_SIZE, size
            ));
        }
        self.config.size = size;
        Ok(())
    }

    pub fn set_cycles(&mut self, cycles: usize) {
        self.config.cycles = cycles;
    }

    pub fn generate(&self, seed: Option<u64>) -> Result<BoardView, String> {
        let mut generator = match seed {
            Some(seed) => Generator::with_seed(self.config.clone(), seed),
            None => Generator::with_config(self.config.clone()),
        };
        let board = generator.generate(&self.lexicon).map_err(|e| e.to_string())?;
        Ok(BoardView::from(&board))
    }

    /// Best-of search with a millisecond budget from JavaScript; zero,
    /// negative and NaN budgets generate nothing
    pub fn best_of<C: Clock>(
        &self,
        budget_ms: f64,
        seed: Option<u64>,
        clock: &C,
    ) -> Result<SearchView, String> {
        let mut search = match seed {
            Some(seed) => BestOfSearch::with_seed(self.config.clone(), seed),
            None => BestOfSearch::new(self.config.clone()),
        };
        let outcome = search
            .run_with_clock(&self.lexicon, budget_from_millis(budget_ms as i64), clock)
            .map_err(|e| e.to_string())?;
        Ok(SearchView {
            best: outcome.best.as_ref().map(BoardView::from),
            generated: outcome.generated,
        })
    }

    pub fn check(&self, rows: &[String]) -> Result<CheckView, String> {
        let grid = Grid::from_rows(rows).map_err(|e| e.to_string())?;
        let invalid_runs = grid.invalid_runs(&self.lexicon);
        Ok(CheckView {
            valid: invalid_runs.is_empty(),
            invalid_runs,
        })
    }
}
