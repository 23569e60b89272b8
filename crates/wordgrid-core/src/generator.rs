use crate::grid::DEFAULT_SIZE;
use crate::{Board, GridError, Lexicon, RescanScope};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Default number of trial cycles per generation run
pub const DEFAULT_CYCLES: usize = 50_000;

/// Configuration for board generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Board dimension
    pub size: usize,
    /// Number of draw-and-place trials
    pub cycles: usize,
    /// Lines rescanned by the placement validator
    pub rescan: RescanScope,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cycles: DEFAULT_CYCLES,
            rescan: RescanScope::Full,
        }
    }
}

impl GeneratorConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_cycles(mut self, cycles: usize) -> Self {
        self.cycles = cycles;
        self
    }

    pub fn with_rescan(mut self, rescan: RescanScope) -> Self {
        self.rescan = rescan;
        self
    }
}

/// Word-grid generator
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run one generation pass and return the filled board.
    ///
    /// Each cycle draws a word uniformly from the lexicon's raw list, collects
    /// every admissible placement and commits one of them at random. Cycles
    /// where nothing fits are simply spent; a sparse board is a normal result.
    pub fn generate(&mut self, lexicon: &Lexicon) -> Result<Board, GridError> {
        let mut board = Board::new(self.config.size)?;

        for _ in 0..self.config.cycles {
            let Some(word) = lexicon.draw(&mut self.rng) else {
                // Nothing can ever be drawn, every remaining cycle is a no-op
                break;
            };

            let mut candidates = board.candidates(lexicon, word, self.config.rescan);
            if candidates.is_empty() {
                continue;
            }

            let choice = self.rng.gen_range(0..candidates.len());
            board.commit(candidates.swap_remove(choice));
        }

        Ok(board)
    }
}
