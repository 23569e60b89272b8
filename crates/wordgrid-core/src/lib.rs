//! Word-grid generation engine
//!
//! Builds crossword-like letter grids by dropping random dictionary words onto
//! a square board. A word is only committed when every run of two or more
//! letters in every row and column is still a dictionary word afterwards.
//!
//! ```
//! use wordgrid_core::{Generator, GeneratorConfig, Lexicon};
//!
//! let lexicon = Lexicon::from_words(["cat", "car", "art", "at", "tar"]).unwrap();
//! let config = GeneratorConfig::default().with_size(5).with_cycles(200);
//! let board = Generator::with_seed(config, 42).generate(&lexicon).unwrap();
//! assert!(board.grid().is_valid(&lexicon));
//! println!("{}", board.grid());
//! ```

mod board;
mod error;
mod generator;
mod grid;
mod lexicon;
mod placement;
pub mod search;

pub use board::Board;
pub use error::{GridError, LexiconError};
pub use generator::{Generator, GeneratorConfig, DEFAULT_CYCLES};
pub use grid::{Grid, Orientation, Position, Run, DEFAULT_SIZE, EMPTY_CELL, MIN_INTERACTIVE_SIZE};
pub use lexicon::Lexicon;
pub use placement::{is_admissible, Placement, RescanScope};
pub use search::{BestOfSearch, Clock, SearchOutcome, SystemClock};
