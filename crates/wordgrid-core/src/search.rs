//! Best-of-N search: repeated generation under a wall-clock budget,
//! keeping the densest board.

use crate::{Board, Generator, GeneratorConfig, GridError, Lexicon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Source of elapsed time for the search loop
pub trait Clock {
    /// Time since the clock was started
    fn elapsed(&self) -> Duration;
}

/// Clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Result of a best-of search
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Densest board seen, None when no pass ran
    pub best: Option<Board>,
    /// Number of boards generated
    pub generated: usize,
}

impl SearchOutcome {
    pub fn best_density(&self) -> Option<f64> {
        self.best.as_ref().map(Board::density)
    }
}

/// Runs fresh generators back to back until the budget is spent
pub struct BestOfSearch {
    config: GeneratorConfig,
    seeds: StdRng,
}

impl BestOfSearch {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            seeds: StdRng::from_entropy(),
        }
    }

    /// Every pass is seeded from `seed`, so the sequence of boards repeats
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            seeds: StdRng::seed_from_u64(seed),
        }
    }

    /// Search against the system clock
    pub fn run(&mut self, lexicon: &Lexicon, budget: Duration) -> Result<SearchOutcome, GridError> {
        self.run_with_clock(lexicon, budget, &SystemClock::start())
    }

    pub fn run_with_clock<C: Clock>(
        &mut self,
        lexicon: &Lexicon,
        budget: Duration,
        clock: &C,
    ) -> Result<SearchOutcome, GridError> {
        self.run_observed(lexicon, budget, clock, |_, _| {})
    }

    /// Search, calling `on_pass` with the pass number and board after each
    /// pass.
    ///
    /// A pass starts only while the elapsed time is under `budget`; once
    /// started it runs to completion and is counted. A board replaces the
    /// current best only when strictly denser.
    pub fn run_observed<C, F>(
        &mut self,
        lexicon: &Lexicon,
        budget: Duration,
        clock: &C,
        mut on_pass: F,
    ) -> Result<SearchOutcome, GridError>
    where
        C: Clock,
        F: FnMut(usize, &Board),
    {
        if self.config.size == 0 {
            return Err(GridError::InvalidSize(self.config.size));
        }

        let mut outcome = SearchOutcome::default();
        while clock.elapsed() < budget {
            let seed = self.seeds.gen();
            let board = Generator::with_seed(self.config.clone(), seed).generate(lexicon)?;
            outcome.generated += 1;
            on_pass(outcome.generated, &board);

            let better = match &outcome.best {
                Some(best) => board.density() > best.density(),
                None => true,
            };
            if better {
                outcome.best = Some(board);
            }
        }
        Ok(outcome)
    }
}

/// Convert a signed millisecond budget, clamping negatives to zero
pub fn budget_from_millis(millis: i64) -> Duration {
    Duration::from_millis(millis.max(0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Advances a fixed step every time it is read
    struct StepClock {
        now: Cell<Duration>,
        step: Duration,
    }

    impl StepClock {
        fn new(step: Duration) -> Self {
            Self {
                now: Cell::new(Duration::ZERO),
                step,
            }
        }
    }

    impl Clock for StepClock {
        fn elapsed(&self) -> Duration {
            let now = self.now.get();
            self.now.set(now + self.step);
            now
        }
    }

    fn lexicon() -> Lexicon {
        Lexicon::from_words(["cat", "car", "art", "rat", "tar", "arc", "at", "ta", "cart"]).unwrap()
    }

    fn config() -> GeneratorConfig {
        GeneratorConfig::default().with_size(5).with_cycles(200)
    }

    #[test]
    fn test_zero_budget_returns_nothing() {
        let mut search = BestOfSearch::with_seed(config(), 1);
        let outcome = search.run(&lexicon(), Duration::ZERO).unwrap();
        assert!(outcome.best.is_none());
        assert_eq!(outcome.generated, 0);
        assert_eq!(outcome.best_density(), None);
    }

    #[test]
    fn test_negative_budget_clamps_to_zero() {
        assert_eq!(budget_from_millis(-50), Duration::ZERO);
        assert_eq!(budget_from_millis(0), Duration::ZERO);
        assert_eq!(budget_from_millis(250), Duration::from_millis(250));
    }

    #[test]
    fn test_pass_count_follows_clock() {
        let clock = StepClock::new(Duration::from_millis(10));
        let mut search = BestOfSearch::with_seed(config(), 3);
        let outcome = search
            .run_with_clock(&lexicon(), Duration::from_millis(45), &clock)
            .unwrap();
        // Reads at 0, 10, 20, 30, 40 start a pass; 50 stops
        assert_eq!(outcome.generated, 5);
        assert!(outcome.best.is_some());
    }

    #[test]
    fn test_best_is_densest_pass() {
        let clock = StepClock::new(Duration::from_millis(1));
        let mut search = BestOfSearch::with_seed(config(), 9);
        let mut densities = Vec::new();
        let outcome = search
            .run_observed(&lexicon(), Duration::from_millis(8), &clock, |_, board| {
                densities.push(board.density())
            })
            .unwrap();

        assert_eq!(densities.len(), outcome.generated);
        let max = densities.iter().cloned().fold(0.0, f64::max);
        assert_eq!(outcome.best_density(), Some(max));
        assert!(outcome.best.unwrap().grid().is_valid(&lexicon()));
    }

    #[test]
    fn test_seeded_search_repeats() {
        let run = || {
            let clock = StepClock::new(Duration::from_millis(1));
            BestOfSearch::with_seed(config(), 21)
                .run_with_clock(&lexicon(), Duration::from_millis(4), &clock)
                .unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a.generated, b.generated);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let mut search = BestOfSearch::with_seed(config().with_size(0), 1);
        assert!(search.run(&lexicon(), Duration::from_millis(10)).is_err());
    }
}
