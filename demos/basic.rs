//! Basic example of using the word-grid engine

use std::time::Duration;
use wordgrid_core::{BestOfSearch, Generator, GeneratorConfig, Grid, Lexicon};

const WORDS: &str = "
cat car art rat tar arc act cart star tsar arts rats scar cast acts
sat sea eat tea ate era ear are arise raise rise sir stir tire rite tier
ice cite site ties sit its set test rest nest net ten tent sent sane
";

fn main() {
    let lexicon = Lexicon::parse(WORDS).expect("word list is well formed");
    println!("Loaded {} words\n", lexicon.len());

    // Generate a single board
    println!("Generating a 10x10 board...\n");
    let config = GeneratorConfig::default().with_size(10).with_cycles(5_000);
    let mut generator = Generator::with_config(config.clone());
    let board = generator.generate(&lexicon).expect("size is positive");

    println!("Words placed: {}", board.placement_count());
    println!("Density: {:.1}%\n", board.density() * 100.0);
    let grid = board.into_grid();
    println!("{}", grid);
    println!("Every run is a word: {}\n", grid.is_valid(&lexicon));

    // Keep the densest of as many boards as fit in half a second
    println!("Searching for a denser board for 500ms...\n");
    let mut search = BestOfSearch::new(config);
    let outcome = search
        .run(&lexicon, Duration::from_millis(500))
        .expect("size is positive");
    match outcome.best {
        Some(best) => {
            println!("{}", best.grid());
            println!(
                "Best density {:.1}% out of {} boards",
                best.density() * 100.0,
                outcome.generated
            );
        }
        None => println!("No board finished within the budget"),
    }

    // Check a hand-written grid
    println!("\n--- Checking a grid from rows ---\n");
    let grid = Grid::from_rows(&["cat.", "a...", "r...", "...."]).expect("rows are square");
    println!("{}", grid);
    println!("Valid: {}", grid.is_valid(&lexicon));
}
