//! Benchmarks for board generation

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;
use wordgrid_core::{BestOfSearch, Generator, GeneratorConfig, Lexicon, RescanScope};

const WORDS: &str = "
cat car art rat tar arc act cart star tsar arts rats scar cast acts
sat sea eat tea ate era ear are arise raise rise sir stir tire rite tier
ice cite site ties sit its set test rest nest net ten tent sent sane
one tone note stone onset notes tones east seat teas eats rate tear
";

fn lexicon() -> Lexicon {
    Lexicon::from_words(WORDS.split_whitespace()).unwrap()
}

fn bench_generate_default_board(c: &mut Criterion) {
    let lexicon = lexicon();
    let config = GeneratorConfig::default().with_cycles(5_000);
    c.bench_function("generate_15x15_5k_cycles", |b| {
        let mut generator = Generator::with_seed(config.clone(), 1);
        b.iter(|| black_box(generator.generate(&lexicon).unwrap()));
    });
}

fn bench_rescan_scopes(c: &mut Criterion) {
    let lexicon = lexicon();
    let mut group = c.benchmark_group("rescan_scope");
    for (name, scope) in [("full", RescanScope::Full), ("touched", RescanScope::Touched)] {
        let config = GeneratorConfig::default()
            .with_size(10)
            .with_cycles(2_000)
            .with_rescan(scope);
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(
                    Generator::with_seed(config.clone(), 7)
                        .generate(&lexicon)
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

fn bench_best_of_short_budget(c: &mut Criterion) {
    let lexicon = lexicon();
    let config = GeneratorConfig::default().with_size(8).with_cycles(500);
    c.bench_function("best_of_20ms", |b| {
        let mut search = BestOfSearch::with_seed(config.clone(), 3);
        b.iter(|| black_box(search.run(&lexicon, Duration::from_millis(20)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_generate_default_board,
    bench_rescan_scopes,
    bench_best_of_short_budget
);
criterion_main!(benches);
