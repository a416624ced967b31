//! Benchmarks for similarity index construction and lookup
//!
//! Run with: cargo bench --package similarity
//!
//! Uses a synthetic catalog sized like the IMDb top-1000 export.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Catalog, Movie};
use similarity::{ContentRecommender, SimilarityIndex, DEFAULT_K};

const WORDS: &[&str] = &[
    "heist", "dream", "space", "war", "family", "detective", "robot", "island", "love",
    "revenge", "prison", "journey", "kingdom", "ghost", "city", "ocean", "secret", "court",
];

fn synthetic_catalog(size: usize) -> Catalog {
    let movies = (0..size)
        .map(|i| {
            let overview: Vec<&str> = (0..12).map(|w| WORDS[(i * 7 + w * 3) % WORDS.len()]).collect();
            Movie::new(format!("Movie {i}"))
                .with_year(1950 + (i % 70) as i32)
                .with_rating(7.5 + (i % 15) as f32 / 10.0)
                .with_genre(["Drama", "Action, Sci-Fi", "Crime, Thriller"][i % 3])
                .with_director(format!("Director {}", i % 40))
                .with_stars([format!("Star {}", i % 90), format!("Star {}", (i + 13) % 90)])
                .with_overview(overview.join(" "))
        })
        .collect();
    Catalog::from_movies(movies)
}

fn bench_build_index(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);

    c.bench_function("similarity_index_build_1000", |b| {
        b.iter(|| {
            let index = SimilarityIndex::build(black_box(&catalog));
            black_box(index)
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);
    let index = SimilarityIndex::build(&catalog);

    c.bench_function("content_recommend", |b| {
        b.iter(|| {
            let results = ContentRecommender::recommend(&catalog, &index, black_box("Movie 500"), DEFAULT_K);
            black_box(results)
        })
    });
}

criterion_group!(benches, bench_build_index, bench_recommend);
criterion_main!(benches);
