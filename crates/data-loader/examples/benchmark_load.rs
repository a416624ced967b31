use data_loader::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/imdb_top_1000.csv");

    println!("Loading movie catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!("Genres: {}", catalog.genres().len());
    println!("Stars: {}", catalog.stars().len());
    println!("Years: {}", catalog.years().len());
    println!("\nPerformance: {:.0} movies/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
}
