use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pipeline::AttributeQuery;
use server::{EngineHandle, MovieView, RecommendationService, Selection, ServiceConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

mod poster;

use poster::{HttpPosterProbe, PosterProbe};

/// MovieRecs - content and attribute based movie recommender
#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Recommend movies by content similarity or by genre, cast, year and rating", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV (IMDb top-1000 layout)
    #[arg(short, long, env = "MOVIE_RECS_DATA", default_value = "data/imdb_top_1000.csv")]
    data: PathBuf,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Probe poster URLs and flag the ones that can not be displayed
    #[arg(long, global = true)]
    check_posters: bool,

    /// Timeout for each poster probe, in milliseconds
    #[arg(long, global = true, default_value = "2000")]
    poster_timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find movies similar to a title
    Similar {
        /// Exact title of the movie to start from
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Show the similarity score for each recommendation
        #[arg(long)]
        explain: bool,
    },

    /// Filter by genre, star, year and minimum rating
    Filter {
        /// Genre to match as a substring of the genre field (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,

        /// Star to match exactly (repeatable)
        #[arg(long = "star")]
        stars: Vec<String>,

        /// Release year (repeatable)
        #[arg(long = "year")]
        years: Vec<i32>,

        /// Minimum IMDb rating (default 8.0); unrated movies never match
        #[arg(long)]
        min_rating: Option<f32>,
    },

    /// Show the top rated movies
    Top {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// List the values available for a selection
    Options {
        #[arg(value_enum)]
        kind: OptionKind,
    },

    /// Run benchmark to test query performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Number of concurrent requests
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OptionKind {
    Titles,
    Genres,
    Stars,
    Years,
}

/// How results are printed
struct OutputOptions {
    json: bool,
    check_posters: bool,
    poster_timeout: Duration,
    explain: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load catalog and build the similarity index (this may take a moment)
    let start = Instant::now();
    let handle = EngineHandle::new(ServiceConfig::new(cli.data.clone()));
    let service = handle
        .get()
        .await
        .context("Failed to load movie catalog")?;
    if !cli.json {
        println!(
            "{} Loaded {} movies in {:?}",
            "✓".green(),
            service.catalog().len(),
            start.elapsed()
        );
    }

    let mut output = OutputOptions {
        json: cli.json,
        check_posters: cli.check_posters,
        poster_timeout: Duration::from_millis(cli.poster_timeout_ms),
        explain: false,
    };

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Similar {
            title,
            limit,
            explain,
        } => {
            output.explain = explain;
            handle_similar(&service, &title, limit, &output).await?
        }
        Commands::Filter {
            genres,
            stars,
            years,
            min_rating,
        } => {
            let query = service.attribute_query(genres, stars, years, min_rating);
            handle_filter(&service, query, &output).await?
        }
        Commands::Top { limit } => {
            let results = service.top_rated(limit);
            show_results("Top Rated Movies", &results, &output).await?
        }
        Commands::Options { kind } => handle_options(&service, kind, &output)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(service, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'similar' command
async fn handle_similar(
    service: &RecommendationService,
    title: &str,
    limit: usize,
    output: &OutputOptions,
) -> Result<()> {
    if !service.catalog().contains_title(title) && !output.json {
        println!(
            "{} '{}' is not in the catalog (titles are matched exactly)",
            "!".yellow(),
            title
        );
    }
    let results = service.recommend_similar(title, limit);
    show_results(&format!("Movies similar to '{}'", title), &results, output).await
}

/// Handle the 'filter' command
///
/// With no genre, star or year the page shows the default top-rated view
/// instead, as the interactive front end does.
async fn handle_filter(
    service: &RecommendationService,
    query: AttributeQuery,
    output: &OutputOptions,
) -> Result<()> {
    let header = if query.has_no_selection() {
        "No genre, star or year selected - Top Rated Movies"
    } else {
        "Top Recommendations"
    };
    let results = service.browse(&Selection::Attributes(query))?;
    show_results(header, &results, output).await
}

/// Handle the 'options' command
fn handle_options(
    service: &RecommendationService,
    kind: OptionKind,
    output: &OutputOptions,
) -> Result<()> {
    let options = service.options();
    let values: Vec<String> = match kind {
        OptionKind::Titles => options.titles,
        OptionKind::Genres => options.genres,
        OptionKind::Stars => options.stars,
        OptionKind::Years => options.years.iter().map(|y| y.to_string()).collect(),
    };

    if output.json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for value in values {
            println!("{}", value);
        }
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    service: Arc<RecommendationService>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    let titles = service.catalog().titles();
    if titles.is_empty() {
        println!("Catalog is empty, nothing to benchmark");
        return Ok(());
    }

    // Pick random titles from the catalog
    let queries: Vec<String> = (0..requests)
        .map(|_| {
            let idx = rand::random::<u64>() as usize % titles.len();
            titles[idx].clone()
        })
        .collect();

    // Limit the number of in-flight requests
    let permits = Arc::new(tokio::sync::Semaphore::new(concurrent.max(1)));
    let wall_clock = Instant::now();
    let mut handles = vec![];
    for title in queries {
        let service = service.clone();
        let permits = permits.clone();
        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            let results = service.recommend_similar(&title, service.config().similar_k);
            std::hint::black_box(results);
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }
    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = wall_clock.elapsed();

    if timings.is_empty() {
        println!("No requests made");
        return Ok(());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = timings.len() as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

/// Print a result list, probing posters when asked to
async fn show_results(header: &str, results: &[MovieView], output: &OutputOptions) -> Result<()> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    let probe = if output.check_posters {
        Some(HttpPosterProbe::new(output.poster_timeout)?)
    } else {
        None
    };
    println!("{}", header.bold().blue());
    for block in render_movies(results, probe.as_ref(), output.explain).await {
        println!("{}", block);
    }
    Ok(())
}

/// Format a result list, one text block per movie.
///
/// Posters are only probed when a probe is given. An empty list renders
/// the "no matches" message instead.
async fn render_movies<P: PosterProbe>(
    results: &[MovieView],
    probe: Option<&P>,
    explain: bool,
) -> Vec<String> {
    if results.is_empty() {
        return vec![format!("{}", "No matching movies found. Try different filters.".yellow())];
    }

    let mut blocks = Vec::with_capacity(results.len());
    for (rank, movie) in results.iter().enumerate() {
        let poster = match probe {
            Some(probe) => Some(probe.can_display(&movie.poster_link).await),
            None => None,
        };
        blocks.push(format_movie(rank + 1, movie, poster, explain));
    }
    blocks
}

/// Render one movie as a text block.
///
/// `poster` is `None` when posters were not checked.
fn format_movie(rank: usize, movie: &MovieView, poster: Option<bool>, explain: bool) -> String {
    let year = movie
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let rating = movie
        .rating
        .map(|r| format!("{:.1}", r))
        .unwrap_or_else(|| "N/A".to_string());
    let stars = movie
        .stars
        .iter()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![format!(
        "{}. {}",
        rank.to_string().green(),
        format!("{} ({})", movie.title, year).bold()
    )];
    match poster {
        Some(true) => lines.push(format!("   Poster: {}", movie.poster_link)),
        Some(false) => lines.push(format!("   {}", "Poster not available".yellow())),
        None if !movie.poster_link.is_empty() => {
            lines.push(format!("   Poster: {}", movie.poster_link))
        }
        None => {}
    }
    lines.push(format!("   IMDb Rating: {}", rating));
    lines.push(format!("   Genre: {}", movie.genre));
    lines.push(format!("   Director: {}", movie.director));
    lines.push(format!("   Stars: {}", stars));
    lines.push(format!("   Overview: {}", movie.overview));
    if explain {
        if let Some(score) = movie.similarity {
            lines.push(format!("   Similarity: {:.3}", score));
        }
    }
    lines.join("\n")
}
