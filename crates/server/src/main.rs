//! Simple test harness for the recommendation service.
//!
//! This binary lets you check the end-to-end path by loading the catalog
//! through the engine handle and running one query of each kind.

use anyhow::Result;
use tracing::info;
use tracing_subscriber;

use pipeline::AttributeQuery;
use server::{EngineHandle, ServiceConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,similarity=debug,pipeline=debug")
        .init();

    info!("Starting movie recommender test harness");

    let config = ServiceConfig::new(
        std::env::var("MOVIE_RECS_DATA").unwrap_or_else(|_| "data/imdb_top_1000.csv".to_string()),
    );
    let handle = EngineHandle::new(config);
    let service = handle.get().await?;
    info!("Engine ready with {} movies", service.catalog().len());

    let title = "Inception";
    info!("Movies similar to {}:", title);
    for (i, rec) in service.recommend_similar(title, 10).iter().enumerate() {
        info!(
            "{}. {} ({}) - Similarity: {:.3}",
            i + 1,
            rec.title,
            rec.year.map(|y| y.to_string()).unwrap_or("N/A".to_string()),
            rec.similarity.unwrap_or_default()
        );
    }

    let query = AttributeQuery::new().with_genres(["Drama"]).with_min_rating(8.5);
    info!("Dramas rated 8.5 or higher:");
    for (i, rec) in service.recommend_by_attributes(&query)?.iter().enumerate() {
        info!(
            "{}. {} - Rating: {}",
            i + 1,
            rec.title,
            rec.rating.map(|r| r.to_string()).unwrap_or("N/A".to_string())
        );
    }

    Ok(())
}
