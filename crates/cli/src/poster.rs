//! Poster availability checks.
//!
//! The core never touches the network. Whether a poster can be shown is a
//! presentation concern, answered by a `PosterProbe` the CLI injects into
//! rendering. A failed or slow probe only swaps the poster for a
//! placeholder; it never affects which movies are listed.

use std::future::Future;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use tracing::debug;

/// Answers "can this poster URL be displayed?"
pub trait PosterProbe {
    fn can_display(&self, url: &str) -> impl Future<Output = bool> + Send;
}

/// HEAD request with a short timeout; 200 plus an image content type wins
pub struct HttpPosterProbe {
    client: reqwest::Client,
}

impl HttpPosterProbe {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl PosterProbe for HttpPosterProbe {
    async fn can_display(&self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        match self.client.head(url).send().await {
            Ok(response) => {
                let is_image = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(|value| value.contains("image"))
                    .unwrap_or(false);
                response.status() == StatusCode::OK && is_image
            }
            Err(e) => {
                debug!("Poster probe failed for {}: {}", url, e);
                false
            }
        }
    }
}
