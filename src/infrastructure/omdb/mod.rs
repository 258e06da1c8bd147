//! OMDb metadata source

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::errors::ServiceError;
use crate::domain::entities::MovieMetadata;
use crate::domain::traits::MetadataSource;

/// Status envelope shared by every OMDb response
#[derive(Deserialize, Debug)]
struct Envelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Movie fields the relay uses. All are required.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct OmdbMovie {
    title: String,
    plot: String,
    poster: String,
    #[serde(rename = "imdbRating")]
    imdb_rating: String,
    genre: String,
    director: String,
}

impl From<OmdbMovie> for MovieMetadata {
    fn from(m: OmdbMovie) -> Self {
        MovieMetadata {
            title: m.title,
            plot: m.plot,
            poster: m.poster,
            rating: m.imdb_rating,
            genre: m.genre,
            director: m.director,
        }
    }
}

/// OMDb client, looks movies up by exact title
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl OmdbClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl MetadataSource for OmdbClient {
    async fn fetch(&self, title: &str) -> Result<MovieMetadata, ServiceError> {
        let response = self.client
            .get(format!("{}/", self.base_url))
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(ServiceError::network)?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ServiceError::Parse(format!("status {}: {}", status, e.without_url())))?;

        let envelope: Envelope = serde_json::from_value(body.clone())
            .map_err(|e| ServiceError::Parse(e.to_string()))?;

        if envelope.response != "True" {
            let reason = envelope.error.unwrap_or_else(|| "no result".to_string());
            return Err(ServiceError::NotFound(format!("{}: {}", title, reason)));
        }

        let movie: OmdbMovie = serde_json::from_value(body)
            .map_err(|e| ServiceError::Parse(format!("incomplete metadata for {}: {}", title, e)))?;

        tracing::debug!("OMDb found '{}'", movie.title);
        Ok(movie.into())
    }
}
