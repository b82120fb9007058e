//! Page-side access to the animal list.

use std::future::Future;

use reqwest::{header::CACHE_CONTROL, Client};
use thiserror::Error;

use super::types::{Animal, NewAnimal};

/// Path of the proxy endpoint, relative to the front end's origin.
pub const ANIMALS_PATH: &str = "/api/animals";

/// Failure of a load or create as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The proxy answered with a non-2xx status.
    #[error("Fetch failed: {status} {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// A 2xx response whose body is not an animal list.
    #[error("Invalid response: {0}")]
    Decode(String),
}

/// What the page workflow needs from the proxy.
pub trait AnimalsApi {
    /// Fetch the full animal list.
    fn list(&self) -> impl Future<Output = Result<Vec<Animal>, FetchError>> + Send;

    /// Create a record. The response body is not used.
    fn create(&self, animal: NewAnimal) -> impl Future<Output = Result<(), FetchError>> + Send;
}

/// Turn a non-2xx status into an error carrying the body text.
pub fn expect_ok(status: u16, body: String) -> Result<String, FetchError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(FetchError::Status { status, body })
    }
}

/// Parse a list payload.
pub fn decode_list(body: &str) -> Result<Vec<Animal>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// [`AnimalsApi`] over HTTP against a running front end.
#[derive(Debug, Clone)]
pub struct HttpAnimalsApi {
    client: Client,
    endpoint: String,
}

impl HttpAnimalsApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ANIMALS_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn read(resp: reqwest::Response) -> Result<String, FetchError> {
        let status = resp.status().as_u16();
        let text = resp
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        expect_ok(status, text)
    }
}

impl AnimalsApi for HttpAnimalsApi {
    async fn list(&self) -> Result<Vec<Animal>, FetchError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let body = Self::read(resp).await?;
        decode_list(&body)
    }

    async fn create(&self, animal: NewAnimal) -> Result<(), FetchError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .json(&animal)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Self::read(resp).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_has_status_and_body() {
        let err = expect_ok(500, "boom".into()).unwrap_err();
        assert_eq!(err.to_string(), "Fetch failed: 500 boom");
    }

    #[test]
    fn any_2xx_is_ok() {
        assert_eq!(expect_ok(201, "{}".into()), Ok("{}".to_string()));
        assert_eq!(expect_ok(204, String::new()), Ok(String::new()));
        assert!(expect_ok(302, String::new()).is_err());
    }

    #[test]
    fn decode_rejects_non_list() {
        assert!(matches!(
            decode_list(r#"{"id":1}"#),
            Err(FetchError::Decode(_))
        ));
        assert_eq!(decode_list("[]"), Ok(Vec::new()));
    }

    #[test]
    fn endpoint_ignores_trailing_slash() {
        assert_eq!(
            HttpAnimalsApi::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/animals"
        );
    }
}
