//! Remote catalog sources.

use async_trait::async_trait;
use lemon_types::{CatalogPayload, NewMenuItem};
use tracing::info;

use crate::FetchError;

/// Something that can produce the full menu catalog in one call.
///
/// Implementations map transport and payload failures into [`FetchError`].
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<NewMenuItem>, FetchError>;
}

/// Fetches the `{ "menu": [...] }` document over HTTP.
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch(&self) -> Result<Vec<NewMenuItem>, FetchError> {
        info!("Fetching menu catalog from: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| match e.status() {
                Some(status) => FetchError::Status(status.as_u16()),
                None => FetchError::Http(e),
            })?;

        let payload: CatalogPayload = response.json().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Parse(e.to_string())
            } else {
                FetchError::Http(e)
            }
        })?;
        let items = payload.into_new_items();

        info!("Fetched {} catalog entries", items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/capstone.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "menu": [
                    {
                        "name": "Pasta",
                        "price": 18.5,
                        "description": "Penne with garlic.",
                        "image": "pasta.jpg",
                        "category": "mains"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(format!("{}/capstone.json", server.uri()));
        let items = catalog.fetch().await.expect("fetch");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Pasta");
        assert_eq!(items[0].price, "18.50");
    }

    #[tokio::test]
    async fn test_fetch_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(format!("{}/capstone.json", server.uri()));
        let result = catalog.fetch().await;
        assert!(matches!(result, Err(FetchError::Status(404))));
    }

    #[tokio::test]
    async fn test_fetch_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(format!("{}/capstone.json", server.uri()));
        let result = catalog.fetch().await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_wrong_shape_is_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(format!("{}/capstone.json", server.uri()));
        let result = catalog.fetch().await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_server_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(server.uri());
        let result = catalog.fetch().await;
        assert!(matches!(result, Err(FetchError::Status(503))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let catalog = HttpCatalog::new("http://127.0.0.1:1/capstone.json");
        let result = catalog.fetch().await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }
}
