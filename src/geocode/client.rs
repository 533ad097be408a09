use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use super::error::GeocodeError;
use super::place::GeocodeResponse;
use crate::model::Position;

/// Free, key-less BigDataCloud endpoint.
pub const DEFAULT_GEOCODE_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";

/// Anything that can look up what lies at a position.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    /// Fetches the raw geocoding response for `position`.
    async fn reverse_geocode(&self, position: Position) -> Result<GeocodeResponse, GeocodeError>;
}

/// [`ReverseGeocoder`] backed by the BigDataCloud HTTP API.
pub struct BigDataCloudClient {
    client: reqwest::Client,
    base_url: String,
}

impl BigDataCloudClient {
    /// Creates a client against `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("triplog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl ReverseGeocoder for BigDataCloudClient {
    async fn reverse_geocode(&self, position: Position) -> Result<GeocodeResponse, GeocodeError> {
        debug!("Reverse geocoding {position}");
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("latitude", position.lat), ("longitude", position.lng)])
            .send()
            .await?
            .error_for_status()?
            .json::<GeocodeResponse>()
            .await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    use super::*;

    /// Serves one canned HTTP response and reports the request line it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0_u8; 4096];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        (format!("http://{addr}/data/reverse-geocode-client"), rx)
    }

    fn make_client(url: String) -> BigDataCloudClient {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        BigDataCloudClient::with_client(client, url)
    }

    #[tokio::test]
    async fn sends_latitude_and_longitude_query() {
        let (url, request) = serve_once(
            "200 OK",
            r#"{"city":"Lisbon","countryName":"Portugal","countryCode":"PT"}"#,
        )
        .await;
        let geocoder = make_client(url);

        let response = geocoder
            .reverse_geocode(Position::new(38.72, -9.14).unwrap())
            .await
            .unwrap();

        assert_eq!(response.city.as_deref(), Some("Lisbon"));
        assert_eq!(response.country_code.as_deref(), Some("PT"));
        let request_line = request.await.unwrap();
        assert!(
            request_line.contains("latitude=38.72&longitude=-9.14"),
            "unexpected request line: {request_line}"
        );
    }

    #[tokio::test]
    async fn server_error_is_http_error() {
        let (url, _request) = serve_once("500 Internal Server Error", "{}").await;
        let geocoder = make_client(url);

        let result = geocoder.reverse_geocode(Position::default()).await;
        assert!(matches!(result, Err(GeocodeError::Http(_))));
    }

    #[tokio::test]
    async fn malformed_body_is_http_error() {
        let (url, _request) = serve_once("200 OK", "not json").await;
        let geocoder = make_client(url);

        let result = geocoder.reverse_geocode(Position::default()).await;
        assert!(matches!(result, Err(GeocodeError::Http(_))));
    }

    #[test]
    fn new_builds_client() {
        let client = BigDataCloudClient::new(DEFAULT_GEOCODE_URL, Duration::from_secs(5));
        assert!(client.is_ok());
    }
}
