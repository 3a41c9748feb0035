//! HTTP client wrapper for Pan API requests.

use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{PanError, Result};

/// HTTP client for making requests to Teambition servers.
///
/// Every request except raw uploads carries the session cookie.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    cookie: String,
}

impl HttpClient {
    /// Create a new HTTP client authenticating with `cookie`.
    pub fn new(cookie: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            cookie: cookie.into(),
        }
    }

    /// Create a new HTTP client with a proxy.
    pub fn with_proxy(cookie: impl Into<String>, proxy: &str) -> Result<Self> {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| PanError::Config(format!("Invalid proxy: {}", e)))?;

        let client = Client::builder()
            .proxy(proxy)
            .build()
            .map_err(|e| PanError::Config(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            cookie: cookie.into(),
        })
    }

    /// GET a JSON document.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!(%url, "GET");
        let response = self.send(self.authed(Method::GET, url).query(query)).await?;
        decode(response).await
    }

    /// Send a JSON body and decode the JSON reply.
    pub async fn send_json<B, T>(&self, method: Method, url: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%method, %url, "request");
        let response = self.send(self.authed(method, url).json(body)).await?;
        decode(response).await
    }

    /// Send a JSON body and ignore whatever comes back.
    pub async fn send_json_discard<B>(&self, method: Method, url: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        debug!(%method, %url, "request");
        self.send(self.authed(method, url).json(body)).await?;
        Ok(())
    }

    /// PUT raw bytes to an upload locator. Upload hosts get no cookie.
    ///
    /// `Content-Length` comes from the body; the content type is sent empty.
    pub async fn put_bytes(&self, url: &str, data: Bytes) -> Result<()> {
        debug!(bytes = data.len(), "PUT upload");
        let request = self.client.put(url).header(CONTENT_TYPE, "").body(data);
        self.send(request).await?;
        Ok(())
    }

    /// GET a URL and hand back the response for streaming.
    pub async fn get_stream(&self, url: &str) -> Result<Response> {
        debug!(%url, "GET stream");
        self.send(self.authed(Method::GET, url)).await
    }

    fn authed(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(COOKIE, &self.cookie)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(PanError::HttpError(response.status().as_u16()));
        }
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}
