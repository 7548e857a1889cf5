//! Common test utilities - BouquetTest harness for end-to-end testing

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use bouquetd::config::{GeminiConfig, OpenAiConfig};
use bouquetd::{Config, Server};
use reqwest::Client;
use serde_json::{json, Value};
use tokio::task::JoinHandle;
use wiremock::{Match, MockServer, Request};

pub const GEMINI_KEY: &str = "test-gemini-key";
pub const OPENAI_KEY: &str = "test-openai-key";
pub const IMAGE_MODEL_PATH: &str = "/models/gemini-2.5-flash-image:generateContent";
pub const VISION_MODEL_PATH: &str = "/models/gemini-2.0-flash-exp:generateContent";

/// Tiny valid base64 payload used wherever an upload is needed
pub const PIXEL: &str = "iVBORw0KGgo=";

/// Test harness that spawns a real bouquetd server on a random port with
/// both providers pointed at wiremock doubles
pub struct BouquetTest {
    pub addr: SocketAddr,
    pub client: Client,
    pub gemini: MockServer,
    pub openai: MockServer,
    server: Arc<Server>,
    _handle: JoinHandle<()>,
}

impl BouquetTest {
    /// Start a server with both API keys configured
    pub async fn start() -> Result<Self> {
        Self::start_with_keys(true).await
    }

    /// Start a server with no API keys
    pub async fn start_unconfigured() -> Result<Self> {
        Self::start_with_keys(false).await
    }

    async fn start_with_keys(with_keys: bool) -> Result<Self> {
        let gemini = MockServer::start().await;
        let openai = MockServer::start().await;

        // Find a random available port
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        let addr = listener.local_addr()?;
        drop(listener);

        let config = Config {
            bind_addr: addr,
            request_timeout_secs: 5,
            gemini: GeminiConfig {
                api_key: with_keys.then(|| GEMINI_KEY.to_string()),
                base_url: gemini.uri(),
                ..GeminiConfig::default()
            },
            openai: OpenAiConfig {
                api_key: with_keys.then(|| OPENAI_KEY.to_string()),
                base_url: openai.uri(),
                ..OpenAiConfig::default()
            },
            ..Config::default()
        };

        let server = Arc::new(Server::new(config).await?);
        let server_clone = server.clone();

        // Spawn the server in a background task
        let handle = tokio::spawn(async move {
            if let Err(e) = server_clone.run().await {
                eprintln!("Server error: {}", e);
            }
        });

        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;

        // Poll until server is ready (max 2 seconds)
        let mut ready = false;
        for _ in 0..20 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            if client
                .get(format!("http://{}/health", addr))
                .send()
                .await
                .is_ok()
            {
                ready = true;
                break;
            }
        }

        if !ready {
            panic!("Server failed to start within 2 seconds");
        }

        Ok(Self {
            addr,
            client,
            gemini,
            openai,
            server,
            _handle: handle,
        })
    }

    /// Get the base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .get(format!("{}{}", self.base_url(), path))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}{}", self.base_url(), path))
            .json(body)
            .send()
            .await?)
    }

    /// JSON bodies Gemini received, in arrival order
    pub async fn gemini_requests(&self) -> Vec<Value> {
        self.gemini
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|r| serde_json::from_slice(&r.body).ok())
            .collect()
    }

    /// Shutdown the server gracefully
    pub fn shutdown(&self) {
        self.server.shutdown();
    }
}

/// Matches requests whose raw body contains `needle`, binary parts included
pub struct BodyBytesContain(pub &'static str);

impl Match for BodyBytesContain {
    fn matches(&self, request: &Request) -> bool {
        let needle = self.0.as_bytes();
        request.body.windows(needle.len()).any(|w| w == needle)
    }
}

/// A complete, valid wizard selection
pub fn valid_selection() -> Value {
    json!({
        "bouquetType": "Round",
        "flowers": ["Red Rose", "White Lily"],
        "quantity": "Luxe",
        "colors": ["Classic Red"],
        "wrap": "Kraft Paper",
        "ribbonType": "Silk",
        "ribbonColor": "Gold"
    })
}

/// Gemini answer carrying one inline PNG
pub fn gemini_image_response(data: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "inlineData": { "mimeType": "image/png", "data": data } }]
            },
            "finishReason": "STOP"
        }]
    })
}

/// Gemini answer carrying only text
pub fn gemini_text_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}
