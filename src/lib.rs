//! bouquetd - bouquet design server daemon
//!
//! Turns florist wizard selections into prompts for generative image
//! providers and returns the resulting images or design suggestions.

pub mod api;
pub mod config;
pub mod error;
pub mod images;
pub mod prompt;
pub mod providers;
pub mod selection;
pub mod studio;
pub mod suggestion;
pub mod vocabulary;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

pub use config::Config;
pub use error::DesignError;

use providers::{GeminiClient, OpenAiClient};
use studio::Studio;

/// The bouquetd server instance
pub struct Server {
    config: Config,
    studio: Arc<Studio>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Server {
    /// Create a new server instance
    pub async fn new(config: Config) -> Result<Self> {
        let timeout = config.request_timeout();
        let gemini = GeminiClient::new(&config.gemini, timeout)?;
        let openai = OpenAiClient::new(&config.openai, timeout)?;

        if !gemini.is_configured() {
            warn!("Gemini API key not set; bouquet generation and suggestions are disabled");
        }
        if !openai.is_configured() {
            warn!("OpenAI API key not set; photo decoration is disabled");
        }

        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        Ok(Self {
            config,
            studio: Arc::new(Studio::new(gemini, openai)),
            shutdown_tx,
            shutdown_rx,
        })
    }

    /// Get the design pipeline handle
    pub fn studio(&self) -> Arc<Studio> {
        self.studio.clone()
    }

    /// Build the router
    fn router(&self) -> Router {
        api::router(self.studio.clone(), self.config.max_body_bytes)
    }

    /// Run the server until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(self.config.bind_addr).await?;
        let local_addr = listener.local_addr()?;
        info!("bouquetd listening on {}", local_addr);

        let router = self.router();
        let mut shutdown_rx = self.shutdown_rx.clone();

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.changed().await.ok();
            })
            .await?;

        info!("bouquetd shutdown complete");
        Ok(())
    }

    /// Signal the server to shutdown
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Get the configured bind address
    pub fn bind_addr(&self) -> SocketAddr {
        self.config.bind_addr
    }
}
